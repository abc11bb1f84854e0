//! Presentation helpers for the lecture dashboard: chart color assignment and
//! timeline timestamps.

pub mod api;
pub mod bins;
pub mod colorscheme;
pub mod duration;
pub mod palette;

pub use bins::bin_color;
pub use colorscheme::{ColorMapper, ColorMapping, Diagnostic, map_colors, map_colors_with};
pub use duration::format_duration;
pub use palette::{BuiltinPalettes, PaletteSource};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unknown palette: {name}")]
    UnknownPalette { name: String },
    #[error("palette exhausted: {domain} domain entries but only {colors} colors")]
    PaletteExhausted { domain: usize, colors: usize },
    #[error("palette has no colors")]
    EmptyPalette,
    #[error("invalid color: {color}")]
    InvalidColor { color: String },
}

impl PaletteError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownPalette {
            name: name.to_string(),
        }
    }
}
