use serde::{Deserialize, Serialize};

use crate::PaletteError;
use crate::bins;
use crate::colorscheme::{self, ColorMapping};
use crate::palette::{PaletteSource, is_hex_color};

/// Either a registered palette name or an inline list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Inline(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSchemeRequest {
    pub domain: Vec<String>,
    pub palette: PaletteSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSchemeResponse<'c> {
    pub colors: ColorMapping<'c, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<'c> From<ColorMapping<'c, String>> for ColorSchemeResponse<'c> {
    fn from(colors: ColorMapping<'c, String>) -> Self {
        let warnings = colors
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect();
        Self { colors, warnings }
    }
}

impl ColorSchemeRequest {
    pub fn resolve<'s, S: PaletteSource>(
        &'s self,
        source: &'s S,
    ) -> Result<ColorSchemeResponse<'s>, PaletteError> {
        let mapping = match &self.palette {
            PaletteSpec::Named(name) => {
                let colors = source
                    .categorical(name)
                    .ok_or_else(|| PaletteError::unknown(name))?;
                colorscheme::map_colors_with(&self.domain, colors)?
            }
            PaletteSpec::Inline(colors) => {
                let colors = validated(colors)?;
                colorscheme::map_colors_with(&self.domain, &colors)?
            }
        };
        Ok(mapping.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinRequest {
    pub value: f64,
    pub palette: PaletteSpec,
}

impl BinRequest {
    pub fn resolve<'s, S: PaletteSource>(&'s self, source: &'s S) -> Result<&'s str, PaletteError> {
        match &self.palette {
            PaletteSpec::Named(name) => {
                let colors = source
                    .sequential(name)
                    .ok_or_else(|| PaletteError::unknown(name))?;
                bins::bin_color_with(self.value, colors)
            }
            PaletteSpec::Inline(colors) => {
                let colors = validated(colors)?;
                bins::bin_color_with(self.value, &colors)
            }
        }
    }
}

fn validated(colors: &[String]) -> Result<Vec<&str>, PaletteError> {
    colors
        .iter()
        .map(|color| {
            if is_hex_color(color) {
                Ok(color.as_str())
            } else {
                Err(PaletteError::InvalidColor {
                    color: color.clone(),
                })
            }
        })
        .collect()
}
