//! Discretizes a normalized value into one of a sequential palette's colors.
//!
//! No blending happens here: the unit interval is cut into equal-width bins
//! and the color of the bin containing the value is returned.

use crate::PaletteError;
use crate::palette::{BuiltinPalettes, PaletteSource};

/// Index of the bin `value` falls into when `[0, 1]` is split into `bins`
/// equal intervals. Out-of-range values are clamped and NaN counts as 0.
/// Returns `None` when there are no bins.
pub fn bin_index(value: f64, bins: usize) -> Option<usize> {
    let last = bins.checked_sub(1)?;
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    let index = (value * bins as f64).floor() as usize;
    Some(index.min(last))
}

pub fn bin_color_with<'c>(value: f64, colors: &[&'c str]) -> Result<&'c str, PaletteError> {
    bin_index(value, colors.len())
        .map(|index| colors[index])
        .ok_or(PaletteError::EmptyPalette)
}

/// Color of the bin `value` falls into for the built-in sequential palette
/// `name`.
pub fn bin_color(value: f64, name: &str) -> Result<&'static str, PaletteError> {
    let colors = BuiltinPalettes
        .sequential(name)
        .ok_or_else(|| PaletteError::unknown(name))?;
    bin_color_with(value, colors)
}
