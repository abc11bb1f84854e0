use std::borrow::Borrow;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

use crate::PaletteError;
use crate::bins;
use crate::palette::{BuiltinPalettes, FALLBACK_COLOR, PaletteSource};

/// Non-fatal findings produced while building a color mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The palette had fewer colors than the domain; `padded` trailing keys
    /// received [`FALLBACK_COLOR`].
    InsufficientColors {
        domain: usize,
        colors: usize,
        padded: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InsufficientColors {
                domain,
                colors,
                padded,
            } => write!(
                f,
                "not enough colors for all domains: {domain} keys, {colors} colors, {padded} padded with {FALLBACK_COLOR}"
            ),
        }
    }
}

/// Domain keys paired with their colors, in domain order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMapping<'c, K> {
    entries: Vec<(K, &'c str)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c, K> ColorMapping<'c, K> {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &'c str)> {
        self.entries.iter().map(|(key, color)| (key, *color))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_entries(self) -> Vec<(K, &'c str)> {
        self.entries
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&'c str>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.borrow() == key)
            .map(|(_, color)| *color)
    }
}

impl<K: Serialize> Serialize for ColorMapping<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, color) in &self.entries {
            map.serialize_entry(key, color)?;
        }
        map.end()
    }
}

/// Assigns each domain key a color from `colors`, spreading the keys evenly
/// across the palette.
///
/// A palette shorter than the domain is padded with [`FALLBACK_COLOR`] and a
/// [`Diagnostic::InsufficientColors`] is recorded. A domain more than twice
/// the palette length is rejected.
pub fn map_colors_with<'c, K: Clone>(
    domain: &[K],
    colors: &[&'c str],
) -> Result<ColorMapping<'c, K>, PaletteError> {
    if domain.is_empty() {
        return Ok(ColorMapping::empty());
    }

    if domain.len() > 2 * colors.len() {
        return Err(PaletteError::PaletteExhausted {
            domain: domain.len(),
            colors: colors.len(),
        });
    }

    let mut mapping = ColorMapping::empty();
    let mut step = colors.len() / domain.len();

    let mut padded_colors;
    let colors = if step == 0 {
        let padded = domain.len() - colors.len();
        warn!(
            target: "glance::colorscheme",
            domain = domain.len(),
            colors = colors.len(),
            padded,
            "not enough colors for all domains"
        );
        mapping.diagnostics.push(Diagnostic::InsufficientColors {
            domain: domain.len(),
            colors: colors.len(),
            padded,
        });

        padded_colors = colors.to_vec();
        padded_colors.resize(domain.len(), FALLBACK_COLOR);
        step = 1;
        padded_colors.as_slice()
    } else {
        colors
    };

    mapping.entries = domain
        .iter()
        .enumerate()
        .map(|(idx, key)| (key.clone(), colors[idx * step]))
        .collect();

    Ok(mapping)
}

/// Looks up the categorical palette `name` in the built-in registry and maps
/// `domain` onto it.
pub fn map_colors<K: Clone>(
    domain: &[K],
    name: &str,
) -> Result<ColorMapping<'static, K>, PaletteError> {
    let colors = BuiltinPalettes
        .categorical(name)
        .ok_or_else(|| PaletteError::unknown(name))?;
    map_colors_with(domain, colors)
}

/// Categorical mapping and sequential binning over an injected palette source.
#[derive(Clone, Debug, Default)]
pub struct ColorMapper<S> {
    source: S,
}

impl ColorMapper<BuiltinPalettes> {
    pub fn builtin() -> Self {
        Self::new(BuiltinPalettes)
    }
}

impl<S: PaletteSource> ColorMapper<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn map<K: Clone>(
        &self,
        domain: &[K],
        name: &str,
    ) -> Result<ColorMapping<'_, K>, PaletteError> {
        let colors = self
            .source
            .categorical(name)
            .ok_or_else(|| PaletteError::unknown(name))?;
        map_colors_with(domain, colors)
    }

    pub fn bin(&self, value: f64, name: &str) -> Result<&str, PaletteError> {
        let colors = self
            .source
            .sequential(name)
            .ok_or_else(|| PaletteError::unknown(name))?;
        bins::bin_color_with(value, colors)
    }
}
