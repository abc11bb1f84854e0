//! Static palette tables for chart coloring. Values are CSS hex colors so the
//! frontend can apply them directly.

/// Color used to pad a categorical palette that is too short for its domain.
pub const FALLBACK_COLOR: &str = "#000";

/// A named, fixed-order list of colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

pub const CATEGORICAL: &[Palette] = &[
    Palette {
        name: "Set1",
        colors: &[
            "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
            "#f781bf", "#999999",
        ],
    },
    Palette {
        name: "Set2",
        colors: &[
            "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
            "#b3b3b3",
        ],
    },
    Palette {
        name: "Set3",
        colors: &[
            "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
            "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
        ],
    },
    Palette {
        name: "Paired",
        colors: &[
            "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
            "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
        ],
    },
    Palette {
        name: "Accent",
        colors: &[
            "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
            "#666666",
        ],
    },
    Palette {
        name: "Tableau10",
        colors: &[
            "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1",
            "#ff9da7", "#9c755f", "#bab0ab",
        ],
    },
    Palette {
        name: "Category10",
        colors: &[
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ],
    },
    Palette {
        name: "Observable10",
        colors: &[
            "#4269d0", "#efb118", "#ff725c", "#6cc5b0", "#3ca951", "#ff8ab7", "#a463f2",
            "#97bbf5", "#9c6b4e", "#9498a0",
        ],
    },
    Palette {
        name: "Purples",
        colors: &["#f2f0f7", "#dadaeb", "#bcbddc", "#9e9ac8", "#756bb1", "#54278f"],
    },
    Palette {
        name: "Greens",
        colors: &["#edf8e9", "#c7e9c0", "#a1d99b", "#74c476", "#31a354", "#006d2c"],
    },
    Palette {
        name: "Blues",
        colors: &["#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#3182bd", "#08519c"],
    },
    Palette {
        name: "Oranges",
        colors: &["#feedde", "#fdd0a2", "#fdae6b", "#fd8d3c", "#e6550d", "#a63603"],
    },
    Palette {
        name: "Greys",
        colors: &["#f7f7f7", "#d9d9d9", "#bdbdbd", "#969696", "#636363", "#252525"],
    },
    Palette {
        name: "Reds",
        colors: &["#fee5d9", "#fcbba1", "#fc9272", "#fb6a4a", "#de2d26", "#a50f15"],
    },
];

/// Four-step sequential schemes used to bin a normalized value.
pub const SEQUENTIAL: &[Palette] = &[
    Palette {
        name: "BuGn",
        colors: &["#edf8fb", "#b2e2e2", "#66c2a4", "#238b45"],
    },
    Palette {
        name: "BuPu",
        colors: &["#edf8fb", "#b3cde3", "#8c96c6", "#88419d"],
    },
    Palette {
        name: "GnBu",
        colors: &["#f0f9e8", "#bae4bc", "#7bccc4", "#2b8cbe"],
    },
    Palette {
        name: "OrRd",
        colors: &["#fef0d9", "#fdcc8a", "#fc8d59", "#d7301f"],
    },
    Palette {
        name: "PuBuGn",
        colors: &["#f6eff7", "#bdc9e1", "#67a9cf", "#02818a"],
    },
    Palette {
        name: "PuBu",
        colors: &["#f1eef6", "#bdc9e1", "#74a9cf", "#0570b0"],
    },
    Palette {
        name: "PuRd",
        colors: &["#f1eef6", "#d7b5d8", "#df65b0", "#ce1256"],
    },
    Palette {
        name: "RdPu",
        colors: &["#feebe2", "#fbb4b9", "#f768a1", "#ae017e"],
    },
    Palette {
        name: "YlGnBu",
        colors: &["#ffffcc", "#a1dab4", "#41b6c4", "#225ea8"],
    },
];

/// Continuous colormaps the heat-map renderer knows by name. The color data
/// lives with the renderer.
pub const CONTINUOUS_COLORMAPS: &[&str] = &[
    "CET_L8", "CET_L9", "CET_L10", "CET_L11", "CET_L12", "CET_L13", "CET_L14", "CET_L15",
    "CET_L16", "CET_L17", "CET_L18", "CET_L19", "CET_L20",
];

/// Resolves palette names to color lists.
///
/// The mappers take a source rather than reaching for the static tables so
/// callers (and tests) can supply their own palettes.
pub trait PaletteSource {
    fn categorical(&self, name: &str) -> Option<&[&str]>;
    fn sequential(&self, name: &str) -> Option<&[&str]>;
}

/// The compiled-in tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinPalettes;

impl PaletteSource for BuiltinPalettes {
    fn categorical(&self, name: &str) -> Option<&[&str]> {
        find(CATEGORICAL, name)
    }

    fn sequential(&self, name: &str) -> Option<&[&str]> {
        find(SEQUENTIAL, name)
    }
}

fn find(table: &'static [Palette], name: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|palette| palette.name == name)
        .map(|palette| palette.colors)
}

pub fn categorical_names() -> impl Iterator<Item = &'static str> {
    CATEGORICAL.iter().map(|palette| palette.name)
}

pub fn sequential_names() -> impl Iterator<Item = &'static str> {
    SEQUENTIAL.iter().map(|palette| palette.name)
}

/// Returns true for `#rgb` and `#rrggbb` colors.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categorical_palettes_have_expected_sizes() {
        let sizes: Vec<(&str, usize)> = CATEGORICAL
            .iter()
            .map(|palette| (palette.name, palette.colors.len()))
            .collect();

        assert_eq!(
            sizes,
            vec![
                ("Set1", 9),
                ("Set2", 8),
                ("Set3", 12),
                ("Paired", 12),
                ("Accent", 8),
                ("Tableau10", 10),
                ("Category10", 10),
                ("Observable10", 10),
                ("Purples", 6),
                ("Greens", 6),
                ("Blues", 6),
                ("Oranges", 6),
                ("Greys", 6),
                ("Reds", 6),
            ]
        );
    }

    #[test]
    fn sequential_palettes_have_four_bins() {
        assert_eq!(SEQUENTIAL.len(), 9);
        for palette in SEQUENTIAL {
            assert_eq!(palette.colors.len(), 4, "{} should have 4 bins", palette.name);
        }
    }

    #[test]
    fn every_registered_color_is_hex() {
        for palette in CATEGORICAL.iter().chain(SEQUENTIAL) {
            for color in palette.colors {
                assert!(is_hex_color(color), "{}: {color}", palette.name);
            }
        }
        assert!(is_hex_color(FALLBACK_COLOR));
    }

    #[test]
    fn palette_names_are_unique_per_registry() {
        let categorical: HashSet<_> = categorical_names().collect();
        assert_eq!(categorical.len(), CATEGORICAL.len());

        let sequential: HashSet<_> = sequential_names().collect();
        assert_eq!(sequential.len(), SEQUENTIAL.len());
    }

    #[test]
    fn builtin_lookup_is_exact_and_case_sensitive() {
        let source = BuiltinPalettes;
        assert_eq!(source.categorical("Accent").map(<[_]>::len), Some(8));
        assert!(source.categorical("accent").is_none());
        assert!(source.categorical("BuGn").is_none());
        assert_eq!(
            source.sequential("BuGn"),
            Some(&["#edf8fb", "#b2e2e2", "#66c2a4", "#238b45"][..])
        );
        assert!(source.sequential("Set1").is_none());
    }

    #[test]
    fn hex_color_validation() {
        assert!(is_hex_color("#000"));
        assert!(is_hex_color("#A6CEE3"));
        assert!(!is_hex_color("000000"));
        assert!(!is_hex_color("#0000"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("oklch(0.78 0.20 25)"));
    }
}
