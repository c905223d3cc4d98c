// File: crates/viz-core/src/color.rs
// Summary: Palette presets and categorical/linear/threshold color scales.

use std::collections::BTreeSet;

use log::debug;

use crate::domain::Domain;

/// Named colors for chart chrome plus a categorical series cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub empty_cell: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_text: &'static str,
    pub series: &'static [&'static str],
    /// Endpoints for the linear heatmap ramp.
    pub ramp_low: &'static str,
    pub ramp_high: &'static str,
}

const DARK_SERIES: &[&str] = &[
    "#40a0ff", "#28c878", "#dc5050", "#e8b339", "#9d6fe0", "#38b8c8", "#e07a9e", "#8a8f98",
];

const LIGHT_SERIES: &[&str] = &[
    "#2078c8", "#14a05a", "#c83c3c", "#c89020", "#7a4fc0", "#2096a8", "#c05a80", "#6a6f78",
];

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            empty_cell: "#1c1c20",
            tooltip_bg: "#2a2a30",
            tooltip_text: "#f0f0f5",
            series: DARK_SERIES,
            ramp_low: "#14324d",
            ramp_high: "#40a0ff",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            empty_cell: "#f0f0f2",
            tooltip_bg: "#ffffff",
            tooltip_text: "#1e1e28",
            series: LIGHT_SERIES,
            ramp_low: "#d6e8fa",
            ramp_high: "#2078c8",
        }
    }

    /// Color for series `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> &'static str {
        self.series[i % self.series.len()]
    }
}

/// Return the built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::dark(), Palette::light()]
}

/// Find a palette by name, falling back to dark.
pub fn find(name: &str) -> Palette {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    Palette::dark()
}

/// Explicit color-scale override for grid charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Categorical,
    Linear,
    Threshold,
}

/// How a heatmap value maps to a fill color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScale {
    /// Distinct values get palette slots, in sorted value order.
    Categorical { levels: Vec<i64>, colors: Vec<String> },
    /// Interpolate between the palette ramp endpoints over the domain.
    Linear { domain: Domain, low: Rgb, high: Rgb },
    /// Value buckets against ascending thresholds.
    Threshold { thresholds: Vec<f64>, colors: Vec<String> },
}

/// Distinct-value count at or under which an auto scale goes categorical.
const CATEGORICAL_CUTOFF: usize = 9;

impl ColorScale {
    /// Pick a scale from the observed values: small integer cardinality is
    /// categorical, otherwise linear; explicit mode or thresholds win.
    pub fn select(
        values: &[Option<f64>],
        domain: Domain,
        palette: &Palette,
        mode: ColorMode,
        thresholds: &[f64],
    ) -> Self {
        let make_threshold = || {
            let colors = (0..=thresholds.len())
                .map(|i| palette.series_color(i).to_string())
                .collect();
            ColorScale::Threshold { thresholds: thresholds.to_vec(), colors }
        };
        let make_categorical = |levels: Vec<i64>| {
            let colors =
                (0..levels.len()).map(|i| palette.series_color(i).to_string()).collect();
            ColorScale::Categorical { levels, colors }
        };
        let make_linear = || ColorScale::Linear {
            domain,
            low: Rgb::parse(palette.ramp_low),
            high: Rgb::parse(palette.ramp_high),
        };

        match mode {
            ColorMode::Threshold => return make_threshold(),
            ColorMode::Linear => return make_linear(),
            ColorMode::Categorical => {
                let levels = integer_levels(values).unwrap_or_default();
                return make_categorical(levels);
            }
            ColorMode::Auto => {}
        }
        if !thresholds.is_empty() {
            return make_threshold();
        }
        match integer_levels(values) {
            Some(levels) if levels.len() <= CATEGORICAL_CUTOFF => {
                debug!("auto color scale: categorical over {} levels", levels.len());
                make_categorical(levels)
            }
            _ => make_linear(),
        }
    }

    /// Fill color for a value; `None` when the value should use the
    /// empty-cell color.
    pub fn color_of(&self, value: Option<f64>) -> Option<String> {
        let v = value.filter(|v| v.is_finite())?;
        match self {
            ColorScale::Categorical { levels, colors } => {
                let target = v.round() as i64;
                levels.iter().position(|l| *l == target).map(|i| colors[i].clone())
            }
            ColorScale::Linear { domain, low, high } => {
                let t = if domain.is_degenerate() {
                    0.0
                } else {
                    ((v - domain.min) / domain.span()).clamp(0.0, 1.0)
                };
                Some(low.lerp(high, t).to_hex())
            }
            ColorScale::Threshold { thresholds, colors } => {
                let bucket = thresholds.iter().filter(|t| v >= **t).count();
                colors.get(bucket).cloned()
            }
        }
    }
}

/// The distinct integer levels present, or `None` when any value is not a
/// whole number (then the scale cannot be categorical).
fn integer_levels(values: &[Option<f64>]) -> Option<Vec<i64>> {
    let mut set = BTreeSet::new();
    for v in values.iter().flatten().filter(|v| v.is_finite()) {
        if v.fract() != 0.0 {
            return None;
        }
        set.insert(*v as i64);
    }
    Some(set.into_iter().collect())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` string; malformed input falls back to black.
    pub fn parse(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        if s.len() != 6 {
            return Self { r: 0, g: 0, b: 0 };
        }
        // `get` keeps non-ASCII input from slicing mid-codepoint.
        let byte = |i: usize| {
            s.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        Self { r: byte(0), g: byte(2), b: byte(4) }
    }

    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
