use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical colours: one per continent
// ---------------------------------------------------------------------------

/// Plotly's default qualitative sequence.
pub const QUALITATIVE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Colour used for a continent that was not in the list the map was built from.
pub const UNKNOWN_CONTINENT: &str = "#7f8c8d";

/// Maps continents to qualitative colours in the order they were given.
///
/// Built once from the full dataset so a continent keeps its colour whichever
/// chart mode is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContinentColors {
    mapping: Vec<(String, &'static str)>,
}

impl ContinentColors {
    pub fn new(continents: &[String]) -> Self {
        let mapping = continents
            .iter()
            .zip(QUALITATIVE.iter().cycle())
            .map(|(c, color)| (c.clone(), *color))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, continent: &str) -> &'static str {
        self.mapping
            .iter()
            .find(|(c, _)| c == continent)
            .map(|(_, color)| *color)
            .unwrap_or(UNKNOWN_CONTINENT)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale: Viridis
// ---------------------------------------------------------------------------

/// Evenly spaced Viridis stops, identical to Plotly's `Viridis` colorscale.
const VIRIDIS: [Srgb<u8>; 10] = [
    Srgb::new(0x44, 0x01, 0x54),
    Srgb::new(0x48, 0x28, 0x78),
    Srgb::new(0x3e, 0x49, 0x89),
    Srgb::new(0x31, 0x68, 0x8e),
    Srgb::new(0x26, 0x82, 0x8e),
    Srgb::new(0x1f, 0x9e, 0x89),
    Srgb::new(0x35, 0xb7, 0x79),
    Srgb::new(0x6e, 0xce, 0x58),
    Srgb::new(0xb5, 0xde, 0x2b),
    Srgb::new(0xfd, 0xe7, 0x25),
];

/// Viridis colour at `t` in [0, 1] as a `#rrggbb` string.
///
/// Out-of-range and non-finite inputs are clamped to the low end.
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let last = VIRIDIS.len() - 1;
    let scaled = t * last as f64;
    let lo = (scaled.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let factor = (scaled - lo as f64) as f32;

    let a: Srgb<f32> = VIRIDIS[lo].into_format();
    let b: Srgb<f32> = VIRIDIS[hi].into_format();
    let mixed: Srgb<u8> = a.mix(b, factor).into_format();
    to_hex(mixed)
}

/// Position of `value` within [min, max]. A degenerate range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !span.is_finite() || span <= f64::EPSILON {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

fn to_hex(c: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}
