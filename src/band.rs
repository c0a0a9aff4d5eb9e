//! Bands.

use std::fmt;

use crate::color::random_color;

/// The weight given to new bands and to invalid weight input.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Identifies a band for the lifetime of its editor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BandId(pub u64);

impl fmt::Display for BandId {
    fn fmt(&self, w: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(w, "band#{}", self.0)
    }
}

/// A colored, weighted stripe.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    /// The color string, see [`crate::color::parse_color`].
    pub color: String,
    /// The relative share of the canvas extent.
    pub weight: f64,
}

impl Band {
    /// Creates a new band.
    ///
    /// A missing or invalid weight becomes [`DEFAULT_WEIGHT`],
    /// a missing or empty color becomes a random color.
    pub fn new(weight: Option<f64>, color: Option<String>) -> Band {
        let color = match color {
            Some(c) if !c.trim().is_empty() => c,
            _ => random_color(),
        };
        Band {
            color,
            weight: fix_weight(weight.unwrap_or(DEFAULT_WEIGHT)),
        }
    }
}

/// Replaces negative or non-finite weights with [`DEFAULT_WEIGHT`].
pub fn fix_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {weight} else {DEFAULT_WEIGHT}
}

/// Parses weight text from a numeric input field.
pub fn parse_weight(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) => fix_weight(v),
        Err(_) => DEFAULT_WEIGHT,
    }
}
