//! Vertical metrics and side bearings

use serde::{Deserialize, Serialize};

/// Vertical metrics in font units. `em = ascent + descent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub em: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl Metrics {
    /// Metrics from the vertical design constants shared by the families.
    ///
    /// `mean` is the x-height; ascenders rise `descent` above it.
    pub fn from_design(mean: f64, descent: f64, extra_ascent: f64, extra_descent: f64) -> Self {
        let ascent = mean + descent + extra_ascent;
        let descent = descent + extra_descent;
        Self { em: ascent + descent, ascent, descent }
    }
}

/// Horizontal space on either side of a glyph outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearings {
    pub left: f64,
    pub right: f64,
}

impl Bearings {
    pub fn symmetric(bearing: f64) -> Self {
        Self { left: bearing, right: bearing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_metrics_add_up() {
        let metrics = Metrics::from_design(500.0, 250.0, 10.0, 40.0);
        assert_eq!(metrics.ascent, 760.0);
        assert_eq!(metrics.descent, 290.0);
        assert_eq!(metrics.em, 1050.0);
    }
}
