// File: crates/lerp-core/src/axis.rs
// Summary: Axis range derivation with an explicit degenerate-range policy.

use crate::series::Series;

/// Ranges narrower than this are treated as collapsed.
const EPS: f64 = 1e-9;

/// Half-width added to each side of a collapsed range. Keeps the midpoint
/// fixed, so a constant series lands on the center of the plot rect.
const DEGENERATE_PAD: f64 = 0.5;

/// Min/max of one axis, derived from the current series on every layout
/// pass and discarded afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// X range of a resampled series: first and last sample, ascending by
    /// construction. `None` for an empty series.
    pub fn x_of(series: &Series) -> Option<Self> {
        Some(Self::new(series.first_x()?, series.last_x()?))
    }

    /// Y range via linear scan. Non-finite samples are skipped; when no
    /// finite sample exists the range falls back to [0, 1].
    pub fn y_of(series: &Series) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(_, y) in &series.data_xy {
            if y.is_finite() {
                min = min.min(y);
                max = max.max(y);
            }
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::new(0.0, 1.0);
        }
        Self::new(min, max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen a collapsed range symmetrically around its midpoint.
    pub fn widened(self) -> Self {
        if self.span().abs() < EPS {
            Self::new(self.min - DEGENERATE_PAD, self.max + DEGENERATE_PAD)
        } else {
            self
        }
    }
}
