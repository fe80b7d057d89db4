// File: crates/lerp-core/src/session.rs
// Summary: Mutable state holder with the command handlers a UI shell drives.

use crate::chart::{layout, PlotLayout};
use crate::resample::{resample, Resampled};
use crate::series::{ControlPoint, Series};
use crate::types::Insets;

/// Shells typically offer 2..=100 points; 2 is the starting declaration.
const DEFAULT_POINT_COUNT: usize = 2;

/// Single owner of the current resampled output. A shell keeps one
/// instance and calls the handlers synchronously on its own thread; the
/// output is replaced wholesale on each successful interpolate.
#[derive(Clone, Debug)]
pub struct Session {
    point_count: usize,
    current: Option<Resampled>,
}

impl Session {
    pub fn new() -> Self {
        Self { point_count: DEFAULT_POINT_COUNT, current: None }
    }

    /// Declare how many control points the next interpolate call must carry.
    pub fn set_point_count(&mut self, n: usize) {
        self.point_count = n;
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Recompute the series and table lines from `points`.
    ///
    /// Silent no-op (returns false, prior output kept) when the list does
    /// not match the declared count or carries fewer than two points.
    pub fn interpolate(&mut self, points: &[ControlPoint]) -> bool {
        if points.len() != self.point_count {
            return false;
        }
        match resample(points) {
            Some(out) => {
                self.current = Some(out);
                true
            }
            None => false,
        }
    }

    /// Pixel-space primitives for the current series, or `None` before the
    /// first successful interpolate (or while the series is too short).
    /// Pure recompute from the series; safe to call on every expose/resize
    /// in any order.
    pub fn redraw(&self, width: i32, height: i32, insets: &Insets) -> Option<PlotLayout> {
        layout(self.series()?, width, height, insets)
    }

    pub fn series(&self) -> Option<&Series> {
        self.current.as_ref().map(|r| &r.series)
    }

    /// Formatted table lines, empty before the first successful interpolate.
    pub fn lines(&self) -> &[String] {
        self.current.as_ref().map(|r| r.lines.as_slice()).unwrap_or(&[])
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
