// File: crates/lerp-core/src/resample.rs
// Summary: Piecewise-linear resampling at a fixed x step, with table lines.

use crate::series::{ControlPoint, Series};

/// Fixed resampling step along x.
pub const STEP_X: f64 = 0.5;

/// Output of one resampling pass: the samples plus one formatted table
/// line per sample. The two run in parallel and are replaced together.
#[derive(Clone, Debug, PartialEq)]
pub struct Resampled {
    pub series: Series,
    pub lines: Vec<String>,
}

/// Resample `points` from the first x to the last x at [`STEP_X`].
///
/// Returns `None` for fewer than two control points. Input order defines
/// segment order; no sorting or monotonicity check is performed, so an
/// unsorted list yields a numerically well-defined but meaningless result.
/// A sample that lands outside every segment falls back to y = 0; adjacent
/// control points sharing an x divide by zero and propagate inf/NaN into
/// the affected samples (see the error-policy notes in DESIGN.md).
pub fn resample(points: &[ControlPoint]) -> Option<Resampled> {
    if points.len() < 2 {
        return None;
    }
    let x_min = points[0].0;
    let x_max = points[points.len() - 1].0;

    // Negative spans (last x below first x) and non-finite spans produce an
    // empty series rather than an allocation blowup.
    let raw = ((x_max - x_min) / STEP_X).floor();
    let step_count = if raw.is_finite() { (raw + 1.0).max(0.0) as usize } else { 0 };

    let mut data = Vec::with_capacity(step_count);
    let mut lines = Vec::with_capacity(step_count);
    for i in 0..step_count {
        let x = x_min + STEP_X * i as f64;
        let y = bracket_y(x, points);
        data.push((x, y));
        lines.push(format_sample(x, y));
    }
    Some(Resampled { series: Series::with_data(data), lines })
}

/// y at `x` from the first bracketing segment, scanning from the start.
/// Falls back to 0 when no segment contains `x`.
fn bracket_y(x: f64, points: &[ControlPoint]) -> f64 {
    for pair in points.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        if x >= x1 && x <= x2 {
            return lerp(x, x1, y1, x2, y2);
        }
    }
    0.0
}

/// Linear interpolation between (x1, y1) and (x2, y2) at x.
#[inline]
fn lerp(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// One table line per sample, two decimals each.
pub fn format_sample(x: f64, y: f64) -> String {
    format!("x={:.2}, y={:.2}", x, y)
}
