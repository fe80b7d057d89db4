// File: crates/lerp-core/src/chart.rs
// Summary: Plot layout (data space to pixel space) and headless PNG rendering
// using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::AxisRange;
use crate::error::RenderError;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

/// A single stroked segment in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSeg {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Pixel-space primitives for one redraw: the two axis lines plus the
/// interpolated curve, split into runs around non-finite samples so NaN
/// never reaches the rasterizer. No point markers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    pub x_axis: LineSeg,
    pub y_axis: LineSeg,
    pub polyline: Vec<Vec<(f32, f32)>>,
}

/// Map a series into pixel space for the given canvas.
///
/// `None` for series shorter than two samples. Ranges and pixel positions
/// are recomputed on every call; nothing is cached between redraws.
pub fn layout(series: &Series, width: i32, height: i32, insets: &Insets) -> Option<PlotLayout> {
    if series.len() < 2 {
        return None;
    }

    let left = insets.left as f32;
    let top = insets.top as f32;
    let right = (width as f32 - insets.right as f32).max(left + 1.0);
    let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);

    let x_range = AxisRange::x_of(series)?.widened();
    let y_range = AxisRange::y_of(series).widened();
    let sx = LinearScale::new(x_range, left, right);
    let sy = LinearScale::new(y_range, bottom, top);

    let mut runs: Vec<Vec<(f32, f32)>> = Vec::new();
    let mut current: Vec<(f32, f32)> = Vec::new();
    for &(x, y) in &series.data_xy {
        if y.is_finite() {
            current.push((sx.to_px(x), sy.to_px(y)));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    Some(PlotLayout {
        x_axis: LineSeg { x0: left, y0: bottom, x1: right, y1: bottom },
        y_axis: LineSeg { x0: left, y0: top, x1: left, y1: bottom },
        polyline: runs,
    })
}

pub struct Chart {
    pub series: Series,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Series::new() }
    }

    pub fn set_series(&mut self, series: Series) {
        self.series = series;
    }

    /// Render the plot to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render the plot to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        // Axes and curve; short series paint background only
        if let Some(plot) = layout(&self.series, opts.width, opts.height, &opts.insets) {
            draw_axes(canvas, &plot, &opts.theme);
            draw_polyline(canvas, &plot, &opts.theme);
        }

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(canvas: &skia::Canvas, plot: &PlotLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    for seg in [&plot.x_axis, &plot.y_axis] {
        canvas.draw_line((seg.x0, seg.y0), (seg.x1, seg.y1), &paint);
    }
}

fn draw_polyline(canvas: &skia::Canvas, plot: &PlotLayout, theme: &Theme) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    for run in &plot.polyline {
        if run.len() < 2 {
            continue;
        }
        let mut builder = skia::PathBuilder::new();
        builder.move_to(run[0]);
        for &p in &run[1..] {
            builder.line_to(p);
        }
        let path = builder.detach();
        canvas.draw_path(&path, &stroke);
    }
}
