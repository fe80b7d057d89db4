// File: crates/lerp-core/tests/layout.rs
// Purpose: Pixel mapping: margin box, endpoints, centering policy, NaN runs.

use lerp_core::{layout, Insets, Series};

const W: i32 = 600;
const H: i32 = 400;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn short_series_is_a_no_op() {
    assert!(layout(&Series::new(), W, H, &Insets::default()).is_none());
    let single = Series::with_data(vec![(1.0, 1.0)]);
    assert!(layout(&single, W, H, &Insets::default()).is_none());
}

#[test]
fn axis_lines_sit_on_the_margin_box() {
    let series = Series::with_data(vec![(0.0, 0.0), (0.5, 5.0), (1.0, 10.0)]);
    let plot = layout(&series, W, H, &Insets::default()).unwrap();

    // Horizontal axis along the bottom margin, vertical along the left.
    assert!(close(plot.x_axis.x0, 40.0) && close(plot.x_axis.y0, 360.0));
    assert!(close(plot.x_axis.x1, 560.0) && close(plot.x_axis.y1, 360.0));
    assert!(close(plot.y_axis.x0, 40.0) && close(plot.y_axis.y0, 40.0));
    assert!(close(plot.y_axis.x1, 40.0) && close(plot.y_axis.y1, 360.0));
}

#[test]
fn endpoints_map_to_plot_rect_edges() {
    let series = Series::with_data(vec![(0.0, 0.0), (0.5, 5.0), (1.0, 10.0)]);
    let plot = layout(&series, W, H, &Insets::default()).unwrap();
    let run = &plot.polyline[0];

    let (x0, y0) = run[0];
    let (x2, y2) = run[2];
    assert!(close(x0, 40.0), "x min lands on the left plot edge");
    assert!(close(y0, 360.0), "y min lands on the bottom plot edge");
    assert!(close(x2, 560.0), "x max lands on the right plot edge");
    assert!(close(y2, 40.0), "y max lands on the top plot edge");

    // Midpoint of the ramp sits in the middle of the rect both ways.
    let (x1, y1) = run[1];
    assert!(close(x1, 300.0));
    assert!(close(y1, 200.0));
}

#[test]
fn constant_series_maps_to_vertical_center() {
    let series = Series::with_data(vec![(0.0, 2.0), (0.5, 2.0), (1.0, 2.0)]);
    let plot = layout(&series, W, H, &Insets::default()).unwrap();
    for run in &plot.polyline {
        for &(_, py) in run {
            assert!(close(py, 200.0), "flat series centers in the plot rect, got {}", py);
        }
    }
}

#[test]
fn non_finite_samples_split_the_polyline() {
    let series = Series::with_data(vec![(0.0, 0.0), (0.5, f64::NAN), (1.0, 10.0)]);
    let plot = layout(&series, W, H, &Insets::default()).unwrap();
    assert_eq!(plot.polyline.len(), 2);
    assert_eq!(plot.polyline[0].len(), 1);
    assert_eq!(plot.polyline[1].len(), 1);
}

#[test]
fn custom_insets_move_the_plot_rect() {
    let series = Series::with_data(vec![(0.0, 0.0), (0.5, 5.0), (1.0, 10.0)]);
    let insets = Insets::new(10, 20, 30, 50);
    let plot = layout(&series, W, H, &insets).unwrap();
    assert!(close(plot.x_axis.x0, 10.0) && close(plot.x_axis.y0, 350.0));
    assert!(close(plot.x_axis.x1, 580.0));
    assert!(close(plot.y_axis.y0, 30.0));
}

#[test]
fn repeated_layouts_are_identical() {
    let series = Series::with_data(vec![(0.0, 1.0), (0.5, 4.0), (1.0, 2.0)]);
    let a = layout(&series, W, H, &Insets::default()).unwrap();
    let b = layout(&series, W, H, &Insets::default()).unwrap();
    assert_eq!(a, b);
}
