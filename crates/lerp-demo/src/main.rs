// File: crates/lerp-demo/src/main.rs
// Summary: Demo loads (x, y) control points from CSV, interpolates at the fixed
// step, prints the sample table, and renders the plot to a PNG.

use anyhow::{Context, Result};
use lerp_core::{theme, Chart, ControlPoint, RenderOptions, Session};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let theme_arg = args.next();

    let (points, stem) = match csv_arg {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let pts = load_points_csv(&path)
                .with_context(|| format!("failed to load points from '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("points")
                .to_string();
            (pts, stem)
        }
        None => (sample_points(), "sample".to_string()),
    };
    println!("Loaded {} control points", points.len());

    let mut session = Session::new();
    session.set_point_count(points.len());
    if !session.interpolate(&points) {
        anyhow::bail!("need at least two control points");
    }

    for line in session.lines() {
        println!("{line}");
    }

    let mut opts = RenderOptions::default();
    if let Some(name) = theme_arg {
        opts.theme = theme::find(&name);
    }

    let mut chart = Chart::new();
    chart.set_series(session.series().expect("series exists after interpolate").clone());

    let out = out_name(&stem);
    chart
        .render_to_png(&opts, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Output file like target/out/lerp_<stem>.png
fn out_name(stem: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("lerp_{stem}.png"));
    out
}

/// Built-in fallback set, mirroring a freshly filled entry grid.
fn sample_points() -> Vec<ControlPoint> {
    vec![(0.0, 0.0), (2.0, 3.0), (4.0, 1.0), (6.0, 4.0), (8.0, 2.0)]
}

/// Load (x, y) pairs from a CSV with x/y headers (matched case-insensitively,
/// falling back to the first two columns). Unparsable numeric cells become
/// 0.0, matching the lenient string-to-float behavior of the original entry
/// fields.
fn load_points_csv(path: &Path) -> Result<Vec<ControlPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x"]).unwrap_or(0);
    let i_y = idx(&["y"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let cell = |i: usize| {
            rec.get(i)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(0.0)
        };
        out.push((cell(i_x), cell(i_y)));
    }
    Ok(out)
}
