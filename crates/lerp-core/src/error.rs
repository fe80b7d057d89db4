// File: crates/lerp-core/src/error.rs
// Summary: Typed errors for the raster path.

use thiserror::Error;

/// Failures while rasterizing or writing a plot. Resampling and layout
/// never error; their silent-fallback contract is part of the data model.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
