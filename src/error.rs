//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, JSON and ndarray shape errors, and provides
//! semantic variants for matrix validation and artifact bookkeeping.
use thiserror::Error;

use crate::types::ChannelLayout;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Matrix dimensions must be non-zero, got: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Stride {stride} is smaller than a row of {row_bytes} bytes")]
    InvalidStride { stride: usize, row_bytes: usize },

    #[error("Expected a {expected} matrix, got {actual}")]
    LayoutMismatch {
        expected: ChannelLayout,
        actual: ChannelLayout,
    },

    #[error("A {layout} matrix needs {} channels, got {channels}", .layout.channels())]
    ChannelCount {
        layout: ChannelLayout,
        channels: usize,
    },

    #[error("Corners and sizes disagree: {corners} corners, {sizes} sizes")]
    LengthMismatch { corners: usize, sizes: usize },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Encode error: {0}")]
    Encode(String),
}
