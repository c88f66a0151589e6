use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Input and output are the same file: {path}")]
    SameFile { path: String },

    #[error(transparent)]
    Stitcher(#[from] stitcher::Error),
}
