//! Core building blocks: the `Mat` pixel matrix, bitmap conversions,
//! resizing, and the workspace configuration. These are consumed by the
//! `io` layer and the CLI.
pub mod convert;
pub mod mat;
pub mod params;
pub mod resize;
