//! Command Line Interface (CLI) layer for Stitcher.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the dispatch logic (`runner`) for the `paths`, `convert` and
//! `inspect` subcommands. It wires user-provided options to the library.
//!
//! When embedding Stitcher into another application, use the library
//! types (`StitchPaths`, `ArtifactStore`, `Mat`) directly instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
