//! I/O layer: resolved artifact paths (`paths`), the artifact store that
//! reads and writes images and corner/size records (`artifacts`), and
//! `writers` for JPEG previews.
pub mod paths;
pub use paths::{StitchPaths, default_doc_dir};

pub mod artifacts;
pub use artifacts::{ArtifactStore, result_roi};

pub mod writers;
