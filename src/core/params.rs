use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Workspace configuration suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchConfig {
    /// Base directory for all artifacts; None resolves the platform documents dir
    pub doc_dir: Option<PathBuf>,
    pub corners_file: String,
    pub sizes_file: String,
    /// Extension of warp/mask/blend images, also selects the encoder
    pub image_extension: String,
    /// JPEG quality for previews (1-100)
    pub preview_quality: u8,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            doc_dir: None,
            corners_file: "corners.json".to_string(),
            sizes_file: "sizes.json".to_string(),
            image_extension: "png".to_string(),
            preview_quality: 90,
        }
    }
}

impl StitchConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn with_doc_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.doc_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: StitchConfig =
            serde_json::from_str(r#"{"image_extension": "tiff"}"#).unwrap();
        assert_eq!(config.image_extension, "tiff");
        assert_eq!(config.corners_file, "corners.json");
        assert_eq!(config.preview_quality, 90);
        assert!(config.doc_dir.is_none());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stitcher.json");
        fs::write(&path, r#"{"doc_dir": "/tmp/pano", "sizes_file": "dims.json"}"#).unwrap();

        let config = StitchConfig::from_json_file(&path).unwrap();
        assert_eq!(config.doc_dir, Some(PathBuf::from("/tmp/pano")));
        assert_eq!(config.sizes_file, "dims.json");
    }
}
