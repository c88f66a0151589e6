//! Resolved on-disk locations of the stitching artifacts.
//!
//! `StitchPaths` is built once from a [`StitchConfig`] and handed to whoever
//! reads or writes artifacts. Getters are pure path arithmetic; the only call
//! that touches the file system is [`StitchPaths::ensure_doc_dir`].
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::StitchConfig;
use crate::error::Result;
use crate::types::ArtifactKind;

const APP_DIR: &str = "Stitcher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchPaths {
    doc_dir: PathBuf,
    corners_file: String,
    sizes_file: String,
    image_extension: String,
}

impl StitchPaths {
    /// Default layout rooted at `doc_dir`
    pub fn new(doc_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&StitchConfig::default().with_doc_dir(doc_dir))
    }

    pub fn from_config(config: &StitchConfig) -> Self {
        let doc_dir = config
            .doc_dir
            .clone()
            .unwrap_or_else(default_doc_dir);
        debug!("Artifact directory: {:?}", doc_dir);
        Self {
            doc_dir,
            corners_file: config.corners_file.clone(),
            sizes_file: config.sizes_file.clone(),
            image_extension: config.image_extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn doc_path(&self) -> &Path {
        &self.doc_dir
    }

    pub fn corners_path(&self) -> PathBuf {
        self.doc_dir.join(&self.corners_file)
    }

    pub fn sizes_path(&self) -> PathBuf {
        self.doc_dir.join(&self.sizes_file)
    }

    pub fn warp_image_path(&self, index: usize) -> PathBuf {
        self.artifact_path(ArtifactKind::Warp, index)
    }

    pub fn mask_image_path(&self, index: usize) -> PathBuf {
        self.artifact_path(ArtifactKind::Mask, index)
    }

    pub fn blend_image_path(&self, index: usize) -> PathBuf {
        self.artifact_path(ArtifactKind::Blend, index)
    }

    pub fn artifact_path(&self, kind: ArtifactKind, index: usize) -> PathBuf {
        self.doc_dir
            .join(format!("{}_{}.{}", kind.prefix(), index, self.image_extension))
    }

    pub fn image_extension(&self) -> &str {
        &self.image_extension
    }

    /// Parse `<prefix>_<index>.<ext>` back into its index, if `path` belongs to `kind`.
    pub fn index_of(&self, kind: ArtifactKind, path: &Path) -> Option<usize> {
        if path.parent() != Some(self.doc_dir.as_path()) {
            return None;
        }
        if path.extension()?.to_str()? != self.image_extension {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let digits = stem.strip_prefix(kind.prefix())?.strip_prefix('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Create the document directory (and parents) if missing.
    pub fn ensure_doc_dir(&self) -> Result<()> {
        if !self.doc_dir.is_dir() {
            info!("Creating artifact directory {:?}", self.doc_dir);
            fs::create_dir_all(&self.doc_dir)?;
        }
        Ok(())
    }
}

/// Platform documents directory, falling back to the temp dir.
pub fn default_doc_dir() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn paths() -> StitchPaths {
        StitchPaths::new("/data/pano")
    }

    #[test]
    fn fixed_paths() {
        let p = paths();
        assert_eq!(p.doc_path(), Path::new("/data/pano"));
        assert_eq!(p.corners_path(), PathBuf::from("/data/pano/corners.json"));
        assert_eq!(p.sizes_path(), PathBuf::from("/data/pano/sizes.json"));
    }

    #[test]
    fn fixed_paths_are_stable() {
        let p = paths();
        assert_eq!(p.corners_path(), p.corners_path());
        assert_eq!(p.sizes_path(), p.sizes_path());
        assert_eq!(p.doc_path(), p.doc_path());
    }

    #[test]
    fn family_paths_are_deterministic() {
        let p = paths();
        assert_eq!(p.warp_image_path(3), PathBuf::from("/data/pano/warp_3.png"));
        assert_eq!(p.mask_image_path(3), PathBuf::from("/data/pano/mask_3.png"));
        assert_eq!(p.blend_image_path(3), PathBuf::from("/data/pano/blend_3.png"));
        assert_eq!(p.warp_image_path(3), paths().warp_image_path(3));
    }

    #[test]
    fn no_collisions_across_families_and_indices() {
        let p = paths();
        let mut seen = HashSet::new();
        assert!(seen.insert(p.corners_path()));
        assert!(seen.insert(p.sizes_path()));
        for index in [0usize, 1, 2, 10, 11, 100, usize::MAX] {
            for kind in ArtifactKind::ALL {
                assert!(seen.insert(p.artifact_path(kind, index)), "{kind} {index}");
            }
        }
    }

    #[test]
    fn extension_from_config_is_normalized() {
        let config = StitchConfig {
            image_extension: ".jpg".to_string(),
            ..StitchConfig::default().with_doc_dir("/x")
        };
        let p = StitchPaths::from_config(&config);
        assert_eq!(p.mask_image_path(0), PathBuf::from("/x/mask_0.jpg"));
    }

    #[test]
    fn index_parsing() {
        let p = paths();
        assert_eq!(p.index_of(ArtifactKind::Warp, &p.warp_image_path(42)), Some(42));
        assert_eq!(p.index_of(ArtifactKind::Mask, &p.warp_image_path(42)), None);
        assert_eq!(p.index_of(ArtifactKind::Warp, Path::new("/data/pano/warp_.png")), None);
        assert_eq!(p.index_of(ArtifactKind::Warp, Path::new("/data/pano/warp_1.jpg")), None);
        assert_eq!(p.index_of(ArtifactKind::Warp, Path::new("/other/warp_1.png")), None);
    }

    #[test]
    fn ensure_doc_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let p = StitchPaths::new(tmp.path().join("a").join("b"));
        p.ensure_doc_dir().unwrap();
        assert!(p.doc_path().is_dir());
        p.ensure_doc_dir().unwrap();
    }
}
