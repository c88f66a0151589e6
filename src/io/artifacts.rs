//! Reading and writing the artifacts named by [`StitchPaths`]: per-index
//! warp/mask/blend images and the corners/sizes records.
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::core::convert::{gray_mat, image_with_mat, mat, mat3};
use crate::core::mat::Mat;
use crate::core::params::StitchConfig;
use crate::error::{Error, Result};
use crate::io::paths::StitchPaths;
use crate::io::writers::jpeg::{is_jpeg_path, write_preview_jpeg};
use crate::types::{ArtifactKind, ChannelLayout, Corner, Rect, Size};

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    paths: StitchPaths,
    jpeg_quality: u8,
}

impl ArtifactStore {
    /// Store over `paths` with the default JPEG quality.
    pub fn new(paths: StitchPaths) -> Self {
        Self {
            paths,
            jpeg_quality: StitchConfig::default().preview_quality,
        }
    }

    pub fn from_config(config: &StitchConfig) -> Self {
        Self {
            paths: StitchPaths::from_config(config),
            jpeg_quality: config.preview_quality,
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn paths(&self) -> &StitchPaths {
        &self.paths
    }

    pub fn write_warp_image(&self, index: usize, image: &Mat) -> Result<()> {
        self.write_image(ArtifactKind::Warp, index, image)
    }

    /// Masks are single-channel; other layouts are rejected.
    pub fn write_mask_image(&self, index: usize, mask: &Mat) -> Result<()> {
        if mask.layout() != ChannelLayout::Gray {
            return Err(Error::LayoutMismatch {
                expected: ChannelLayout::Gray,
                actual: mask.layout(),
            });
        }
        self.write_image(ArtifactKind::Mask, index, mask)
    }

    pub fn write_blend_image(&self, index: usize, image: &Mat) -> Result<()> {
        self.write_image(ArtifactKind::Blend, index, image)
    }

    pub fn read_warp_image(&self, index: usize) -> Result<Mat> {
        self.read_color_image(ArtifactKind::Warp, index)
    }

    pub fn read_mask_image(&self, index: usize) -> Result<Mat> {
        let path = self.paths.mask_image_path(index);
        debug!("Reading mask {:?}", path);
        Ok(gray_mat(&image::open(&path)?))
    }

    pub fn read_blend_image(&self, index: usize) -> Result<Mat> {
        self.read_color_image(ArtifactKind::Blend, index)
    }

    /// JPEG paths go through the preview encoder, which drops alpha;
    /// everything else is encoded by `image` from the extension.
    fn write_image(&self, kind: ArtifactKind, index: usize, image: &Mat) -> Result<()> {
        if image.is_empty() {
            return Err(Error::InvalidDimensions {
                rows: image.rows(),
                cols: image.cols(),
            });
        }
        let path = self.paths.artifact_path(kind, index);
        self.paths.ensure_doc_dir()?;
        if is_jpeg_path(&path) {
            write_preview_jpeg(&path, image, self.jpeg_quality)?;
        } else {
            image_with_mat(image)?.save(&path)?;
        }
        info!(
            "{} image {} saved to {:?} ({}x{} {})",
            kind,
            index,
            path,
            image.cols(),
            image.rows(),
            image.layout()
        );
        Ok(())
    }

    fn read_color_image(&self, kind: ArtifactKind, index: usize) -> Result<Mat> {
        let path = self.paths.artifact_path(kind, index);
        debug!("Reading {} image {:?}", kind, path);
        let decoded = image::open(&path)?;
        Ok(if decoded.color().has_alpha() {
            mat(&decoded)
        } else {
            mat3(&decoded)
        })
    }

    pub fn write_corners(&self, corners: &[Corner]) -> Result<()> {
        write_json(&self.paths.corners_path(), &corners)
    }

    pub fn read_corners(&self) -> Result<Vec<Corner>> {
        read_json(&self.paths.corners_path())
    }

    pub fn write_sizes(&self, sizes: &[Size]) -> Result<()> {
        write_json(&self.paths.sizes_path(), &sizes)
    }

    pub fn read_sizes(&self) -> Result<Vec<Size>> {
        read_json(&self.paths.sizes_path())
    }

    /// Corners and sizes together; both files must list the same number of images.
    pub fn read_layout(&self) -> Result<(Vec<Corner>, Vec<Size>)> {
        let corners = self.read_corners()?;
        let sizes = self.read_sizes()?;
        if corners.len() != sizes.len() {
            return Err(Error::LengthMismatch {
                corners: corners.len(),
                sizes: sizes.len(),
            });
        }
        Ok((corners, sizes))
    }

    /// Sorted indices of the images of `kind` present in the document directory.
    pub fn indices(&self, kind: ArtifactKind) -> Result<Vec<usize>> {
        let dir = self.paths.doc_path();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut indices = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if let Some(index) = self.paths.index_of(kind, &path) {
                indices.push(index);
            }
        }
        indices.sort_unstable();
        Ok(indices)
    }

    pub fn warp_indices(&self) -> Result<Vec<usize>> {
        self.indices(ArtifactKind::Warp)
    }
}

/// Union of the rectangles spanned by each corner and its size. None when empty.
pub fn result_roi(corners: &[Corner], sizes: &[Size]) -> Option<Rect> {
    let mut bounds: Option<(i64, i64, i64, i64)> = None;
    for (corner, size) in corners.iter().zip(sizes) {
        let x0 = i64::from(corner.x);
        let y0 = i64::from(corner.y);
        let x1 = x0 + i64::from(size.width);
        let y1 = y0 + i64::from(size.height);
        bounds = Some(match bounds {
            None => (x0, y0, x1, y1),
            Some((bx0, by0, bx1, by1)) => (bx0.min(x0), by0.min(y0), bx1.max(x1), by1.max(y1)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| Rect {
        x: x0 as i32,
        y: y0 as i32,
        width: (x1 - x0).min(i64::from(u32::MAX)) as u32,
        height: (y1 - y0).min(i64::from(u32::MAX)) as u32,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!("Wrote {:?}", path);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {:?}", path);
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_of_overlapping_images() {
        let corners = [Corner::new(0, 0), Corner::new(80, -10), Corner::new(150, 5)];
        let sizes = [Size::new(100, 60), Size::new(100, 60), Size::new(50, 40)];
        let roi = result_roi(&corners, &sizes).unwrap();
        assert_eq!(
            roi,
            Rect {
                x: 0,
                y: -10,
                width: 200,
                height: 70
            }
        );
    }

    #[test]
    fn roi_of_nothing_is_none() {
        assert_eq!(result_roi(&[], &[]), None);
    }

    #[test]
    fn mask_must_be_gray() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(StitchPaths::new(dir.path()));
        let err = store
            .write_mask_image(0, &Mat::new(2, 2, ChannelLayout::Rgb))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::LayoutMismatch {
                expected: ChannelLayout::Gray,
                actual: ChannelLayout::Rgb
            }
        ));
        assert!(!store.paths().mask_image_path(0).exists());
    }

    #[test]
    fn empty_image_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(StitchPaths::new(dir.path().join("run")));
        let err = store
            .write_warp_image(0, &Mat::new(0, 4, ChannelLayout::Rgb))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { rows: 0, cols: 4 }));
        assert!(!store.paths().doc_path().exists());
    }

    #[test]
    fn indices_on_missing_dir_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(StitchPaths::new(dir.path().join("missing")));
        assert!(store.warp_indices().unwrap().is_empty());
    }
}
