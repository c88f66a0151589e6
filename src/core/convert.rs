//! Conversions between decoded bitmaps (`image::DynamicImage`) and [`Mat`].
//!
//! Bitmap to matrix comes in three flavours, mirroring the usual OpenCV
//! bridge: RGBA (`mat`), RGB with alpha dropped (`mat3`) and single-channel
//! luminance (`gray_mat`). Matrix to bitmap picks the bitmap variant from the
//! matrix layout. No resizing or reorientation happens in either direction.
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use tracing::debug;

use crate::core::mat::Mat;
use crate::error::{Error, Result};
use crate::types::ChannelLayout;

/// Build a bitmap from a matrix: `Gray` -> Luma8, `Rgb` -> Rgb8, `Rgba` -> Rgba8.
/// An empty matrix has no bitmap and yields `InvalidDimensions`.
pub fn image_with_mat(mat: &Mat) -> Result<DynamicImage> {
    if mat.is_empty() {
        return Err(Error::InvalidDimensions {
            rows: mat.rows(),
            cols: mat.cols(),
        });
    }
    let width = u32::try_from(mat.cols()).map_err(|_| Error::InvalidDimensions {
        rows: mat.rows(),
        cols: mat.cols(),
    })?;
    let height = u32::try_from(mat.rows()).map_err(|_| Error::InvalidDimensions {
        rows: mat.rows(),
        cols: mat.cols(),
    })?;
    let raw = mat.as_bytes().to_vec();
    let actual = raw.len();
    let size_err = || Error::BufferSize {
        expected: mat.rows() * mat.stride(),
        actual,
    };

    let image = match mat.layout() {
        ChannelLayout::Gray => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(width, height, raw).ok_or_else(size_err)?)
        }
        ChannelLayout::Rgb => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(width, height, raw).ok_or_else(size_err)?)
        }
        ChannelLayout::Rgba => {
            DynamicImage::ImageRgba8(RgbaImage::from_raw(width, height, raw).ok_or_else(size_err)?)
        }
    };
    debug!("image_with_mat: {}x{} {}", width, height, mat.layout());
    Ok(image)
}

impl TryFrom<&Mat> for DynamicImage {
    type Error = Error;

    fn try_from(mat: &Mat) -> Result<Self> {
        image_with_mat(mat)
    }
}

impl Mat {
    pub fn to_image(&self) -> Result<DynamicImage> {
        image_with_mat(self)
    }

    /// Re-express the pixels in another layout. Added alpha is opaque,
    /// gray uses the same luminance weights as [`gray_mat`].
    pub fn convert_to(&self, layout: ChannelLayout) -> Result<Mat> {
        if layout == self.layout() {
            return Ok(self.clone());
        }
        let image = image_with_mat(self)?;
        Ok(match layout {
            ChannelLayout::Rgba => mat(&image),
            ChannelLayout::Rgb => mat3(&image),
            ChannelLayout::Gray => gray_mat(&image),
        })
    }
}

/// RGBA matrix (4 channels) including the alpha channel.
pub fn mat(image: &DynamicImage) -> Mat {
    let buf = image.to_rgba8();
    let (w, h) = buf.dimensions();
    pack(h as usize, w as usize, ChannelLayout::Rgba, buf.into_raw())
}

/// RGB matrix (3 channels), alpha discarded.
pub fn mat3(image: &DynamicImage) -> Mat {
    let buf = image.to_rgb8();
    let (w, h) = buf.dimensions();
    pack(h as usize, w as usize, ChannelLayout::Rgb, buf.into_raw())
}

/// Single-channel luminance matrix. Color information is lost.
pub fn gray_mat(image: &DynamicImage) -> Mat {
    let buf = image.to_luma8();
    let (w, h) = buf.dimensions();
    pack(h as usize, w as usize, ChannelLayout::Gray, buf.into_raw())
}

/// Extract a matrix in the requested layout.
pub fn mat_with_layout(image: &DynamicImage, layout: ChannelLayout) -> Mat {
    match layout {
        ChannelLayout::Rgba => mat(image),
        ChannelLayout::Rgb => mat3(image),
        ChannelLayout::Gray => gray_mat(image),
    }
}

fn pack(rows: usize, cols: usize, layout: ChannelLayout, raw: Vec<u8>) -> Mat {
    // `ImageBuffer::into_raw` is exactly width * height * channels bytes.
    Mat::from_raw(rows, cols, layout, raw)
        .expect("image buffer length matches its dimensions and channel count")
}

/// Matrix accessors on decoded bitmaps.
pub trait MatExt {
    fn to_mat(&self) -> Mat;
    fn to_mat3(&self) -> Mat;
    fn to_gray_mat(&self) -> Mat;
}

impl MatExt for DynamicImage {
    fn to_mat(&self) -> Mat {
        mat(self)
    }

    fn to_mat3(&self) -> Mat {
        mat3(self)
    }

    fn to_gray_mat(&self) -> Mat {
        gray_mat(self)
    }
}
