use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{info, warn};

use crate::core::mat::Mat;
use crate::error::{Error, Result};
use crate::types::ChannelLayout;

/// Dimensions after scaling the long side to `target_size`, keeping the aspect ratio.
/// Returns the original dimensions when that would upscale.
pub fn calculate_resize_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_size: usize,
) -> (usize, usize) {
    let short_side = original_rows.min(original_cols);
    let long_side = original_rows.max(original_cols);

    if target_size >= long_side {
        if target_size > long_side {
            warn!(
                "Target size {} is larger than original long side {}. Keeping original dimensions {}x{}",
                target_size, long_side, original_cols, original_rows
            );
        }
        return (original_cols, original_rows);
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as usize).max(1);

    if original_cols > original_rows {
        (target_size, new_short_side)
    } else {
        (new_short_side, target_size)
    }
}

fn pixel_type(layout: ChannelLayout) -> PixelType {
    match layout {
        ChannelLayout::Gray => PixelType::U8,
        ChannelLayout::Rgb => PixelType::U8x3,
        ChannelLayout::Rgba => PixelType::U8x4,
    }
}

/// Lanczos3 resize to exact dimensions.
pub fn resize_mat(mat: &Mat, target_cols: usize, target_rows: usize) -> Result<Mat> {
    if target_cols == 0 || target_rows == 0 || mat.is_empty() {
        return Err(Error::InvalidDimensions {
            rows: target_rows,
            cols: target_cols,
        });
    }
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    let pixel_type = pixel_type(mat.layout());

    let src_image = Image::from_vec_u8(
        mat.cols() as u32,
        mat.rows() as u32,
        mat.as_bytes().to_vec(),
        pixel_type,
    )
    .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    Mat::from_raw(target_rows, target_cols, mat.layout(), dst_image.into_vec())
}

impl Mat {
    /// Downscale so the long side equals `size`. Never upscales.
    pub fn resize_to_long_side(&self, size: usize) -> Result<Mat> {
        if size == 0 {
            return Err(Error::InvalidDimensions {
                rows: size,
                cols: size,
            });
        }
        let (cols, rows) = calculate_resize_dimensions(self.cols(), self.rows(), size);
        if cols == self.cols() && rows == self.rows() {
            return Ok(self.clone());
        }
        info!(
            "Resizing {}x{} -> {}x{} (long side {})",
            self.cols(),
            self.rows(),
            cols,
            rows,
            size
        );
        resize_mat(self, cols, rows)
    }
}
