use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::mat::Mat;
use crate::error::{Error, Result};
use crate::types::ChannelLayout;

/// True for `.jpg`/`.jpeg`, case-insensitive.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Encode a matrix as a baseline JPEG. Alpha is dropped; JPEG caps each side at 65535.
pub fn write_preview_jpeg(output: &Path, mat: &Mat, quality: u8) -> Result<()> {
    let cols = u16::try_from(mat.cols()).map_err(|_| Error::InvalidDimensions {
        rows: mat.rows(),
        cols: mat.cols(),
    })?;
    let rows = u16::try_from(mat.rows()).map_err(|_| Error::InvalidDimensions {
        rows: mat.rows(),
        cols: mat.cols(),
    })?;
    if mat.is_empty() {
        return Err(Error::InvalidDimensions {
            rows: mat.rows(),
            cols: mat.cols(),
        });
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality.clamp(1, 100));
    let color = match mat.layout() {
        ChannelLayout::Gray => ColorType::Luma,
        ChannelLayout::Rgb => ColorType::Rgb,
        ChannelLayout::Rgba => ColorType::Rgba,
    };
    encoder
        .encode(mat.as_bytes(), cols, rows, color)
        .map_err(|e| Error::Encode(e.to_string()))?;
    writer.flush()?;
    info!("Preview JPEG written to {:?} ({}x{})", output, cols, rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_decodable_gray_and_rgba() {
        let dir = tempfile::tempdir().unwrap();

        let gray = Mat::from_raw(8, 16, ChannelLayout::Gray, vec![128; 128]).unwrap();
        let gray_path = dir.path().join("gray.jpg");
        write_preview_jpeg(&gray_path, &gray, 90).unwrap();
        let decoded = image::open(&gray_path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));

        let rgba = Mat::new(4, 4, ChannelLayout::Rgba);
        let rgba_path = dir.path().join("rgba.jpg");
        write_preview_jpeg(&rgba_path, &rgba, 100).unwrap();
        assert!(!image::open(&rgba_path).unwrap().color().has_alpha());
    }

    #[test]
    fn jpeg_extension_detection() {
        assert!(is_jpeg_path(Path::new("/a/blend_0.jpg")));
        assert!(is_jpeg_path(Path::new("out.JPEG")));
        assert!(!is_jpeg_path(Path::new("out.png")));
        assert!(!is_jpeg_path(Path::new("jpg")));
    }

    #[test]
    fn missing_parent_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("p.jpg");
        let err = write_preview_jpeg(&path, &Mat::new(2, 2, ChannelLayout::Gray), 80);
        assert!(matches!(err, Err(Error::Io(_))));
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_preview_jpeg(&dir.path().join("e.jpg"), &Mat::new(0, 0, ChannelLayout::Rgb), 90);
        assert!(matches!(err, Err(Error::InvalidDimensions { .. })));
    }
}
