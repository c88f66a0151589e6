//! `Mat`: an owned 8-bit pixel matrix with an explicit channel layout.
//!
//! Storage is an `ndarray::Array3<u8>` shaped `(rows, cols, channels)` in
//! standard layout, so the row stride is always `cols * channels` bytes.
//! Row-padded input is accepted through [`Mat::from_strided`] and compacted.
use ndarray::{Array3, ArrayView3, s};

use crate::error::{Error, Result};
use crate::types::ChannelLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mat {
    data: Array3<u8>,
    layout: ChannelLayout,
}

impl Mat {
    /// Zero-filled matrix
    pub fn new(rows: usize, cols: usize, layout: ChannelLayout) -> Self {
        Self {
            data: Array3::zeros((rows, cols, layout.channels())),
            layout,
        }
    }

    /// Build from contiguous interleaved bytes, `rows * cols * channels` long.
    pub fn from_raw(rows: usize, cols: usize, layout: ChannelLayout, data: Vec<u8>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(layout.channels()))
            .ok_or(Error::BufferSize {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let data = Array3::from_shape_vec((rows, cols, layout.channels()), data)?;
        Ok(Self { data, layout })
    }

    /// Build from row-padded bytes where consecutive rows start `stride` bytes apart.
    /// The last row only needs `cols * channels` bytes.
    pub fn from_strided(
        rows: usize,
        cols: usize,
        layout: ChannelLayout,
        stride: usize,
        data: &[u8],
    ) -> Result<Self> {
        let row_bytes = cols.checked_mul(layout.channels()).ok_or(Error::BufferSize {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if row_bytes > stride {
            return Err(Error::InvalidStride { stride, row_bytes });
        }
        if rows == 0 {
            return Ok(Self::new(0, cols, layout));
        }
        let expected = (rows - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(Error::BufferSize {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() < expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        let mut packed = Vec::with_capacity(rows * row_bytes);
        for row in 0..rows {
            let start = row * stride;
            packed.extend_from_slice(&data[start..start + row_bytes]);
        }
        Self::from_raw(rows, cols, layout, packed)
    }

    /// Wrap an existing array; the last axis must match the layout's channel count.
    pub fn from_array(data: Array3<u8>, layout: ChannelLayout) -> Result<Self> {
        let (_, _, channels) = data.dim();
        if channels != layout.channels() {
            return Err(Error::ChannelCount { layout, channels });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data, layout })
    }

    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Bytes between the starts of consecutive rows
    pub fn stride(&self) -> usize {
        self.cols() * self.channels()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Contiguous interleaved bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        // Standard layout is kept by every constructor.
        self.data.as_slice().unwrap_or(&[])
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_raw_vec()
    }

    /// Bytes of one row, or None past the last row
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.stride();
        Some(&self.as_bytes()[start..start + self.stride()])
    }

    /// Channel values of one pixel, or None when out of bounds
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        if col >= self.cols() {
            return None;
        }
        let start = col * self.channels();
        self.row(row).map(|r| &r[start..start + self.channels()])
    }

    /// Sub-matrix of `rows x cols` starting at (`row`, `col`), clamped to the bounds.
    pub fn crop(&self, row: usize, col: usize, rows: usize, cols: usize) -> Mat {
        let r0 = row.min(self.rows());
        let c0 = col.min(self.cols());
        let r1 = row.saturating_add(rows).min(self.rows());
        let c1 = col.saturating_add(cols).min(self.cols());
        Mat {
            data: self
                .data
                .slice(s![r0..r1, c0..c1, ..])
                .as_standard_layout()
                .into_owned(),
            layout: self.layout,
        }
    }
}
