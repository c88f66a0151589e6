use stitcher::{ChannelLayout, Mat};

/// Checkerboard matrix with distinct per-channel values on dark and light cells.
pub fn checkerboard(rows: usize, cols: usize, cell: usize, layout: ChannelLayout) -> Mat {
    assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let channels = layout.channels();
    let mut data = vec![0u8; rows * cols * channels];
    for y in 0..rows {
        for x in 0..cols {
            let dark = ((x / cell) + (y / cell)) % 2 == 0;
            let base = (y * cols + x) * channels;
            for c in 0..channels {
                data[base + c] = match (dark, c) {
                    (_, 3) => 255,
                    (true, c) => 20 + 30 * c as u8,
                    (false, c) => 220 - 40 * c as u8,
                };
            }
        }
    }
    Mat::from_raw(rows, cols, layout, data).expect("checkerboard buffer length")
}
