#![doc = r#"
Stitcher — artifact bookkeeping and bitmap/matrix conversion for image stitching.

This crate provides the leaf utilities a stitching pipeline sits on: an explicit
`StitchPaths` value naming where intermediate artifacts live (corners, sizes, and
per-index warp/mask/blend images), an `ArtifactStore` reading and writing them, and
a `Mat` pixel matrix with conversions to and from decoded bitmaps
(`image::DynamicImage`). The stitching itself (features, homographies, seams,
blending) is out of scope.

Resolve paths
-------------
```rust
use stitcher::{StitchConfig, StitchPaths};

let config = StitchConfig::default().with_doc_dir("/tmp/pano");
let paths = StitchPaths::from_config(&config);

assert_eq!(paths.corners_path(), std::path::Path::new("/tmp/pano/corners.json"));
assert_eq!(paths.warp_image_path(2), std::path::Path::new("/tmp/pano/warp_2.png"));
```

Convert between bitmaps and matrices
------------------------------------
```rust
use image::{DynamicImage, RgbaImage};
use stitcher::{ChannelLayout, MatExt, image_with_mat};

fn main() -> stitcher::Result<()> {
    let bitmap = DynamicImage::ImageRgba8(RgbaImage::new(64, 48));

    let rgba = bitmap.to_mat();       // 4 channels, alpha kept
    let rgb = bitmap.to_mat3();       // 3 channels, alpha dropped
    let gray = bitmap.to_gray_mat();  // 1 channel luminance

    assert_eq!((rgba.rows(), rgba.cols(), rgba.channels()), (48, 64, 4));
    assert_eq!(rgb.layout(), ChannelLayout::Rgb);

    let back = image_with_mat(&gray)?;
    assert_eq!((back.width(), back.height()), (64, 48));
    Ok(())
}
```

Persist artifacts
-----------------
```rust,no_run
use stitcher::{ArtifactStore, ChannelLayout, Corner, Mat, Size, StitchPaths};

fn main() -> stitcher::Result<()> {
    let store = ArtifactStore::new(StitchPaths::new("/tmp/pano"));

    store.write_warp_image(0, &Mat::new(480, 640, ChannelLayout::Rgb))?;
    store.write_mask_image(0, &Mat::new(480, 640, ChannelLayout::Gray))?;
    store.write_corners(&[Corner::new(0, 0)])?;
    store.write_sizes(&[Size::new(640, 480)])?;

    let (corners, sizes) = store.read_layout()?;
    let roi = stitcher::result_roi(&corners, &sizes);
    println!("panorama ROI: {roi:?}");
    Ok(())
}
```

Error handling
--------------
All fallible functions return `stitcher::Result<T>`; match on `stitcher::Error` to
handle specific cases such as codec failures or inconsistent buffers.

Useful modules
--------------
- [`core`] — `Mat`, bitmap conversions, resizing, configuration.
- [`io`] — artifact paths, the artifact store, JPEG preview writer.
- [`types`] — `ChannelLayout`, `ArtifactKind`, `Corner`, `Size`, `Rect`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::convert::{MatExt, gray_mat, image_with_mat, mat, mat3, mat_with_layout};
pub use crate::core::mat::Mat;
pub use crate::core::params::StitchConfig;
pub use crate::error::{Error, Result};
pub use crate::io::artifacts::{ArtifactStore, result_roi};
pub use crate::io::paths::{StitchPaths, default_doc_dir};
pub use crate::types::{ArtifactKind, ChannelLayout, Corner, Rect, Size};
