use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stitcher::core::convert::mat_with_layout;
use stitcher::io::writers::jpeg::{is_jpeg_path, write_preview_jpeg};
use stitcher::{ArtifactKind, ArtifactStore, ChannelLayout, StitchConfig, StitchPaths, result_roi};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn load_config(args: &CliArgs) -> Result<StitchConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => StitchConfig::from_json_file(path)?,
        None => StitchConfig::default(),
    };
    if let Some(dir) = &args.doc_dir {
        config.doc_dir = Some(dir.clone());
    }
    Ok(config)
}

fn print_paths(paths: &StitchPaths, index: Option<usize>) {
    println!("doc:     {}", paths.doc_path().display());
    println!("corners: {}", paths.corners_path().display());
    println!("sizes:   {}", paths.sizes_path().display());
    if let Some(index) = index {
        println!("warp:    {}", paths.warp_image_path(index).display());
        println!("mask:    {}", paths.mask_image_path(index).display());
        println!("blend:   {}", paths.blend_image_path(index).display());
    }
}

fn convert_file(
    input: &Path,
    output: &Path,
    layout: ChannelLayout,
    size: Option<usize>,
    quality: u8,
) -> Result<(), AppError> {
    if input == output {
        return Err(AppError::SameFile {
            path: input.display().to_string(),
        });
    }
    if size == Some(0) {
        return Err(AppError::ZeroSize { size: 0 });
    }

    let decoded = image::open(input).map_err(stitcher::Error::from)?;
    let mut mat = mat_with_layout(&decoded, layout);
    info!(
        "Decoded {:?}: {}x{} -> {} matrix",
        input,
        mat.cols(),
        mat.rows(),
        layout
    );

    if let Some(size) = size {
        mat = mat.resize_to_long_side(size)?;
    }

    if is_jpeg_path(output) {
        if layout == ChannelLayout::Rgba {
            warn!("JPEG output has no alpha channel; alpha is dropped");
        }
        write_preview_jpeg(output, &mat, quality)?;
    } else {
        mat.to_image()?
            .save(output)
            .map_err(stitcher::Error::from)?;
    }
    Ok(())
}

fn inspect(store: &ArtifactStore) -> Result<(), AppError> {
    let paths = store.paths();
    println!("doc: {}", paths.doc_path().display());

    if paths.corners_path().exists() && paths.sizes_path().exists() {
        let (corners, sizes) = store.read_layout()?;
        println!("images: {}", corners.len());
        match result_roi(&corners, &sizes) {
            Some(roi) => println!("panorama: {}", roi),
            None => println!("panorama: empty"),
        }
    } else {
        warn!("Corners or sizes file missing in {:?}", paths.doc_path());
        println!("layout: missing");
    }

    for kind in ArtifactKind::ALL {
        let indices = store.indices(kind)?;
        println!("{}: {} file(s) {:?}", kind, indices.len(), indices);
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = load_config(&args)?;

    match args.command {
        Command::Paths { index } => print_paths(&StitchPaths::from_config(&config), index),
        Command::Convert {
            input,
            output,
            layout,
            size,
        } => {
            convert_file(&input, &output, layout, size, config.preview_quality)?;
            info!("Successfully converted: {:?} -> {:?}", input, output);
        }
        Command::Inspect => inspect(&ArtifactStore::from_config(&config))?,
    }

    Ok(())
}
