use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stitcher::ChannelLayout;

#[derive(Parser)]
#[command(name = "stitcher", version, about = "Stitcher artifact and conversion CLI")]
pub struct CliArgs {
    /// Artifact directory (overrides the config file and the platform default)
    #[arg(long, global = true)]
    pub doc_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved artifact paths
    Paths {
        /// Also print the warp/mask/blend paths for this image index
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Decode an image, extract a matrix and encode it again
    Convert {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Output image file; .jpg/.jpeg goes through the preview encoder
        #[arg(short, long)]
        output: PathBuf,

        /// Channel layout of the extracted matrix (rgba, rgb or gray)
        #[arg(long, value_enum, default_value_t = ChannelLayout::Rgba)]
        layout: ChannelLayout,

        /// Downscale so the long side is at most this many pixels
        #[arg(long)]
        size: Option<usize>,
    },

    /// Summarize the corners/sizes files and the images on disk
    Inspect,
}
