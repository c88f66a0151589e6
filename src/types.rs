//! Shared types and enums used across the crate.
//! Includes `ChannelLayout`, `ArtifactKind`, and the corner/size records
//! persisted next to the warped images.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Channel configuration of an 8-bit matrix. Channel order is R, G, B(, A).
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Rgba,
    Rgb,
    Gray,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgba => 4,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Gray => 1,
        }
    }

    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            4 => Some(ChannelLayout::Rgba),
            3 => Some(ChannelLayout::Rgb),
            1 => Some(ChannelLayout::Gray),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChannelLayout::Rgba => "Rgba",
            ChannelLayout::Rgb => "Rgb",
            ChannelLayout::Gray => "Gray",
        };
        write!(f, "{}", s)
    }
}

/// The three per-index image families of a stitching run.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Warp,
    Mask,
    Blend,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [ArtifactKind::Warp, ArtifactKind::Mask, ArtifactKind::Blend];

    /// File stem prefix used on disk
    pub fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::Warp => "warp",
            ArtifactKind::Mask => "mask",
            ArtifactKind::Blend => "blend",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Warp => write!(f, "Warp"),
            ArtifactKind::Mask => write!(f, "Mask"),
            ArtifactKind::Blend => write!(f, "Blend"),
        }
    }
}

/// Top-left position of a warped image in panorama coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Corner {
    pub x: i32,
    pub y: i32,
}

impl Corner {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of a warped image.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in panorama coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_channel_counts_round_trip() {
        for layout in [ChannelLayout::Rgba, ChannelLayout::Rgb, ChannelLayout::Gray] {
            assert_eq!(ChannelLayout::from_channels(layout.channels()), Some(layout));
        }
        assert_eq!(ChannelLayout::from_channels(2), None);
    }

    #[test]
    fn artifact_prefixes_are_distinct() {
        let prefixes: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.prefix()).collect();
        assert_eq!(prefixes, vec!["warp", "mask", "blend"]);
    }

    #[test]
    fn corner_serializes_as_plain_object() {
        let json = serde_json::to_string(&Corner::new(-3, 7)).unwrap();
        assert_eq!(json, r#"{"x":-3,"y":7}"#);
    }
}
