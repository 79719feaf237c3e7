//! Artwork candidate models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Provider id attached to every candidate produced from video stills.
pub const PROVIDER_ID: &str = "ffmpeg";

/// Language marker for artwork that is not language-specific.
pub const NO_LANGUAGE: &str = "-";

/// Artwork type requested by the caller for one sampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkType {
    All,
    Background,
    Thumb,
    Poster,
    Banner,
    ClearLogo,
    Disc,
}

impl ArtworkType {
    /// Whether a candidate with `role` satisfies this request.
    pub fn wants(&self, role: ArtworkRole) -> bool {
        match self {
            ArtworkType::All => true,
            ArtworkType::Background => role == ArtworkRole::Background,
            ArtworkType::Thumb => role == ArtworkRole::Thumb,
            _ => false,
        }
    }
}

impl FromStr for ArtworkType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ArtworkType::All),
            "background" | "fanart" => Ok(ArtworkType::Background),
            "thumb" => Ok(ArtworkType::Thumb),
            "poster" => Ok(ArtworkType::Poster),
            "banner" => Ok(ArtworkType::Banner),
            "clearlogo" => Ok(ArtworkType::ClearLogo),
            "disc" => Ok(ArtworkType::Disc),
            _ => Err(crate::Error::InvalidArtworkType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArtworkType::All => "all",
            ArtworkType::Background => "background",
            ArtworkType::Thumb => "thumb",
            ArtworkType::Poster => "poster",
            ArtworkType::Banner => "banner",
            ArtworkType::ClearLogo => "clearlogo",
            ArtworkType::Disc => "disc",
        };
        write!(f, "{}", name)
    }
}

/// Role of an emitted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkRole {
    /// Background / fanart.
    Background,
    Thumb,
}

impl std::fmt::Display for ArtworkRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtworkRole::Background => write!(f, "background"),
            ArtworkRole::Thumb => write!(f, "thumb"),
        }
    }
}

/// Size bucket derived from the source width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeOrder {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeOrder {
    /// Classify by pixel width; lower bounds are inclusive.
    pub fn from_width(width: u32) -> Self {
        if width >= 3840 {
            SizeOrder::XLarge
        } else if width >= 1920 {
            SizeOrder::Large
        } else if width >= 1280 {
            SizeOrder::Medium
        } else {
            SizeOrder::Small
        }
    }

    /// Integer order used by artwork catalogs to rank sizes.
    pub fn order(&self) -> u8 {
        match self {
            SizeOrder::Small => 1,
            SizeOrder::Medium => 2,
            SizeOrder::Large => 3,
            SizeOrder::XLarge => 4,
        }
    }
}

/// One artwork candidate produced from an extracted still.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkCandidate {
    /// Provider that produced this candidate.
    pub provider: String,
    pub role: ArtworkRole,
    /// `file://` URI of the still image.
    pub url: String,
    /// Absolute path of the still image.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub size: SizeOrder,
    /// Integer form of `size`.
    pub size_order: u8,
    /// Always [`NO_LANGUAGE`].
    pub language: String,
    /// Second of the source the still was taken at.
    pub timestamp: f64,
}

impl ArtworkCandidate {
    /// Build a candidate for a still taken from a `width` x `height` source.
    pub fn new(role: ArtworkRole, path: PathBuf, width: u32, height: u32, timestamp: f64) -> Self {
        let size = SizeOrder::from_width(width);
        Self {
            provider: PROVIDER_ID.to_string(),
            role,
            url: crate::utils::fs::file_uri(&path),
            path,
            width,
            height,
            size,
            size_order: size.order(),
            language: NO_LANGUAGE.to_string(),
            timestamp,
        }
    }
}
