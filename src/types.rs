//! Shared types used across the crate and the CLI.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How `pdfimages` writes the images it finds.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PBM/PGM/PPM depending on the color space (the tool's default)
    #[default]
    Pnm,
    /// DCT-encoded images are written as JPEG, everything else as PBM/PGM/PPM
    Jpeg,
    /// PDF-native formats
    Raw,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImageFormat::Pnm => "pnm",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Raw => "raw",
        };
        write!(f, "{}", s)
    }
}
