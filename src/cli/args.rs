//! Command line argument parsing.
//!
//! The surface is deliberately small: an optional source image, an
//! output directory, a placeholder style, and a platform filter.

use crate::generator::{IconStyle, Platform};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Cross-platform icon set generator for TriMouse
#[derive(Parser, Debug)]
#[command(
    name = "trimouse_icongen",
    version,
    about = "Generate macOS, Windows, Linux, and ChromeOS icon sets",
    long_about = "Generate platform icon sets from a source image, or from the drawn
TriMouse placeholder when no source is given.

Usage:
  trimouse_icongen                       # placeholder icons into assets/icons
  trimouse_icongen logo.png              # resize logo.png for every platform
  trimouse_icongen logo.png build/icons  # custom output directory"
)]
pub struct Args {
    /// Source image file (PNG, JPEG, ...); placeholders are drawn when omitted
    #[arg(index = 1, value_name = "SOURCE_IMAGE")]
    pub source_image: Option<PathBuf>,

    /// Output directory for the generated icon sets
    #[arg(index = 2, value_name = "OUTPUT_DIR", default_value = "assets/icons")]
    pub output_dir: PathBuf,

    /// Placeholder style, ignored when a source image is given
    #[arg(long, value_enum, default_value = "default")]
    pub style: StyleArg,

    /// Target platform
    #[arg(long, value_enum, default_value = "all")]
    pub platform: PlatformArg,

    /// Show every generated file
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// CLI value for `--style`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StyleArg {
    /// Opaque gray body
    Default,
    /// Translucent, outline-led
    Minimal,
    /// Palette fill keyed by icon size
    Colorful,
}

impl From<StyleArg> for IconStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Default => IconStyle::Default,
            StyleArg::Minimal => IconStyle::Minimal,
            StyleArg::Colorful => IconStyle::Colorful,
        }
    }
}

/// CLI value for `--platform`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PlatformArg {
    /// macOS only
    Macos,
    /// Windows only
    Windows,
    /// Linux only
    Linux,
    /// ChromeOS only
    Chromeos,
    /// Every supported platform
    All,
}

impl PlatformArg {
    /// The single platform selected, or `None` for `all`.
    pub fn target(self) -> Option<Platform> {
        match self {
            PlatformArg::Macos => Some(Platform::MacOs),
            PlatformArg::Windows => Some(Platform::Windows),
            PlatformArg::Linux => Some(Platform::Linux),
            PlatformArg::Chromeos => Some(Platform::ChromeOs),
            PlatformArg::All => None,
        }
    }
}
