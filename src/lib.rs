//! # TriMouse Icon Generator
//!
//! Generates platform-specific application icon sets (macOS, Windows,
//! Linux, ChromeOS) from a single source image, or from a drawn
//! placeholder when no source is available yet.
//!
//! For every platform the tool walks a static category → size table,
//! produces a square raster per size, writes it in each format the
//! platform requires (PNG, ICO, ICNS, SVG), and emits a small manifest
//! fragment: a macOS `.iconset` directory, a Windows resource script, a
//! Linux desktop entry, and a ChromeOS manifest snippet.
//!
//! ## Usage
//!
//! ```bash
//! trimouse_icongen                        # placeholder icons into assets/icons
//! trimouse_icongen logo.png               # resize a real source image
//! trimouse_icongen --platform macos       # one platform only
//! trimouse_icongen --style colorful       # alternate placeholder style
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod generator;

// Re-export main types for public API
pub use cli::Args;
pub use generator::{
    Error, IconCategory, IconFormat, IconGenerator, IconStyle, Platform, Result, Settings,
    SettingsBuilder,
};
