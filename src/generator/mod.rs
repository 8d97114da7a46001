//! Cross-platform icon set generation.
//!
//! This module turns a single raster (a user-supplied image, or the
//! drawn TriMouse placeholder) into the icon files and manifest
//! fragments each desktop platform expects.
//!
//! # Pipeline
//!
//! 1. Decode the source image, if one is configured (fatal on failure).
//! 2. For each platform, walk its category → size table.
//! 3. Obtain a square RGBA raster per size (Lanczos3 resize, or the
//!    placeholder renderer in the selected style).
//! 4. Write the raster in every format the platform requires.
//! 5. Emit the platform's manifest fragment.
//!
//! # Outputs
//!
//! | Platform | Icon formats | Manifest fragment |
//! |----------|--------------|-------------------|
//! | macOS | PNG, ICNS | `<Product>.iconset/` |
//! | Windows | PNG, ICO | `app_icons.rc` |
//! | Linux | PNG, SVG | `<exec>.desktop` |
//! | ChromeOS | PNG | `icon_manifest.json` |
//!
//! ICNS conversion is delegated to the external `iconutil` utility and
//! is best-effort: when it is missing or fails, the PNG bytes already
//! written at the `.icns` path are kept as a fallback.

#![warn(missing_docs)]

mod builder;
pub mod error;
mod platform;
mod raster;
mod render;
mod settings;

// Public re-exports
pub use builder::IconGenerator;
pub use error::{Context, Error, ErrorExt, Result};
pub use platform::{IconCategory, IconFormat, Platform};
pub use raster::resize_to;
pub use render::{IconStyle, placeholder_icon};
pub use settings::{Settings, SettingsBuilder};
