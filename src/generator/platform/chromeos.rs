//! ChromeOS extension manifest fragment.

use crate::generator::error::{ErrorExt, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Icon sizes a ChromeOS extension manifest declares.
const MANIFEST_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Writes `icon_manifest.json`, the `icons` object to splice into an
/// extension manifest. Keys are the decimal sizes, values the matching
/// generated PNG file names.
pub fn write_icon_manifest(chromeos_dir: &Path) -> Result<PathBuf> {
    let mut icons = serde_json::Map::new();
    for size in MANIFEST_SIZES {
        icons.insert(
            size.to_string(),
            serde_json::Value::String(format!("icon_{size}x{size}.png")),
        );
    }
    let manifest = serde_json::json!({ "icons": icons });

    let path = chromeos_dir.join("icon_manifest.json");
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)
        .fs_context("writing icon manifest", &path)?;
    log::info!("created icon manifest at {}", path.display());
    Ok(path)
}
