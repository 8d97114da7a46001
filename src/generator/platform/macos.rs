//! ICNS output and the Xcode iconset fragment.

use crate::generator::error::{ErrorExt, Result};
use crate::generator::raster;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Writes an ICNS icon at `output`.
///
/// PNG bytes are written first so a usable file exists at the path no
/// matter what happens to the conversion step; `iconutil` then rewrites
/// the file in place when the utility is available and accepts the
/// input. Conversion failure is recoverable: the PNG fallback stays.
pub fn write_icns(image: &RgbaImage, output: &Path) -> Result<()> {
    raster::write_png(image, output)?;

    let iconutil = match which::which("iconutil") {
        Ok(path) => path,
        Err(_) => {
            log::warn!(
                "iconutil not found, keeping PNG fallback for {}",
                output.display()
            );
            return Ok(());
        }
    };

    let source_dir = output.parent().unwrap_or_else(|| Path::new("."));
    match Command::new(iconutil)
        .arg("-c")
        .arg("icns")
        .arg(source_dir)
        .arg("-o")
        .arg(output)
        .output()
    {
        Ok(out) if out.status.success() => {
            log::info!("converted {} to ICNS", output.display());
        }
        Ok(out) => {
            log::warn!(
                "iconutil failed for {} ({}), keeping PNG fallback",
                output.display(),
                out.status
            );
        }
        Err(error) => {
            log::warn!(
                "could not run iconutil for {}: {error}, keeping PNG fallback",
                output.display()
            );
        }
    }

    Ok(())
}

/// Iconset mapping: file name inside the `.iconset` directory paired
/// with the generated PNG it is copied from. The @2x entries reuse the
/// next size up, per the iconset convention.
const ICONSET_MAPPINGS: [(&str, &str); 10] = [
    ("icon_16x16.png", "icon_16x16.png"),
    ("icon_16x16@2x.png", "icon_32x32.png"),
    ("icon_32x32.png", "icon_32x32.png"),
    ("icon_32x32@2x.png", "icon_64x64.png"),
    ("icon_128x128.png", "icon_128x128.png"),
    ("icon_128x128@2x.png", "icon_256x256.png"),
    ("icon_256x256.png", "icon_256x256.png"),
    ("icon_256x256@2x.png", "icon_512x512.png"),
    ("icon_512x512.png", "icon_512x512.png"),
    ("icon_512x512@2x.png", "icon_1024x1024.png"),
];

/// Populates `<product_name>.iconset/` with renamed copies of the
/// generated PNGs, in the layout `iconutil` compiles into an ICNS.
///
/// Sources that were not generated (a partial run) are skipped.
pub fn create_iconset(macos_dir: &Path, product_name: &str) -> Result<PathBuf> {
    let iconset_dir = macos_dir.join(format!("{product_name}.iconset"));
    fs::create_dir_all(&iconset_dir).fs_context("creating iconset directory", &iconset_dir)?;

    for (target, source) in ICONSET_MAPPINGS {
        let source_path = macos_dir.join(source);
        if !source_path.is_file() {
            log::debug!("iconset source {source} missing, skipping {target}");
            continue;
        }
        let target_path = iconset_dir.join(target);
        fs::copy(&source_path, &target_path).fs_context("copying iconset entry", &target_path)?;
    }

    log::info!("created iconset at {}", iconset_dir.display());
    Ok(iconset_dir)
}
