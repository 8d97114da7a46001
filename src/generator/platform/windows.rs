//! ICO output and the Windows resource script.

use crate::generator::error::{ErrorExt, Result};
use handlebars::Handlebars;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes a single-entry ICO containing `image` at its own size.
pub fn write_ico(image: &RgbaImage, output: &Path) -> Result<()> {
    let (width, height) = image.dimensions();
    if width > 256 || height > 256 {
        // ICO directory entries store dimensions in one byte.
        crate::bail!("ICO container does not support {}x{} entries", width, height);
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let icon_image = IconImage::from_rgba_data(width, height, image.as_raw().clone());
    let entry = IconDirEntry::encode(&icon_image)?;
    icon_dir.add_entry(entry);

    let file = File::create(output).fs_context("creating ICO output file", output)?;
    icon_dir.write(file)?;
    Ok(())
}

const RESOURCE_TEMPLATE: &str = "\
// Windows resource script for {{product}} icons
#include <windows.h>

// Application icon
IDI_APP_ICON ICON \"icon_256x256.ico\"

// Small icons for different contexts
IDI_APP_ICON_SMALL ICON \"icon_16x16.ico\"
IDI_APP_ICON_MEDIUM ICON \"icon_32x32.ico\"
IDI_APP_ICON_LARGE ICON \"icon_128x128.ico\"
";

#[derive(Serialize)]
struct ResourceData<'a> {
    product: &'a str,
}

/// Writes `app_icons.rc`, the resource script that maps the generated
/// ICO files onto the `IDI_APP_ICON*` identifiers. Every referenced
/// size is in the windows size table, so the references always resolve.
pub fn write_resource_script(windows_dir: &Path, product_name: &str) -> Result<PathBuf> {
    let rendered = Handlebars::new().render_template(
        RESOURCE_TEMPLATE,
        &ResourceData {
            product: product_name,
        },
    )?;

    let path = windows_dir.join("app_icons.rc");
    fs::write(&path, rendered).fs_context("writing resource script", &path)?;
    log::info!("created resource script at {}", path.display());
    Ok(path)
}
