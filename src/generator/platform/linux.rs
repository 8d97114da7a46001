//! SVG output and the freedesktop desktop entry.

use crate::generator::error::{ErrorExt, Result};
use crate::generator::settings::Settings;
use handlebars::Handlebars;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const SVG_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{{width}}" height="{{height}}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{{width}}" height="{{height}}" fill="none"/>
  <text x="{{center_x}}" y="{{center_y}}" text-anchor="middle" dominant-baseline="middle"
        font-family="Arial, sans-serif" font-size="{{font_size}}" fill="#666">🐭</text>
</svg>
"##;

#[derive(Serialize)]
struct SvgData {
    width: u32,
    height: u32,
    center_x: u32,
    center_y: u32,
    font_size: u32,
}

/// Writes the SVG rendition of a raster.
///
/// The output is a text wrapper sized like the raster and centered on an
/// emoji glyph, not a vector trace of the pixels.
pub fn write_svg(image: &RgbaImage, output: &Path) -> Result<()> {
    let (width, height) = image.dimensions();
    let rendered = Handlebars::new().render_template(
        SVG_TEMPLATE,
        &SvgData {
            width,
            height,
            center_x: width / 2,
            center_y: height / 2,
            font_size: width / 4,
        },
    )?;
    fs::write(output, rendered).fs_context("writing SVG file", output)?;
    Ok(())
}

const DESKTOP_TEMPLATE: &str = "\
[Desktop Entry]
Version=1.0
Type=Application
Name={{product}}
Comment={{comment}}
Exec={{exec}}
Icon={{exec}}
Terminal=false
Categories=Utility;Accessibility;
Keywords=mouse;pointer;multi;accessibility;
";

#[derive(Serialize)]
struct DesktopData<'a> {
    product: &'a str,
    comment: &'a str,
    exec: &'a str,
}

/// Writes `<exec>.desktop`, a freedesktop.org desktop entry referencing
/// the installed icon by the executable name.
pub fn write_desktop_entry(linux_dir: &Path, settings: &Settings) -> Result<PathBuf> {
    let rendered = Handlebars::new().render_template(
        DESKTOP_TEMPLATE,
        &DesktopData {
            product: settings.product_name(),
            comment: settings.description(),
            exec: settings.exec_name(),
        },
    )?;

    let path = linux_dir.join(format!("{}.desktop", settings.exec_name()));
    fs::write(&path, rendered).fs_context("writing desktop entry", &path)?;
    log::info!("created desktop entry at {}", path.display());
    Ok(path)
}
