//! Icon generation pipeline orchestration.
//!
//! [`IconGenerator`] owns the run configuration and the decoded source
//! image (when one was supplied) and walks the platform tables: for
//! every category and size it obtains a square raster, writes it in
//! each required format, and finally emits the per-platform manifest
//! fragments.

use crate::generator::error::{Context, ErrorExt, Result};
use crate::generator::platform::{IconFormat, Platform, chromeos, linux, macos, windows};
use crate::generator::raster;
use crate::generator::render;
use crate::generator::settings::Settings;
use image::{DynamicImage, RgbaImage};
use std::fs;
use std::path::PathBuf;

/// Drives icon generation for the configured platforms.
pub struct IconGenerator {
    settings: Settings,
    source: Option<DynamicImage>,
}

impl IconGenerator {
    /// Creates a generator, decoding the source image up front when one
    /// is configured. A source that fails to decode is fatal.
    pub fn new(settings: Settings) -> Result<Self> {
        let source = settings.source_image().map(raster::load_source).transpose()?;
        Ok(Self { settings, source })
    }

    /// The configuration this generator runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dimensions of the decoded source image, when one was supplied.
    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|img| (img.width(), img.height()))
    }

    /// A square raster at `size`: the resized source, or the drawn
    /// placeholder when no source is configured.
    fn raster_for(&self, size: u32) -> RgbaImage {
        match &self.source {
            Some(source) => raster::resize_to(source, size),
            None => render::placeholder_icon(size, self.settings.style()),
        }
    }

    /// Generates every (category, size, format) artifact for one
    /// platform and returns the written paths.
    pub fn generate_platform(&self, platform: Platform) -> Result<Vec<PathBuf>> {
        let platform_dir = self.settings.output_dir().join(platform.short_name());
        fs::create_dir_all(&platform_dir)
            .fs_context("creating platform directory", &platform_dir)?;

        let mut generated = Vec::new();
        for (category, sizes) in platform.categories() {
            log::info!("{platform}: {category} ({} sizes)", sizes.len());
            for &size in *sizes {
                let icon = self.raster_for(size);
                for format in platform.formats() {
                    let path =
                        platform_dir.join(format!("icon_{size}x{size}.{}", format.extension()));
                    match format {
                        IconFormat::Png => raster::write_png(&icon, &path)?,
                        IconFormat::Ico => windows::write_ico(&icon, &path)?,
                        IconFormat::Icns => macos::write_icns(&icon, &path)?,
                        IconFormat::Svg => linux::write_svg(&icon, &path)?,
                    }
                    log::debug!("wrote {}", path.display());
                    generated.push(path);
                }
            }
        }

        Ok(generated)
    }

    /// Emits the manifest fragment for every platform directory present
    /// under the output directory and returns the written paths.
    ///
    /// Checking the directory rather than the run's platform selection
    /// lets a later single-platform run refresh its fragment without
    /// touching the others.
    pub fn write_manifests(&self) -> Result<Vec<PathBuf>> {
        let out = self.settings.output_dir();
        let mut written = Vec::new();

        let macos_dir = out.join(Platform::MacOs.short_name());
        if macos_dir.is_dir() {
            written.push(
                macos::create_iconset(&macos_dir, self.settings.product_name())
                    .context("creating macOS iconset")?,
            );
        }

        let windows_dir = out.join(Platform::Windows.short_name());
        if windows_dir.is_dir() {
            written.push(
                windows::write_resource_script(&windows_dir, self.settings.product_name())
                    .context("writing Windows resource script")?,
            );
        }

        let linux_dir = out.join(Platform::Linux.short_name());
        if linux_dir.is_dir() {
            written.push(
                linux::write_desktop_entry(&linux_dir, &self.settings)
                    .context("writing Linux desktop entry")?,
            );
        }

        let chromeos_dir = out.join(Platform::ChromeOs.short_name());
        if chromeos_dir.is_dir() {
            written.push(
                chromeos::write_icon_manifest(&chromeos_dir)
                    .context("writing ChromeOS icon manifest")?,
            );
        }

        Ok(written)
    }
}
