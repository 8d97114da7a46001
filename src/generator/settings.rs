//! Run configuration for the icon pipeline.
//!
//! [`Settings`] carries everything a run needs: the optional source
//! image, the output directory, the placeholder style, the platform
//! selection, and the product identity stamped into the manifest
//! fragments. Construct it through [`SettingsBuilder`]; the defaults
//! match the CLI defaults.

use crate::generator::platform::Platform;
use crate::generator::render::IconStyle;
use std::path::{Path, PathBuf};

/// Resolved configuration for one generator run.
#[derive(Clone, Debug)]
pub struct Settings {
    source_image: Option<PathBuf>,
    output_dir: PathBuf,
    style: IconStyle,
    target: Option<Platform>,
    product_name: String,
    exec_name: String,
    description: String,
}

impl Settings {
    /// Starts a builder with the default configuration.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Path of the source image, when one was supplied.
    pub fn source_image(&self) -> Option<&Path> {
        self.source_image.as_deref()
    }

    /// Root directory the per-platform trees are written under.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Placeholder style used when no source image is configured.
    pub fn style(&self) -> IconStyle {
        self.style
    }

    /// Platforms selected for this run, in generation order.
    pub fn platforms(&self) -> Vec<Platform> {
        match self.target {
            Some(platform) => vec![platform],
            None => Platform::ALL.to_vec(),
        }
    }

    /// Product name used in the iconset directory and desktop entry.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Executable name referenced by the desktop entry.
    pub fn exec_name(&self) -> &str {
        &self.exec_name
    }

    /// One-line description for the desktop entry's Comment field.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for [`Settings`].
#[derive(Clone, Debug)]
pub struct SettingsBuilder {
    source_image: Option<PathBuf>,
    output_dir: PathBuf,
    style: IconStyle,
    target: Option<Platform>,
    product_name: String,
    exec_name: String,
    description: String,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            source_image: None,
            output_dir: PathBuf::from("assets/icons"),
            style: IconStyle::Default,
            target: None,
            product_name: "TriMouse".into(),
            exec_name: "trimouse".into(),
            description: "Multi-pointer control utility".into(),
        }
    }
}

impl SettingsBuilder {
    /// Sets the source image to resize instead of drawing placeholders.
    pub fn source_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_image = Some(path.into());
        self
    }

    /// Sets the output directory (default `assets/icons`).
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the placeholder style.
    pub fn style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    /// Restricts the run to a single platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.target = Some(platform);
        self
    }

    /// Generates for every supported platform (the default).
    pub fn all_platforms(mut self) -> Self {
        self.target = None;
        self
    }

    /// Overrides the product name stamped into manifests.
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Overrides the executable name referenced by the desktop entry.
    pub fn exec_name(mut self, name: impl Into<String>) -> Self {
        self.exec_name = name.into();
        self
    }

    /// Overrides the desktop entry description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> Settings {
        Settings {
            source_image: self.source_image,
            output_dir: self.output_dir,
            style: self.style,
            target: self.target,
            product_name: self.product_name,
            exec_name: self.exec_name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::builder().build();
        assert_eq!(settings.output_dir(), Path::new("assets/icons"));
        assert_eq!(settings.style(), IconStyle::Default);
        assert_eq!(settings.platforms(), Platform::ALL.to_vec());
        assert!(settings.source_image().is_none());
    }

    #[test]
    fn test_single_platform_selection() {
        let settings = Settings::builder().platform(Platform::Linux).build();
        assert_eq!(settings.platforms(), vec![Platform::Linux]);
    }
}
