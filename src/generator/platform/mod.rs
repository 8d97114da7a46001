//! Platform icon tables and per-platform emitters.
//!
//! Each target platform carries a static table of icon categories and
//! pixel sizes plus the set of output formats it requires. The tables
//! drive the whole pipeline: every (platform, category, size, format)
//! combination produces exactly one written file.
//!
//! # Required Outputs
//!
//! | Platform | Formats | Manifest fragment |
//! |----------|---------|-------------------|
//! | macOS | PNG, ICNS | `<Product>.iconset/` directory |
//! | Windows | PNG, ICO | `app_icons.rc` resource script |
//! | Linux | PNG, SVG | `<exec>.desktop` entry |
//! | ChromeOS | PNG | `icon_manifest.json` snippet |

pub mod chromeos;
pub mod linux;
pub mod macos;
pub mod windows;

use std::fmt;

/// Supported target platforms.
///
/// Unlike a host-side packager, every platform can be generated from any
/// host; the only host dependency is the optional `iconutil` call for
/// ICNS conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    /// macOS application, menu bar, and dock icons.
    MacOs,
    /// Windows application, taskbar, and desktop icons.
    Windows,
    /// Linux application, desktop, and panel icons.
    Linux,
    /// ChromeOS extension and app icons.
    ChromeOs,
}

impl Platform {
    /// All supported platforms, in generation order.
    pub const ALL: [Platform; 4] = [
        Platform::MacOs,
        Platform::Windows,
        Platform::Linux,
        Platform::ChromeOs,
    ];

    /// Returns the lowercase identifier used in CLI output and paths.
    ///
    /// This is also the name of the per-platform output subdirectory.
    pub fn short_name(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::ChromeOs => "chromeos",
        }
    }

    /// Icon categories and the pixel sizes each one requires.
    pub fn categories(&self) -> &'static [(IconCategory, &'static [u32])] {
        match self {
            Platform::MacOs => &[
                (IconCategory::AppIcon, &[16, 32, 64, 128, 256, 512, 1024]),
                (IconCategory::MenuBar, &[16, 32]),
                (IconCategory::Dock, &[32, 64, 128, 256, 512]),
            ],
            Platform::Windows => &[
                (IconCategory::AppIcon, &[16, 24, 32, 48, 64, 96, 128, 256]),
                (IconCategory::Taskbar, &[16, 24, 32]),
                (IconCategory::Desktop, &[32, 48, 64, 96, 128, 256]),
            ],
            Platform::Linux => &[
                (
                    IconCategory::AppIcon,
                    &[16, 24, 32, 48, 64, 96, 128, 256, 512],
                ),
                (IconCategory::Desktop, &[32, 48, 64, 96, 128, 256]),
                (IconCategory::Panel, &[16, 24, 32]),
            ],
            Platform::ChromeOs => &[
                (IconCategory::Extension, &[16, 32, 48, 128]),
                (IconCategory::AppIcon, &[16, 24, 32, 48, 64, 96, 128, 256]),
            ],
        }
    }

    /// Output formats required by this platform.
    pub fn formats(&self) -> &'static [IconFormat] {
        match self {
            Platform::MacOs => &[IconFormat::Png, IconFormat::Icns],
            Platform::Windows => &[IconFormat::Png, IconFormat::Ico],
            Platform::Linux => &[IconFormat::Png, IconFormat::Svg],
            Platform::ChromeOs => &[IconFormat::Png],
        }
    }

    /// Number of files a full run writes for this platform.
    pub fn file_count(&self) -> usize {
        let sizes: usize = self.categories().iter().map(|(_, sizes)| sizes.len()).sum();
        sizes * self.formats().len()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A row in a platform's size table.
///
/// Categories group the sizes by where the platform shows the icon;
/// several categories can request the same size, in which case the file
/// is simply written again to the same path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IconCategory {
    /// Main application icon.
    AppIcon,
    /// macOS menu bar extra.
    MenuBar,
    /// macOS dock tile.
    Dock,
    /// Windows taskbar.
    Taskbar,
    /// Desktop shortcut.
    Desktop,
    /// Linux panel applet.
    Panel,
    /// ChromeOS extension manifest icon.
    Extension,
}

impl IconCategory {
    /// Returns the snake_case identifier used in CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            IconCategory::AppIcon => "app_icon",
            IconCategory::MenuBar => "menu_bar",
            IconCategory::Dock => "dock",
            IconCategory::Taskbar => "taskbar",
            IconCategory::Desktop => "desktop",
            IconCategory::Panel => "panel",
            IconCategory::Extension => "extension",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output file formats the emitters know how to write.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IconFormat {
    /// Portable Network Graphics, written directly.
    Png,
    /// Windows icon container, written with the `ico` encoder.
    Ico,
    /// macOS icon container, delegated to the external `iconutil`
    /// utility with a PNG fallback.
    Icns,
    /// Templated XML wrapper, not a vector trace of the raster.
    Svg,
}

impl IconFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Ico => "ico",
            IconFormat::Icns => "icns",
            IconFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names() {
        assert_eq!(Platform::MacOs.short_name(), "macos");
        assert_eq!(Platform::ChromeOs.short_name(), "chromeos");
        assert_eq!(IconFormat::Icns.extension(), "icns");
        assert_eq!(IconCategory::MenuBar.name(), "menu_bar");
    }

    #[test]
    fn test_file_counts() {
        // macOS: 7 + 2 + 5 sizes across three categories, two formats each.
        assert_eq!(Platform::MacOs.file_count(), 14 * 2);
        assert_eq!(Platform::Windows.file_count(), 17 * 2);
        assert_eq!(Platform::Linux.file_count(), 18 * 2);
        assert_eq!(Platform::ChromeOs.file_count(), 12);
    }

    #[test]
    fn test_every_platform_has_an_app_icon_row() {
        for platform in Platform::ALL {
            assert!(
                platform
                    .categories()
                    .iter()
                    .any(|(category, sizes)| *category == IconCategory::AppIcon
                        && !sizes.is_empty()),
                "{platform} table is missing app_icon sizes"
            );
        }
    }

    #[test]
    fn test_chromeos_extension_sizes_match_manifest() {
        let (_, sizes) = Platform::ChromeOs.categories()[0];
        assert_eq!(sizes, &[16, 32, 48, 128]);
    }
}
