#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;
    use trimouse_icongen::generator::placeholder_icon;
    use trimouse_icongen::{Error, IconGenerator, IconStyle, Platform, Settings};

    fn generator_for(dir: &Path) -> IconGenerator {
        let settings = Settings::builder().output_dir(dir).build();
        IconGenerator::new(settings).expect("placeholder generator needs no source image")
    }

    #[test]
    fn test_file_counts_match_tables() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());

        for platform in Platform::ALL {
            let files = generator.generate_platform(platform).expect("generate");
            assert_eq!(
                files.len(),
                platform.file_count(),
                "{platform} file count diverged from its size table"
            );
            for file in &files {
                assert!(file.is_file(), "{} was not written", file.display());
            }
        }
    }

    #[test]
    fn test_pngs_have_requested_dimensions() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::ChromeOs)
            .expect("generate");

        let chromeos_dir = dir.path().join("chromeos");
        for (_, sizes) in Platform::ChromeOs.categories() {
            for &size in *sizes {
                let path = chromeos_dir.join(format!("icon_{size}x{size}.png"));
                let img = image::open(&path).expect("decode generated PNG");
                assert_eq!(img.width(), size);
                assert_eq!(img.height(), size);
            }
        }
    }

    #[test]
    fn test_icns_fallback_survives_failed_conversion() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::MacOs)
            .expect("generate");

        // iconutil is absent, or rejects a directory that is not an
        // .iconset; either way the PNG bytes written first must remain.
        let path = dir.path().join("macos/icon_16x16.icns");
        let bytes = fs::read(&path).expect("fallback file present");
        assert!(!bytes.is_empty());
        let img = image::load_from_memory(&bytes).expect("fallback decodes as PNG");
        assert_eq!((img.width(), img.height()), (16, 16));
    }

    #[test]
    fn test_source_image_drives_resizing() {
        let dir = tempdir().expect("tempdir");
        let source_path = dir.path().join("logo.png");
        let source = image::RgbaImage::from_pixel(100, 40, image::Rgba([200, 30, 30, 255]));
        source.save(&source_path).expect("write source image");

        let settings = Settings::builder()
            .source_image(&source_path)
            .output_dir(dir.path().join("icons"))
            .platform(Platform::ChromeOs)
            .build();
        let generator = IconGenerator::new(settings).expect("source decodes");
        assert_eq!(generator.source_dimensions(), Some((100, 40)));
        generator
            .generate_platform(Platform::ChromeOs)
            .expect("generate");

        let img = image::open(dir.path().join("icons/chromeos/icon_128x128.png"))
            .expect("decode resized icon");
        assert_eq!((img.width(), img.height()), (128, 128));
    }

    #[test]
    fn test_missing_source_image_is_fatal() {
        let settings = Settings::builder()
            .source_image("definitely/not/here.png")
            .build();
        let err = IconGenerator::new(settings)
            .err()
            .expect("source load must fail");
        match err {
            Error::SourceImage { path, .. } => {
                assert_eq!(path, Path::new("definitely/not/here.png"));
            }
            other => panic!("expected SourceImage error, got {other}"),
        }
    }

    #[test]
    fn test_chromeos_manifest_lists_extension_sizes() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::ChromeOs)
            .expect("generate");
        generator.write_manifests().expect("manifests");

        let manifest_path = dir.path().join("chromeos/icon_manifest.json");
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(manifest_path).expect("read manifest"))
                .expect("manifest is valid JSON");

        let icons = manifest["icons"].as_object().expect("icons object");
        let mut keys: Vec<&str> = icons.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["128", "16", "32", "48"]);
        assert_eq!(icons["16"], "icon_16x16.png");
        assert_eq!(icons["128"], "icon_128x128.png");
    }

    #[test]
    fn test_desktop_entry_contains_static_fields() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::Linux)
            .expect("generate");
        generator.write_manifests().expect("manifests");

        let entry =
            fs::read_to_string(dir.path().join("linux/trimouse.desktop")).expect("read entry");
        for field in [
            "[Desktop Entry]",
            "Type=Application",
            "Name=TriMouse",
            "Exec=trimouse",
            "Icon=trimouse",
            "Terminal=false",
            "Categories=Utility;Accessibility;",
        ] {
            assert!(entry.contains(field), "desktop entry missing {field:?}");
        }
    }

    #[test]
    fn test_resource_script_references_generated_icons() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::Windows)
            .expect("generate");
        generator.write_manifests().expect("manifests");

        let script =
            fs::read_to_string(dir.path().join("windows/app_icons.rc")).expect("read script");
        for reference in [
            "IDI_APP_ICON ICON \"icon_256x256.ico\"",
            "IDI_APP_ICON_SMALL ICON \"icon_16x16.ico\"",
            "IDI_APP_ICON_MEDIUM ICON \"icon_32x32.ico\"",
            "IDI_APP_ICON_LARGE ICON \"icon_128x128.ico\"",
        ] {
            assert!(script.contains(reference), "resource script missing {reference:?}");
            let ico = reference.split('"').nth(1).expect("quoted path");
            assert!(
                dir.path().join("windows").join(ico).is_file(),
                "{ico} referenced but not generated"
            );
        }
    }

    #[test]
    fn test_iconset_contains_renamed_copies() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::MacOs)
            .expect("generate");
        generator.write_manifests().expect("manifests");

        let iconset = dir.path().join("macos/TriMouse.iconset");
        assert!(iconset.is_dir());
        for name in [
            "icon_16x16.png",
            "icon_16x16@2x.png",
            "icon_32x32@2x.png",
            "icon_256x256@2x.png",
            "icon_512x512@2x.png",
        ] {
            assert!(iconset.join(name).is_file(), "iconset missing {name}");
        }

        // The @2x entry must hold the next size up.
        let retina = image::open(iconset.join("icon_16x16@2x.png")).expect("decode");
        assert_eq!((retina.width(), retina.height()), (32, 32));
    }

    #[test]
    fn test_manifests_cover_only_generated_platforms() {
        let dir = tempdir().expect("tempdir");
        let settings = Settings::builder()
            .output_dir(dir.path())
            .platform(Platform::ChromeOs)
            .build();
        let generator = IconGenerator::new(settings).expect("generator");
        generator
            .generate_platform(Platform::ChromeOs)
            .expect("generate");

        let manifests = generator.write_manifests().expect("manifests");
        assert_eq!(manifests.len(), 1);
        assert!(manifests[0].ends_with("icon_manifest.json"));
    }

    #[test]
    fn test_svg_output_is_templated_xml() {
        let dir = tempdir().expect("tempdir");
        let generator = generator_for(dir.path());
        generator
            .generate_platform(Platform::Linux)
            .expect("generate");

        let svg =
            fs::read_to_string(dir.path().join("linux/icon_48x48.svg")).expect("read SVG");
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"48\""));
        assert!(svg.contains("height=\"48\""));
    }

    #[test]
    fn test_placeholder_determinism_across_generators() {
        for style in [IconStyle::Default, IconStyle::Minimal, IconStyle::Colorful] {
            let a = placeholder_icon(128, style);
            let b = placeholder_icon(128, style);
            assert_eq!(a.as_raw(), b.as_raw(), "{style} rendering not stable");
        }
    }
}
