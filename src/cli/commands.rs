//! Command execution: wires parsed arguments into the pipeline.

use crate::cli::args::Args;
use crate::cli::output::OutputManager;
use crate::generator::{IconGenerator, Result, Settings};

/// Runs a full generation pass and returns the process exit code.
pub fn execute(args: Args) -> Result<i32> {
    let output = OutputManager::new(args.verbose, args.quiet);

    let mut builder = Settings::builder()
        .output_dir(args.output_dir.clone())
        .style(args.style.into());
    if let Some(path) = &args.source_image {
        builder = builder.source_image(path.clone());
    }
    if let Some(platform) = args.platform.target() {
        builder = builder.platform(platform);
    }
    let settings = builder.build();

    let generator = IconGenerator::new(settings)?;

    match generator.source_dimensions() {
        Some((width, height)) => {
            output.info(&format!("loaded source image ({width}x{height})"));
        }
        None => {
            output.info(&format!(
                "no source image, drawing {} placeholder icons",
                generator.settings().style()
            ));
        }
    }

    let mut generated = Vec::new();
    for platform in generator.settings().platforms() {
        output.section(platform.short_name());
        let files = generator.generate_platform(platform)?;
        for file in &files {
            output.detail(&format!("wrote {}", file.display()));
        }
        output.success(&format!("{} files", files.len()));
        generated.extend(files);
    }

    output.section("manifests");
    let manifests = generator.write_manifests()?;
    for manifest in &manifests {
        output.indent(&manifest.display().to_string());
    }
    output.success(&format!("{} manifest fragments", manifests.len()));

    output.println("");
    output.success(&format!("Generated {} icon files", generated.len()));
    output.println(&format!(
        "Output directory: {}",
        generator.settings().output_dir().display()
    ));

    Ok(0)
}
