//! CLI logic for the Topogram architecture diagram renderer.
//!
//! [`run`] builds the private LLM infrastructure diagram from [`topology`]
//! and renders it with the configuration found by the [`config`] search.

pub mod error_adapter;
pub mod topology;

mod args;
mod config;

pub use args::Args;

use std::path::{Path, PathBuf};

use log::{debug, info};

use topogram::{
    Renderer, TopogramError,
    semantic::{Diagram, OutputFormat},
};

/// Run the Topogram CLI application
///
/// Builds the architecture diagram and renders it, by default to
/// `docs/architecture.png`. Returns the path of the written file.
///
/// # Errors
///
/// Returns `TopogramError` for:
/// - Configuration loading errors
/// - Invalid diagram structure or styles
/// - File I/O errors
/// - Graphviz failures
pub fn run(args: &Args) -> Result<PathBuf, TopogramError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let diagram = topology::architecture()?;
    let (path, format) = output_target(args, &diagram);

    info!(
        output_path = path.display().to_string(),
        format:% = format;
        "Processing diagram"
    );

    Renderer::new(app_config).render_to(&diagram, &path, format)?;

    info!(output_file = path.display().to_string(); "Diagram exported successfully");

    Ok(path)
}

/// Where to write the diagram and in which format.
///
/// An explicit `--format` wins; otherwise the extension of `--output` picks
/// the format, falling back to the diagram's own format. Without `--output`
/// the diagram's filename gets the extension of the chosen format.
fn output_target(args: &Args, diagram: &Diagram) -> (PathBuf, OutputFormat) {
    let output = args.output.as_deref().map(Path::new);

    let format = args
        .format
        .or_else(|| {
            output
                .and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
        })
        .unwrap_or_else(|| diagram.format());

    let path = match output {
        Some(output) => output.to_path_buf(),
        None => diagram.output_path_for(format),
    };

    debug!(path = path.display().to_string(), format:% = format; "Resolved output target");
    (path, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<&str>, format: Option<OutputFormat>) -> Args {
        Args {
            output: output.map(str::to_string),
            format,
            config: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_default_target_is_docs_architecture_png() {
        let diagram = topology::architecture().unwrap();
        let (path, format) = output_target(&args(None, None), &diagram);

        assert_eq!(path, PathBuf::from("docs/architecture.png"));
        assert_eq!(format, OutputFormat::Png);
    }

    #[test]
    fn test_format_flag_changes_default_extension() {
        let diagram = topology::architecture().unwrap();
        let (path, format) = output_target(&args(None, Some(OutputFormat::Svg)), &diagram);

        assert_eq!(path, PathBuf::from("docs/architecture.svg"));
        assert_eq!(format, OutputFormat::Svg);
    }

    #[test]
    fn test_format_inferred_from_output_extension() {
        let diagram = topology::architecture().unwrap();

        let (path, format) = output_target(&args(Some("out/arch.pdf"), None), &diagram);
        assert_eq!(path, PathBuf::from("out/arch.pdf"));
        assert_eq!(format, OutputFormat::Pdf);

        let (_, format) = output_target(&args(Some("out/arch.image"), None), &diagram);
        assert_eq!(format, OutputFormat::Png);

        let (_, format) =
            output_target(&args(Some("out/arch.png"), Some(OutputFormat::Dot)), &diagram);
        assert_eq!(format, OutputFormat::Dot);
    }
}
