//! Command-line argument definitions for the Topogram CLI.
//!
//! Every argument is optional: running `topogram` with no arguments renders
//! the architecture diagram to `docs/architecture.png`.

use clap::Parser;

use topogram::semantic::OutputFormat;

/// Command-line arguments for the architecture diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output file; defaults to `docs/architecture.<format>`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, pdf, dot); inferred from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["topogram"]).unwrap();
        assert!(args.output.is_none());
        assert!(args.format.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "topogram",
            "-o",
            "out/arch.svg",
            "--format",
            "SVG",
            "-c",
            "topogram.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output.as_deref(), Some("out/arch.svg"));
        assert_eq!(args.format, Some(OutputFormat::Svg));
        assert_eq!(args.config.as_deref(), Some("topogram.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["topogram", "-f", "bmp"]).is_err());
    }
}
