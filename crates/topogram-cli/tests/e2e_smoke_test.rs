use std::{fs, path::Path, process::Command};

use tempfile::tempdir;

use topogram::{TopogramError, semantic::OutputFormat};
use topogram_cli::{Args, run};

fn args(output: &Path, format: Option<OutputFormat>) -> Args {
    Args {
        output: Some(output.to_string_lossy().to_string()),
        format,
        config: None,
        log_level: "off".to_string(),
    }
}

/// Whether the Graphviz `dot` executable can be run.
fn graphviz_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .is_ok_and(|output| output.status.success())
}

#[test]
fn e2e_smoke_test_dot_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("docs/architecture.dot");

    let written = run(&args(&output, None)).expect("dot output needs no Graphviz");

    assert_eq!(written, output);
    let source = fs::read_to_string(&output).expect("output file exists");
    assert!(source.starts_with("digraph"));
    assert!(source.contains("Ollama Pod"));
    assert!(source.contains("cluster_"));

    let entries: Vec<_> = fs::read_dir(output.parent().unwrap())
        .unwrap()
        .flatten()
        .collect();
    assert_eq!(entries.len(), 1, "exactly one file is written");
}

#[test]
fn e2e_smoke_test_png_output() {
    if !graphviz_available() {
        eprintln!("Graphviz `dot` not found on PATH, skipping PNG smoke test");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("docs/architecture.png");

    run(&args(&output, Some(OutputFormat::Png))).expect("Graphviz renders the diagram");

    let bytes = fs::read(&output).expect("output file exists");
    assert!(bytes.starts_with(b"\x89PNG"), "output is a PNG image");
}

#[test]
fn e2e_smoke_test_missing_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("architecture.dot");

    let mut args = args(&output, None);
    args.config = Some(
        temp_dir
            .path()
            .join("missing.toml")
            .to_string_lossy()
            .to_string(),
    );

    let err = run(&args).unwrap_err();
    assert!(matches!(err, TopogramError::Config(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_smoke_test_config_applies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        "[style]\nbackground_color = \"#0f172a\"\ndpi = 72\n",
    )
    .unwrap();
    let output = temp_dir.path().join("architecture.dot");

    let mut args = args(&output, Some(OutputFormat::Dot));
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("config is valid");

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("#0f172a"));
    assert!(source.contains("dpi=\"72\""));
    assert!(!source.contains("dpi=\"150\""));
}
