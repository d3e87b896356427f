//! Exporting diagrams to Graphviz.
//!
//! [`dot`] lowers a [`Diagram`](topogram_core::semantic::Diagram) to a DOT
//! graph; [`write_output`] hands that graph to the Graphviz `dot` command
//! (or writes the DOT text itself) at the requested path.

pub mod dot;

use std::{fs, io, path::Path};

use graphviz_rust::{
    cmd::{CommandArg, Format},
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};
use thiserror::Error;

use dot_structures::Graph;
use topogram_core::semantic::OutputFormat;

/// Errors raised while producing the output file.
#[derive(Debug, Error)]
pub enum Error {
    /// The `dot` executable could not be run or exited with an error.
    #[error("Graphviz failed to render `{path}`: {source}")]
    Graphviz { path: String, source: io::Error },

    /// Graphviz reported success but the output file is not there.
    #[error("Graphviz did not write `{0}`")]
    MissingOutput(String),

    #[error("Failed to write `{path}`: {source}")]
    Write { path: String, source: io::Error },
}

/// Write `graph` to `path` in `format`.
///
/// The parent directory of `path` is created when missing. For
/// [`OutputFormat::Dot`] the DOT text is written directly; every other
/// format is rendered by Graphviz.
pub fn write_output(graph: Graph, path: &Path, format: OutputFormat) -> Result<(), Error> {
    let display = path.display().to_string();

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let graphviz_format = match format {
        OutputFormat::Dot => {
            let source = graph.print(&mut PrinterContext::default());
            fs::write(path, source).map_err(|source| Error::Write {
                path: display.clone(),
                source,
            })?;
            info!(path = display; "DOT source written");
            return Ok(());
        }
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
    };

    debug!(path = display, format:% = format; "Invoking Graphviz");
    graphviz_rust::exec(
        graph,
        &mut PrinterContext::default(),
        vec![
            CommandArg::Format(graphviz_format),
            CommandArg::Output(display.clone()),
        ],
    )
    .map_err(|source| Error::Graphviz {
        path: display.clone(),
        source,
    })?;

    if !path.is_file() {
        return Err(Error::MissingOutput(display));
    }

    info!(path = display; "Diagram rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dot_structures::Id;

    fn empty_graph() -> Graph {
        Graph::DiGraph {
            id: Id::Plain("empty".to_string()),
            strict: false,
            stmts: Vec::new(),
        }
    }

    #[test]
    fn test_dot_format_writes_source_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.dot");

        write_output(empty_graph(), &path, OutputFormat::Dot).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("digraph empty"));
    }

    #[test]
    fn test_dot_format_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_output(empty_graph(), &blocker.join("out.dot"), OutputFormat::Dot)
            .unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
    }
}
