//! Error adapter for converting TopogramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use topogram::TopogramError;

/// Miette view of a [`TopogramError`].
///
/// Topogram errors carry no source spans, so the adapter contributes a stable
/// error code and, where one exists, a hint on how to fix the problem.
pub struct ErrorAdapter<'a>(pub &'a TopogramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TopogramError::Io(_) => "topogram::io",
            TopogramError::Graph(_) => "topogram::graph",
            TopogramError::Style(_) => "topogram::style",
            TopogramError::Config(_) => "topogram::config",
            TopogramError::Render(_) => "topogram::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TopogramError::Render(_) => {
                "install Graphviz and make sure `dot` is on PATH, or use `--format dot`"
            }
            TopogramError::Config(_) => {
                "pass a valid TOML file with `--config`, or remove `topogram/config.toml`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code_of(err: &TopogramError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let cases = [
            (
                TopogramError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
                "topogram::io",
            ),
            (TopogramError::Graph("dangling".into()), "topogram::graph"),
            (TopogramError::Style("bad color".into()), "topogram::style"),
            (TopogramError::Config("bad file".into()), "topogram::config"),
            (TopogramError::Render("no dot".into()), "topogram::render"),
        ];

        for (err, expected) in &cases {
            assert_eq!(code_of(err).as_deref(), Some(*expected));
        }
    }

    #[test]
    fn test_display_matches_error() {
        let err = TopogramError::Graph("edge #3 references undeclared node `x`".into());
        assert_eq!(ErrorAdapter(&err).to_string(), err.to_string());
    }

    #[test]
    fn test_help_only_for_actionable_errors() {
        let render = TopogramError::Render("no dot".into());
        let help = ErrorAdapter(&render).help().map(|h| h.to_string());
        assert!(help.unwrap().contains("Graphviz"));

        let graph = TopogramError::Graph("dangling".into());
        assert!(ErrorAdapter(&graph).help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = TopogramError::Style("invalid color `#zz`".into());
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("topogram::style"));
        assert!(out.contains("invalid color"));
    }
}
