//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A malformed input file can contain several mistakes. Each one is rendered
//! as its own diagnostic, pointing at the offending text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use rollcall::{InvalidInput, RollcallError};

use crate::{error::CliError, input::InputError};

/// Adapter for a single malformed input entry.
pub struct DiagnosticAdapter<'a> {
    error: &'a InputError,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(error: &'a InputError, src: &'a str) -> Self {
        Self { error, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("rollcall::input"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.error.span();
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(self.error.label().to_string()),
            span,
        ))))
    }
}

/// Adapter for [`RollcallError`], which carries no source location.
pub struct ErrorAdapter<'a>(pub &'a RollcallError);

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
            RollcallError::Io(_) => "rollcall::io",
            RollcallError::InvalidInput(_) => "rollcall::invalid_input",
            RollcallError::Config(_) => "rollcall::config",
            RollcallError::Export(_) => "rollcall::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RollcallError::InvalidInput(InvalidInput::ParticipantCount { min, max, .. }) => {
                format!("pass between {min} and {max} participants")
            }
            RollcallError::InvalidInput(InvalidInput::NameCount { .. }) => {
                "give exactly one name per participant, or drop --count".to_string()
            }
            RollcallError::InvalidInput(InvalidInput::BoardConfig { field, .. }) => {
                format!("set `{field}` in the [board] section to a finite number")
            }
            RollcallError::InvalidInput(InvalidInput::BoardTooSmall { .. }) => {
                "increase the board size or reduce radius and padding in [board]".to_string()
            }
            RollcallError::InvalidInput(InvalidInput::UnknownUser(_)) => {
                "configure users in the `users` section of the config file".to_string()
            }
            RollcallError::InvalidInput(InvalidInput::MonthFormat { .. }) => {
                "months look like `2025-11`".to_string()
            }
            RollcallError::Config(_) => {
                "check the configuration file passed with --config".to_string()
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

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A malformed input entry with its location.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// Input errors yield one [`Reportable`] per malformed entry; everything
/// else yields a single one.
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Input { src, errors, .. } => errors
            .iter()
            .map(|e| Reportable::Diagnostic(DiagnosticAdapter::new(e, src)))
            .collect(),
        CliError::Rollcall(err) => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
