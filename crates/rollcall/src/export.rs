//! Export of boards, results and calendars.
//!
//! The [`Exporter`] trait is the presentation boundary: engines hand over
//! typed data and an exporter turns it into an output file. [`svg`] is the
//! only backend.
//!
//! Export operations return [`Error`], which converts into
//! [`RollcallError::Export`](crate::RollcallError::Export) at the crate
//! boundary.

pub mod svg;

use std::path::Path;

use crate::{availability::AvailabilitySession, ranking::Board, ranking::RankedEntry};

/// Abstraction for export backends.
pub trait Exporter {
    /// Writes the board with every slot, its rank badge or its label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_board(&self, board: &Board, path: &Path) -> Result<(), Error>;

    /// Writes the results table, one row per rank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for an empty result list, or [`Error::Io`]
    /// if writing the output fails.
    fn export_results(&self, results: &[RankedEntry], path: &Path) -> Result<(), Error>;

    /// Writes the displayed month of `session` with its best days highlighted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_month(&self, session: &AvailabilitySession, path: &Path) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
