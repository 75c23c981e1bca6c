//! Errors returned by the CLI.

use std::io;

use thiserror::Error;

use rollcall::{InvalidInput, RollcallError};

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rollcall(#[from] RollcallError),

    #[error("{} problem(s) in {origin}", .errors.len())]
    Input {
        origin: String,
        src: String,
        errors: Vec<InputError>,
    },
}

impl CliError {
    pub fn new_input_error(
        origin: impl Into<String>,
        src: impl Into<String>,
        errors: Vec<InputError>,
    ) -> Self {
        Self::Input {
            origin: origin.into(),
            src: src.into(),
            errors,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Rollcall(err.into())
    }
}

impl From<InvalidInput> for CliError {
    fn from(err: InvalidInput) -> Self {
        Self::Rollcall(err.into())
    }
}
