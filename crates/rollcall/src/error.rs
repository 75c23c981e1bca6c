//! Error types for Rollcall operations.
//!
//! [`RollcallError`] is the top-level error returned by the library facade.
//! [`InvalidInput`] describes input rejected at an engine boundary; engines
//! never mutate their state before returning it. Selections that are merely
//! ignored are not errors, see [`crate::ranking::Selection`].

use std::io;

use thiserror::Error;

use crate::user::UserId;

/// The main error type for Rollcall operations.
#[derive(Debug, Error)]
pub enum RollcallError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for RollcallError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

/// Input rejected at an engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("participant count must be between {min} and {max}, got {count}")]
    ParticipantCount { count: usize, min: usize, max: usize },

    #[error("expected {expected} participant names, got {actual}")]
    NameCount { expected: usize, actual: usize },

    #[error("participant name #{position} is blank")]
    BlankName { position: usize },

    #[error("participant name #{position} is longer than {max} characters")]
    NameTooLong { position: usize, max: usize },

    #[error("board {field} must be a finite {expected} number, got {value}")]
    BoardConfig {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("a {width}x{height} board leaves no room inside a margin of {margin}")]
    BoardTooSmall { width: f32, height: f32, margin: f32 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("month must be between 1 and 12, got {month}")]
    Month { month: u32 },

    #[error("year {year} is out of the supported calendar range")]
    Year { year: i32 },

    #[error("`{input}` is not a month, expected YYYY-MM")]
    MonthFormat { input: String },

    #[error("unknown user id {0}")]
    UnknownUser(UserId),

    #[error("user id {0} appears more than once")]
    DuplicateUser(UserId),
}
