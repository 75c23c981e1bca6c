//! Validated participant input for a ranking session.

use crate::{error::InvalidInput, ranking::pool::validate_count};

/// Longest accepted participant name, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// Who takes part in a ranking session.
///
/// Construction validates everything, so a session built from a
/// `Participants` value never fails on the participant list. The only ways
/// to build one are [`Participants::count`], [`Participants::named`] and
/// [`Participants::with_names`]:
///
/// ```compile_fail
/// # use rollcall::ranking::Participants;
/// let participants = Participants {
///     count: 2,
///     names: Some(vec![String::new(), "x".repeat(50)]),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    count: usize,
    /// One label per slot, in order.
    names: Option<Vec<String>>,
}

impl Participants {
    /// `count` unlabeled participants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ParticipantCount`] outside `2..=30`.
    pub fn count(count: usize) -> Result<Self, InvalidInput> {
        validate_count(count)?;
        Ok(Self { count, names: None })
    }

    /// One participant per name. Names are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for an unsupported number of names, a blank
    /// name, or a name longer than [`MAX_NAME_CHARS`].
    pub fn named<I, S>(names: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();

        validate_count(names.len())?;

        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(InvalidInput::BlankName { position: index + 1 });
            }
            if name.chars().count() > MAX_NAME_CHARS {
                return Err(InvalidInput::NameTooLong {
                    position: index + 1,
                    max: MAX_NAME_CHARS,
                });
            }
        }

        Ok(Self {
            count: names.len(),
            names: Some(names),
        })
    }

    /// `count` participants with an optional name list that must match it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NameCount`] when `names` has a different
    /// length than `count`, plus everything [`Participants::named`] rejects.
    pub fn with_names<S: AsRef<str>>(
        count: usize,
        names: Option<&[S]>,
    ) -> Result<Self, InvalidInput> {
        match names {
            None => Self::count(count),
            Some(names) if names.len() != count => Err(InvalidInput::NameCount {
                expected: count,
                actual: names.len(),
            }),
            Some(names) => Self::named(names),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false: a validated participant list has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels index-aligned with slots, if any.
    pub fn labels(&self) -> Option<&[String]> {
        self.names.as_deref()
    }
}
