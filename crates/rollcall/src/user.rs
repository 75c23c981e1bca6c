//! Calendar users and the roster they are looked up in.
//!
//! Users are static reference data loaded from configuration. Nothing in a
//! session mutates them.

use std::{collections::BTreeSet, fmt, slice};

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Identifier of a calendar user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who can mark days as available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    #[serde(default)]
    avatar_ref: String,
}

impl User {
    pub fn new(id: UserId, display_name: impl Into<String>, avatar_ref: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar_ref: avatar_ref.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Reference to the user's avatar image, opaque to Rollcall.
    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    /// First character of the display name, used when no avatar is drawn.
    pub fn initial(&self) -> Option<char> {
        self.display_name.chars().next()
    }
}

/// Ordered collection of known users.
///
/// The default roster holds four placeholder users with ids `0..4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Creates a roster from `users`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::DuplicateUser`] when two users share an id.
    pub fn new(users: Vec<User>) -> Result<Self, InvalidInput> {
        let mut seen = BTreeSet::new();
        if let Some(user) = users.iter().find(|user| !seen.insert(user.id)) {
            return Err(InvalidInput::DuplicateUser(user.id));
        }
        Ok(Self { users })
    }

    /// Looks up a user by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        let users = (0..4)
            .map(|id| {
                User::new(
                    UserId::new(id),
                    format!("User {}", id + 1),
                    format!("avatars/user-{}.png", id + 1),
                )
            })
            .collect();
        Self { users }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a User;
    type IntoIter = slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
