//! Core data types for the temporal social graph

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamps carry day resolution. Ordering and equality are all the engine
/// needs; formatting and parsing stay at the CLI boundary.
pub type Day = NaiveDate;

/// Recoverable outcomes of lifecycle and query operations.
///
/// These are ordinary caller mistakes (a tear-down racing an external
/// coordinator, a query for someone never added) and are always returned,
/// never panicked on. A failed operation leaves the network unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The ids did not name two distinct members, a duplicate was added, or
    /// an unknown user was queried.
    #[error("operation requires valid, distinct members of the network")]
    InvalidUsers,
    /// A transition dated before the link's latest recorded event.
    #[error("date precedes the link's latest recorded event")]
    InvalidDate,
    /// A negative search bound.
    #[error("search distance must be non-negative")]
    InvalidDistance,
    #[error("link is already active")]
    AlreadyActive,
    #[error("link is already inactive")]
    AlreadyInactive,
    /// Tear-down requested on a link with no recorded history.
    #[error("link has never been activated")]
    NeverActivated,
}

/// A member of the network. Identity is the id; the profile fields are
/// descriptive only and never participate in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Create a user with the given id. Empty ids are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, NetworkError> {
        let id = id.into();
        if id.is_empty() {
            return Err(NetworkError::InvalidUsers);
        }
        Ok(User {
            id,
            first_name: None,
            middle_name: None,
            last_name: None,
            email: None,
            phone: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn with_middle_name(mut self, name: impl Into<String>) -> Self {
        self.middle_name = Some(name.into());
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        let name: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if !name.is_empty() {
            write!(f, " ({})", name.join(" "))?;
        }
        Ok(())
    }
}

/// A user reached by the breadth-first search, with hop distance from the root.
///
/// Equality and hashing deliberately project onto the user alone: the same
/// user can never sit at two distances in one result, so a `HashSet<Friend>`
/// holds at most one record per user. Distance is excluded on purpose, not
/// by oversight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub user: User,
    pub distance: u32,
}

impl Friend {
    pub fn new(user: User, distance: u32) -> Self {
        Friend { user, distance }
    }
}

impl PartialEq for Friend {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl Eq for Friend {}

impl Hash for Friend {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user.hash(state);
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} links away", self.user.id(), self.distance)
    }
}
