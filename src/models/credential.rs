//! Credential record
//!
//! Stored as `username,password`. Values are kept verbatim: no hashing,
//! trimming or case folding.

use std::fmt;

/// A username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Create a new credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Encode as a store record
    pub fn to_record(&self) -> String {
        format!("{},{}", self.username, self.password)
    }

    /// Username part of a stored record: everything before the first comma,
    /// or the whole record if it has none.
    pub fn username_of(record: &str) -> &str {
        record.split_once(',').map_or(record, |(user, _)| user)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
