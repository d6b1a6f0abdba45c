//! Credential store
//!
//! Validates and registers username/password pairs against a record store.
//! Uniqueness of usernames is checked by a linear scan at registration time.

use tracing::{debug, info, warn};

use crate::models::Credential;
use crate::store::RecordStore;
use crate::Result;

/// Username/password registry over a line-oriented store
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: RecordStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff some record equals `username,password` exactly.
    ///
    /// A store that does not exist yet holds no records, so every attempt
    /// fails without a separate error.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let expected = Credential::new(username, password).to_record();
        let records = self.store.load_all()?.unwrap_or_default();
        let found = records.iter().any(|record| *record == expected);

        if found {
            info!(username, "login succeeded");
        } else {
            warn!(username, "login failed");
        }
        Ok(found)
    }

    /// Register a new pair. Returns `false` and leaves the store untouched
    /// when the username is already taken.
    pub fn register(&self, username: &str, password: &str) -> Result<bool> {
        let records = self.store.load_all()?.unwrap_or_default();
        if records
            .iter()
            .any(|record| Credential::username_of(record) == username)
        {
            debug!(username, "registration rejected, username exists");
            return Ok(false);
        }

        self.store
            .append(&Credential::new(username, password).to_record())?;
        info!(username, "registered new user");
        Ok(true)
    }
}
