//! Data models module
//!
//! Record types for the credential store and the mood journal, along with
//! the single-line text encoding each store uses.

pub mod credential;
pub mod mood;

// Re-export commonly used types
pub use credential::Credential;
pub use mood::{MoodEntry, TIMESTAMP_FORMAT};
