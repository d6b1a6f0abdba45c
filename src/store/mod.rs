//! Record storage module
//!
//! A store is a flat, ordered sequence of text records. Services only ever
//! load every record or append one, so the backing medium can be swapped
//! without touching credential or journal logic.

use crate::Result;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Line-oriented record storage
pub trait RecordStore {
    /// Load every record in insertion order.
    ///
    /// Returns `Ok(None)` when the store has never been created, which is
    /// distinct from an existing store with zero records.
    fn load_all(&self) -> Result<Option<Vec<String>>>;

    /// Append a single record, creating the store if needed
    fn append(&self, record: &str) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn load_all(&self) -> Result<Option<Vec<String>>> {
        (**self).load_all()
    }

    fn append(&self, record: &str) -> Result<()> {
        (**self).append(record)
    }
}
