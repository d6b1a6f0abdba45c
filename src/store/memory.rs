//! In-memory backend, mostly for tests

use std::cell::RefCell;
use std::rc::Rc;

use super::RecordStore;
use crate::Result;

/// Record store kept in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<Option<Vec<String>>>>,
}

impl MemoryStore {
    /// A store that has never been written to
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds the given records
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = records.into_iter().map(Into::into).collect();
        Self {
            records: Rc::new(RefCell::new(Some(records))),
        }
    }

    /// Snapshot of the current contents
    pub fn records(&self) -> Option<Vec<String>> {
        self.records.borrow().clone()
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Result<Option<Vec<String>>> {
        Ok(self.records())
    }

    fn append(&self, record: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(record.to_string());
        Ok(())
    }
}
