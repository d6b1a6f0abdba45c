//! Flat text file backend
//!
//! One record per line. File handles never outlive a single call. Bytes
//! that are not valid UTF-8 are decoded lossily so one bad line never hides
//! the rest of the file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use tracing::debug;

use super::RecordStore;
use crate::{Result, SereneError};

/// Record store backed by a line-delimited text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given file. Nothing is touched on disk until
    /// the first load or append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn unavailable(&self, source: std::io::Error) -> SereneError {
        SereneError::StoreUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Option<Vec<String>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store does not exist yet");
                return Ok(None);
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let mut reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| self.unavailable(e))?;
            if read == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            records.push(String::from_utf8_lossy(&buf).into_owned());
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(Some(records))
    }

    fn append(&self, record: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        writeln!(file, "{}", record).map_err(|e| self.unavailable(e))?;

        debug!(path = %self.path.display(), "appended record");
        Ok(())
    }
}
