//! The contact directory: the keyed record collection plus its persistence.
//!
//! A [`Directory`] owns every [`ContactRecord`] and the single backing file
//! they are serialized to. Every add/remove goes through a synchronous
//! full-file rewrite, so durable state trails memory by at most the one
//! mutation in flight when a crash hits. Single-threaded use only; there is
//! no file locking.

use crate::error::{NotFoundError, StorageError, StorageResult};
use crate::models::ContactRecord;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors a directory mutation can surface: the referenced record may be
/// missing, or the rewrite of the backing file may fail.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The full contact collection, keyed by name.
///
/// Keys are unique and case-sensitive. Iteration and search follow key
/// insertion order, which the save/load round trip preserves: the backing
/// file is a JSON array of records written in that order.
#[derive(Debug)]
pub struct Directory {
    path: PathBuf,
    keys: Vec<String>,
    records: HashMap<String, ContactRecord>,
}

impl Directory {
    /// Load a directory from its backing file.
    ///
    /// A missing file is not an error; it yields an empty directory that
    /// will create the file on first persist. Any other read failure, or a
    /// file that does not deserialize, is a [`StorageError`].
    pub fn load(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let mut directory = Self {
            path,
            keys: Vec::new(),
            records: HashMap::new(),
        };

        if !directory.path.exists() {
            debug!(path = %directory.path.display(), "backing file absent, starting empty");
            return Ok(directory);
        }

        let content = fs::read_to_string(&directory.path)?;
        let stored: Vec<ContactRecord> = serde_json::from_str(&content)?;
        for record in stored {
            directory.insert_in_memory(record);
        }
        debug!(
            path = %directory.path.display(),
            records = directory.len(),
            "directory loaded"
        );
        Ok(directory)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Insert or overwrite a record under its name key, then persist.
    ///
    /// The in-memory insert always takes effect, even when the subsequent
    /// persist fails. Overwriting an existing key keeps its original
    /// insertion position.
    pub fn add_record(&mut self, record: ContactRecord) -> StorageResult<()> {
        self.insert_in_memory(record);
        self.persist()
    }

    /// Remove the record stored under `name`, then persist.
    ///
    /// # Errors
    ///
    /// `NotFoundError::Record` if no record has that name; `StorageError`
    /// if the rewrite fails.
    pub fn remove_record(&mut self, name: &str) -> DirectoryResult<()> {
        if self.records.remove(name).is_none() {
            return Err(NotFoundError::Record(name.to_string()).into());
        }
        self.keys.retain(|k| k != name);
        self.persist()?;
        Ok(())
    }

    /// Exact-key lookup. No normalization is applied to `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Mutable exact-key lookup, for per-record phone mutations.
    ///
    /// Callers that mutate the record are expected to follow up with
    /// [`Directory::persist`].
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Case-insensitive substring search over each record's rendered text.
    ///
    /// Matching against [`ContactRecord::render`] means the query hits both
    /// names and phone digits. The empty query matches every record.
    /// Results are independent clones in iteration order, not live views.
    pub fn search(&self, query: &str) -> Vec<ContactRecord> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|record| record.render().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Iterate records in key-insertion order.
    ///
    /// Each call snapshots the key list at that moment, so the pass is
    /// restartable and independent of later snapshots.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            directory: self,
            keys: self.keys.clone(),
            index: 0,
        }
    }

    /// Rewrite the backing file with the complete current record set.
    ///
    /// Full overwrite, no append, no versioning. The parent directory is
    /// created on first use.
    pub fn persist(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let ordered: Vec<&ContactRecord> = self
            .keys
            .iter()
            .filter_map(|k| self.records.get(k))
            .collect();
        let content = serde_json::to_string_pretty(&ordered)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), records = ordered.len(), "directory persisted");
        Ok(())
    }

    fn insert_in_memory(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.keys.push(key);
        }
    }
}

/// Restartable in-order iterator over a directory's records.
///
/// Holds its own copy of the key list, taken when iteration began.
pub struct Iter<'a> {
    directory: &'a Directory,
    keys: Vec<String>,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContactRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.keys.len() {
            let key = &self.keys[self.index];
            self.index += 1;
            if let Some(record) = self.directory.records.get(key) {
                return Some(record);
            }
        }
        None
    }
}
