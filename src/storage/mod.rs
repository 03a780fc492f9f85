//! Persisted key-value storage for preferences.
//!
//! The theme store reads and writes plain string values under a handful of
//! keys. Any backend that can do that implements [`PreferenceStorage`]:
//!
//! - [`MemoryStorage`]: lives for the process, used in tests and in contexts
//!   without a persistent location
//! - [`FileStorage`]: a single JSON object on disk that survives restarts

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// String-valued key-value storage surviving across sessions.
pub trait PreferenceStorage: Send {
    /// Reads a key. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
