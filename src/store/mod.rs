//! Persistent key-value storage for the preference record.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: The storage port the controller writes through
//! - [`MemoryStore`]: A shared in-process map
//! - [`FileStore`]: A durable JSON file on disk
//! - [`StoreError`]: Errors from storage backends
//!
//! Values are plain strings. The controller only ever writes `"true"` or
//! `"false"` under its configured key, and never deletes it.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key-value store with local-storage semantics.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Creates or overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
