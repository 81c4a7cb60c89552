//! # Storage Layer
//!
//! The backing store is a plain key-value medium holding UTF-8 JSON text.
//! [`StorageBackend`] is the only thing the rest of the crate knows about it.
//!
//! ## Keys
//!
//! Two entries hold the whole recipe book:
//!
//! - `recipes`: JSON array of the active recipes
//! - `trash`: JSON array of the trashed recipes
//!
//! A missing key is an empty collection, never an error.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: one file per key in the data directory, written atomically.
//! - [`memory::MemBackend`]: in-memory map for tests, can simulate write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── recipes.json     # Active recipes
//! ├── trash.json       # Trashed recipes
//! └── config.json      # RecipeBookConfig
//! ```
//!
//! The two collections are written independently. There is no transaction
//! spanning both keys: a failure between the two writes leaves the in-memory
//! state as the authority until the next successful write.

use crate::error::Result;
use std::fmt;

pub mod fs;
pub mod memory;

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Active,
    Trashed,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Active, Collection::Trashed];

    /// Key under which the collection lives in the backing store.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Active => "recipes",
            Collection::Trashed => "trash",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Abstract interface for the key-value backing store.
///
/// Methods take `&self`; implementations that need mutation use interior
/// mutability. The store is single-threaded.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so a failed write never leaves a truncated value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
