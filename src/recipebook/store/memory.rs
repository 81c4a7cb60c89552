use super::StorageBackend;
use crate::error::{RecipeError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory backing store for tests.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper to store a raw value, bypassing serialization.
    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RecipeError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecipeDraft;
    use crate::recipe_store::RecipeStore;

    pub struct StoreFixture {
        pub store: RecipeStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecipeStore::open(MemBackend::new()),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = RecipeDraft::new(
                    format!("Recipe {}", i + 1),
                    format!("Ingredients for recipe {}", i + 1),
                    "",
                );
                self.store.save(&draft, None);
            }
            self
        }

        pub fn with_recipe(mut self, title: &str) -> Self {
            self.store.save(&RecipeDraft::titled(title), None);
            self
        }

        pub fn with_trashed_recipe(mut self, title: &str) -> Self {
            self.store.save(&RecipeDraft::titled(title), None);
            if let Some(id) = self.store.active().last().map(|r| r.id.clone()) {
                self.store.delete(&id);
            }
            self
        }
    }
}
