use super::backend::StorageBackend;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory storage backend for testing.
///
/// Keeps the document as serialized JSON so that loads and saves go through
/// the same serde path as the filesystem backend. Interior state sits behind
/// a `Mutex` and atomics so the backend can be shared across threads with the store.
#[derive(Default)]
pub struct MemBackend {
    document: Mutex<Option<String>>,
    simulate_write_error: AtomicBool,
    saves: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw document, e.g. to test loading of corrupt data.
    pub fn with_document(raw: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(raw.into())),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Current raw document, if one has been written.
    pub fn document(&self) -> Option<String> {
        self.doc().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn doc(&self) -> MutexGuard<'_, Option<String>> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemBackend {
    fn load_document(&self) -> Result<Option<Vec<Recipe>>> {
        match self.doc().as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(Some(Vec::new())),
            Some(raw) => {
                let recipes = serde_json::from_str(raw).map_err(RecipeError::Serialization)?;
                Ok(Some(recipes))
            }
        }
    }

    fn save_document(&self, recipes: &[Recipe]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(RecipeError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string_pretty(recipes).map_err(RecipeError::Serialization)?;
        *self.doc() = Some(raw);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        PathBuf::from("memory://recipes.json")
    }
}
