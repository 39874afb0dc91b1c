use crate::error::Result;
use crate::model::Recipe;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecipeStore handles the "what" (id assignment, seeding, locking).
pub trait StorageBackend {
    /// Load the backing document.
    /// Returns Ok(None) if no document exists yet.
    /// Returns Err on unreadable or unparsable documents.
    fn load_document(&self) -> Result<Option<Vec<Recipe>>>;

    /// Replace the backing document with the full recipe sequence.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_document(&self, recipes: &[Recipe]) -> Result<()>;

    /// Where the document lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn document_path(&self) -> PathBuf;
}
