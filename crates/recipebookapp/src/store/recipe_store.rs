use super::backend::StorageBackend;
use crate::error::{RecipeError, Result};
use crate::model::{seed_drafts, Comment, CommentDraft, Recipe, RecipeDraft};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info, warn};

/// The in-memory catalog guarded by the store's lock.
struct Catalog {
    recipes: Vec<Recipe>,
    next_id: u32,
}

/// The authoritative recipe collection for one process.
///
/// The backend is read exactly once: at construction with [`RecipeStore::open`],
/// or on first use with [`RecipeStore::deferred`]. After that every mutation
/// rewrites the whole document. Each operation holds the catalog lock across
/// both the in-memory change and the write, so concurrent callers are serialized.
pub struct RecipeStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    catalog: OnceLock<Mutex<Catalog>>,
}

impl<B: StorageBackend> RecipeStore<B> {
    /// Load the catalog from `backend` now, seeding it when there is nothing usable.
    pub fn open(backend: B) -> Self {
        let store = Self::deferred(backend);
        store.catalog();
        store
    }

    /// Like [`RecipeStore::open`], but nothing is read or seeded until the
    /// first operation touches the catalog.
    pub fn deferred(backend: B) -> Self {
        Self {
            backend,
            catalog: OnceLock::new(),
        }
    }

    pub fn list(&self) -> Vec<Recipe> {
        self.lock().recipes.clone()
    }

    pub fn get(&self, id: u32) -> Result<Recipe> {
        self.lock()
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RecipeError::RecipeNotFound(id))
    }

    /// Append a recipe under the next id. Fails only once the id space is used up.
    pub fn create(&self, draft: RecipeDraft) -> Result<Recipe> {
        let mut catalog = self.lock();
        let id = catalog.next_id;
        catalog.next_id = id
            .checked_add(1)
            .ok_or_else(|| RecipeError::Store("recipe ids exhausted".to_string()))?;

        let recipe = Recipe::from_draft(id, draft);
        catalog.recipes.push(recipe.clone());
        self.persist(&catalog);
        Ok(recipe)
    }

    /// Overwrite every field of recipe `id` except its id and comments.
    pub fn update(&self, id: u32, draft: RecipeDraft) -> Result<Recipe> {
        let mut catalog = self.lock();
        let recipe = catalog
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecipeError::RecipeNotFound(id))?;
        recipe.apply(draft);
        let updated = recipe.clone();

        self.persist(&catalog);
        Ok(updated)
    }

    pub fn delete(&self, id: u32) -> Result<Recipe> {
        let mut catalog = self.lock();
        let pos = catalog
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or(RecipeError::RecipeNotFound(id))?;
        let removed = catalog.recipes.remove(pos);

        self.persist(&catalog);
        Ok(removed)
    }

    pub fn add_comment(&self, recipe_id: u32, draft: CommentDraft) -> Result<Comment> {
        let mut catalog = self.lock();
        let recipe = catalog
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;

        let comment_id = recipe.next_comment_id().ok_or_else(|| {
            RecipeError::Store(format!("comment ids exhausted on recipe {}", recipe_id))
        })?;
        let comment = Comment::from_draft(comment_id, draft, Utc::now());
        recipe.comments.push(comment.clone());

        self.persist(&catalog);
        Ok(comment)
    }

    pub fn delete_comment(&self, recipe_id: u32, comment_id: u32) -> Result<Comment> {
        let mut catalog = self.lock();
        let recipe = catalog
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;
        let pos = recipe
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(RecipeError::CommentNotFound {
                recipe_id,
                comment_id,
            })?;
        let removed = recipe.comments.remove(pos);

        self.persist(&catalog);
        Ok(removed)
    }

    /// The id the next created recipe will receive.
    pub fn next_id(&self) -> u32 {
        self.lock().next_id
    }

    pub fn len(&self) -> usize {
        self.lock().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().recipes.is_empty()
    }

    pub fn document_path(&self) -> PathBuf {
        self.backend.document_path()
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        // A panic mid-operation never leaves the catalog half-edited: each
        // mutation is a single push/remove/assignment.
        self.catalog().lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn catalog(&self) -> &Mutex<Catalog> {
        self.catalog.get_or_init(|| Mutex::new(self.load()))
    }

    fn load(&self) -> Catalog {
        let path = self.backend.document_path();
        match self.backend.load_document() {
            Ok(Some(recipes)) if !recipes.is_empty() => {
                let max_id = recipes.iter().map(|r| r.id).max().unwrap_or(0);
                match max_id.checked_add(1) {
                    Some(next_id) => {
                        debug!(
                            count = recipes.len(),
                            path = %path.display(),
                            "loaded recipes"
                        );
                        return Catalog { recipes, next_id };
                    }
                    None => {
                        warn!(
                            max_id,
                            path = %path.display(),
                            "recipe ids exhausted, seeding defaults"
                        );
                    }
                }
            }
            Ok(Some(_)) => {
                info!(
                    path = %path.display(),
                    "recipe document is empty, seeding defaults"
                );
            }
            Ok(None) => {
                info!(
                    path = %path.display(),
                    "no recipe document found, seeding defaults"
                );
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "failed to load recipes, seeding defaults"
                );
            }
        }

        // One write per seed recipe, as if each had been created in turn.
        let mut catalog = Catalog {
            recipes: Vec::new(),
            next_id: 1,
        };
        for (id, draft) in (1u32..).zip(seed_drafts()) {
            catalog.recipes.push(Recipe::from_draft(id, draft));
            catalog.next_id = id + 1;
            self.persist(&catalog);
        }
        catalog
    }

    /// Write the whole catalog. Failures are logged and swallowed: memory stays
    /// authoritative and the next successful write brings the document back in line.
    fn persist(&self, catalog: &Catalog) {
        match self.backend.save_document(&catalog.recipes) {
            Ok(()) => debug!(count = catalog.recipes.len(), "saved recipes"),
            Err(e) => warn!(
                error = %e,
                path = %self.backend.document_path().display(),
                "failed to save recipes"
            ),
        }
    }
}
