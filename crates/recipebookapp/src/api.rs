//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every recipebook operation, whatever the UI.
//!
//! It dispatches to the command functions and returns structured
//! `Result<CmdResult>` values. Business logic lives in `commands/*.rs`; the API
//! does no printing and no formatting.
//!
//! ## Generic Over StorageBackend
//!
//! `RecipeApi<B: StorageBackend>`:
//! - Production: `RecipeApi<FsBackend>`
//! - Testing: `RecipeApi<MemBackend>`

use crate::commands::{self, CmdResult, RecipePaths};
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use crate::model::{CommentDraft, RecipeDraft};
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::RecipeFilter;
pub use crate::commands::{CmdMessage, MessageLevel};

/// The main API facade for recipebook operations.
pub struct RecipeApi<B: StorageBackend> {
    store: RecipeStore<B>,
    paths: RecipePaths,
    config: RecipeConfig,
}

impl<B: StorageBackend> RecipeApi<B> {
    pub fn new(store: RecipeStore<B>, paths: RecipePaths, config: RecipeConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn list_recipes(&self, filter: &RecipeFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::list::categories(&self.store)
    }

    pub fn view_recipes(&self, ids: &[u32]) -> Result<CmdResult> {
        require_ids(ids)?;
        commands::view::run(&self.store, ids)
    }

    pub fn create_recipe(&self, draft: RecipeDraft) -> Result<CmdResult> {
        commands::create::run(&self.store, draft)
    }

    pub fn update_recipe(&self, id: u32, draft: RecipeDraft) -> Result<CmdResult> {
        commands::update::run(&self.store, id, draft)
    }

    pub fn delete_recipes(&self, ids: &[u32]) -> Result<CmdResult> {
        require_ids(ids)?;
        commands::delete::run(&self.store, ids)
    }

    pub fn add_comment(&self, recipe_id: u32, draft: CommentDraft) -> Result<CmdResult> {
        commands::comments::add(&self.store, recipe_id, draft)
    }

    pub fn delete_comment(&self, recipe_id: u32, comment_id: u32) -> Result<CmdResult> {
        commands::comments::delete(&self.store, recipe_id, comment_id)
    }

    pub fn upload_image(&self, source: &Path) -> Result<CmdResult> {
        commands::image::run(&self.paths, &self.config, source)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.paths)
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }
}

fn require_ids(ids: &[u32]) -> Result<()> {
    if ids.is_empty() {
        return Err(RecipeError::Api("No recipe ids given".into()));
    }
    Ok(())
}
