//! # Command Layer
//!
//! One submodule per operation. Commands run against a [`RecipeStore`](crate::store::RecipeStore)
//! (or, for `image`/`config`/`paths`, against the data directory) and return a
//! structured [`CmdResult`] rather than strings. They never print, prompt or exit.
//!
//! Command tests use `MemBackend` to stay off the filesystem, except where the
//! filesystem is the point (`image`, `config`).
//!
//! ## Command Modules
//!
//! - [`list`]: List and filter recipes, list categories
//! - [`view`]: Fetch recipes by id
//! - [`create`]: Create a recipe
//! - [`update`]: Overwrite a recipe's editable fields
//! - [`delete`]: Delete recipes
//! - [`comments`]: Add and delete comments
//! - [`image`]: Copy an image into the images directory
//! - [`config`]: Show and change configuration
//! - [`paths`]: Report where data lives

use crate::config::RecipeConfig;
use crate::model::{Comment, Recipe};
use serde::Serialize;
use std::path::PathBuf;

pub mod comments;
pub mod config;
pub mod create;
pub mod delete;
pub mod image;
pub mod list;
pub mod paths;
pub mod update;
pub mod view;

/// Locations derived from the data directory and configuration.
#[derive(Debug, Clone)]
pub struct RecipePaths {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
    pub images_dir: PathBuf,
}

impl RecipePaths {
    pub fn new(data_dir: PathBuf, config: &RecipeConfig) -> Self {
        Self {
            data_file: config.data_file_in(&data_dir),
            images_dir: config.images_dir_in(&data_dir),
            data_dir,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub recipes: Vec<Recipe>,
    pub comments: Vec<Comment>,
    pub categories: Vec<String>,
    pub image_urls: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub config: Option<RecipeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }
}
