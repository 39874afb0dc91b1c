use crate::api::RecipeApi;
use crate::commands::RecipePaths;
use crate::config::RecipeConfig;
use crate::store::fs_backend::FsBackend;
use crate::store::RecipeStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "RECIPEBOOK_DATA";

pub struct RecipeContext {
    pub api: RecipeApi<FsBackend>,
    pub config: RecipeConfig,
    pub data_dir: PathBuf,
}

/// Pick the data directory: explicit override, then `RECIPEBOOK_DATA`,
/// then the platform data dir. Falls back to `./.recipebook` when the
/// platform gives us nothing (e.g. no home directory).
pub fn resolve_data_dir(data_override: Option<PathBuf>, cwd: &Path) -> PathBuf {
    if let Some(dir) = data_override {
        return dir;
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".recipebook"))
}

/// Build the API over the file-backed store in `data_dir`.
/// The store loads (or seeds) its document on first use, once per process, so
/// commands that never touch recipes leave the data directory alone.
pub fn initialize(data_dir: PathBuf) -> RecipeContext {
    let config = RecipeConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to read config, using defaults");
        RecipeConfig::default()
    });

    let paths = RecipePaths::new(data_dir.clone(), &config);
    let store = RecipeStore::deferred(FsBackend::new(paths.data_file.clone()));
    let api = RecipeApi::new(store, paths, config.clone());

    RecipeContext {
        api,
        config,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/x/y")), Path::new("/cwd"));
        assert_eq!(dir, PathBuf::from("/x/y"));
    }

    #[test]
    fn test_initialize_seeds_into_data_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().to_path_buf());

        assert_eq!(ctx.api.store().len(), 2);
        assert!(temp.path().join("recipes.json").exists());
    }

    #[test]
    fn test_initialize_honours_configured_data_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"data-file": "book.json"}"#,
        )
        .unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.config.data_file, "book.json");
        assert_eq!(ctx.api.store().len(), 2);
        assert!(temp.path().join("book.json").exists());
        assert!(!temp.path().join("recipes.json").exists());
    }

    #[test]
    fn test_initialize_leaves_document_alone_until_used() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().to_path_buf());

        ctx.api.paths().unwrap();
        assert!(!temp.path().join("recipes.json").exists());
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{{{").unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.config, RecipeConfig::default());
    }
}
