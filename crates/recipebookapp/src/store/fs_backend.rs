use super::backend::StorageBackend;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(RecipeError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("recipes");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_document(&self) -> Result<Option<Vec<Recipe>>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(RecipeError::Io)?;
        if content.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(Some(recipes))
    }

    fn save_document(&self, recipes: &[Recipe]) -> Result<()> {
        let dir = self
            .data_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(recipes).map_err(RecipeError::Serialization)?;

        // Atomic write
        let tmp_file = self.tmp_path(&dir);
        fs::write(&tmp_file, content).map_err(RecipeError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RecipeError::Io(e));
        }

        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        self.data_file.clone()
    }
}
