//! # Configuration
//!
//! Stored as `config.json` inside the data directory. Every field has a default,
//! so a missing file (or a file naming only some keys) is fine.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `recipes.json` | Backing document, relative to the data dir |
//! | `images-dir` | `images` | Where uploaded images are copied |
//! | `max-image-bytes` | `10485760` | Upload size limit (10 MiB) |

use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "recipes.json";
const DEFAULT_IMAGES_DIR: &str = "images";
const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

pub const CONFIG_KEYS: [&str; 3] = ["data-file", "images-dir", "max-image-bytes"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RecipeConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_images_dir() -> String {
    DEFAULT_IMAGES_DIR.to_string()
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            images_dir: default_images_dir(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(RecipeError::Io)?;
        Ok(())
    }

    pub fn data_file_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn images_dir_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.images_dir)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "images-dir" => Some(self.images_dir.clone()),
            "max-image-bytes" => Some(self.max_image_bytes.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "data-file" | "images-dir" if value.is_empty() => {
                Err(format!("{} cannot be empty", key))
            }
            "data-file" => {
                self.data_file = value.to_string();
                Ok(())
            }
            "images-dir" => {
                self.images_dir = value.to_string();
                Ok(())
            }
            "max-image-bytes" => {
                self.max_image_bytes = value
                    .parse()
                    .map_err(|_| format!("Invalid byte count: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
