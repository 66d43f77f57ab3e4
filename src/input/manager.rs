//! Input manager for loading backend record exports

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Loads a JSON array of records from an export file. The raw
    /// file content is cached per path so repeated filter runs over
    /// the same export re-deserialize without re-reading.
    pub async fn load_records<T: DeserializeOwned>(&mut self, path: &Path) -> Result<Vec<T>> {
        let raw = self.read_raw(path).await?;
        let records = serde_json::from_str(&raw)?;
        Ok(records)
    }

    async fn read_raw(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached export for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Reading JSON export: {}", path.display());
            }
            FileType::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        }

        let raw = fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, raw.clone());
        }

        Ok(raw)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ScreenerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
