use crate::domain::ports::LineSource;
use crate::utils::error::{AdvisorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads catalog files from the local filesystem, optionally relative to a
/// base directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl LineSource for LocalStorage {
    fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading catalog from {}", full_path.display());

        let data =
            fs::read(&full_path).map_err(|e| AdvisorError::source_unavailable(path, e))?;

        // 無效的 UTF-8 以替代字元解碼，不視為載入失敗
        let content = String::from_utf8_lossy(&data);
        Ok(content.lines().map(str::to_string).collect())
    }
}
