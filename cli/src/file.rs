//! Local file handle used as the form's selected file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// A regular file on disk, inspected at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl LocalFile {
    /// Inspect `path`. Contents are read only when the upload starts.
    pub fn open(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(CliError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent in the multipart part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes at selection time.
    pub fn size(&self) -> u64 {
        self.size
    }
}
