//! Filesystem infrastructure — implements `LocalStore` on `std::fs`.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;

use crate::application::ports::LocalStore;
use crate::domain::AssetError;

/// Production filesystem implementation of `LocalStore`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| AssetError::filesystem(path, e))?;
        Ok(())
    }

    fn list_installed(&self, dir: &Path) -> Vec<String> {
        visible_entries(dir)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AssetError::filesystem(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| AssetError::filesystem(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(AssetError::filesystem(path, e).into()),
        };
        let result = if meta.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        match result {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssetError::filesystem(path, e).into()),
        }
    }

    fn size_of(&self, path: &Path) -> u64 {
        directory_size(path)
    }
}

/// Non-hidden entry names directly under `dir`. Missing or unreadable
/// directories yield nothing.
///
/// Names that are not valid UTF-8 are skipped with a warning: a lossy copy
/// would not round-trip back to the file on disk.
fn visible_entries(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                tracing::warn!(name = ?raw, dir = %dir.display(), "skipping non-UTF-8 entry");
                None
            }
        })
        .filter(|name| !name.starts_with('.'))
        .collect()
}

/// Recursive size of the non-hidden files under `dir`.
///
/// Symlinks are followed. Anything that cannot be stat'ed contributes zero.
#[must_use]
pub fn directory_size(dir: &Path) -> u64 {
    visible_entries(dir)
        .into_iter()
        .map(|name| {
            let path = dir.join(name);
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => meta.len(),
                Ok(meta) if meta.is_dir() => directory_size(&path),
                _ => 0,
            }
        })
        .sum()
}
