use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads files relative to a base directory, usually the config file's folder.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted next to the given file.
    pub fn beside(file: impl AsRef<Path>) -> Self {
        let base = file
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(base)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        // 絕對路徑 join 後會直接取代 base
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_relative_to_base() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("people.csv")).unwrap();
        file.write_all(b"1,Alice,Female,,,").unwrap();

        let storage = LocalStorage::new(dir.path());
        let data = storage.read_file("people.csv").await.unwrap();
        assert_eq!(data, b"1,Alice,Female,,,");
    }

    #[tokio::test]
    async fn test_beside_uses_parent_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("email.htmlt"), "<p>hi</p>").unwrap();

        let storage = LocalStorage::beside(dir.path().join("santa.toml"));
        let data = storage.read_file("email.htmlt").await.unwrap();
        assert_eq!(data, b"<p>hi</p>");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("nope.csv").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::SantaError::IoError(_)));
    }
}
