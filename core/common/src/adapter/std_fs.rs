//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents)
            .map_err(|e| Error::io_msg(format!("Failed to write '{}': {}", path.display(), e)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let fs = StdFileSystem;
        fs.write(&path, "hello").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_metadata_distinguishes_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let meta = fs.metadata(dir.path()).unwrap();
        assert!(meta.is_dir());
        assert!(!meta.is_file());

        let path = dir.path().join("f.txt");
        fs.write(&path, "x").unwrap();
        let meta = fs.metadata(&path).unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.len(), 1);
    }

    #[test]
    fn test_exists_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        assert!(!fs.exists(&dir.path().join("missing")));
    }
}
