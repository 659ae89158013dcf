//! File-backed cache slot.

use crate::{CacheResult, CacheSlot};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Cache slot stored as a single file on disk.
///
/// The on-disk counterpart of the browser's local storage entry: one
/// named location holding one payload. An absent file is an empty slot,
/// not an error.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot backed by the given path.
    ///
    /// The file is not created until the first `store`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSlot { path: path.into() }
    }

    /// The backing path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CacheSlot for FileSlot {
    fn load(&self) -> CacheResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, payload: &str) -> CacheResult<()> {
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_is_empty_slot() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("collegeGraduates.json"));
        assert_eq!(slot.load().unwrap(), None);
    }

    #[test]
    fn test_store_then_load() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("collegeGraduates.json"));
        slot.store(r#"[{"code":"1"}]"#).unwrap();
        assert_eq!(slot.load().unwrap().as_deref(), Some(r#"[{"code":"1"}]"#));
    }

    #[test]
    fn test_store_overwrites_previous_payload() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("slot.json"));
        slot.store("first").unwrap();
        slot.store("second").unwrap();
        assert_eq!(slot.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("missing-dir").join("slot.json"));
        assert!(slot.store("payload").is_err());
    }
}
