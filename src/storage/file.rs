use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::PreferenceStorage;
use crate::error::StorageError;

/// Preferences kept as one flat JSON object on disk.
///
/// ```json
/// { "theme": "dark", "themeColor": "#722ED1" }
/// ```
///
/// The file is read on every access so that several processes sharing the
/// path see each other's writes. A missing file reads as empty. Writes go to a
/// uniquely named sibling temp file that is then persisted over the original,
/// so concurrent writers never share a temp path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(io_err)?;
                parent
            }
            None => Path::new("."),
        };

        let body = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
        temp.write_all(body.as_bytes()).map_err(io_err)?;
        temp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt { .. }) => {
                log::warn!(
                    "discarding corrupt preference file {}",
                    self.path.display()
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut storage = FileStorage::new(&path);

        storage.set("theme", "dark").unwrap();
        assert!(path.exists());
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_keys_written_independently() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("prefs.json"));

        storage.set("theme", "dark").unwrap();
        storage.set("themeColor", "#13C2C2").unwrap();

        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            storage.get("themeColor").unwrap().as_deref(),
            Some("#13C2C2")
        );
    }

    #[test]
    fn test_corrupt_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_concurrent_writers_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let mut storage = FileStorage::new(&path);
                std::thread::spawn(move || {
                    let value = if n % 2 == 0 { "dark" } else { "light" };
                    (0..200)
                        .filter(|_| storage.set("theme", value).is_err())
                        .count()
                })
            })
            .collect();

        let failures: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(failures, 0);

        let stored = FileStorage::new(&path).get("theme").unwrap();
        assert!(matches!(stored.as_deref(), Some("dark") | Some("light")));
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_empty_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "\n").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("theme").unwrap(), None);
    }
}
