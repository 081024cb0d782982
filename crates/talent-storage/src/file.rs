//! JSON-file key-value store, the on-disk analogue of browser local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use talent_core::error::AppError;
use talent_core::result::AppResult;
use talent_core::traits::KeyValueStore;

/// Store persisted as a flat JSON object.
///
/// Every call goes to disk: `get` reads the file, `set` and `remove` reload it,
/// apply one key change and write it back through a temp file and a rename.
/// Other processes sharing the file see each other's writes, and a write to
/// one key never restores another key from an old snapshot.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        };
        let entries = store.load()?;

        debug!(path = %store.path.display(), keys = entries.len(), "Opened session store");

        Ok(store)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AppResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!(
                    "Session store '{}' is corrupt: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| AppError::storage("Session store lock poisoned"))
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self
            .path
            .with_extension(format!("json.{}.tmp", std::process::id()));
        std::fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock()?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock()?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("ti_access_token", "abc").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("ti_access_token").unwrap().as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        store.remove("anything").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert_eq!(err.kind, talent_core::error::ErrorKind::Storage);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_clear_from_other_handle_is_not_undone_by_later_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let chat = FileStore::open(&path).unwrap();
        let cli = FileStore::open(&path).unwrap();

        chat.set("ti_access_token", "acc").unwrap();
        chat.set("ti_refresh_token", "ref").unwrap();
        cli.remove("ti_access_token").unwrap();
        cli.remove("ti_refresh_token").unwrap();
        chat.set("ti_chat_draft:u:r", "hello").unwrap();

        let fresh = FileStore::open(&path).unwrap();
        assert_eq!(fresh.get("ti_access_token").unwrap(), None);
        assert_eq!(fresh.get("ti_refresh_token").unwrap(), None);
        assert_eq!(
            fresh.get("ti_chat_draft:u:r").unwrap().as_deref(),
            Some("hello")
        );
        assert_eq!(chat.get("ti_access_token").unwrap(), None);
    }

    #[test]
    fn test_sees_writes_from_other_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let reader = FileStore::open(&path).unwrap();
        let writer = FileStore::open(&path).unwrap();

        writer.set("ti_access_token", "fresh").unwrap();
        assert_eq!(
            reader.get("ti_access_token").unwrap().as_deref(),
            Some("fresh")
        );
    }
}
