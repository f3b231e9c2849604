use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// File-per-key store under a base directory. Not exclusive across
/// processes; last writer wins.
#[derive(Debug, Clone)]
pub struct DirStore {
    base_path: PathBuf,
}

impl DirStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = DirStore::new(temp_dir.path());

        assert_eq!(store.get("some.key.v1").unwrap(), None);
        store.set("some.key.v1", r#"["a@b.co"]"#).unwrap();
        assert_eq!(
            store.get("some.key.v1").unwrap().as_deref(),
            Some(r#"["a@b.co"]"#)
        );
    }

    #[test]
    fn test_dir_store_creates_base_dir_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("state").join("app");
        let mut store = DirStore::new(&nested);

        store.set("k", "v").unwrap();
        assert!(nested.join("k").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
