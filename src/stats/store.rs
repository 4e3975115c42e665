use super::sheet::Sheet;
use std::collections::HashMap;
use std::path::PathBuf;

/// The one key the trainer keeps its stats under.
pub const STORAGE_KEY: &str = "poker_training_stats";

/// A keyed blob store for stat sheets.
pub trait Store {
    fn get(&self, key: &str) -> anyhow::Result<Option<Sheet>>;
    fn set(&mut self, key: &str, sheet: &Sheet) -> anyhow::Result<()>;
    /// Put a blank sheet where the saved one was.
    fn clear(&mut self, key: &str) -> anyhow::Result<()> {
        self.set(key, &Sheet::default())
    }
}

/// In-memory store for tests and throwaway sessions. Sheets are held as
/// JSON strings so a round trip exercises the same serialization as the
/// durable stores.
#[derive(Debug, Default)]
pub struct MemStore(HashMap<String, String>);

impl Store for MemStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Sheet>> {
        Ok(self
            .0
            .get(key)
            .map(|json| serde_json::from_str(json))
            .transpose()?)
    }

    fn set(&mut self, key: &str, sheet: &Sheet) -> anyhow::Result<()> {
        self.0.insert(key.to_string(), serde_json::to_string(sheet)?);
        Ok(())
    }
}

/// One JSON file per key under a directory of the caller's choosing.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Sheet>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, sheet: &Sheet) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), serde_json::to_string(sheet)?)?;
        Ok(())
    }
}
