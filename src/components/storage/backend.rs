use crate::error::{storage_error, PlannerResult};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A string key-value store in the shape of browser local storage:
/// every value is the JSON text of whatever was saved under the key.
#[async_trait]
pub trait StorageBackend: Send + Sync + 'static {
    /// Raw stored text for a key
    async fn get_item(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Replace the stored text for a key
    async fn set_item(&mut self, key: &str, value: String) -> PlannerResult<()>;

    /// Forget a key; forgetting a missing key is not an error
    async fn remove_item(&mut self, key: &str) -> PlannerResult<()>;
}

/// Backend holding everything in memory, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    async fn set_item(&mut self, key: &str, value: String) -> PlannerResult<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&mut self, key: &str) -> PlannerResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Backend persisting a single JSON object (key -> JSON text) to disk.
/// Every mutation rewrites the file; the in-memory copy only changes once
/// the write went through.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileBackend {
    /// Open the store at `path`, starting empty when the file does not exist yet
    pub async fn open(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref().to_path_buf();

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let items = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content).map_err(|e| {
                storage_error(&format!(
                    "Store file {} is not a JSON object of strings: {}",
                    path.display(),
                    e
                ))
            })?
        };

        debug!("Opened store {} with {} keys", path.display(), items.len());
        Ok(Self { path, items })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, items: &BTreeMap<String, String>) -> PlannerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    async fn set_item(&mut self, key: &str, value: String) -> PlannerResult<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value);

        self.persist(&items).await?;
        self.items = items;
        Ok(())
    }

    async fn remove_item(&mut self, key: &str) -> PlannerResult<()> {
        if !self.items.contains_key(key) {
            return Ok(());
        }

        let mut items = self.items.clone();
        items.remove(key);

        self.persist(&items).await?;
        self.items = items;
        Ok(())
    }
}
