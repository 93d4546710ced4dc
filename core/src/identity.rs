use crate::errors::{ShopError, ShopResult};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Storage key holding the generated user id.
pub const USER_ID_KEY: &str = "moodshop_user_id";

/// Minimal key/value client storage, the local equivalent of browser storage.
pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> ShopResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ShopResult<()>;
}

/// Storage backed by a small TOML table on disk.
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

    fn read_table(&self) -> ShopResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            ShopError::StorageError(format!(
                "Failed to parse storage file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&table)
            .map_err(|e| ShopError::StorageError(format!("Failed to serialize storage: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Volatile storage, one per process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| ShopError::StorageError("memory storage lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| ShopError::StorageError("memory storage lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Anonymous user id, generated once and then read back from client storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Reads the persisted id, generating and writing one if none exists yet.
    pub fn load_or_create(storage: &dyn ClientStorage) -> ShopResult<Self> {
        if let Some(existing) = storage.get(USER_ID_KEY)? {
            if !existing.trim().is_empty() {
                debug!("Using persisted user id {}", existing);
                return Ok(Self(existing));
            }
        }
        let identity = Self::generate();
        storage.set(USER_ID_KEY, identity.as_str())?;
        info!("Generated new user id {}", identity);
        Ok(identity)
    }

    /// `user_` followed by nine lowercase alphanumerics.
    pub fn generate() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("user_{}", &random[..9]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
