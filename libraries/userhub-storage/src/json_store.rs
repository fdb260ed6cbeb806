/// JSON document store - keeps every user record in one pretty-printed file
use crate::error::{Result, StorageError};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};
use userhub_core::{next_user_id, NewUser, User, UserId, UserStore};

/// User records persisted as a top-level JSON array
///
/// Every append rewrites the whole document. Existing records are carried
/// over as raw JSON, so keys the `User` model doesn't know survive. Appends
/// through one `JsonUserStore` are serialized; separate processes sharing the
/// file can still overwrite each other (last writer wins).
#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create parent directories and an empty document if none exists yet.
    ///
    /// An existing document is left untouched, even if it is malformed.
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }
        }

        if fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?
        {
            return Ok(());
        }

        self.write_all(&[]).await?;
        tracing::info!(path = %self.path.display(), "Created empty user document");
        Ok(())
    }

    /// Read and parse every record
    pub async fn read_all(&self) -> Result<Vec<User>> {
        let contents = self.read_document().await?;
        serde_json::from_str(&contents).map_err(|e| StorageError::parse(&self.path, e))
    }

    /// Append a record with the next free ID and rewrite the document
    pub async fn append(&self, new_user: NewUser) -> Result<User> {
        let _guard = self.write_lock.lock().await;

        let contents = self.read_document().await?;
        let mut records: Vec<Value> =
            serde_json::from_str(&contents).map_err(|e| StorageError::parse(&self.path, e))?;

        let stored_ids = records
            .iter()
            .filter_map(|record| record.get("id").and_then(Value::as_u64))
            .map(UserId::new);
        let id = next_user_id(stored_ids).ok_or_else(|| StorageError::IdsExhausted {
            path: self.path.clone(),
        })?;

        let user = new_user.with_id(id);
        records.push(serde_json::to_value(&user)?);
        self.write_all(&records).await?;

        tracing::debug!(id = %user.id, total = records.len(), "Appended user record");
        Ok(user)
    }

    async fn read_document(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))
    }

    async fn write_all(&self, records: &[Value]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)
            .await
            .map_err(|e| StorageError::io(&self.path, e))
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn all_users(&self) -> userhub_core::Result<Vec<User>> {
        Ok(self.read_all().await?)
    }

    async fn create_user(&self, new_user: NewUser) -> userhub_core::Result<User> {
        Ok(self.append(new_user).await?)
    }
}
