//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Backing store for user records
///
/// Records are kept in insertion order. Implementations assign IDs at append
/// time and never update or remove a record.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get every record, in stored order
    ///
    /// # Errors
    /// Returns an error if the backing document cannot be read or parsed
    async fn all_users(&self) -> Result<Vec<User>>;

    /// Append a record, assigning it the next ID
    ///
    /// # Errors
    /// Returns an error if the document cannot be read, parsed or rewritten
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Find a record by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.all_users().await?.into_iter().find(|u| u.id == id))
    }
}
