/// Shared application state
use std::sync::Arc;
use userhub_core::{User, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Every stored user, or an empty list if the document can't be read.
    ///
    /// A missing or malformed document is logged and treated as empty.
    pub async fn users_or_empty(&self) -> Vec<User> {
        match self.store.all_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to read users, serving empty list: {}", e);
                Vec::new()
            }
        }
    }
}
