//! UserHub Storage
//!
//! Flat-file persistence for UserHub user records.
//!
//! All records live in a single JSON document holding a top-level array,
//! written with two-space indentation so the file stays human-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use userhub_core::{NewUser, UserStore};
//! use userhub_storage::JsonUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonUserStore::new("public/jsonUsersData/users.json");
//! store.initialize().await?;
//!
//! let created = store.create_user(NewUser::default()).await?;
//! println!("Created user {}", created.id);
//! # Ok(())
//! # }
//! ```

mod error;
mod json_store;

pub use error::{Result, StorageError};
pub use json_store::JsonUserStore;
