//! UserHub Core
//!
//! Domain types, traits and pure presentation logic for UserHub.
//!
//! This crate is shared by the storage layer, the HTTP server and the client
//! SDK. It performs no I/O of its own.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `Address`, `Company`, `UserId`
//! - **Storage Seam**: the async `UserStore` trait
//! - **Derived Views**: dashboard statistics, search filtering, form assembly
//! - **Error Handling**: unified `UserHubError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use userhub_core::{filter_users, next_user_id, DashboardStats, NewUser};
//!
//! let mut new_user = NewUser::default();
//! new_user.name = "Ada Lovelace".to_string();
//! new_user.company.name = "Analytical Engines".to_string();
//!
//! let users = vec![new_user.with_id(next_user_id(std::iter::empty()).unwrap())];
//!
//! assert_eq!(filter_users(&users, "engines").len(), 1);
//! assert_eq!(DashboardStats::from_total(users.len()).total_users, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod form;
pub mod search;
pub mod stats;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserHubError};
pub use form::CreateUserForm;
pub use search::{filter_users, matches_query};
pub use stats::DashboardStats;
pub use storage::UserStore;
pub use types::{next_user_id, Address, Company, Geo, NewUser, User, UserId};
