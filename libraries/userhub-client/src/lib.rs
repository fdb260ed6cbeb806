//! UserHub Client
//!
//! HTTP client library for the UserHub read and write APIs.
//!
//! Reads are lenient: [`UserHubClient::get_users`] logs any failure and
//! returns an empty list, the same way the dashboard treats an unreachable
//! document. Writes surface every failure to the caller.
//!
//! # Example
//!
//! ```ignore
//! use userhub_client::{ClientConfig, UserHubClient};
//! use userhub_core::NewUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserHubClient::new(ClientConfig::new("http://localhost:3000"))?;
//!
//!     let users = client.get_users().await;
//!     println!("{} users", users.len());
//!
//!     let created = client.create_user(&NewUser::default()).await?;
//!     println!("Created user {}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ClientConfig, UserHubClient, USERS_DOCUMENT_PATH};
pub use error::{ClientError, Result};
