//! UserHub Server Library
//!
//! User-management dashboard: JSON read/write APIs over a flat-file store,
//! plus the server-rendered pages that drive them.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod web;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
