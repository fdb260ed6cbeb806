/// API route modules
pub mod health;
pub mod stats;
pub mod users;
