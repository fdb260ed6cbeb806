/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the user document reads cleanly, `degraded` otherwise
    pub status: &'static str,
    pub version: &'static str,
    /// Record count, absent while the document is unreadable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
}

/// GET /api/health
///
/// Always 200: an unreadable document still leaves every page serving (as an
/// empty directory), so it is reported as `degraded` rather than down.
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let users = match app_state.store.all_users().await {
        Ok(users) => Some(users.len()),
        Err(e) => {
            tracing::warn!("Health check could not read users: {}", e);
            None
        }
    };

    Json(HealthResponse {
        status: if users.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        users,
    })
}
