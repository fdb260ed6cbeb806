/// Dashboard statistics API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use userhub_core::DashboardStats;

/// GET /api/stats
/// Dashboard figures derived from the current user count
pub async fn get_stats(State(app_state): State<AppState>) -> Json<DashboardStats> {
    let users = app_state.users_or_empty().await;
    Json(DashboardStats::from_total(users.len()))
}
