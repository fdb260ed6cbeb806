/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use userhub_core::{NewUser, User};

/// GET /jsonUsersData/users.json, GET /api/users
/// The full user document; empty when the store can't be read
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    Json(app_state.users_or_empty().await)
}

/// POST /api/users
/// Append a user; the store assigns the id
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(new_user) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let user = app_state
        .store
        .create_user(new_user)
        .await
        .map_err(ServerError::CreateUser)?;

    tracing::info!(id = %user.id, name = %user.name, "Created user");
    Ok(Json(user))
}
