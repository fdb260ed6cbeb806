/// Page routes
use super::{
    layout::{render_page, NavItem},
    pages, Notice, Notification,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use userhub_core::{filter_users, CreateUserForm, DashboardStats, NewUser, UserId};

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    #[serde(default)]
    pub q: String,
    pub notice: Option<String>,
}

/// GET /
pub async fn dashboard(State(app_state): State<AppState>) -> Html<String> {
    let users = app_state.users_or_empty().await;
    let stats = DashboardStats::from_total(users.len());
    render_page(NavItem::Dashboard, &pages::dashboard(stats))
}

/// GET /users?q=&notice=
/// Directory with search; a read failure shows an empty grid plus an error banner
pub async fn users_page(
    State(app_state): State<AppState>,
    Query(params): Query<UsersQuery>,
) -> Html<String> {
    let mut notification = params
        .notice
        .as_deref()
        .and_then(Notice::parse)
        .map(Notification::from);

    let users = match app_state.store.all_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!("Failed to load users for directory page: {}", e);
            notification = Some(Notice::LoadFailed.into());
            Vec::new()
        }
    };

    let matches = filter_users(&users, &params.q);
    render_page(
        NavItem::Users,
        &pages::users_list(&matches, &params.q, notification.as_ref()),
    )
}

/// GET /users/new
pub async fn new_user_page() -> Html<String> {
    render_page(NavItem::Users, &pages::new_user_form())
}

/// POST /users
/// Assemble the record from the flat form and append it, then redirect back
/// to the directory with the outcome
pub async fn submit_new_user(
    State(app_state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Redirect {
    let notice = match app_state.store.create_user(NewUser::from(form)).await {
        Ok(user) => {
            tracing::info!(id = %user.id, name = %user.name, "Created user from form");
            Notice::Created
        }
        Err(e) => {
            tracing::error!("Create user from form failed: {}", e);
            Notice::CreateFailed
        }
    };

    Redirect::to(&format!("/users?notice={}", notice.as_str()))
}

/// GET /users/:id
pub async fn user_detail_page(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let user = match id.parse::<UserId>() {
        Ok(id) => app_state.store.get_user(id).await.unwrap_or_else(|e| {
            tracing::warn!("Failed to load user {}: {}", id, e);
            None
        }),
        Err(_) => None,
    };

    match user {
        Some(user) => render_page(NavItem::Users, &pages::user_detail(&user)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            render_page(NavItem::Users, &pages::not_found("User not found")),
        )
            .into_response(),
    }
}
