/// HTTP routing
use crate::{api, state::AppState, web};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Path the dashboard fetches the user document from
pub const USERS_DOCUMENT_ROUTE: &str = "/jsonUsersData/users.json";

pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/stats", get(api::stats::get_stats));

    let page_routes = Router::new()
        .route("/", get(web::handlers::dashboard))
        .route(
            "/users",
            get(web::handlers::users_page).post(web::handlers::submit_new_user),
        )
        .route("/users/new", get(web::handlers::new_user_page))
        .route("/users/:id", get(web::handlers::user_detail_page));

    Router::new()
        .nest("/api", api_routes)
        .route(USERS_DOCUMENT_ROUTE, get(api::users::list_users))
        .merge(page_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
