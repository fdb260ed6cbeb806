/// Server-rendered page tests
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_string, fixtures, TestApp};
use tower::util::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .uri("/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const ADA_FORM: &str = "name=Ada+Lovelace&username=ada&email=ada%40example.com\
&phone=555-0100&website=ada.dev&street=1+Engine+Way&suite=2&city=London\
&zipcode=N1&lat=51.5&lng=-0.12&companyName=Analytical+Engines\
&catchPhrase=Poetical+science&bs=compute+notes";

async fn page(app: &TestApp, uri: &str) -> (StatusCode, String) {
    let response = app.router.clone().oneshot(get(uri)).await.unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = TestApp::with_users(10);

    let (status, html) = page(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>UserHub - User Management</title>"));
    assert!(html.contains("Welcome to UserHub"));
    assert!(html.contains(r#"<span class="stat-value">10</span>"#));
    assert!(html.contains(r#"<span class="stat-value">7</span>"#));
    assert!(html.contains(r#"<span class="stat-value">1</span>"#));
}

#[tokio::test]
async fn test_dashboard_without_document_shows_zeroes() {
    let app = TestApp::without_document();

    let (status, html) = page(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"<span class="stat-value">0</span>"#).count(), 3);
}

#[tokio::test]
async fn test_users_page_lists_everyone() {
    let app = TestApp::with_users(3);

    let (status, html) = page(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("User Management"));
    assert!(html.contains(r#"placeholder="Search users...""#));
    assert!(html.contains(r#"href="/users/new""#));
    for id in 1..=3 {
        assert!(html.contains(&format!(r#"href="/users/{}""#, id)));
    }
}

#[tokio::test]
async fn test_users_page_search_by_company() {
    let app = TestApp::with_users(6);

    // Users 1 and 4 work at COMPANIES[1]
    let (_, html) = page(&app, "/users?q=deckow").await;

    assert!(html.contains(r#"href="/users/1""#));
    assert!(html.contains(r#"href="/users/4""#));
    assert!(!html.contains(r#"href="/users/2""#));
    assert!(html.contains(r#"value="deckow""#));
    assert!(html.contains(fixtures::COMPANIES[1]));
}

#[tokio::test]
async fn test_users_page_search_by_email() {
    let app = TestApp::with_users(3);

    let (_, html) = page(&app, "/users?q=USER2%40EXAMPLE").await;

    assert!(html.contains(r#"href="/users/2""#));
    assert!(!html.contains(r#"href="/users/1""#));
    assert!(!html.contains(r#"href="/users/3""#));
}

#[tokio::test]
async fn test_users_page_empty_states() {
    let empty = TestApp::with_users(0);
    let (_, html) = page(&empty, "/users").await;
    assert!(html.contains("No users found"));
    assert!(html.contains("Get started by creating your first user"));

    let app = TestApp::with_users(3);
    let (_, html) = page(&app, "/users?q=zzz").await;
    assert!(html.contains("No matching users found"));
    assert!(html.contains("Try adjusting your search terms"));
}

#[tokio::test]
async fn test_users_page_notice_banners() {
    let app = TestApp::with_users(1);

    let (_, html) = page(&app, "/users?notice=created").await;
    assert!(html.contains("User created successfully!"));
    assert!(html.contains(r#"class="notification notification-success""#));
    assert!(html.contains(r#"data-dismiss-after-ms="5000""#));

    let (_, html) = page(&app, "/users?notice=create_failed").await;
    assert!(html.contains("Failed to create user"));
    assert!(html.contains(r#"class="notification notification-error""#));

    let (_, html) = page(&app, "/users?notice=whatever").await;
    assert!(!html.contains(r#"class="notification "#));
}

#[tokio::test]
async fn test_users_page_load_failure_banner() {
    let app = TestApp::with_document("not json at all");

    let (status, html) = page(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Failed to load users"));
    assert!(html.contains(r#"class="notification notification-error""#));
    assert!(html.contains("No users found"));
}

#[tokio::test]
async fn test_new_user_form() {
    let app = TestApp::with_users(0);

    let (status, html) = page(&app, "/users/new").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Create New User"));
    assert!(html.contains(r#"<form method="post" action="/users">"#));
    assert!(html.contains(r#"name="companyName""#));
    assert!(html.contains(r#"name="catchPhrase""#));
}

#[tokio::test]
async fn test_submit_form_appends_and_redirects() {
    let app = TestApp::with_users(10);

    let response = app.router.clone().oneshot(post_form(ADA_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/users?notice=created"
    );

    let users: serde_json::Value = serde_json::from_str(&app.document()).unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 11);
    let ada = &users[10];
    assert_eq!(ada["id"], 11);
    assert_eq!(ada["name"], "Ada Lovelace");
    assert_eq!(ada["email"], "ada@example.com");
    assert_eq!(ada["address"]["geo"]["lat"], "51.5");
    assert_eq!(ada["company"]["name"], "Analytical Engines");
    assert_eq!(ada["company"]["catchPhrase"], "Poetical science");

    let (_, html) = page(&app, "/users?q=analytical").await;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains(r#"href="/users/11""#));
}

#[tokio::test]
async fn test_submit_form_failure_redirects_with_error() {
    let app = TestApp::without_document();

    let response = app.router.clone().oneshot(post_form(ADA_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/users?notice=create_failed"
    );
    assert!(!app.users_file.exists());
}

#[tokio::test]
async fn test_user_detail_page() {
    let app = TestApp::with_users(3);

    let (status, html) = page(&app, "/users/2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>User 2</h2>"));
    assert!(html.contains("user2@example.com"));
    assert!(html.contains("Gwenborough"));
    assert!(html.contains("-37.3159, 81.1496"));
    assert!(html.contains("Multi-layered client-server neural-net"));
}

#[tokio::test]
async fn test_user_detail_not_found() {
    let app = TestApp::with_users(3);

    let (status, html) = page(&app, "/users/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("User not found"));

    let (status, _) = page(&app, "/users/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_escape_stored_text() {
    let records = serde_json::json!([{
        "id": 1,
        "name": "<img src=x onerror=alert(1)>",
        "email": "x@example.com",
        "company": { "name": "Tom & Jerry" }
    }]);
    let app = TestApp::with_document(&records.to_string());

    let (_, html) = page(&app, "/users").await;
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("Tom &amp; Jerry"));

    let (_, html) = page(&app, "/users/1").await;
    assert!(!html.contains("<img src=x"));
}
