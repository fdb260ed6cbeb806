//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{body::Body, http::Response, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use userhub_server::{create_router, state::AppState};
use userhub_storage::JsonUserStore;

/// A router over a scratch user document
pub struct TestApp {
    pub router: Router,
    pub users_file: PathBuf,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Router over a document holding `count` generated users with ids 1..=count
    pub fn with_users(count: u64) -> Self {
        let app = Self::without_document();
        let records: Vec<serde_json::Value> = (1..=count).map(fixtures::user_record).collect();
        std::fs::write(
            &app.users_file,
            serde_json::to_string_pretty(&records).unwrap(),
        )
        .unwrap();
        app
    }

    /// Router over a document with arbitrary contents
    pub fn with_document(contents: &str) -> Self {
        let app = Self::without_document();
        std::fs::write(&app.users_file, contents).unwrap();
        app
    }

    /// Router whose document does not exist
    pub fn without_document() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let users_file = temp_dir.path().join("users.json");
        let store = JsonUserStore::new(&users_file);
        let router = create_router(AppState::new(Arc::new(store)));

        Self {
            router,
            users_file,
            _temp_dir: temp_dir,
        }
    }

    pub fn document(&self) -> String {
        std::fs::read_to_string(&self.users_file).unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Test records
pub mod fixtures {
    pub const COMPANIES: [&str; 3] = ["Romaguera-Crona", "Deckow-Crist", "Keebler LLC"];

    pub fn user_record(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("User {}", id),
            "username": format!("user{}", id),
            "email": format!("user{}@example.com", id),
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031",
            "website": "hildegard.org",
            "company": {
                "name": COMPANIES[(id as usize) % COMPANIES.len()],
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })
    }

    pub fn ada_payload() -> serde_json::Value {
        serde_json::json!({
            "name": "Ada",
            "username": "ada",
            "email": "ada@example.com",
            "address": {
                "street": "1 Engine Way",
                "suite": "2",
                "city": "London",
                "zipcode": "N1",
                "geo": { "lat": "51.5", "lng": "-0.12" }
            },
            "phone": "555-0100",
            "website": "ada.dev",
            "company": {
                "name": "Analytical Engines",
                "catchPhrase": "Poetical science",
                "bs": "compute notes"
            }
        })
    }
}
