//! UserHub HTTP client.

use crate::error::{ClientError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};
use userhub_core::{DashboardStats, NewUser, User};

/// Path of the user document served by the read API.
pub const USERS_DOCUMENT_PATH: &str = "/jsonUsersData/users.json";

/// Configuration for connecting to a UserHub server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the UserHub read and write APIs.
pub struct UserHubClient {
    http: Client,
    base_url: String,
}

impl UserHubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        let parsed =
            url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("UserHub/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL (no trailing slash).
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every user, falling back to an empty list on any failure.
    ///
    /// The failure is logged; callers treat an empty directory as a normal
    /// state.
    pub async fn get_users(&self) -> Vec<User> {
        match self.try_get_users().await {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, "Error fetching users");
                Vec::new()
            }
        }
    }

    /// Fetch every user, reporting failures.
    pub async fn try_get_users(&self) -> Result<Vec<User>> {
        let url = format!("{}{}", self.base_url, USERS_DOCUMENT_PATH);
        debug!(url = %url, "Fetching users");

        let response = self.http.get(&url).send().await.map_err(connect_error)?;
        let users: Vec<User> = parse_response(response, "users").await?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Create a user; the server assigns the ID.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, name = %new_user.name, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(new_user)
            .send()
            .await
            .map_err(connect_error)?;
        let user: User = parse_response(response, "created user").await?;

        info!(id = %user.id, name = %user.name, "Created user");
        Ok(user)
    }

    /// Fetch the dashboard figures.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let url = format!("{}/api/stats", self.base_url);
        debug!(url = %url, "Fetching stats");

        let response = self.http.get(&url).send().await.map_err(connect_error)?;
        parse_response(response, "stats").await
    }
}

fn connect_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

/// Decode a success body, or turn an error status into `ServerError`.
///
/// Error bodies of the form `{"error": "..."}` contribute their message;
/// anything else is passed through as text.
async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or(body);

    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}
