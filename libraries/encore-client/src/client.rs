//! Main Encore backend client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::playlists::PlaylistsClient;
use crate::songs::SongsClient;
use crate::types::{ApiFailure, ClientConfig};
use crate::users::UsersClient;
use encore_core::validation::validate_registration;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// HTTP plumbing shared by the client and its sub-clients.
///
/// Cheap to clone; every clone sees token changes made through any other.
#[derive(Clone)]
pub(crate) struct Api {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl Api {
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path relative to the base URL
    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.read().await.url, path)
    }

    pub(crate) async fn base_url(&self) -> String {
        self.config.read().await.url.clone()
    }

    async fn token(&self) -> Result<String> {
        self.config
            .read()
            .await
            .token
            .clone()
            .ok_or(ClientError::AuthRequired)
    }

    /// Authenticated GET returning a JSON body
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path).await;
        debug!(url = %url, "GET");

        let request = self.http.get(&url).query(query);
        self.send_authorized(request, path).await
    }

    /// Authenticated PATCH without a body returning a JSON body
    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::PATCH, path).await;
        self.send_authorized(request, path).await
    }

    /// Authenticated POST without a body
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::POST, path).await;
        self.send_authorized(request, path).await
    }

    /// Authenticated request with a JSON body
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, path).await.json(body);
        self.send_authorized(request, path).await
    }

    /// Authenticated DELETE returning a JSON body
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::DELETE, path).await;
        self.send_authorized(request, path).await
    }

    /// Authenticated multipart upload
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let request = self.request(method, path).await.multipart(form);
        self.send_authorized(request, path).await
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path).await;
        debug!(url = %url, method = %method, "Request");
        self.http.request(method, &url)
    }

    async fn send_authorized<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let token = self.token().await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        parse_response(response, what).await
    }

    pub(crate) async fn set_token(&self, token: Option<String>) {
        self.config.write().await.token = token;
    }
}

/// Decode a backend response
///
/// 2xx bodies are parsed as `T`. 401/403 mean the token is missing or
/// rejected. Any other status is reported with the backend's `msg` when the
/// body carries one.
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else if status.as_u16() == 401 || status.as_u16() == 403 {
        Err(ClientError::AuthRequired)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiFailure>(&error_text)
            .map(|failure| failure.msg)
            .unwrap_or(error_text);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Main client for the Encore backend.
///
/// Handles sign-in and hands out sub-clients for songs, users and playlists.
/// Sub-clients share the token with the client they came from.
///
/// # Example
///
/// ```ignore
/// use encore_client::{ClientConfig, EncoreClient};
///
/// let client = EncoreClient::new(ClientConfig::new("http://localhost:8081"))?;
/// client.login("ada", "secret").await?;
///
/// let top = client.songs().top_listened(5).await?;
/// println!("{} songs", top.len());
/// ```
#[derive(Clone)]
pub struct EncoreClient {
    api: Api,
}

impl EncoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Encore/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            api: Api {
                http,
                config: Arc::new(RwLock::new(ClientConfig {
                    url,
                    token: config.token,
                })),
            },
        })
    }

    /// Get the backend URL.
    pub async fn url(&self) -> String {
        self.api.base_url().await
    }

    /// Check if the client has a token.
    pub async fn is_authenticated(&self) -> bool {
        self.api.config.read().await.token.is_some()
    }

    /// Sign in; the returned token is stored for subsequent requests.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<String> {
        let url = self.url().await;
        let token = AuthClient::new(self.api.http(), &url)
            .login(username_or_email, password)
            .await?;

        self.api.set_token(Some(token.clone())).await;
        Ok(token)
    }

    /// Create an account; the backend emails a confirmation code.
    ///
    /// Fields are checked locally first, so a malformed request never
    /// reaches the backend.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        validate_registration(username, email, password)?;

        let url = self.url().await;
        AuthClient::new(self.api.http(), &url)
            .register(username, email, password)
            .await
    }

    /// Activate an account with the emailed code.
    pub async fn confirm_registration(&self, username_or_email: &str, otp: &str) -> Result<String> {
        let url = self.url().await;
        AuthClient::new(self.api.http(), &url)
            .confirm(username_or_email, otp)
            .await
    }

    /// Set the token directly (e.g., from stored credentials).
    pub async fn set_token(&self, token: impl Into<String>) {
        self.api.set_token(Some(token.into())).await;
    }

    /// Get the current token.
    pub async fn token(&self) -> Option<String> {
        self.api.config.read().await.token.clone()
    }

    /// Clear the stored token.
    pub async fn logout(&self) {
        self.api.set_token(None).await;
        info!("Logged out");
    }

    /// Song catalogue operations.
    pub fn songs(&self) -> SongsClient {
        SongsClient::new(self.api.clone())
    }

    /// Operations on behalf of the signed-in user.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.api.clone())
    }

    /// Curated playlist browsing.
    pub fn playlists(&self) -> PlaylistsClient {
        PlaylistsClient::new(self.api.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(EncoreClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(EncoreClient::new(ClientConfig::new("http://localhost:8081/")).is_ok());

        assert!(EncoreClient::new(ClientConfig::new("")).is_err());
        assert!(EncoreClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(EncoreClient::new(ClientConfig::new("ftp://example.com")).is_err());
        assert!(EncoreClient::new(ClientConfig::new("http://")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            EncoreClient::new(ClientConfig::new("https://example.com/")).expect("valid url");

        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "https://example.com");
    }
}
