//! Types for Encore backend and generative-text API requests and responses.

use crate::error::{ClientError, Result};
use encore_core::types::{SearchPage, Track};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to an Encore backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8081")
    pub url: String,
    /// Bearer token (if signed in)
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: Some(token.into()),
        }
    }
}

// =============================================================================
// Envelopes
// =============================================================================

/// Body of a non-2xx backend response.
#[derive(Debug, Deserialize)]
pub struct ApiFailure {
    pub code: i32,
    pub msg: String,
}

/// `{ code, msg, data }` envelope.
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> DataResponse<T> {
    /// Payload of a successful response
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or_else(|| {
            ClientError::ParseError(format!("response without data: {} ({})", self.msg, self.code))
        })
    }
}

/// Paged `{ code, msg, currentPage, totalPage, records, data }` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_page: u32,
    #[serde(default)]
    pub records: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl From<PageResponse<Track>> for SearchPage {
    fn from(page: PageResponse<Track>) -> Self {
        SearchPage {
            current_page: page.current_page,
            total_pages: page.total_page,
            records: page.records,
            tracks: page.data,
        }
    }
}

/// `{ code, msg }` envelope with nothing else of interest.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub code: i32,
    pub msg: String,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Response from the login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub code: i32,
    pub msg: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Request body for account registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for confirming a registration with the emailed code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub username_or_email: String,
    pub otp: String,
}

// =============================================================================
// User Playlist Types
// =============================================================================

/// Request body for creating or renaming a user playlist.
#[derive(Debug, Serialize)]
pub struct UserPlaylistRequest {
    pub title: String,
    pub description: String,
}

// =============================================================================
// Generative-text Types
// =============================================================================

/// Text fragment of a generative-text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// One message made of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Single-prompt request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Generated candidate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response from `generateContent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}
