//! Encore Client
//!
//! HTTP client library for the Encore streaming backend.
//!
//! # Features
//!
//! - **Authentication**: Login, registration and confirmation
//! - **Songs**: Random, top, search, mood search, stream URLs
//! - **Users**: Like/unlike, liked songs, profile
//! - **Playlists**: Curated playlist browsing
//! - **Likes**: Broadcast notifications for successful like changes
//! - **Stories**: Generative-text client for song stories
//!
//! The sub-clients implement the collaborator traits of `encore-core`
//! (`SongCatalog`, `LikeService`, `StoryGenerator`) so they can be handed to
//! the playback controller directly.
//!
//! # Example
//!
//! ```ignore
//! use encore_client::{ClientConfig, EncoreClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EncoreClient::new(ClientConfig::new("http://localhost:8081"))?;
//!
//!     // Login
//!     client.login("ada", "secret").await?;
//!
//!     // Browse
//!     let songs = client.songs().random(20).await?;
//!     println!("Found {} songs", songs.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod gemini;
mod likes;
mod playlists;
mod songs;
mod types;
mod users;

// Re-export main types
pub use client::EncoreClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, GeminiRequest, GeminiResponse};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL};
pub use likes::LikeNotifier;
pub use playlists::PlaylistsClient;
pub use songs::SongsClient;
pub use users::UsersClient;
