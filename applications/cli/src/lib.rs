//! Encore CLI Library
//!
//! Terminal client for the Encore streaming backend: browsing, likes, user
//! playlists, song stories and queue playback through a simulated player.
//!
//! This library exposes the components for testing purposes.

pub mod commands;
pub mod config;
pub mod container;
pub mod credentials;
pub mod error;
pub mod player;

pub use config::AppConfig;
pub use container::AppContext;
pub use credentials::{CredentialStore, Credentials};
pub use error::{CliError, Result};
pub use player::SimulatedPlayer;
