//! Core types for playback management

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the Off → All → One → Off cycle
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Playback status of the current track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing loaded
    #[default]
    Idle,

    /// Stream location resolved, player preparing
    Loading,

    /// The player reported an error
    Failed,

    /// Prepared and either playing or paused
    Ready {
        /// Whether audio is currently playing
        is_playing: bool,
    },
}

impl PlaybackStatus {
    /// Whether the player is prepared
    pub fn is_ready(self) -> bool {
        matches!(self, PlaybackStatus::Ready { .. })
    }

    /// Whether audio is currently playing
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackStatus::Ready { is_playing: true })
    }
}

/// Generated story for the current track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Generated text, or the error message when generation failed
    pub text: String,

    /// Whether a request is in flight
    pub is_loading: bool,
}

/// Configuration for the queue controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// How often the playback position is sampled while ready (default: 500ms)
    pub progress_interval: Duration,

    /// Retry policy for stream location lookups
    pub retry: RetryPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(500),
            retry: RetryPolicy::default(),
        }
    }
}
