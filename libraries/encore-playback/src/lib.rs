//! Encore - Playback
//!
//! Play queue management for a streaming music client.
//!
//! This crate provides:
//! - A pure queue state machine (add, jump, remove, navigation, completion)
//! - Shuffle with the playing track pinned in place
//! - Repeat modes (Off, All, One)
//! - A controller that keeps a media player in step with the queue
//! - Retry with exponential backoff for stream lookups
//!
//! # Architecture
//!
//! [`QueueState`] never performs I/O: every operation returns a
//! [`Transition`] saying whether the current track changed. The
//! [`QueueController`] owns the state, applies transitions atomically and
//! drives a [`MediaPlayer`] through the collaborator traits of
//! `encore-core`. Audio output is supplied by the platform via the
//! [`MediaPlayer`] trait.
//!
//! # Example: Queue transitions
//!
//! ```rust
//! use encore_core::types::{Track, TrackId};
//! use encore_playback::{QueueState, RepeatMode};
//!
//! let tracks: Vec<Track> = (1..=3)
//!     .map(|i| Track::new(TrackId::new(i), format!("Song {i}"), "Artist"))
//!     .collect();
//!
//! let state = QueueState::new().set_queue(tracks).state;
//! assert_eq!(state.current_index(), Some(0));
//!
//! // Wraps around to the last track
//! let back = state.go_to_previous();
//! assert!(back.track_changed);
//! assert_eq!(back.state.current_index(), Some(2));
//!
//! let state = back.state.cycle_repeat_mode().state;
//! assert_eq!(state.repeat_mode(), RepeatMode::All);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use encore_playback::{MediaPlayer, PlayerEvent, PlayerEventSender, Result};
//! use std::time::Duration;
//!
//! struct MyPlayer {
//!     events: PlayerEventSender,
//! }
//!
//! impl MediaPlayer for MyPlayer {
//!     fn set_source(&self, uri: &str) -> Result<()> { Ok(()) }
//!     fn prepare(&self) -> Result<()> {
//!         // Report back once buffering is done
//!         let _ = self.events.send(PlayerEvent::Prepared);
//!         Ok(())
//!     }
//!     fn start(&self) -> Result<()> { Ok(()) }
//!     fn pause(&self) -> Result<()> { Ok(()) }
//!     fn seek(&self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn position(&self) -> Duration { Duration::ZERO }
//!     fn reset(&self) -> Result<()> { Ok(()) }
//!     fn release(&self) {}
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod controller;
pub mod error;
pub mod player;
pub mod queue;
pub mod retry;
pub mod shuffle;
pub mod story;
pub mod types;

pub use controller::QueueController;
pub use error::{PlaybackError, Result};
pub use player::{player_events, MediaPlayer, PlayerEvent, PlayerEventReceiver, PlayerEventSender};
pub use queue::{wrap, QueueState, Transition};
pub use retry::RetryPolicy;
pub use types::{ControllerConfig, PlaybackStatus, RepeatMode, Story};
