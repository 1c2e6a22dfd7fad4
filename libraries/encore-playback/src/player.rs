//! Platform-agnostic media player abstraction
//!
//! The controller drives a [`MediaPlayer`] but never decodes audio itself.
//! Preparation is asynchronous: `prepare` returns immediately and the player
//! later reports back through the [`PlayerEvent`] channel it was built with.

use crate::error::Result;
use std::time::Duration;
use tokio::sync::mpsc;

/// Callback from the media player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The source set by the last `prepare` is ready to play
    Prepared,

    /// The current source played to its end
    Completed,

    /// The player failed to prepare or play
    Error(String),
}

/// Sending half handed to the player implementation
pub type PlayerEventSender = mpsc::UnboundedSender<PlayerEvent>;

/// Receiving half consumed by the controller
pub type PlayerEventReceiver = mpsc::UnboundedReceiver<PlayerEvent>;

/// Create the channel a player reports its callbacks on
pub fn player_events() -> (PlayerEventSender, PlayerEventReceiver) {
    mpsc::unbounded_channel()
}

/// Media player capable of streaming from a URI
///
/// Implementations use interior mutability; the controller shares one
/// instance between its event task and the progress sampler.
pub trait MediaPlayer: Send + Sync {
    /// Set the URI to stream from
    fn set_source(&self, uri: &str) -> Result<()>;

    /// Start preparing the current source
    ///
    /// Completion is signalled with [`PlayerEvent::Prepared`] or
    /// [`PlayerEvent::Error`].
    fn prepare(&self) -> Result<()>;

    /// Start or resume playback
    fn start(&self) -> Result<()>;

    /// Pause playback
    fn pause(&self) -> Result<()>;

    /// Seek within the current source
    fn seek(&self, position: Duration) -> Result<()>;

    /// Current playback position
    fn position(&self) -> Duration;

    /// Stop and forget the current source
    fn reset(&self) -> Result<()>;

    /// Free all resources; the player is unusable afterwards
    fn release(&self);
}
