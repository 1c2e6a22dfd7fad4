//! Like/unlike with change notifications.

use encore_core::types::{SongLikeEvent, Track, TrackId};
use encore_core::{LikeService, Result};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the like event channel; slower subscribers see `Lagged`.
const EVENT_CAPACITY: usize = 64;

/// Wraps a [`LikeService`] and broadcasts every successful change.
///
/// Any number of listeners (the play queue, liked-songs views) can
/// [`subscribe`](LikeNotifier::subscribe). Failed calls publish nothing.
#[derive(Clone)]
pub struct LikeNotifier {
    service: Arc<dyn LikeService>,
    events: broadcast::Sender<SongLikeEvent>,
}

impl LikeNotifier {
    /// Create a notifier around a like service.
    pub fn new(service: Arc<dyn LikeService>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { service, events }
    }

    /// Receive like events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SongLikeEvent> {
        self.events.subscribe()
    }

    /// Like a song and notify subscribers.
    pub async fn like(&self, id: TrackId) -> Result<String> {
        let message = self.service.like(id).await?;
        self.publish(SongLikeEvent::new(id, true));
        Ok(message)
    }

    /// Unlike a song and notify subscribers.
    pub async fn unlike(&self, id: TrackId) -> Result<String> {
        let message = self.service.unlike(id).await?;
        self.publish(SongLikeEvent::new(id, false));
        Ok(message)
    }

    /// Flip the liked flag of a track; returns the new state.
    pub async fn toggle_like(&self, track: &Track) -> Result<bool> {
        if track.liked_by_user {
            self.unlike(track.id).await?;
            Ok(false)
        } else {
            self.like(track.id).await?;
            Ok(true)
        }
    }

    fn publish(&self, event: SongLikeEvent) {
        match self.events.send(event) {
            Ok(receivers) => debug!(track = %event.id, liked = event.liked, receivers, "Published like event"),
            Err(_) => debug!(track = %event.id, "No like event subscribers"),
        }
    }
}
