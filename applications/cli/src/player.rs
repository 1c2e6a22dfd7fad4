//! Timer-driven stand-in for a real audio output
//!
//! Every source "plays" for a fixed length: `prepare` reports back right away
//! and `Completed` fires once the playing time adds up to the track length.

use encore_playback::{
    player_events, MediaPlayer, PlaybackError, PlayerEvent, PlayerEventReceiver,
    PlayerEventSender, Result,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

#[derive(Default)]
struct State {
    source: Option<String>,
    /// Position accumulated before the current play run
    offset: Duration,
    /// Start of the current play run, `None` while paused
    started_at: Option<Instant>,
    /// Bumped on every reset and seek so stale timers stay quiet
    epoch: u64,
    completion: Option<JoinHandle<()>>,
    released: bool,
}

impl State {
    fn position(&self) -> Duration {
        match self.started_at {
            Some(started) => self.offset + started.elapsed(),
            None => self.offset,
        }
    }

    fn cancel_completion(&mut self) {
        if let Some(task) = self.completion.take() {
            task.abort();
        }
    }
}

/// Media player that plays silence for a fixed length per track
pub struct SimulatedPlayer {
    state: Arc<Mutex<State>>,
    events: PlayerEventSender,
    track_length: Duration,
    runtime: Handle,
}

impl SimulatedPlayer {
    /// Create a player and the event channel the controller listens on
    pub fn new(track_length: Duration) -> Result<(Self, PlayerEventReceiver)> {
        let runtime = Handle::try_current().map_err(|_| PlaybackError::NoRuntime)?;
        let (events, receiver) = player_events();

        let player = Self {
            state: Arc::new(Mutex::new(State::default())),
            events,
            track_length,
            runtime,
        };
        Ok((player, receiver))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_usable(state: &State) -> Result<()> {
        if state.released {
            return Err(PlaybackError::Player("player released".to_string()));
        }
        Ok(())
    }

    /// Arm the completion timer for the rest of the current source
    fn schedule_completion(&self, state: &mut State) {
        state.cancel_completion();

        let remaining = self.track_length.saturating_sub(state.position());
        let epoch = state.epoch;
        let shared = self.state.clone();
        let events = self.events.clone();

        state.completion = Some(self.runtime.spawn(async move {
            tokio::time::sleep(remaining).await;

            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.epoch != epoch || state.started_at.is_none() {
                return;
            }
            state.offset = state.position();
            state.started_at = None;
            state.completion = None;
            drop(state);

            let _ = events.send(PlayerEvent::Completed);
        }));
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn set_source(&self, uri: &str) -> Result<()> {
        let mut state = self.lock();
        Self::ensure_usable(&state)?;

        debug!(uri = %uri, "Simulated player source set");
        state.source = Some(uri.to_string());
        Ok(())
    }

    fn prepare(&self) -> Result<()> {
        let state = self.lock();
        Self::ensure_usable(&state)?;

        if state.source.is_none() {
            return Err(PlaybackError::Player("no source set".to_string()));
        }
        drop(state);

        self.events
            .send(PlayerEvent::Prepared)
            .map_err(|_| PlaybackError::Player("event channel closed".to_string()))
    }

    fn start(&self) -> Result<()> {
        let mut state = self.lock();
        Self::ensure_usable(&state)?;

        if state.source.is_none() {
            return Err(PlaybackError::Player("nothing prepared".to_string()));
        }
        if state.started_at.is_none() {
            state.started_at = Some(Instant::now());
            self.schedule_completion(&mut state);
        }
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        let mut state = self.lock();
        Self::ensure_usable(&state)?;

        state.offset = state.position();
        state.started_at = None;
        state.cancel_completion();
        Ok(())
    }

    fn seek(&self, position: Duration) -> Result<()> {
        let mut state = self.lock();
        Self::ensure_usable(&state)?;

        state.epoch += 1;
        state.offset = position.min(self.track_length);
        if state.started_at.is_some() {
            state.started_at = Some(Instant::now());
            self.schedule_completion(&mut state);
        }
        Ok(())
    }

    fn position(&self) -> Duration {
        self.lock().position()
    }

    fn reset(&self) -> Result<()> {
        let mut state = self.lock();
        Self::ensure_usable(&state)?;

        state.cancel_completion();
        state.epoch += 1;
        state.source = None;
        state.offset = Duration::ZERO;
        state.started_at = None;
        Ok(())
    }

    fn release(&self) {
        let mut state = self.lock();
        state.cancel_completion();
        state.epoch += 1;
        state.source = None;
        state.started_at = None;
        state.released = true;
        debug!("Simulated player released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_prepare_requires_source() {
        let (player, _events) = SimulatedPlayer::new(Duration::from_secs(5)).unwrap();
        assert!(player.prepare().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_plays_to_completion() {
        let (player, mut events) = SimulatedPlayer::new(Duration::from_secs(5)).unwrap();

        player.set_source("http://host/stream/1").unwrap();
        player.prepare().unwrap();
        assert_eq!(events.recv().await, Some(PlayerEvent::Prepared));

        player.start().unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(player.position(), Duration::from_secs(2));

        assert_eq!(events.recv().await, Some(PlayerEvent::Completed));
        assert_eq!(player.position(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_holds_position() {
        let (player, mut events) = SimulatedPlayer::new(Duration::from_secs(5)).unwrap();
        player.set_source("uri").unwrap();
        player.start().unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        player.pause().unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(player.position(), Duration::from_secs(1));
        assert!(events.try_recv().is_err());

        player.start().unwrap();
        assert_eq!(events.recv().await, Some(PlayerEvent::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_moves_completion() {
        let (player, mut events) = SimulatedPlayer::new(Duration::from_secs(5)).unwrap();
        player.set_source("uri").unwrap();
        player.start().unwrap();

        player.seek(Duration::from_secs(4)).unwrap();
        let started = Instant::now();
        assert_eq!(events.recv().await, Some(PlayerEvent::Completed));
        assert_eq!(started.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_completion() {
        let (player, mut events) = SimulatedPlayer::new(Duration::from_secs(1)).unwrap();
        player.set_source("uri").unwrap();
        player.start().unwrap();
        player.reset().unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(events.try_recv().is_err());
        assert_eq!(player.position(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_released_player_rejects_calls() {
        let (player, _events) = SimulatedPlayer::new(Duration::from_secs(1)).unwrap();
        player.release();
        assert!(player.set_source("uri").is_err());
    }
}
