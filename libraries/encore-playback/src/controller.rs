//! Queue controller - playback orchestration
//!
//! Owns the [`QueueState`] and keeps the media player in step with it.
//! Every public operation applies a pure transition atomically through the
//! state channel; when the transition reports a track change the controller
//! reloads the player in the background.
//!
//! Background work:
//! - an event task consuming [`PlayerEvent`]s and like events
//! - one load task per reload (stream lookup, then `reset → set_source → prepare`)
//! - a progress sampler while the status is Ready
//! - story requests
//!
//! A load generation counter is bumped on every reload. Background tasks
//! check it before touching the player or publishing results, so a later
//! reload always supersedes an earlier one. Player callbacks are matched
//! against the generation the last `prepare` was issued under, so a late
//! callback from a replaced source is dropped.

use crate::error::{PlaybackError, Result};
use crate::player::{MediaPlayer, PlayerEvent, PlayerEventReceiver};
use crate::queue::{QueueState, Transition};
use crate::story::prompt_for;
use crate::types::{ControllerConfig, PlaybackStatus, Story};
use encore_core::types::{SongLikeEvent, Track};
use encore_core::{CoreError, SongCatalog, StoryGenerator};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What a track change asks of the player
enum Reload {
    /// Queue emptied: stop the player
    Stop,

    /// Load the given track under a fresh generation
    Load { generation: u64, track: Track },
}

struct Inner {
    state: watch::Sender<QueueState>,
    progress: watch::Sender<Duration>,
    story: watch::Sender<Story>,

    player: Arc<dyn MediaPlayer>,
    catalog: Arc<dyn SongCatalog>,
    storyteller: Arc<dyn StoryGenerator>,

    config: ControllerConfig,
    generation: AtomicU64,
    /// Generation the player was last asked to prepare under
    preparing: AtomicU64,
    released: AtomicBool,
    runtime: Handle,
}

/// Drives a [`MediaPlayer`] from a play queue
///
/// Must be created inside a Tokio runtime; background work is spawned on the
/// runtime that was current at construction.
pub struct QueueController {
    inner: Arc<Inner>,
    event_task: JoinHandle<()>,
}

impl QueueController {
    /// Create a controller with an empty queue
    ///
    /// # Arguments
    /// * `player` - Player to drive; the controller releases it on dispose
    /// * `player_events` - Channel the player reports its callbacks on
    /// * `catalog` - Resolves tracks to stream URIs
    /// * `storyteller` - Generates song stories on request
    /// * `like_events` - Like/unlike notifications to fold into the queue
    ///
    /// # Errors
    /// Returns [`PlaybackError::NoRuntime`] outside a Tokio runtime.
    pub fn new(
        player: Arc<dyn MediaPlayer>,
        player_events: PlayerEventReceiver,
        catalog: Arc<dyn SongCatalog>,
        storyteller: Arc<dyn StoryGenerator>,
        like_events: broadcast::Receiver<SongLikeEvent>,
        config: ControllerConfig,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| PlaybackError::NoRuntime)?;

        let (state, _) = watch::channel(QueueState::new());
        let (progress, _) = watch::channel(Duration::ZERO);
        let (story, _) = watch::channel(Story::default());

        let inner = Arc::new(Inner {
            state,
            progress,
            story,
            player,
            catalog,
            storyteller,
            config,
            generation: AtomicU64::new(0),
            preparing: AtomicU64::new(u64::MAX),
            released: AtomicBool::new(false),
            runtime: runtime.clone(),
        });

        let event_task = runtime.spawn(run_events(inner.clone(), player_events, like_events));
        debug!("Queue controller started");

        Ok(Self { inner, event_task })
    }

    // ===== Observation =====

    /// Snapshot of the current queue state
    pub fn state(&self) -> QueueState {
        self.inner.state.borrow().clone()
    }

    /// Watch queue state changes
    pub fn subscribe(&self) -> watch::Receiver<QueueState> {
        self.inner.state.subscribe()
    }

    /// Last sampled playback position
    pub fn progress(&self) -> Duration {
        *self.inner.progress.borrow()
    }

    /// Watch playback position updates
    pub fn subscribe_progress(&self) -> watch::Receiver<Duration> {
        self.inner.progress.subscribe()
    }

    /// Story for the current track
    pub fn story(&self) -> Story {
        self.inner.story.borrow().clone()
    }

    /// Watch story updates
    pub fn subscribe_story(&self) -> watch::Receiver<Story> {
        self.inner.story.subscribe()
    }

    // ===== Queue operations =====

    /// Replace the queue and start playing its first track
    pub fn set_queue(&self, tracks: Vec<Track>) {
        info!("Setting queue with {} tracks", tracks.len());
        self.inner.apply(|state| state.set_queue(tracks));
    }

    /// Queue a track without interrupting playback
    pub fn add(&self, track: Track) {
        debug!("Adding track {} to queue", track.id);
        self.inner.apply(|state| state.add(track));
    }

    /// Play a track now
    pub fn jump_to(&self, track: Track) {
        debug!("Jumping to track {}", track.id);
        self.inner.apply(|state| state.jump_to(track));
    }

    /// Remove a track from the queue
    pub fn remove(&self, track: &Track) {
        debug!("Removing track {} from queue", track.id);
        self.inner.apply(|state| state.remove(track));
    }

    /// Empty the queue and stop playback
    pub fn clear(&self) {
        info!("Clearing queue");
        self.inner.apply(QueueState::clear);
    }

    /// Step back one track
    pub fn go_to_prev(&self) {
        self.inner.apply(QueueState::go_to_previous);
    }

    /// Step forward one track, ignoring the repeat mode
    pub fn go_to_next_explicitly(&self) {
        self.inner.apply(QueueState::go_to_next_explicit);
    }

    /// Switch shuffle on or off
    pub fn toggle_shuffle_mode(&self) {
        self.inner.apply(QueueState::toggle_shuffle_mode);
    }

    /// Off → All → One → Off
    pub fn cycle_repeat_mode(&self) {
        self.inner.apply(QueueState::cycle_repeat_mode);
    }

    // ===== Player control =====

    /// Pause when playing, resume when paused
    ///
    /// Does nothing unless the current track is prepared.
    pub fn toggle_play_or_pause(&self) -> Result<()> {
        let mut resume = None;
        self.inner.state.send_if_modified(|state| match state.status {
            PlaybackStatus::Ready { is_playing } => {
                state.status = PlaybackStatus::Ready {
                    is_playing: !is_playing,
                };
                resume = Some(!is_playing);
                true
            }
            _ => false,
        });

        let Some(playing) = resume else {
            debug!("Play/pause ignored, player not ready");
            return Ok(());
        };

        let result = if playing {
            debug!("Resuming playback");
            self.inner.player.start()
        } else {
            debug!("Pausing playback");
            self.inner.player.pause()
        };

        if let Err(e) = &result {
            warn!("Play/pause failed, keeping previous state: {}", e);
            self.inner.state.send_if_modified(|state| {
                if state.status == (PlaybackStatus::Ready { is_playing: playing }) {
                    state.status = PlaybackStatus::Ready {
                        is_playing: !playing,
                    };
                    true
                } else {
                    false
                }
            });
        }
        result
    }

    /// Seek within the current track
    pub fn seek(&self, position: Duration) -> Result<()> {
        if self.inner.state.borrow().current_track().is_none() {
            debug!("Seek ignored, no current track");
            return Ok(());
        }

        self.inner.progress.send_replace(position);
        self.inner.player.seek(position)
    }

    /// Ask the story generator about the current track
    ///
    /// The result lands in [`QueueController::story`]. A failure is published
    /// as the story text. Results for a track that is no longer current are
    /// dropped.
    pub fn request_story(&self) {
        let Some(track) = self.inner.state.borrow().current_track().cloned() else {
            debug!("Story request ignored, no current track");
            return;
        };

        self.inner.story.send_replace(Story {
            text: String::new(),
            is_loading: true,
        });

        let inner = self.inner.clone();
        let generation = inner.generation.load(Ordering::SeqCst);
        self.inner.runtime.spawn(async move {
            info!("Requesting story for {} by {}", track.title, track.artist);
            let text = match inner.storyteller.generate(&prompt_for(&track)).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Story generation failed: {}", e);
                    e.to_string()
                }
            };

            if inner.is_current(generation) {
                inner.story.send_replace(Story {
                    text,
                    is_loading: false,
                });
            }
        });
    }

    /// Stop background work and release the player
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn dispose(&self) {
        self.event_task.abort();
        self.inner.generation.fetch_add(1, Ordering::SeqCst);

        if !self.inner.released.swap(true, Ordering::SeqCst) {
            info!("Releasing media player");
            self.inner.player.release();
        }
    }
}

impl Drop for QueueController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Inner {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Apply a transition and reload the player if the track changed
    fn apply<F>(self: &Arc<Self>, op: F)
    where
        F: FnOnce(&QueueState) -> Transition,
    {
        let mut reload = None;
        self.state.send_modify(|state| {
            let Transition {
                state: next,
                track_changed,
            } = op(state);
            *state = next;

            if track_changed {
                reload = Some(self.begin_reload(state));
            }
        });

        if let Some(reload) = reload {
            self.execute(reload);
        }
    }

    /// Bump the generation and move the status out of Ready
    ///
    /// Runs inside `send_modify` so observers never see the new track with
    /// the old status.
    fn begin_reload(&self, state: &mut QueueState) -> Reload {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        match state.current_track() {
            Some(track) => {
                let track = track.clone();
                state.status = PlaybackStatus::Loading;
                Reload::Load { generation, track }
            }
            None => {
                state.status = PlaybackStatus::Idle;
                Reload::Stop
            }
        }
    }

    fn execute(self: &Arc<Self>, reload: Reload) {
        self.progress.send_replace(Duration::ZERO);
        self.story.send_replace(Story::default());

        if self.is_released() {
            debug!("Player released, skipping reload");
            return;
        }

        match reload {
            Reload::Stop => {
                info!("Queue empty, stopping player");
                if let Err(e) = self.player.reset() {
                    warn!("Failed to reset player: {}", e);
                }
            }
            Reload::Load { generation, track } => {
                let inner = self.clone();
                self.runtime.spawn(async move { inner.load(generation, track).await });
            }
        }
    }

    async fn load(self: Arc<Self>, generation: u64, track: Track) {
        info!("Loading track {} ({} - {})", track.id, track.artist, track.title);

        let lookup = self
            .config
            .retry
            .run_if(
                "Stream lookup",
                || self.catalog.stream_source(track.id),
                CoreError::is_transient,
            )
            .await;

        if !self.is_current(generation) || self.is_released() {
            debug!("Dropping superseded load of track {}", track.id);
            return;
        }

        let prepared = match lookup {
            Ok(uri) => {
                debug!("Preparing {}", uri);
                self.player
                    .reset()
                    .and_then(|()| self.player.set_source(&uri))
                    .and_then(|()| {
                        self.preparing.store(generation, Ordering::SeqCst);
                        self.player.prepare()
                    })
            }
            Err(e) => Err(PlaybackError::Collaborator(e)),
        };

        if let Err(e) = prepared {
            warn!("Failed to load track {}: {}", track.id, e);
            self.fail(generation);
        }
    }

    fn fail(&self, generation: u64) {
        self.state.send_if_modified(|state| {
            if self.is_current(generation) {
                state.status = PlaybackStatus::Failed;
                true
            } else {
                false
            }
        });
    }

    fn handle_player_event(self: &Arc<Self>, event: PlayerEvent) {
        match event {
            PlayerEvent::Prepared => self.on_prepared(),
            PlayerEvent::Completed => {
                info!("Track completed");
                self.apply(QueueState::advance_on_completion);
            }
            PlayerEvent::Error(message) => {
                let Some(generation) = self.prepared_generation() else {
                    debug!("Ignoring player error from a replaced source: {}", message);
                    return;
                };
                warn!("Player error: {}", message);
                self.fail(generation);
            }
        }
    }

    /// Current generation, if the player's source belongs to it
    fn prepared_generation(&self) -> Option<u64> {
        let generation = self.generation.load(Ordering::SeqCst);
        (self.preparing.load(Ordering::SeqCst) == generation).then_some(generation)
    }

    fn on_prepared(self: &Arc<Self>) {
        let Some(generation) = self.prepared_generation() else {
            debug!("Ignoring prepared event from a replaced source");
            return;
        };

        let accepted = self.state.send_if_modified(|state| {
            if self.is_current(generation) && state.status == PlaybackStatus::Loading {
                state.status = PlaybackStatus::Ready { is_playing: true };
                true
            } else {
                false
            }
        });

        if !accepted {
            debug!("Ignoring prepared event, nothing loading");
            return;
        }

        info!("Playback started");
        if let Err(e) = self.player.start() {
            warn!("Failed to start player: {}", e);
            self.fail(generation);
            return;
        }

        self.spawn_progress(generation);
    }

    fn is_sampling(&self, generation: u64) -> bool {
        self.is_current(generation) && self.state.borrow().status.is_ready()
    }

    fn spawn_progress(self: &Arc<Self>, generation: u64) {
        let inner = self.clone();
        self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(inner.config.progress_interval);
            loop {
                ticker.tick().await;
                if !inner.is_sampling(generation) {
                    break;
                }
                inner.progress.send_replace(inner.player.position());
            }

            if inner.is_current(generation) {
                inner.progress.send_replace(Duration::ZERO);
            }
            debug!("Progress sampler for generation {} stopped", generation);
        });
    }
}

async fn run_events(
    inner: Arc<Inner>,
    mut player_events: PlayerEventReceiver,
    mut like_events: broadcast::Receiver<SongLikeEvent>,
) {
    let mut likes_open = true;

    loop {
        tokio::select! {
            event = player_events.recv() => match event {
                Some(event) => inner.handle_player_event(event),
                None => {
                    debug!("Player event channel closed");
                    break;
                }
            },
            like = like_events.recv(), if likes_open => match like {
                Ok(event) => {
                    debug!("Applying like event for track {}", event.id);
                    inner.apply(|state| state.apply_like(event));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Like events lagged, skipped {}", skipped);
                }
                Err(RecvError::Closed) => {
                    debug!("Like event channel closed");
                    likes_open = false;
                }
            },
        }
    }
}
