//! Play queue state machine
//!
//! [`QueueState`] is an immutable snapshot of the play queue. Every operation
//! is a pure function from the current snapshot to a [`Transition`]: the next
//! snapshot plus a flag telling the caller whether the current track changed
//! (and the player therefore has to be reconfigured).
//!
//! Structure:
//! ```text
//! queue:          [A, B, C, D, E]   insertion order
//! shuffled_queue: [C, A, E, B, D]   only while shuffle is on
//! current_index:  Some(2)           index into the active sequence
//! ```
//!
//! The active sequence is `shuffled_queue` when shuffle is on, `queue`
//! otherwise. Both always hold the same tracks.

use crate::shuffle;
use crate::types::{PlaybackStatus, RepeatMode};
use encore_core::types::{SongLikeEvent, Track, TrackId};

/// Wrap an index that is at most one step outside `0..len`
///
/// `-1` maps to `len - 1` and `len` maps to `0`. Values further out of range
/// are a caller bug.
///
/// # Panics
/// Debug builds panic when `len` is zero.
pub fn wrap(value: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap into an empty range");
    let len = len as isize;
    debug_assert!(value >= -1 && value <= len, "index {} too far out of range", value);

    if value < 0 {
        (len + value) as usize
    } else if value >= len {
        (value - len) as usize
    } else {
        value as usize
    }
}

/// Snapshot of the play queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueState {
    queue: Vec<Track>,
    shuffled_queue: Vec<Track>,
    current_index: Option<usize>,
    shuffle_mode: bool,
    repeat_mode: RepeatMode,
    pub(crate) status: PlaybackStatus,
}

/// Result of applying an operation to a [`QueueState`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// The new snapshot
    pub state: QueueState,

    /// Whether the player must be reconfigured for a new current track
    pub track_changed: bool,
}

impl Transition {
    fn changed(state: QueueState) -> Self {
        Self {
            state,
            track_changed: true,
        }
    }

    fn unchanged(state: QueueState) -> Self {
        Self {
            state,
            track_changed: false,
        }
    }
}

impl QueueState {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    /// Tracks in insertion order
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Shuffled permutation, empty unless shuffle is on
    pub fn shuffled_queue(&self) -> &[Track] {
        &self.shuffled_queue
    }

    /// The sequence `current_index` points into
    pub fn active_queue(&self) -> &[Track] {
        if self.shuffle_mode {
            &self.shuffled_queue
        } else {
            &self.queue
        }
    }

    /// Index into the active sequence, `None` when the queue is empty
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether shuffle is on
    pub fn shuffle_mode(&self) -> bool {
        self.shuffle_mode
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    /// Current playback status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Track at the current index
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|idx| self.active_queue().get(idx))
    }

    /// Track before the current one, wrapping to the end
    pub fn previous_track(&self) -> Option<&Track> {
        self.neighbour(-1)
    }

    /// Track after the current one, wrapping to the start
    pub fn next_track(&self) -> Option<&Track> {
        self.neighbour(1)
    }

    /// Copy of this snapshot with a different status
    #[must_use]
    pub fn with_status(&self, status: PlaybackStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    fn neighbour(&self, offset: isize) -> Option<&Track> {
        let current = self.current_index?;
        let active = self.active_queue();
        if active.is_empty() {
            return None;
        }
        active.get(wrap(current as isize + offset, active.len()))
    }

    fn position_in_active(&self, id: TrackId) -> Option<usize> {
        self.active_queue().iter().position(|t| t.id == id)
    }

    fn active_mut(&mut self) -> &mut Vec<Track> {
        if self.shuffle_mode {
            &mut self.shuffled_queue
        } else {
            &mut self.queue
        }
    }

    fn is_current(&self, track: &Track) -> bool {
        self.current_track().is_some_and(|current| current.same_track(track))
    }

    /// Single-element queue playing `track`
    fn started_with(&self, track: Track) -> Self {
        let shuffled_queue = if self.shuffle_mode {
            vec![track.clone()]
        } else {
            Vec::new()
        };

        Self {
            queue: vec![track],
            shuffled_queue,
            current_index: Some(0),
            ..self.clone()
        }
    }

    // ===== Transitions =====

    /// Replace the queue and start from its first track
    ///
    /// A fresh permutation is drawn when shuffle is on.
    pub fn set_queue(&self, tracks: Vec<Track>) -> Transition {
        let had_current = self.current_index.is_some();
        let shuffled_queue = if self.shuffle_mode {
            shuffle::shuffled(&tracks)
        } else {
            Vec::new()
        };
        let current_index = if tracks.is_empty() { None } else { Some(0) };
        let track_changed = !tracks.is_empty() || had_current;

        Transition {
            state: Self {
                queue: tracks,
                shuffled_queue,
                current_index,
                ..self.clone()
            },
            track_changed,
        }
    }

    /// Queue a track without interrupting playback
    ///
    /// - the current track: no-op
    /// - empty queue: starts playing it
    /// - already queued: jumps to it
    /// - otherwise: appended (and inserted after the current position of the
    ///   shuffled order), playback continues
    pub fn add(&self, track: Track) -> Transition {
        if self.is_current(&track) {
            return Transition::unchanged(self.clone());
        }
        let Some(current) = self.current_index else {
            return Transition::changed(self.started_with(track));
        };
        if let Some(idx) = self.position_in_active(track.id) {
            return Transition::changed(Self {
                current_index: Some(idx),
                ..self.clone()
            });
        }

        let mut next = self.clone();
        next.queue.push(track.clone());
        if self.shuffle_mode {
            shuffle::insert_after(&mut next.shuffled_queue, current, track);
        }
        Transition::unchanged(next)
    }

    /// Play a track now
    ///
    /// Same precedence as [`QueueState::add`], but a track that is not queued
    /// replaces the current one instead of being appended.
    pub fn jump_to(&self, track: Track) -> Transition {
        if self.is_current(&track) {
            return Transition::unchanged(self.clone());
        }
        let Some(current) = self.current_index else {
            return Transition::changed(self.started_with(track));
        };
        if let Some(idx) = self.position_in_active(track.id) {
            return Transition {
                state: Self {
                    current_index: Some(idx),
                    ..self.clone()
                },
                track_changed: idx != current,
            };
        }

        let mut next = self.clone();
        let replaced = std::mem::replace(&mut next.active_mut()[current], track.clone());
        if self.shuffle_mode {
            // keep both sequences the same multiset
            if let Some(pos) = next.queue.iter().position(|t| t.same_track(&replaced)) {
                next.queue[pos] = track;
            }
        }
        Transition::changed(next)
    }

    /// Remove the first occurrence of a track
    ///
    /// The current index keeps pointing at the same logical track when an
    /// earlier one is removed. Removing the current track signals a track
    /// change; the next track slides into its place, or the previous one when
    /// it was last. An emptied queue goes back to no current index and Idle.
    pub fn remove(&self, track: &Track) -> Transition {
        let Some(current) = self.current_index else {
            return Transition::unchanged(self.clone());
        };
        let Some(removed) = self.position_in_active(track.id) else {
            return Transition::unchanged(self.clone());
        };

        let mut next = self.clone();
        next.active_mut().remove(removed);
        if self.shuffle_mode {
            if let Some(pos) = next.queue.iter().position(|t| t.same_track(track)) {
                next.queue.remove(pos);
            }
        }

        let len = next.active_queue().len();
        next.current_index = if len == 0 {
            None
        } else if removed < current || current >= len {
            Some(current - 1)
        } else {
            Some(current)
        };
        if next.current_index.is_none() {
            next.shuffled_queue.clear();
            next.status = PlaybackStatus::Idle;
        }

        Transition {
            state: next,
            track_changed: removed == current,
        }
    }

    /// Step back one track, wrapping to the end
    pub fn go_to_previous(&self) -> Transition {
        self.step(-1)
    }

    /// Step forward one track on user request, wrapping to the start
    ///
    /// Unlike [`QueueState::advance_on_completion`] this ignores the repeat
    /// mode.
    pub fn go_to_next_explicit(&self) -> Transition {
        self.step(1)
    }

    fn step(&self, offset: isize) -> Transition {
        let Some(current) = self.current_index else {
            return Transition::unchanged(self.clone());
        };
        let new_index = wrap(current as isize + offset, self.active_queue().len());

        Transition {
            state: Self {
                current_index: Some(new_index),
                ..self.clone()
            },
            track_changed: new_index != current,
        }
    }

    /// Move on after the current track played to its end
    ///
    /// - `Off`: next track, or stay put when at the last one
    /// - `All`: next track, wrapping to the start
    /// - `One`: stay put but signal a change so the track restarts
    ///
    /// The status drops to Idle in every case.
    pub fn advance_on_completion(&self) -> Transition {
        let next = self.with_status(PlaybackStatus::Idle);
        let Some(current) = self.current_index else {
            return Transition::unchanged(next);
        };
        let len = self.active_queue().len();

        match self.repeat_mode {
            RepeatMode::Off if current + 1 < len => Transition::changed(Self {
                current_index: Some(current + 1),
                ..next
            }),
            RepeatMode::Off => Transition::unchanged(next),
            RepeatMode::All => Transition::changed(Self {
                current_index: Some(wrap(current as isize + 1, len)),
                ..next
            }),
            RepeatMode::One => Transition::changed(next),
        }
    }

    /// Drop everything, including shuffle and repeat settings
    pub fn clear(&self) -> Transition {
        Transition::changed(Self::default())
    }

    /// Switch shuffle on or off without moving off the current track
    ///
    /// Turning shuffle on pins the current track at its index in the new
    /// permutation. Turning it off re-derives the index from `queue`.
    pub fn toggle_shuffle_mode(&self) -> Transition {
        let mut next = self.clone();

        if self.shuffle_mode {
            next.current_index = self
                .current_track()
                .and_then(|current| self.queue.iter().position(|t| t.same_track(current)));
            next.shuffled_queue = Vec::new();
        } else {
            next.shuffled_queue = match self.current_index {
                Some(current) => shuffle::shuffled_with_pinned(&self.queue, current),
                None => Vec::new(),
            };
        }
        next.shuffle_mode = !self.shuffle_mode;

        Transition::unchanged(next)
    }

    /// Off → All → One → Off
    pub fn cycle_repeat_mode(&self) -> Transition {
        Transition::unchanged(Self {
            repeat_mode: self.repeat_mode.cycled(),
            ..self.clone()
        })
    }

    /// Carry a like/unlike into both sequences
    ///
    /// Positions and playback are unaffected.
    pub fn apply_like(&self, event: SongLikeEvent) -> Transition {
        let mut next = self.clone();
        for sequence in [&mut next.queue, &mut next.shuffled_queue] {
            if let Some(track) = sequence.iter_mut().find(|t| t.id == event.id) {
                *track = track.with_liked(event.liked);
            }
        }
        Transition::unchanged(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: i64) -> Track {
        Track::new(TrackId::new(id), format!("Song{}", id), format!("Artist{}", id))
    }

    fn five_tracks() -> Vec<Track> {
        (1..=5).map(create_test_track).collect()
    }

    fn ids(tracks: &[Track]) -> Vec<i64> {
        tracks.iter().map(|t| t.id.get()).collect()
    }

    fn queue_at(index: usize) -> QueueState {
        let state = QueueState::new().set_queue(five_tracks()).state;
        QueueState {
            current_index: Some(index),
            ..state
        }
    }

    #[test]
    fn wrap_boundaries() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(3, 5), 3);
        assert_eq!(wrap(0, 1), 0);
        assert_eq!(wrap(1, 1), 0);
        assert_eq!(wrap(-1, 1), 0);
    }

    #[test]
    fn empty_queue_has_no_tracks() {
        let state = QueueState::new();
        assert!(state.current_track().is_none());
        assert!(state.previous_track().is_none());
        assert!(state.next_track().is_none());
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn set_queue_starts_at_first_track() {
        let transition = QueueState::new().set_queue(five_tracks());
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(0));
        assert_eq!(ids(transition.state.queue()), vec![1, 2, 3, 4, 5]);
        assert!(transition.state.shuffled_queue().is_empty());
    }

    #[test]
    fn set_queue_empty_is_not_a_change_on_empty_state() {
        let transition = QueueState::new().set_queue(Vec::new());
        assert!(!transition.track_changed);
        assert_eq!(transition.state.current_index(), None);
    }

    #[test]
    fn set_queue_while_shuffled_draws_permutation() {
        let shuffled = QueueState::new().toggle_shuffle_mode().state;
        let state = shuffled.set_queue(five_tracks()).state;

        let mut sorted = ids(state.shuffled_queue());
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn neighbours_wrap_at_boundaries() {
        let first = queue_at(0);
        assert_eq!(first.previous_track().unwrap().id.get(), 5);
        assert_eq!(first.next_track().unwrap().id.get(), 2);

        let last = queue_at(4);
        assert_eq!(last.next_track().unwrap().id.get(), 1);
        assert_eq!(last.previous_track().unwrap().id.get(), 4);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let transition = queue_at(0).go_to_previous();
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(4));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let transition = queue_at(4).go_to_next_explicit();
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(0));
    }

    #[test]
    fn navigation_on_single_track_is_not_a_change() {
        let state = QueueState::new().set_queue(vec![create_test_track(1)]).state;
        assert!(!state.go_to_next_explicit().track_changed);
        assert!(!state.go_to_previous().track_changed);
    }

    #[test]
    fn navigation_on_empty_queue_is_noop() {
        let state = QueueState::new();
        let transition = state.go_to_next_explicit();
        assert!(!transition.track_changed);
        assert_eq!(transition.state, state);
        assert!(!state.go_to_previous().track_changed);
    }

    #[test]
    fn add_current_track_is_noop() {
        let state = queue_at(1);
        let transition = state.add(create_test_track(2));
        assert!(!transition.track_changed);
        assert_eq!(transition.state.len(), 5);
        assert_eq!(transition.state.current_index(), Some(1));
    }

    #[test]
    fn add_to_empty_queue_starts_playing() {
        let transition = QueueState::new().add(create_test_track(9));
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(0));
        assert_eq!(ids(transition.state.queue()), vec![9]);
    }

    #[test]
    fn add_queued_track_jumps_to_it() {
        let transition = queue_at(0).add(create_test_track(4));
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(3));
        assert_eq!(transition.state.len(), 5);
    }

    #[test]
    fn add_new_track_appends_without_interrupting() {
        let transition = queue_at(2).add(create_test_track(6));
        assert!(!transition.track_changed);
        assert_eq!(ids(transition.state.queue()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(transition.state.current_index(), Some(2));
    }

    #[test]
    fn add_new_track_while_shuffled_lands_after_current() {
        let shuffled = queue_at(1).toggle_shuffle_mode().state;
        let current = shuffled.current_track().unwrap().id;

        let state = shuffled.add(create_test_track(6)).state;

        assert_eq!(state.current_track().unwrap().id, current);
        let position = state
            .shuffled_queue()
            .iter()
            .position(|t| t.id.get() == 6)
            .unwrap();
        assert!(position > 1);
        assert_eq!(state.queue().last().unwrap().id.get(), 6);
        assert_eq!(state.shuffled_queue().len(), 6);
    }

    #[test]
    fn jump_to_queued_track() {
        let transition = queue_at(0).jump_to(create_test_track(4));
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(3));
    }

    #[test]
    fn jump_to_current_is_noop() {
        let transition = queue_at(3).jump_to(create_test_track(4));
        assert!(!transition.track_changed);
    }

    #[test]
    fn jump_to_unknown_track_replaces_current() {
        let transition = queue_at(1).jump_to(create_test_track(9));
        assert!(transition.track_changed);
        assert_eq!(ids(transition.state.queue()), vec![1, 9, 3, 4, 5]);
        assert_eq!(transition.state.current_index(), Some(1));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 9);
    }

    #[test]
    fn jump_to_unknown_track_while_shuffled_keeps_multisets_equal() {
        let shuffled = queue_at(2).toggle_shuffle_mode().state;
        let replaced = shuffled.current_track().unwrap().id;

        let state = shuffled.jump_to(create_test_track(9)).state;

        let mut a = ids(state.queue());
        let mut b = ids(state.shuffled_queue());
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert!(!a.contains(&replaced.get()));
        assert_eq!(state.current_track().unwrap().id.get(), 9);
    }

    #[test]
    fn remove_before_current_is_unaffected_when_after() {
        // queue [A,B,C,D,E], current A, remove C
        let transition = queue_at(0).remove(&create_test_track(3));
        assert!(!transition.track_changed);
        assert_eq!(ids(transition.state.queue()), vec![1, 2, 4, 5]);
        assert_eq!(transition.state.current_index(), Some(0));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 1);
    }

    #[test]
    fn remove_current_moves_to_following_track() {
        // queue [A,B,C,D,E], current C, remove C
        let transition = queue_at(2).remove(&create_test_track(3));
        assert!(transition.track_changed);
        assert_eq!(ids(transition.state.queue()), vec![1, 2, 4, 5]);
        assert_eq!(transition.state.current_index(), Some(2));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 4);
    }

    #[test]
    fn remove_earlier_track_shifts_index() {
        let transition = queue_at(3).remove(&create_test_track(1));
        assert!(!transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(2));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 4);
    }

    #[test]
    fn remove_current_last_track_steps_back() {
        let transition = queue_at(4).remove(&create_test_track(5));
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(3));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 4);
    }

    #[test]
    fn remove_only_track_empties_queue() {
        let state = QueueState::new()
            .set_queue(vec![create_test_track(1)])
            .state
            .with_status(PlaybackStatus::Ready { is_playing: true });

        let transition = state.remove(&create_test_track(1));

        assert!(transition.track_changed);
        assert!(transition.state.is_empty());
        assert_eq!(transition.state.current_index(), None);
        assert_eq!(transition.state.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn remove_unknown_track_is_noop() {
        let state = queue_at(2);
        let transition = state.remove(&create_test_track(42));
        assert!(!transition.track_changed);
        assert_eq!(transition.state, state);
    }

    #[test]
    fn remove_while_shuffled_updates_both_sequences() {
        let shuffled = queue_at(0).toggle_shuffle_mode().state;
        let current = shuffled.current_track().unwrap().id;
        let victim = shuffled
            .shuffled_queue()
            .iter()
            .find(|t| t.id != current)
            .unwrap()
            .clone();

        let state = shuffled.remove(&victim).state;

        assert_eq!(state.queue().len(), 4);
        assert_eq!(state.shuffled_queue().len(), 4);
        assert!(state.queue().iter().all(|t| t.id != victim.id));
        assert!(state.shuffled_queue().iter().all(|t| t.id != victim.id));
        assert_eq!(state.current_track().unwrap().id, current);
    }

    #[test]
    fn completion_repeat_one_restarts_track() {
        let state = queue_at(3).cycle_repeat_mode().state.cycle_repeat_mode().state;
        assert_eq!(state.repeat_mode(), RepeatMode::One);

        let transition = state.advance_on_completion();
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(3));
    }

    #[test]
    fn completion_repeat_off_stops_at_last() {
        let state = queue_at(4).with_status(PlaybackStatus::Ready { is_playing: true });

        let transition = state.advance_on_completion();

        assert!(!transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(4));
        assert_eq!(transition.state.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn completion_repeat_off_advances() {
        let transition = queue_at(1).advance_on_completion();
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(2));
    }

    #[test]
    fn completion_repeat_all_wraps() {
        let state = queue_at(4).cycle_repeat_mode().state;
        assert_eq!(state.repeat_mode(), RepeatMode::All);

        let transition = state.advance_on_completion();
        assert!(transition.track_changed);
        assert_eq!(transition.state.current_index(), Some(0));
    }

    #[test]
    fn completion_on_empty_queue_is_noop() {
        let transition = QueueState::new().advance_on_completion();
        assert!(!transition.track_changed);
        assert_eq!(transition.state.current_index(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let state = queue_at(2).toggle_shuffle_mode().state.cycle_repeat_mode().state;
        let transition = state.clear();
        assert!(transition.track_changed);
        assert_eq!(transition.state, QueueState::default());
    }

    #[test]
    fn shuffle_on_pins_current_track() {
        let state = queue_at(3);
        let transition = state.toggle_shuffle_mode();

        assert!(!transition.track_changed);
        assert!(transition.state.shuffle_mode());
        assert_eq!(transition.state.current_index(), Some(3));
        assert_eq!(transition.state.current_track().unwrap().id.get(), 4);
        assert_eq!(transition.state.shuffled_queue().len(), 5);
    }

    #[test]
    fn shuffle_round_trip_restores_current_track() {
        let state = queue_at(1);
        let on = state.toggle_shuffle_mode().state;
        let moved = on.go_to_next_explicit().state;
        let playing = moved.current_track().unwrap().id;

        let off = moved.toggle_shuffle_mode().state;

        assert!(!off.shuffle_mode());
        assert!(off.shuffled_queue().is_empty());
        assert_eq!(ids(off.queue()), vec![1, 2, 3, 4, 5]);
        assert_eq!(off.current_track().unwrap().id, playing);
    }

    #[test]
    fn shuffle_on_empty_queue() {
        let state = QueueState::new().toggle_shuffle_mode().state;
        assert!(state.shuffle_mode());
        assert!(state.shuffled_queue().is_empty());
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn like_event_updates_both_sequences() {
        let state = queue_at(0).toggle_shuffle_mode().state;

        let transition = state.apply_like(SongLikeEvent::new(TrackId::new(3), true));

        assert!(!transition.track_changed);
        let liked = |tracks: &[Track]| tracks.iter().find(|t| t.id.get() == 3).unwrap().liked_by_user;
        assert!(liked(transition.state.queue()));
        assert!(liked(transition.state.shuffled_queue()));
        assert_eq!(transition.state.current_index(), state.current_index());
    }

    #[test]
    fn like_event_for_unknown_track_is_noop() {
        let state = queue_at(0);
        let transition = state.apply_like(SongLikeEvent::new(TrackId::new(77), true));
        assert_eq!(transition.state, state);
    }
}
