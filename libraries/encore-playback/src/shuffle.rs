//! Shuffle helpers for the play queue
//!
//! All helpers use a Fisher-Yates shuffle and never drop or duplicate tracks,
//! so a shuffled sequence is always a permutation of its input.

use encore_core::types::Track;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Random permutation of `tracks`
pub fn shuffled(tracks: &[Track]) -> Vec<Track> {
    let mut result = tracks.to_vec();
    result.shuffle(&mut thread_rng());
    result
}

/// Random permutation of `tracks` that keeps the track at `pinned` in place
///
/// Used when shuffle is switched on mid-playback: the playing track keeps
/// its index so the active position does not jump.
pub fn shuffled_with_pinned(tracks: &[Track], pinned: usize) -> Vec<Track> {
    if pinned >= tracks.len() {
        return shuffled(tracks);
    }

    let mut rest = tracks.to_vec();
    let keep = rest.remove(pinned);
    rest.shuffle(&mut thread_rng());
    rest.insert(pinned, keep);
    rest
}

/// Insert `track` at a random position strictly after `after`
///
/// The position is drawn from `after + 1..=len`, so the track may also land
/// at the very end.
pub fn insert_after(tracks: &mut Vec<Track>, after: usize, track: Track) {
    let start = (after + 1).min(tracks.len());
    let position = thread_rng().gen_range(start..=tracks.len());
    tracks.insert(position, track);
}
