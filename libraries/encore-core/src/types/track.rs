/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song as served by the streaming backend
///
/// Tracks are immutable values. State changes (such as the listener liking a
/// song) are expressed by replacing the track with an updated copy, see
/// [`Track::with_liked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Cover art, base64 encoded image as delivered by the backend
    #[serde(rename = "albumImgBase64")]
    pub cover_art: String,

    /// Genre
    pub genre: String,

    /// Duration in seconds
    #[serde(rename = "length")]
    pub length_secs: u32,

    /// Release date, formatted by the backend
    pub release_date: String,

    /// Number of plays across all listeners
    pub play_count: u64,

    /// Number of likes across all listeners
    pub like_count: u64,

    /// Whether the signed-in listener liked this track
    pub liked_by_user: bool,
}

impl Track {
    /// Create a track with minimal metadata
    pub fn new(id: TrackId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            cover_art: String::new(),
            genre: String::new(),
            length_secs: 0,
            release_date: String::new(),
            play_count: 0,
            like_count: 0,
            liked_by_user: false,
        }
    }

    /// Track duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.length_secs))
    }

    /// Copy of this track carrying a new liked flag
    ///
    /// The like count is left as is; the backend is the source of truth for it.
    #[must_use]
    pub fn with_liked(&self, liked: bool) -> Self {
        Self {
            liked_by_user: liked,
            ..self.clone()
        }
    }

    /// Whether both values refer to the same backend track
    pub fn same_track(&self, other: &Track) -> bool {
        self.id == other.id
    }
}

/// Raised after the backend accepted a like or unlike request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongLikeEvent {
    /// Track the event refers to
    pub id: TrackId,

    /// New liked state
    pub liked: bool,
}

impl SongLikeEvent {
    /// Create a like event
    pub fn new(id: TrackId, liked: bool) -> Self {
        Self { id, liked }
    }
}
