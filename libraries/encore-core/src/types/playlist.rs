/// Playlist domain type
use crate::types::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Curated playlist published by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Cover image, base64 encoded
    #[serde(rename = "imgBase64")]
    pub cover_art: String,

    /// Songs, only present when the full playlist was requested
    #[serde(default)]
    pub songs: Option<Vec<Track>>,
}

impl Playlist {
    /// Songs of the playlist, empty when only the summary was fetched
    pub fn tracks(&self) -> &[Track] {
        self.songs.as_deref().unwrap_or_default()
    }
}

/// Playlist owned and edited by the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPlaylist {
    pub id: PlaylistId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Songs, only present when a single playlist was requested
    #[serde(default)]
    pub songs: Option<Vec<Track>>,
}

impl UserPlaylist {
    /// Songs of the playlist, empty when only the summary was fetched
    pub fn tracks(&self) -> &[Track] {
        self.songs.as_deref().unwrap_or_default()
    }
}
