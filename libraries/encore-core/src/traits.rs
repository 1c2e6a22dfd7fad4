/// Collaborator traits for Encore
///
/// These are the seams between the playback core and the outside world.
/// Every call returns a `Result` so failures are handled at the call site.
use crate::error::Result;
use crate::types::{SearchPage, SearchQuery, Track, TrackId};
use async_trait::async_trait;

/// Song catalogue of the streaming backend
#[async_trait]
pub trait SongCatalog: Send + Sync {
    /// Resolve a track to a URI the media player can stream from
    ///
    /// # Errors
    /// Returns an error if the location cannot be resolved
    async fn stream_source(&self, id: TrackId) -> Result<String>;

    /// Random selection of songs
    async fn random(&self, size: u32) -> Result<Vec<Track>>;

    /// Most played songs
    async fn top(&self, size: u32) -> Result<Vec<Track>>;

    /// Search by title and/or artist
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;

    /// Songs matching a free-text mood description
    async fn by_emotion(&self, message: &str, size: u32) -> Result<Vec<Track>>;

    /// Fetch a single song
    async fn get(&self, id: TrackId) -> Result<Track>;
}

/// Like/unlike operations on behalf of the signed-in listener
#[async_trait]
pub trait LikeService: Send + Sync {
    /// Like a track, returning the backend's confirmation message
    async fn like(&self, id: TrackId) -> Result<String>;

    /// Unlike a track, returning the backend's confirmation message
    async fn unlike(&self, id: TrackId) -> Result<String>;
}

/// Generative-text service
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate text for a free-form prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
