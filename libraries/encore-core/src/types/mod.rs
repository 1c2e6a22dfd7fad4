/// Domain types for Encore
mod ids;
mod playlist;
mod search;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId};
pub use playlist::{Playlist, UserPlaylist};
pub use search::{SearchPage, SearchQuery};
pub use track::{SongLikeEvent, Track};
pub use user::User;
