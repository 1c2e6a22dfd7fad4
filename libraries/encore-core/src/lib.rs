//! Encore Core
//!
//! Domain types, traits, and error handling shared by every Encore crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `SongLikeEvent`, etc.
//! - **Collaborator Traits**: `SongCatalog`, `LikeService`, `StoryGenerator`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//! - **Validation**: Username, email and password rules for registration
//!
//! Nothing in here performs I/O. The HTTP implementations of the traits
//! live in `encore-client`; the playback queue consumes them in
//! `encore-playback`.
//!
//! # Example
//!
//! ```rust
//! use encore_core::types::{SongLikeEvent, Track, TrackId};
//!
//! let track = Track::new(TrackId::new(7), "Song", "Artist");
//! let event = SongLikeEvent::new(track.id, true);
//!
//! let liked = track.with_liked(event.liked);
//! assert!(liked.liked_by_user);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{CoreError, Result};
pub use traits::{LikeService, SongCatalog, StoryGenerator};
