/// Search request and paged result types
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Song search criteria
///
/// At least one of `title` or `artist` should be set; the backend treats a
/// missing field as "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Title substring
    pub title: Option<String>,

    /// Artist substring
    pub artist: Option<String>,

    /// Zero-based page
    pub page: u32,

    /// Page size
    pub size: u32,
}

impl SearchQuery {
    /// Search by title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            size: 20,
            ..Self::default()
        }
    }

    /// Search by artist
    pub fn artist(artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            size: 20,
            ..Self::default()
        }
    }

    /// Select a page
    #[must_use]
    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Page that was returned
    pub current_page: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// Total number of matching records
    pub records: u64,

    /// Songs on this page
    pub tracks: Vec<Track>,
}

impl SearchPage {
    /// Whether another page can be requested
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }
}
