//! Curated playlist browsing.

use crate::client::Api;
use crate::error::Result;
use crate::types::{DataResponse, PageResponse};
use encore_core::types::{Playlist, PlaylistId};
use tracing::debug;

const PLAYLISTS: &str = "api/v1/app/playlists";

/// Playlist client for the Encore backend.
#[derive(Clone)]
pub struct PlaylistsClient {
    api: Api,
}

impl PlaylistsClient {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }

    /// Random selection of playlists (without songs).
    pub async fn random(&self, size: u32) -> Result<Vec<Playlist>> {
        let response: DataResponse<Vec<Playlist>> = self
            .api
            .get(&format!("{}/random", PLAYLISTS), &[("size", size.to_string())])
            .await?;
        let playlists = response.into_data()?;

        debug!(count = playlists.len(), "Fetched random playlists");
        Ok(playlists)
    }

    /// Full playlist including its songs.
    pub async fn get(&self, id: PlaylistId) -> Result<Playlist> {
        let response: DataResponse<Playlist> =
            self.api.get(&format!("{}/{}", PLAYLISTS, id), &[]).await?;
        response.into_data()
    }

    /// Search playlists by title.
    pub async fn search(&self, title: &str, page: u32, size: u32) -> Result<Vec<Playlist>> {
        let response: PageResponse<Playlist> = self
            .api
            .get(
                &format!("{}/search", PLAYLISTS),
                &[
                    ("title", title.to_string()),
                    ("size", size.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        debug!(
            count = response.data.len(),
            total_pages = response.total_page,
            "Searched playlists"
        );
        Ok(response.data)
    }
}
