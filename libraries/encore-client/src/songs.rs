//! Song catalogue operations for the Encore backend.

use crate::client::Api;
use crate::error::{ClientError, Result};
use crate::types::{DataResponse, PageResponse};
use async_trait::async_trait;
use encore_core::types::{SearchPage, SearchQuery, Track, TrackId};
use encore_core::SongCatalog;
use tracing::debug;

const SONGS: &str = "api/v1/app/songs";

/// Song catalogue client.
#[derive(Clone)]
pub struct SongsClient {
    api: Api,
}

impl SongsClient {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }

    /// URI the media player streams a song from.
    pub async fn stream_url(&self, id: TrackId) -> String {
        self.api.url(&format!("{}/stream/{}", SONGS, id)).await
    }

    /// Random selection of songs.
    pub async fn random(&self, size: u32) -> Result<Vec<Track>> {
        let response: DataResponse<Vec<Track>> = self
            .api
            .get(&format!("{}/random", SONGS), &[("size", size.to_string())])
            .await?;
        let tracks = response.into_data()?;

        debug!(count = tracks.len(), "Fetched random songs");
        Ok(tracks)
    }

    /// Most played songs.
    pub async fn top_listened(&self, size: u32) -> Result<Vec<Track>> {
        let response: DataResponse<Vec<Track>> = self
            .api
            .get(&format!("{}/top-listen", SONGS), &[("size", size.to_string())])
            .await?;
        let tracks = response.into_data()?;

        debug!(count = tracks.len(), "Fetched top songs");
        Ok(tracks)
    }

    /// Search by title and/or artist.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let mut params = Vec::new();
        if let Some(title) = &query.title {
            params.push(("title", title.clone()));
        }
        if let Some(artist) = &query.artist {
            params.push(("artist", artist.clone()));
        }
        params.push(("page", query.page.to_string()));
        params.push(("size", query.size.to_string()));

        let response: PageResponse<Track> =
            self.api.get(&format!("{}/search", SONGS), &params).await?;
        let page = SearchPage::from(response);

        debug!(
            page = page.current_page,
            total_pages = page.total_pages,
            results = page.tracks.len(),
            "Searched songs"
        );
        Ok(page)
    }

    /// Songs matching a free-text mood description.
    pub async fn by_emotion(&self, message: &str, size: u32) -> Result<Vec<Track>> {
        let response: DataResponse<Vec<Track>> = self
            .api
            .get(
                &format!("{}/emotion-search", SONGS),
                &[("message", message.to_string()), ("size", size.to_string())],
            )
            .await?;
        let tracks = response.into_data()?;

        debug!(count = tracks.len(), "Fetched songs by emotion");
        Ok(tracks)
    }

    /// Fetch a single song.
    pub async fn get(&self, id: TrackId) -> Result<Track> {
        let response: DataResponse<Track> = self.api.get(&format!("{}/{}", SONGS, id), &[]).await?;
        response.into_data()
    }
}

#[async_trait]
impl SongCatalog for SongsClient {
    async fn stream_source(&self, id: TrackId) -> encore_core::Result<String> {
        Ok(self.stream_url(id).await)
    }

    async fn random(&self, size: u32) -> encore_core::Result<Vec<Track>> {
        SongsClient::random(self, size).await.map_err(Into::into)
    }

    async fn top(&self, size: u32) -> encore_core::Result<Vec<Track>> {
        self.top_listened(size).await.map_err(Into::into)
    }

    async fn search(&self, query: &SearchQuery) -> encore_core::Result<SearchPage> {
        SongsClient::search(self, query).await.map_err(Into::into)
    }

    async fn by_emotion(&self, message: &str, size: u32) -> encore_core::Result<Vec<Track>> {
        SongsClient::by_emotion(self, message, size)
            .await
            .map_err(Into::into)
    }

    async fn get(&self, id: TrackId) -> encore_core::Result<Track> {
        SongsClient::get(self, id)
            .await
            .map_err(|e| match e {
                ClientError::Api { status: 404, .. } => {
                    encore_core::CoreError::not_found("Song", id.to_string())
                }
                other => other.into(),
            })
    }
}
