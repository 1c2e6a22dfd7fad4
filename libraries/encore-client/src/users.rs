//! Operations on behalf of the signed-in user.

use crate::client::Api;
use crate::error::{ClientError, Result};
use crate::types::{DataResponse, MessageResponse, PageResponse, UserPlaylistRequest};
use async_trait::async_trait;
use encore_core::types::{PlaylistId, SearchPage, Track, TrackId, User, UserPlaylist};
use encore_core::LikeService;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::path::Path;
use tracing::{debug, info};

const USERS: &str = "api/v1/users";

/// User client for the Encore backend.
#[derive(Clone)]
pub struct UsersClient {
    api: Api,
}

impl UsersClient {
    pub(crate) fn new(api: Api) -> Self {
        Self { api }
    }

    /// Like a song; returns the backend's message.
    pub async fn like(&self, id: TrackId) -> Result<String> {
        let response: DataResponse<String> =
            self.api.patch(&format!("{}/songs/{}/like", USERS, id)).await?;
        info!(track = %id, "Liked song");
        Ok(response.data.unwrap_or(response.msg))
    }

    /// Remove a like; returns the backend's message.
    pub async fn unlike(&self, id: TrackId) -> Result<String> {
        let response: DataResponse<String> = self
            .api
            .patch(&format!("{}/songs/{}/unlike", USERS, id))
            .await?;
        info!(track = %id, "Unliked song");
        Ok(response.data.unwrap_or(response.msg))
    }

    /// One page of the user's liked songs.
    pub async fn liked_songs(&self, page: u32, size: u32) -> Result<SearchPage> {
        let response: PageResponse<Track> = self
            .api
            .get(
                &format!("{}/songs/liked", USERS),
                &[("size", size.to_string()), ("page", page.to_string())],
            )
            .await?;
        let page = SearchPage::from(response);

        debug!(count = page.tracks.len(), "Fetched liked songs");
        Ok(page)
    }

    /// Profile of the signed-in user.
    pub async fn me(&self) -> Result<User> {
        let response: DataResponse<User> = self.api.get(USERS, &[]).await?;
        response.into_data()
    }

    /// Replace the avatar with an image file; returns the updated profile.
    pub async fn upload_avatar(&self, file_path: &Path) -> Result<User> {
        if !file_path.exists() {
            return Err(ClientError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let contents = tokio::fs::read(file_path).await?;
        let size = contents.len();

        let part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(mime_type_for_image(file_path))?;
        let form = Form::new().part("file", part);

        let response: DataResponse<User> = self
            .api
            .send_multipart(Method::PATCH, &format!("{}/avatar", USERS), form)
            .await?;

        info!(file = %file_name, size, "Avatar uploaded");
        response.into_data()
    }

    // ===== Playlists =====

    /// All playlists of the signed-in user, without their songs.
    pub async fn playlists(&self) -> Result<Vec<UserPlaylist>> {
        let response: DataResponse<Vec<UserPlaylist>> =
            self.api.get(&format!("{}/playlists", USERS), &[]).await?;
        let playlists = response.data.unwrap_or_default();

        debug!(count = playlists.len(), "Fetched user playlists");
        Ok(playlists)
    }

    /// One playlist with its songs.
    pub async fn playlist(&self, id: PlaylistId) -> Result<UserPlaylist> {
        let response: DataResponse<UserPlaylist> = self
            .api
            .get(&format!("{}/playlists/{}", USERS, id), &[])
            .await?;
        response.into_data()
    }

    /// Create an empty playlist; returns the backend's message.
    pub async fn create_playlist(&self, title: &str, description: &str) -> Result<String> {
        let body = UserPlaylistRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let response: MessageResponse = self
            .api
            .send_json(Method::POST, &format!("{}/playlists", USERS), &body)
            .await?;

        info!(title = %title, "Created playlist");
        Ok(response.msg)
    }

    /// Change title and description of a playlist.
    pub async fn update_playlist(
        &self,
        id: PlaylistId,
        title: &str,
        description: &str,
    ) -> Result<String> {
        let body = UserPlaylistRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let response: MessageResponse = self
            .api
            .send_json(Method::PATCH, &format!("{}/playlists/{}", USERS, id), &body)
            .await?;

        info!(playlist = %id, title = %title, "Updated playlist");
        Ok(response.msg)
    }

    pub async fn delete_playlist(&self, id: PlaylistId) -> Result<String> {
        let response: MessageResponse = self
            .api
            .delete(&format!("{}/playlists/{}", USERS, id))
            .await?;

        info!(playlist = %id, "Deleted playlist");
        Ok(response.msg)
    }

    pub async fn add_to_playlist(&self, playlist: PlaylistId, track: TrackId) -> Result<String> {
        let response: MessageResponse = self
            .api
            .post(&format!("{}/playlists/{}/songs/{}", USERS, playlist, track))
            .await?;

        info!(playlist = %playlist, track = %track, "Added song to playlist");
        Ok(response.msg)
    }

    pub async fn remove_from_playlist(
        &self,
        playlist: PlaylistId,
        track: TrackId,
    ) -> Result<String> {
        let response: MessageResponse = self
            .api
            .delete(&format!("{}/playlists/{}/songs/{}", USERS, playlist, track))
            .await?;

        info!(playlist = %playlist, track = %track, "Removed song from playlist");
        Ok(response.msg)
    }
}

/// MIME type for an avatar image, by extension.
fn mime_type_for_image(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl LikeService for UsersClient {
    async fn like(&self, id: TrackId) -> encore_core::Result<String> {
        UsersClient::like(self, id).await.map_err(Into::into)
    }

    async fn unlike(&self, id: TrackId) -> encore_core::Result<String> {
        UsersClient::unlike(self, id).await.map_err(Into::into)
    }
}
