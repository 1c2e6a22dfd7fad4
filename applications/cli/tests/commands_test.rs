//! End-to-end command tests against a mock backend.

use encore_cli::{commands, AppConfig, AppContext, CliError, CredentialStore, Credentials};
use encore_client::ClientError;
use encore_playback::RepeatMode;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn song_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "artist": "Artist",
        "album": "Album",
        "albumImgBase64": "",
        "genre": "Pop",
        "length": 1,
        "releaseDate": "2020-01-01",
        "playCount": 0,
        "likeCount": 0,
        "likedByUser": false
    })
}

fn config(server: &MockServer, session_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.base_url = server.uri();
    config.server.credentials_file = Some(session_dir.join("credentials.toml"));
    config.playback.progress_interval_ms = 10;
    config.playback.retry_initial_delay_ms = 1;
    config.playback.simulated_track_secs = 0;
    config
}

fn context(server: &MockServer) -> AppContext {
    let session_dir = std::env::temp_dir().join("encore-cli-tests-unused");
    let mut config = config(server, &session_dir);
    config.server.token = Some("tok".to_string());
    AppContext::new(config).unwrap()
}

async fn mount_song(server: &MockServer, id: i64, title: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/app/songs/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": song_json(id, title)
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn play_runs_queue_to_the_end() {
    let server = MockServer::start().await;
    mount_song(&server, 1, "One").await;
    mount_song(&server, 2, "Two").await;
    mount_song(&server, 3, "Three").await;

    let ctx = context(&server);

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        commands::play(&ctx, &[1, 2, 3], true, RepeatMode::Off),
    )
    .await
    .expect("playback did not finish");

    assert!(result.is_ok(), "play failed: {:?}", result);
}

#[tokio::test]
async fn play_fails_for_unknown_song() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app/songs/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "msg": "Song not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);

    let result = commands::play(&ctx, &[404], false, RepeatMode::Off).await;
    assert!(matches!(
        result,
        Err(CliError::Client(ClientError::Api { status: 404, .. }))
    ));
}

#[tokio::test]
async fn feed_retries_transient_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app/songs/top-listen"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app/songs/top-listen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": [song_json(1, "One")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app/songs/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": [song_json(2, "Two")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);

    commands::feed(&ctx, 10).await.unwrap();
}

#[tokio::test]
async fn search_requires_criteria() {
    let server = MockServer::start().await;
    let ctx = context(&server);

    let result = commands::search(&ctx, None, None, 0, 20).await;
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[tokio::test]
async fn story_without_api_key_fails() {
    let server = MockServer::start().await;
    mount_song(&server, 5, "Five").await;

    let ctx = context(&server);

    let result = commands::story(&ctx, 5).await;
    assert!(matches!(
        result,
        Err(CliError::Client(ClientError::MissingApiKey))
    ));
}

#[tokio::test]
async fn login_persists_session_for_later_commands() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "usernameOrEmail": "ada", "password": "Secret_123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "token": "fresh-token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/playlists"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": [{ "id": 1, "title": "Gym", "description": "" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = AppContext::new(config(&server, dir.path())).unwrap();
    commands::login(&ctx, "ada", "Secret_123").await.unwrap();

    let stored = ctx.credentials.load().unwrap().unwrap();
    assert_eq!(stored.token, "fresh-token");
    assert_eq!(stored.account, "ada");

    // a new invocation picks the session up from disk
    let ctx = AppContext::new(config(&server, dir.path())).unwrap();
    assert_eq!(ctx.client.token().await.as_deref(), Some("fresh-token"));
    commands::playlists(&ctx).await.unwrap();
}

#[tokio::test]
async fn configured_token_wins_over_stored_session() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    CredentialStore::new(dir.path().join("credentials.toml"))
        .save(&Credentials {
            token: "stored".to_string(),
            account: "ada".to_string(),
        })
        .unwrap();

    let mut config = config(&server, dir.path());
    config.server.token = Some("configured".to_string());
    let ctx = AppContext::new(config).unwrap();

    assert_eq!(ctx.client.token().await.as_deref(), Some("configured"));
}

#[tokio::test]
async fn logout_forgets_session() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join("credentials.toml"));
    store
        .save(&Credentials {
            token: "stored".to_string(),
            account: "ada".to_string(),
        })
        .unwrap();

    let ctx = AppContext::new(config(&server, dir.path())).unwrap();
    assert!(ctx.client.is_authenticated().await);

    commands::logout(&ctx).await.unwrap();

    assert!(!ctx.client.is_authenticated().await);
    assert_eq!(store.load().unwrap(), None);

    let result = commands::playlists(&ctx).await;
    assert!(matches!(
        result,
        Err(CliError::Client(ClientError::AuthRequired))
    ));
}

#[tokio::test]
async fn edit_playlist_keeps_unchanged_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/playlists/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": { "id": 3, "title": "Gym", "description": "Fast songs" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/users/playlists/3"))
        .and(body_json(json!({ "title": "Running", "description": "Fast songs" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "Playlist updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);

    commands::edit_playlist(&ctx, 3, Some("Running".to_string()), None)
        .await
        .unwrap();

    let result = commands::edit_playlist(&ctx, 3, None, None).await;
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[tokio::test]
async fn register_validates_before_sending() {
    let server = MockServer::start().await;
    let ctx = context(&server);

    let result = commands::register(&ctx, "ada", "ada@example.com", "Secret_123").await;
    assert!(matches!(
        result,
        Err(CliError::Client(ClientError::Validation(_)))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
