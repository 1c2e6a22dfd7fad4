//! Subcommand implementations
//!
//! Results go to stdout; diagnostics go through `tracing`.

use crate::container::AppContext;
use crate::credentials::Credentials;
use crate::error::{CliError, Result};
use encore_client::ClientError;
use encore_core::types::{PlaylistId, SearchPage, SearchQuery, Track, TrackId, UserPlaylist};
use encore_playback::story::prompt_for;
use encore_playback::{PlaybackStatus, QueueController, QueueState, RepeatMode};
use std::path::Path;
use tracing::{debug, info, warn};

/// Sign in and keep the session for later commands
pub async fn login(ctx: &AppContext, username: &str, password: &str) -> Result<()> {
    let token = ctx.client.login(username, password).await?;
    info!("Signed in as {}", username);

    ctx.credentials.save(&Credentials {
        token,
        account: username.to_string(),
    })?;

    println!("Signed in as {}", username);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.client.logout().await;

    if ctx.credentials.clear()? {
        println!("Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

pub async fn register(ctx: &AppContext, username: &str, email: &str, password: &str) -> Result<()> {
    let message = ctx.client.register(username, email, password).await?;
    println!("{}", message);
    println!("Finish with: encore confirm --user {} <code>", username);
    Ok(())
}

pub async fn confirm(ctx: &AppContext, username_or_email: &str, otp: &str) -> Result<()> {
    let message = ctx
        .client
        .confirm_registration(username_or_email, otp)
        .await?;
    println!("{}", message);
    Ok(())
}

/// Show the signed-in profile
pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let user = ctx.client.users().me().await?;
    println!("{} <{}>", user.username, user.email);
    println!("Member since {}", user.create_date);
    Ok(())
}

pub async fn avatar(ctx: &AppContext, image: &Path) -> Result<()> {
    let user = ctx.client.users().upload_avatar(image).await?;
    println!("Avatar updated for {}", user.username);
    Ok(())
}

pub async fn random(ctx: &AppContext, size: u32) -> Result<()> {
    let tracks = ctx.client.songs().random(size).await?;
    print_tracks(&tracks);
    Ok(())
}

pub async fn top(ctx: &AppContext, size: u32) -> Result<()> {
    let tracks = ctx.client.songs().top_listened(size).await?;
    print_tracks(&tracks);
    Ok(())
}

pub async fn search(
    ctx: &AppContext,
    title: Option<String>,
    artist: Option<String>,
    page: u32,
    size: u32,
) -> Result<()> {
    if title.is_none() && artist.is_none() {
        return Err(CliError::Config(
            "search needs --title or --artist".to_string(),
        ));
    }

    let query = SearchQuery {
        title,
        artist,
        page,
        size,
    };
    let results = ctx.client.songs().search(&query).await?;
    print_page(&results);
    Ok(())
}

pub async fn emotion(ctx: &AppContext, message: &str, size: u32) -> Result<()> {
    let tracks = ctx.client.songs().by_emotion(message, size).await?;
    print_tracks(&tracks);
    Ok(())
}

/// Top and random songs, each fetched with retry
pub async fn feed(ctx: &AppContext, size: u32) -> Result<()> {
    let policy = ctx.config.retry_policy();
    let songs = ctx.client.songs();

    let top = policy
        .run_if("Top songs", || songs.top_listened(size), ClientError::is_transient)
        .await?;
    let random = policy
        .run_if("Random songs", || songs.random(size), ClientError::is_transient)
        .await?;

    println!("Top listened");
    print_tracks(&top);
    println!();
    println!("Discover");
    print_tracks(&random);
    Ok(())
}

pub async fn like(ctx: &AppContext, id: i64) -> Result<()> {
    let message = ctx.likes.like(TrackId::new(id)).await?;
    println!("{}", message);
    Ok(())
}

pub async fn unlike(ctx: &AppContext, id: i64) -> Result<()> {
    let message = ctx.likes.unlike(TrackId::new(id)).await?;
    println!("{}", message);
    Ok(())
}

// ===== User playlists =====

pub async fn playlists(ctx: &AppContext) -> Result<()> {
    let playlists = ctx.client.users().playlists().await?;
    if playlists.is_empty() {
        println!("No playlists yet");
        return Ok(());
    }

    for playlist in &playlists {
        println!("{}", format_playlist(playlist));
    }
    Ok(())
}

pub async fn show_playlist(ctx: &AppContext, id: i64) -> Result<()> {
    let playlist = ctx.client.users().playlist(PlaylistId::new(id)).await?;
    println!("{}", format_playlist(&playlist));
    println!();
    print_tracks(playlist.tracks());
    Ok(())
}

pub async fn create_playlist(ctx: &AppContext, title: &str, description: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CliError::Config("playlist title must not be empty".to_string()));
    }

    let message = ctx
        .client
        .users()
        .create_playlist(title, description)
        .await?;
    println!("{}", message);
    Ok(())
}

/// Change title and/or description, keeping whatever is not given
pub async fn edit_playlist(
    ctx: &AppContext,
    id: i64,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if title.is_none() && description.is_none() {
        return Err(CliError::Config(
            "edit needs --title or --description".to_string(),
        ));
    }

    let users = ctx.client.users();
    let id = PlaylistId::new(id);
    let current = users.playlist(id).await?;

    let title = title.unwrap_or(current.title);
    let description = description.unwrap_or(current.description);
    let message = users.update_playlist(id, &title, &description).await?;
    println!("{}", message);
    Ok(())
}

pub async fn delete_playlist(ctx: &AppContext, id: i64) -> Result<()> {
    let message = ctx
        .client
        .users()
        .delete_playlist(PlaylistId::new(id))
        .await?;
    println!("{}", message);
    Ok(())
}

pub async fn add_to_playlist(ctx: &AppContext, playlist: i64, song: i64) -> Result<()> {
    let message = ctx
        .client
        .users()
        .add_to_playlist(PlaylistId::new(playlist), TrackId::new(song))
        .await?;
    println!("{}", message);
    Ok(())
}

pub async fn remove_from_playlist(ctx: &AppContext, playlist: i64, song: i64) -> Result<()> {
    let message = ctx
        .client
        .users()
        .remove_from_playlist(PlaylistId::new(playlist), TrackId::new(song))
        .await?;
    println!("{}", message);
    Ok(())
}

pub async fn story(ctx: &AppContext, id: i64) -> Result<()> {
    let track = ctx.client.songs().get(TrackId::new(id)).await?;
    let story = ctx.stories.generate(&prompt_for(&track)).await?;

    println!("{} by {}", track.title, track.artist);
    println!();
    println!("{}", story);
    Ok(())
}

/// Play songs through the simulated player until the queue ends
///
/// With repeat All or One the queue never ends; Ctrl-C stops playback.
pub async fn play(ctx: &AppContext, ids: &[i64], shuffle: bool, repeat: RepeatMode) -> Result<()> {
    let policy = ctx.config.retry_policy();
    let songs = ctx.client.songs();

    let mut tracks = Vec::with_capacity(ids.len());
    for &id in ids {
        let id = TrackId::new(id);
        let track = policy
            .run_if("Song lookup", || songs.get(id), ClientError::is_transient)
            .await?;
        tracks.push(track);
    }

    let controller = ctx.controller()?;
    let mut updates = controller.subscribe();

    controller.set_queue(tracks);
    set_repeat_mode(&controller, repeat);
    if shuffle {
        controller.toggle_shuffle_mode();
    }

    let mut last = controller.state();
    report(None, &last);

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let outcome = loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let state = updates.borrow_and_update().clone();
                report(Some(&last), &state);

                match state.status() {
                    PlaybackStatus::Idle => {
                        info!("Queue finished");
                        break Ok(());
                    }
                    PlaybackStatus::Failed => {
                        let title = state
                            .current_track()
                            .map(|t| t.title.clone())
                            .unwrap_or_default();
                        break Err(CliError::PlaybackFailed(title));
                    }
                    _ => {}
                }
                last = state;
            }
            _ = &mut interrupt => {
                info!("Interrupted, stopping playback");
                break Ok(());
            }
        }
    };

    controller.dispose();
    outcome
}

fn set_repeat_mode(controller: &QueueController, mode: RepeatMode) {
    // Off -> All -> One; at most two steps from the initial Off
    for _ in 0..3 {
        if controller.state().repeat_mode() == mode {
            return;
        }
        controller.cycle_repeat_mode();
    }
    warn!("Could not select repeat mode {:?}", mode);
}

/// Log what changed between two queue snapshots
fn report(previous: Option<&QueueState>, state: &QueueState) {
    let previous_track = previous.and_then(QueueState::current_track);
    let previous_status = previous.map(QueueState::status);

    if let Some(track) = state.current_track() {
        let changed = previous_track.map_or(true, |p| !p.same_track(track));
        if changed {
            let position = state.current_index().map_or(0, |i| i + 1);
            println!(
                "[{}/{}] {} by {}",
                position,
                state.len(),
                track.title,
                track.artist
            );
        }
    }

    if previous_status != Some(state.status()) {
        debug!(
            status = ?state.status(),
            index = ?state.current_index(),
            shuffle = state.shuffle_mode(),
            repeat = ?state.repeat_mode(),
            "Queue state changed"
        );
    }
}

fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        println!("No songs found");
        return;
    }

    for track in tracks {
        println!("{}", format_track(track));
    }
}

fn print_page(page: &SearchPage) {
    print_tracks(&page.tracks);
    println!(
        "Page {} of {} ({} results)",
        page.current_page + 1,
        page.total_pages.max(1),
        page.records
    );
}

pub fn format_playlist(playlist: &UserPlaylist) -> String {
    if playlist.description.is_empty() {
        format!("{:>6}  {}", playlist.id.get(), playlist.title)
    } else {
        format!(
            "{:>6}  {} - {}",
            playlist.id.get(),
            playlist.title,
            playlist.description
        )
    }
}

pub fn format_track(track: &Track) -> String {
    let minutes = track.length_secs / 60;
    let seconds = track.length_secs % 60;
    let heart = if track.liked_by_user { " ♥" } else { "" };

    format!(
        "{:>6}  {} by {} ({}:{:02}){}",
        track.id.get(),
        track.title,
        track.artist,
        minutes,
        seconds,
        heart
    )
}
