/// Encore - terminal client for the Encore streaming backend
use clap::{Parser, Subcommand, ValueEnum};
use encore_cli::{commands, AppConfig, AppContext};
use encore_playback::RepeatMode;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Encore music streaming client", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./encore.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        /// Username or email
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "ENCORE_PASSWORD")]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Create an account; a confirmation code is emailed
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "ENCORE_PASSWORD")]
        password: String,
    },
    /// Activate an account with the emailed code
    Confirm {
        /// Username or email
        #[arg(short, long)]
        user: String,
        otp: String,
    },
    /// Show the signed-in profile
    Whoami,
    /// Upload a new avatar image
    Avatar { image: PathBuf },
    /// Manage your playlists
    Playlist {
        #[command(subcommand)]
        action: PlaylistAction,
    },
    /// List random songs
    Random {
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
    /// List the most played songs
    Top {
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
    /// Search songs by title and/or artist
    Search {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        artist: Option<String>,
        /// Zero-based page
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(short, long, default_value_t = 20)]
        size: u32,
    },
    /// Find songs matching a mood description
    Emotion {
        /// How you feel, in your own words
        message: String,
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
    /// Home feed: top and random songs
    Feed {
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
    /// Like a song
    Like { id: i64 },
    /// Remove a like
    Unlike { id: i64 },
    /// Generate a short story about a song
    Story { id: i64 },
    /// Play songs until the queue ends
    Play {
        /// Song IDs in queue order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
        /// Shuffle the queue, keeping the first song in place
        #[arg(long)]
        shuffle: bool,
        /// Repeat mode
        #[arg(long, value_enum, default_value_t = Repeat::Off)]
        repeat: Repeat,
    },
}

#[derive(Subcommand)]
enum PlaylistAction {
    /// List your playlists
    List,
    /// Show a playlist with its songs
    Show { id: i64 },
    /// Create an empty playlist
    Create {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Change title or description
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a playlist
    Delete { id: i64 },
    /// Add a song to a playlist
    Add { playlist: i64, song: i64 },
    /// Remove a song from a playlist
    Remove { playlist: i64, song: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum Repeat {
    Off,
    All,
    One,
}

impl From<Repeat> for RepeatMode {
    fn from(repeat: Repeat) -> Self {
        match repeat {
            Repeat::Off => RepeatMode::Off,
            Repeat::All => RepeatMode::All,
            Repeat::One => RepeatMode::One,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=info,encore_cli=info,encore_playback=info,encore_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::login(&ctx, &username, &password).await?;
        }
        Commands::Logout => commands::logout(&ctx).await?,
        Commands::Register {
            username,
            email,
            password,
        } => commands::register(&ctx, &username, &email, &password).await?,
        Commands::Confirm { user, otp } => commands::confirm(&ctx, &user, &otp).await?,
        Commands::Whoami => commands::whoami(&ctx).await?,
        Commands::Avatar { image } => commands::avatar(&ctx, &image).await?,
        Commands::Playlist { action } => match action {
            PlaylistAction::List => commands::playlists(&ctx).await?,
            PlaylistAction::Show { id } => commands::show_playlist(&ctx, id).await?,
            PlaylistAction::Create { title, description } => {
                commands::create_playlist(&ctx, &title, &description).await?;
            }
            PlaylistAction::Edit {
                id,
                title,
                description,
            } => commands::edit_playlist(&ctx, id, title, description).await?,
            PlaylistAction::Delete { id } => commands::delete_playlist(&ctx, id).await?,
            PlaylistAction::Add { playlist, song } => {
                commands::add_to_playlist(&ctx, playlist, song).await?;
            }
            PlaylistAction::Remove { playlist, song } => {
                commands::remove_from_playlist(&ctx, playlist, song).await?;
            }
        },
        Commands::Random { size } => commands::random(&ctx, size).await?,
        Commands::Top { size } => commands::top(&ctx, size).await?,
        Commands::Search {
            title,
            artist,
            page,
            size,
        } => commands::search(&ctx, title, artist, page, size).await?,
        Commands::Emotion { message, size } => commands::emotion(&ctx, &message, size).await?,
        Commands::Feed { size } => commands::feed(&ctx, size).await?,
        Commands::Like { id } => commands::like(&ctx, id).await?,
        Commands::Unlike { id } => commands::unlike(&ctx, id).await?,
        Commands::Story { id } => commands::story(&ctx, id).await?,
        Commands::Play {
            ids,
            shuffle,
            repeat,
        } => commands::play(&ctx, &ids, shuffle, repeat.into()).await?,
    }

    Ok(())
}
