/// CLI configuration
use crate::error::{CliError, Result};
use encore_client::{DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL};
use encore_playback::{ControllerConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File read when no `--config` is given, if present
pub const DEFAULT_CONFIG_FILE: &str = "encore.toml";

/// Session file name inside the per-user data directory
pub const CREDENTIALS_FILE: &str = "credentials.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_story")]
    pub story: StorySettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_server_url")]
    pub base_url: String,

    /// Bearer token; takes precedence over the stored session
    #[serde(default)]
    pub token: Option<String>,

    /// Where `encore login` keeps the session (default: ~/.encore/credentials.toml)
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorySettings {
    #[serde(default = "default_story_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    #[serde(default = "default_retry_initial_delay_ms")]
    pub retry_initial_delay_ms: u64,

    /// Length of every track played by the simulated player
    #[serde(default = "default_simulated_track_secs")]
    pub simulated_track_secs: u64,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `encore.toml` in the working
    /// directory is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (ENCORE_SERVER__BASE_URL, ...)
        settings = settings.add_source(env);

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "server base URL is required (set ENCORE_SERVER__BASE_URL)".to_string(),
            ));
        }

        if self.story.base_url.trim().is_empty() {
            return Err(CliError::Config("story base URL must not be empty".to_string()));
        }

        if self.playback.progress_interval_ms == 0 {
            return Err(CliError::Config(
                "playback.progress_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.playback.retry_max_attempts,
            initial_delay: Duration::from_millis(self.playback.retry_initial_delay_ms),
            ..RetryPolicy::default()
        }
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            progress_interval: Duration::from_millis(self.playback.progress_interval_ms),
            retry: self.retry_policy(),
        }
    }

    pub fn simulated_track_length(&self) -> Duration {
        Duration::from_secs(self.playback.simulated_track_secs)
    }

    pub fn credentials_path(&self) -> PathBuf {
        match &self.server.credentials_file {
            Some(path) => path.clone(),
            None => data_dir().join(CREDENTIALS_FILE),
        }
    }
}

/// `~/.encore`, or `.encore` in the working directory without a home
fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".encore"))
        .unwrap_or_else(|| PathBuf::from(".encore"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("ENCORE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        base_url: default_server_url(),
        token: None,
        credentials_file: None,
    }
}

fn default_server_url() -> String {
    "http://localhost:8081/".to_string()
}

fn default_story() -> StorySettings {
    StorySettings {
        base_url: default_story_url(),
        model: default_model(),
        api_key: None,
    }
}

fn default_story_url() -> String {
    DEFAULT_GEMINI_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        progress_interval_ms: default_progress_interval_ms(),
        retry_max_attempts: default_retry_max_attempts(),
        retry_initial_delay_ms: default_retry_initial_delay_ms(),
        simulated_track_secs: default_simulated_track_secs(),
    }
}

fn default_progress_interval_ms() -> u64 {
    500
}

fn default_retry_max_attempts() -> u32 {
    3
}

fn default_retry_initial_delay_ms() -> u64 {
    1000
}

fn default_simulated_track_secs() -> u64 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            story: default_story(),
            playback: default_playback(),
        }
    }
}
