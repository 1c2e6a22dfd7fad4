/// Composition root wiring clients, notifier and controller together
use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::player::SimulatedPlayer;
use encore_client::{ClientConfig, EncoreClient, GeminiClient, GeminiConfig, LikeNotifier};
use encore_playback::QueueController;
use std::sync::Arc;
use tracing::{debug, warn};

/// Long-lived services shared by all commands
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub client: EncoreClient,
    pub likes: LikeNotifier,
    pub stories: Arc<GeminiClient>,
    pub credentials: CredentialStore,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self> {
        let credentials = CredentialStore::new(config.credentials_path());

        let token = match &config.server.token {
            Some(token) => Some(token.clone()),
            None => match credentials.load() {
                Ok(stored) => stored.map(|c| c.token),
                Err(e) => {
                    warn!(path = %credentials.path().display(), "Ignoring stored session: {}", e);
                    None
                }
            },
        };

        let client_config = match token {
            Some(token) => ClientConfig::with_token(config.server.base_url.clone(), token),
            None => ClientConfig::new(config.server.base_url.clone()),
        };
        let client = EncoreClient::new(client_config)?;

        let likes = LikeNotifier::new(Arc::new(client.users()));

        let stories = GeminiClient::new(GeminiConfig {
            url: config.story.base_url.clone(),
            model: config.story.model.clone(),
            api_key: config.story.api_key.clone(),
        })?;

        debug!(server = %config.server.base_url, "Services initialized");

        Ok(Self {
            config,
            client,
            likes,
            stories: Arc::new(stories),
            credentials,
        })
    }

    /// Build a queue controller driving a simulated player
    pub fn controller(&self) -> Result<QueueController> {
        let (player, player_events) = SimulatedPlayer::new(self.config.simulated_track_length())?;

        let controller = QueueController::new(
            Arc::new(player),
            player_events,
            Arc::new(self.client.songs()),
            self.stories.clone(),
            self.likes.subscribe(),
            self.config.controller_config(),
        )?;
        Ok(controller)
    }
}
