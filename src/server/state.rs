//! Server shared state

use crate::config::Config;
use crate::error::Result;
use crate::pharmacy::nosy::NosyDirectory;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    started: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started: Instant::now(),
        }
    }

    /// Build a directory client from the current configuration
    pub async fn directory(&self) -> Result<NosyDirectory> {
        let config = self.config.read().await;
        NosyDirectory::from_config(&config)
    }

    /// Whether an API token is available
    pub async fn directory_configured(&self) -> bool {
        !self.config.read().await.api_token().is_empty()
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
