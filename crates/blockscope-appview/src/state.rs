use std::sync::Arc;
use std::time::Duration;

use blockscope_enrichment::BlockPipeline;

use crate::config::Config;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<BlockPipeline>,
}

impl AppState {
    /// Build the upstream clients described by `config` around one HTTP client
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            pipeline: Arc::new(BlockPipeline::connect(
                client,
                &config.slingshot_url,
                &config.constellation_url,
            )),
        })
    }
}
