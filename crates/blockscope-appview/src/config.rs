use std::env;

const DEFAULT_USER_AGENT: &str = "blockscope/0.1 (+https://github.com/blockscope/blockscope)";

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub slingshot_url: String,
    pub constellation_url: String,
    pub cors_origins: Vec<String>,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3005);

        let slingshot_url = env::var("SLINGSHOT_URL")
            .unwrap_or_else(|_| "https://slingshot.microcosm.blue".to_string());

        let constellation_url = env::var("CONSTELLATION_URL")
            .unwrap_or_else(|_| "https://constellation.microcosm.blue".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ]
            });

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30);

        let user_agent =
            env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Self {
            port,
            slingshot_url,
            constellation_url,
            cors_origins,
            http_timeout_secs,
            user_agent,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
