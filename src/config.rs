use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Base URLs and timeouts for every external API the gateway talks to.
/// API keys are not part of this struct; they are read from the process
/// environment so they never end up in a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub open_notify_url: String,
    pub donki_url: String,
    pub launch_library_url: String,
    pub groq_url: String,
    pub tavily_url: String,
    pub nasa_images_url: String,
    pub apod_url: String,
    /// Per-call timeout for data feeds, in seconds.
    pub timeout_secs: u64,
    /// Per-call timeout for the AI providers, in seconds. These are slower.
    pub insight_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5003,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            open_notify_url: "http://api.open-notify.org/iss-now.json".to_string(),
            donki_url: "https://api.nasa.gov/DONKI".to_string(),
            launch_library_url: "https://ll.thespacedevs.com/2.2.0".to_string(),
            groq_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            tavily_url: "https://api.tavily.com/v1/search".to_string(),
            nasa_images_url: "https://images-api.nasa.gov".to_string(),
            apod_url: "https://api.nasa.gov/planetary/apod".to_string(),
            timeout_secs: 8,
            insight_timeout_secs: 15,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file, and
    /// environment variables prefixed with "ASTRO_".
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name("config").required(false));

        config = config.add_source(
            config::Environment::with_prefix("ASTRO")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl UpstreamConfig {
    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn insight_timeout(&self) -> Duration {
        Duration::from_secs(self.insight_timeout_secs)
    }
}
