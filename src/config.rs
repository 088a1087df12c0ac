use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Settings used by the browser-facing pages
    pub frontend: FrontendConfig,
    /// Slide presentation settings
    pub presentation: PresentationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Origin allowed by CORS (e.g., http://localhost:3000)
    pub cors_origin: String,
    /// Deployment environment name, reported at startup
    pub environment: String,
}

/// Browser-facing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Base URL of the API probed by the home page
    pub api_url: String,
    /// HTTP request timeout in seconds. Set to -1 to disable timeout.
    pub request_timeout_seconds: i64,
}

/// Slide presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Start presentations in auto-play mode
    pub auto_play: bool,
    /// Delay before auto-play advances to the next slide
    pub auto_play_duration_ms: u64,
    /// YAML or JSON deck to present instead of the built-in demo deck
    #[serde(default)]
    pub deck_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from defaults, an optional config.yaml file and
    /// the environment
    ///
    /// Environment variable overrides:
    /// - `HOST`, `PORT` - Bind address
    /// - `CORS_ORIGIN` - Allowed CORS origin
    /// - `NODE_ENV` - Environment name
    /// - `NEXT_PUBLIC_API_URL` - API base URL probed by the home page
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Configuration is invalid (malformed YAML, wrong field types)
    /// - URL validation fails
    /// - The auto-play duration is zero
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config.yaml"), |key| std::env::var(key).ok())
    }

    fn load_from(
        file: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("server.cors_origin", "http://localhost:3000")?
            .set_default("server.environment", "development")?
            .set_default("frontend.api_url", "http://localhost:3001")?
            .set_default("frontend.request_timeout_seconds", 5)?
            .set_default("presentation.auto_play", false)?
            .set_default("presentation.auto_play_duration_ms", 5000)?
            // Load from config.yaml (optional)
            .add_source(
                config::File::from(file)
                    .required(false)
                    .format(config::FileFormat::Yaml),
            )
            // Override with environment variables (optional)
            .set_override_option("server.host", env("HOST"))?
            .set_override_option("server.port", env("PORT"))?
            .set_override_option("server.cors_origin", env("CORS_ORIGIN"))?
            .set_override_option("server.environment", env("NODE_ENV"))?
            .set_override_option("frontend.api_url", env("NEXT_PUBLIC_API_URL"))?
            .build()?;

        let cfg: Config = config.try_deserialize()?;

        // Validate configuration
        cfg.validate()?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if let Err(e) = Self::validate_url(&self.server.cors_origin, "CORS origin") {
            return Err(config::ConfigError::Message(e));
        }

        if let Err(e) = Self::validate_url(&self.frontend.api_url, "API") {
            return Err(config::ConfigError::Message(e));
        }

        if self.presentation.auto_play_duration_ms == 0 {
            return Err(config::ConfigError::Message(
                "Auto-play duration must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(url: &str, context: &str) -> Result<(), String> {
        if url.is_empty() {
            return Err(format!("{} URL cannot be empty", context));
        }

        match url.parse::<url::Url>() {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(format!(
                        "{} URL must use http:// or https:// scheme",
                        context
                    ));
                }

                if parsed_url.host_str().is_none() {
                    return Err(format!("{} URL must have a valid host", context));
                }

                Ok(())
            }
            Err(e) => Err(format!("{} URL is invalid: {}", context, e)),
        }
    }
}
