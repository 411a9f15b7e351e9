use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub maps: MapsSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

/// Completion service settings. `api_key` is optional here so the server can
/// still start; the chat endpoint reports the missing key per request.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    pub request_timeout_secs: Option<u64>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: None,
        }
    }
}

fn default_openai_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_max_tokens() -> u32 { 150 }
fn default_temperature() -> f32 { 0.1 }

/// Google Maps settings. Without `api_key` the distance lookup is skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct MapsSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_distance_matrix_url")]
    pub distance_matrix_url: String,
    #[serde(default = "default_directions_base_url")]
    pub directions_base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for MapsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            distance_matrix_url: default_distance_matrix_url(),
            directions_base_url: default_directions_base_url(),
            request_timeout_secs: None,
        }
    }
}

fn default_distance_matrix_url() -> String {
    "https://maps.googleapis.com/maps/api/distancematrix/json".to_string()
}
fn default_directions_base_url() -> String { "https://www.google.com/maps/dir".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// `*` or a comma separated list of origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsSettings {
    /// Explicit origins, or `None` when every origin is allowed
    pub fn origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

fn default_allowed_origins() -> String { "*".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FOODAPI__)
    /// 4. Plain deployment variables (OPENAI_API_KEY, GOOGLE_MAPS_API_KEY, PORT, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOODAPI__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FOODAPI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FOODAPI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the plain environment variables the service has always been
/// deployed with on top of the layered config.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = non_empty("OPENAI_API_KEY") {
        builder = builder.set_override("openai.api_key", api_key)?;
    }
    if let Some(api_key) = non_empty("GOOGLE_MAPS_API_KEY") {
        builder = builder.set_override("maps.api_key", api_key)?;
    }
    if let Some(port) = non_empty("PORT") {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid PORT '{}': {}", port, e)))?;
        builder = builder.set_override("server.port", port as i64)?;
    }
    if let Some(origins) = non_empty("CORS_ORIGINS") {
        builder = builder.set_override("cors.allowed_origins", origins)?;
    }
    if let Some(level) = non_empty("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Some(format) = non_empty("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
