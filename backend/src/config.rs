use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Markers shipped in the sample settings; a value containing one of these
/// has never been filled in and must not be used to open a connection.
const ENDPOINT_PLACEHOLDER: &str = "your-resource-name";
const API_KEY_PLACEHOLDER: &str = "your-api-key";
const DB_PASSWORD_PLACEHOLDER: &str = "YOUR-PASSWORD-HERE";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub azure_openai: AzureOpenAIConfig,
    pub database: DatabaseConfig,
    pub assistant: AssistantConfig,
    /// Path of the file this configuration was read from.
    /// `None` means no file was found and every value is a default.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Azure OpenAI deployment and sampling parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AzureOpenAIConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    /// Request timeout in seconds (accepts 60, "60s", "1m")
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub enabled: bool,
    pub url: String,
    pub max_connections: u32,
}

/// Static assistant persona and knowledge served to the chat widget
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    pub version: String,
    pub welcome_message: String,
    pub system_prompt: String,
    pub knowledge_base: KnowledgeBaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    pub organization: String,
    pub services: Vec<String>,
    pub website: String,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the explicit path, or the first config.toml found
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(explicit_path: Option<&str>) -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let mut config = match explicit_path {
            Some(path) => Self::from_toml(path)?,
            None => match Self::find_config_file() {
                Some(path) => Self::from_toml(&path)?,
                None => {
                    tracing::warn!("Configuration file not found, using defaults");
                    Config::default()
                },
            },
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Whether a configuration file was actually read
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT / PORT: Server port (default: 8000, APP_SERVER_PORT wins)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,zoota_backend=debug")
    /// - APP_AZURE_OPENAI_ENDPOINT: Azure OpenAI resource endpoint
    /// - APP_AZURE_OPENAI_API_KEY: Azure OpenAI API key
    /// - APP_AZURE_OPENAI_DEPLOYMENT: Deployment name (e.g., "gpt-4o")
    /// - APP_DATABASE_ENABLED: Enable/disable the knowledge database (true/false)
    /// - APP_DATABASE_URL: Knowledge database URL
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        let port = std::env::var("APP_SERVER_PORT").or_else(|_| std::env::var("PORT"));
        if let Ok(port) = port
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(endpoint) = std::env::var("APP_AZURE_OPENAI_ENDPOINT") {
            self.azure_openai.endpoint = endpoint;
            tracing::info!("Override azure_openai.endpoint from env");
        }

        if let Ok(key) = std::env::var("APP_AZURE_OPENAI_API_KEY") {
            self.azure_openai.api_key = key;
            tracing::info!("Override azure_openai.api_key from env");
        }

        if let Ok(deployment) = std::env::var("APP_AZURE_OPENAI_DEPLOYMENT") {
            self.azure_openai.deployment_name = deployment;
            tracing::info!(
                "Override azure_openai.deployment_name from env: {}",
                self.azure_openai.deployment_name
            );
        }

        if let Ok(enabled) = std::env::var("APP_DATABASE_ENABLED")
            && let Ok(val) = enabled.parse()
        {
            self.database.enabled = val;
            tracing::info!("Override database.enabled from env: {}", self.database.enabled);
        }

        if let Ok(db_url) = std::env::var("APP_DATABASE_URL") {
            self.database.url = db_url;
            tracing::info!("Override database.url from env");
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        let azure = &self.azure_openai;
        if azure.max_tokens == 0 {
            anyhow::bail!("azure_openai.max_tokens must be > 0");
        }
        if !(0.0..=2.0).contains(&azure.temperature) {
            anyhow::bail!("azure_openai.temperature must be within 0.0..=2.0");
        }
        if !(0.0..=1.0).contains(&azure.top_p) {
            anyhow::bail!("azure_openai.top_p must be within 0.0..=1.0");
        }
        if !(-2.0..=2.0).contains(&azure.frequency_penalty)
            || !(-2.0..=2.0).contains(&azure.presence_penalty)
        {
            anyhow::bail!("azure_openai penalties must be within -2.0..=2.0");
        }
        if azure.timeout_secs == 0 {
            anyhow::bail!("azure_openai.timeout_secs must be > 0");
        }

        if self.database.enabled && self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be > 0");
        }

        if !azure.is_configured() {
            tracing::warn!("⚠️  Azure OpenAI credentials missing or placeholders");
            tracing::warn!("⚠️  Chat requests will be answered with canned responses");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths = [
            "conf/config.toml",
            "config.toml",
            "./conf/config.toml",
            "/home/site/wwwroot/conf/config.toml",
        ];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.source = Some(PathBuf::from(path));
        tracing::info!("Found configuration file at: {}", path);
        Ok(config)
    }
}

impl AzureOpenAIConfig {
    /// True when real credentials are present (not empty, not placeholders)
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
            && !self.api_key.trim().is_empty()
            && !self.endpoint.contains(ENDPOINT_PLACEHOLDER)
            && !self.api_key.contains(API_KEY_PLACEHOLDER)
    }
}

impl DatabaseConfig {
    /// True when the knowledge database is enabled and has a usable URL
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.url.trim().is_empty() && !self.url.contains(DB_PASSWORD_PLACEHOLDER)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,zoota_backend=debug".to_string(), file: None }
    }
}

impl Default for AzureOpenAIConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            api_version: "2024-08-01-preview".to_string(),
            deployment_name: "gpt-4o".to_string(),
            max_tokens: 800,
            temperature: 0.7,
            top_p: 0.95,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            timeout_secs: 60,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { enabled: false, url: "sqlite://data/knowledge.db".to_string(), max_connections: 5 }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Zoota AI Assistant".to_string(),
            version: "1.0.0".to_string(),
            welcome_message: String::new(),
            system_prompt: String::new(),
            knowledge_base: KnowledgeBaseConfig::default(),
        }
    }
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            organization: "OrkinosAI".to_string(),
            services: Vec::new(),
            website: "https://www.orkinosai.com".to_string(),
        }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Accept plain numbers (treated as seconds)
    if let Ok(val) = input.parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(n),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(n * 60),
        _ => Err(format!("unsupported unit: {}", unit)),
    }
}

// Accepts either a number of seconds or a human-friendly string
fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '30s', '1m'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}
