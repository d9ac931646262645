use std::fmt;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const ENV_PREFIX: &str = "DOCUMINER";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub upload: UploadSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
    Azure,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::LmStudio => "lmstudio",
            LlmProvider::Azure => "azure",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub azure_endpoint: Option<String>,
    #[serde(default)]
    pub azure_api_version: Option<String>,
    #[serde(default)]
    pub api_key: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub min_documents: usize,
    pub max_documents: usize,
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            min_documents: 3,
            max_documents: 10,
            max_file_size_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Settings {
    /// Layers built-in defaults, `appsettings.toml`, `appsettings.{env}.toml`
    /// and `DOCUMINER__SECTION__KEY` environment variables, later sources
    /// winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = environment.settings_file();

        with_defaults(Config::builder())?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults only, without touching the filesystem or the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        with_defaults(Config::builder())?.build()?.try_deserialize()
    }
}

fn with_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("llm.provider", "openai")?
        .set_default("llm.api_key", "")?
        .set_default("llm.chat_model", "gpt-4o-mini")?
        .set_default("llm.max_tokens", 4096)?
        .set_default("llm.temperature", 0.2)?
        .set_default("llm.request_timeout_seconds", 120)?
        .set_default("upload.min_documents", 3)?
        .set_default("upload.max_documents", 10)?
        .set_default("upload.max_file_size_mb", 10)?
        .set_default("extraction.timeout_seconds", 30)?
        .set_default("logging.level", "info")?
        .set_default("logging.enable_json", false)
}
