use crate::presentation::config::{Environment, LoggingSettings};

/// What `init_tracing` needs from the loaded settings.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            level: logging.level.clone(),
            json_format: logging.enable_json,
        }
    }
}
