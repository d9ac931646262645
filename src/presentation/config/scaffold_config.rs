use std::time::Duration;

const SCAFFOLD_MODE_VAR: &str = "SCAFFOLD_MODE";
const RESPONSE_DELAY_VAR: &str = "MOCK_RESPONSE_DELAY";

/// Offline mode: the hosted model is replaced by fabricated answers so the UI
/// can be exercised without credentials. Read straight from the environment,
/// outside the layered settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

impl ScaffoldConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(SCAFFOLD_MODE_VAR).ok().as_deref(),
            std::env::var(RESPONSE_DELAY_VAR).ok().as_deref(),
        )
    }

    /// Unparseable values fall back to disabled and no delay.
    pub fn from_values(mode: Option<&str>, delay_ms: Option<&str>) -> Self {
        let enabled = mode
            .map(str::trim)
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        let mock_response_delay_ms = delay_ms
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default();

        Self {
            enabled,
            mock_response_delay_ms,
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.mock_response_delay_ms)
    }
}
