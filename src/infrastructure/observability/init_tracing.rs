use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

const CRATE_DIRECTIVES: &str = "documiner=debug,tower_http=debug";

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
/// Source locations are left out of production logs.
pub fn init_tracing(config: &TracingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{CRATE_DIRECTIVES}", config.level)));
    let with_source = !config.environment.is_production();

    let (json_layer, text_layer) = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(with_source)
            .with_line_number(with_source);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_file(with_source)
            .with_line_number(with_source);
        (None, Some(layer))
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(
            environment = %config.environment,
            level = %config.level,
            json = config.json_format,
            "Logging ready"
        ),
        Err(e) => eprintln!("logging was already initialized: {e}"),
    }
}
