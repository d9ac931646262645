use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use documiner::application::ports::LlmClient;
use documiner::infrastructure::llm::{ScaffoldLlmClient, create_llm_client};
use documiner::infrastructure::observability::{TracingConfig, init_tracing};
use documiner::infrastructure::report::PdfReportRenderer;
use documiner::infrastructure::text_processing::PdfAdapter;
use documiner::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, UploadPolicy, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let scaffold_config = ScaffoldConfig::from_env();
    let llm_client: Arc<dyn LlmClient> = if scaffold_config.enabled {
        tracing::warn!(
            delay_ms = scaffold_config.mock_response_delay_ms,
            "Scaffold mode enabled; model calls are simulated"
        );
        Arc::new(ScaffoldLlmClient::new(scaffold_config.response_delay()))
    } else {
        let client =
            create_llm_client(&settings.llm).context("Failed to configure the LLM client")?;
        tracing::info!(
            provider = %settings.llm.provider,
            model = %settings.llm.chat_model,
            url = %client.completions_url(),
            "LLM client configured"
        );
        Arc::new(client)
    };

    let file_loader = Arc::new(PdfAdapter::with_timeout(Duration::from_secs(
        settings.extraction.timeout_seconds,
    )));

    let state = AppState::new(
        file_loader,
        llm_client,
        Arc::new(PdfReportRenderer::new()),
        UploadPolicy::from_settings(&settings.upload),
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
