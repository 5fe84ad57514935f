use people_service::config::PeopleConfig;
use people_service::services::init_metrics;
use people_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PeopleConfig::load()?;

    init_tracing(
        "people-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start people-service: {}", e);
        e
    })?;
    application.run_until_stopped().await?;

    Ok(())
}
