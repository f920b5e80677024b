use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use driverbook::clock::SystemClock;
use driverbook::config::AppConfig;
use driverbook::routes;
use driverbook::services::relay::sheets::SheetsRelay;
use driverbook::services::submission::SubmissionGate;
use driverbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    if config.relay_url.is_empty() {
        tracing::warn!("RELAY_URL not set, booking submissions will fail");
    } else {
        tracing::info!("forwarding bookings to relay (timeout: {}s)", config.relay_timeout_secs);
    }
    let relay = SheetsRelay::new(
        config.relay_url.clone(),
        Duration::from_secs(config.relay_timeout_secs),
    )?;

    let state = Arc::new(AppState {
        config: config.clone(),
        relay: Box::new(relay),
        clock: Arc::new(SystemClock),
        gate: SubmissionGate::new(),
    });

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting {} on {addr}", config.site_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
