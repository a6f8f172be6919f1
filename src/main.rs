/// Main application entry point
use solarscope::clients::{HttpClient, SolarSystemClient, SpaceXClient};
use solarscope::config::AppConfig;
use solarscope::handlers::AppState;
use solarscope::routes::build_router;
use solarscope::services::{MoonService, SpaceXService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize clients
    let solar_http = HttpClient::with_bearer(&config.http, &config.solar_api_key)?;
    let spacex_http = HttpClient::new(&config.http)?;
    let solar_client = SolarSystemClient::new(
        solar_http,
        config.solar_api_url.clone(),
        config.moon_filter.clone(),
    );
    let spacex_client = SpaceXClient::new(spacex_http, config.spacex_api_url.clone());
    info!(
        "Upstreams: solar system {}, spacex {}",
        solar_client.base_url(),
        config.spacex_api_url
    );

    // Initialize services
    let state = AppState {
        moon_service: Arc::new(MoonService::new(solar_client)),
        spacex_service: Arc::new(SpaceXService::new(spacex_client, config.launch_window)),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("solarscope listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
