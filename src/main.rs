use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lexbook::config::AppConfig;
use lexbook::models::Catalog;
use lexbook::services::api::http::HttpBookingApi;
use lexbook::services::triage::TriageBoard;
use lexbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = Catalog::load(&config.catalog_path)?;
    tracing::info!(
        services = catalog.services.len(),
        team = catalog.team.len(),
        "loaded catalog"
    );

    let api = HttpBookingApi::new(config.api_base_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        api: Box::new(api),
        catalog,
        board: TriageBoard::new(),
    });

    let app = lexbook::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
