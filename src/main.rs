use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

use knowlink_backend::config::Settings;
use knowlink_backend::routes;
use knowlink_backend::services::agent::Agent;
use knowlink_backend::services::model_client::HttpModelClient;
use knowlink_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let settings = Settings::from_env()?;
    let model = Arc::new(HttpModelClient::new(&settings));
    let agent = Agent::new(model, settings.temperature);
    let state = Arc::new(AppState::new(agent));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("0.0.0.0:{}", settings.port);
    info!(model = %settings.model_name, "chat backend listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
