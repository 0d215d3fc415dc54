use anyhow::Error as AnyhowError;
use call_server::{AppState, config::ServerConfig, routes};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug, Error)]
pub enum CallServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

#[tokio::main]
async fn main() -> Result<(), CallServerError> {
    // Pick up Twilio credentials from `.env` during local development
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,call_server={level},callscript={level},tower_http={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).map_err(AnyhowError::from)?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let defects = callscript::catalog().authoring_defects();
    if !defects.is_empty() {
        for defect in &defects {
            tracing::error!("Template catalog defect: {}", defect);
        }
        return Err(anyhow::anyhow!("{} template catalog defect(s)", defects.len()).into());
    }
    tracing::info!(
        "Loaded {} call script templates",
        callscript::catalog().templates().len()
    );

    let config = ServerConfig::from_env()?;
    let state = AppState::from_env();
    let app_router = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let actual_port = listener.local_addr()?.port();
    tracing::info!("Server running on http://{}:{}", config.host, actual_port);

    axum::serve(listener, app_router).await?;
    Ok(())
}
