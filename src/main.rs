use clap::Parser;
use dotenvy::dotenv;
use std::env;

use expense_tracker::api::{self, config::ApiConfig};
use expense_tracker::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let api_config = ApiConfig::parse();
    if api_config.secret_key.is_none() {
        tracing::warn!("API_SECRET_KEY is not set, the API is open to unauthenticated requests");
    }

    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    let router = api::router(app_config, &api_config);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting Expense Tracker API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
