// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use fikra_core::domains::categorization::AiPrioritySuggester;
use fikra_core::kernel::{BasePrioritySuggester, OpenAIClient, PostgresIdeaStore, ServerDeps};
use fikra_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fikra_core=debug,sqlx=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Fikra Labs API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let priority_suggester: Option<Arc<dyn BasePrioritySuggester>> = match &config.openai_api_key {
        Some(key) => {
            let ai = Arc::new(OpenAIClient::new(key.clone()).with_model(config.openai_model.clone()));
            tracing::info!(
                model = %config.openai_model,
                timeout_secs = config.ai_fallback_timeout.as_secs(),
                "AI priority fallback enabled"
            );
            Some(Arc::new(AiPrioritySuggester::new(ai, config.ai_fallback_timeout))
                as Arc<dyn BasePrioritySuggester>)
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, AI priority fallback disabled");
            None
        }
    };

    let deps = ServerDeps::new(
        Some(pool.clone()),
        Arc::new(PostgresIdeaStore::new(pool)),
        priority_suggester,
    );
    let app = build_app(deps, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
