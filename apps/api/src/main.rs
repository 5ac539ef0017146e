use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener::config::Config;
use screener::db::{create_pool, ensure_schema};
use screener::extraction::DocumentTextExtractor;
use screener::routes::build_router;
use screener::screening::KeywordScreener;
use screener::sessions::{DisabledSessionLog, PgSessionLog, SessionLog};
use screener::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize session persistence (optional)
    let sessions: Arc<dyn SessionLog> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgSessionLog::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; screening sessions will not be persisted");
            Arc::new(DisabledSessionLog)
        }
    };

    let screener = Arc::new(KeywordScreener::new(
        config.vocabulary.clone(),
        config.match_mode,
    ));
    info!(
        "Screener initialized (backend: keyword, mode: {}, vocabulary: {} skills)",
        config.match_mode,
        config.vocabulary.len()
    );

    let extractor = Arc::new(DocumentTextExtractor::new(config.max_resume_chars));

    // Build app state
    let state = AppState {
        config: config.clone(),
        screener,
        extractor,
        sessions,
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
