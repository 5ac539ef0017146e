use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::screening::Screener;
use crate::sessions::SessionLog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable screener. Default: KeywordScreener built from config.
    pub screener: Arc<dyn Screener>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Postgres-backed when DATABASE_URL is set, a no-op otherwise.
    pub sessions: Arc<dyn SessionLog>,
}
