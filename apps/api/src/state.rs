use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{MatchScorer, StatisticalMatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: StatisticalMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(StatisticalMatchScorer::new(config.scorer.clone()));
        Self { config, scorer }
    }
}
