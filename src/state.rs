use std::sync::Arc;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::engine::RecommendationEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    /// Load the dataset and build the engine. Fails if the artifact is unusable.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        tracing::info!("Loading dataset from {}", config.data_path.display());
        let dataset = Dataset::load(&config.data_path)?;
        let engine = RecommendationEngine::build(dataset, &config)?;
        Ok(Self::with_engine(config, engine))
    }

    pub fn with_engine(config: Config, engine: RecommendationEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }

    pub fn count(&self, requested: Option<i64>) -> usize {
        self.config.resolve_count(requested)
    }
}
