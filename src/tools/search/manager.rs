//! Tool search manager: configuration plus a lazily built index.

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::engine::{SearchEngine, SearchMode};
use super::fusion::DEFAULT_ALPHA;
use super::index::{RankerFactory, ToolIndex, bm25_factory};
use crate::config::{ConfigError, ConfigProvider, ConfigProviderExt, ConfigResult};
use crate::observability::{DiscoveryMetrics, DiscoverySpans, ObservabilityConfig};
use crate::tools::ToolCatalog;
use crate::types::{SearchResult, SearchResults};

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolSearchConfig {
    /// Weight of the keyword signal in hybrid mode.
    pub alpha: f64,
    pub default_limit: usize,
    pub min_score: f64,
    pub search_mode: SearchMode,
}

impl Default for ToolSearchConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            default_limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            search_mode: SearchMode::Hybrid,
        }
    }
}

impl ToolSearchConfig {
    /// Clamped to `[0, 1]`; NaN keeps [`DEFAULT_ALPHA`].
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = unit_or(alpha, DEFAULT_ALPHA);
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Clamped to `[0, 1]`; NaN keeps [`DEFAULT_MIN_SCORE`].
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = unit_or(min_score, DEFAULT_MIN_SCORE);
        self
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Reads `search.alpha`, `search.limit`, `search.min_score` and
    /// `search.mode`, keeping defaults for absent keys.
    pub async fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> ConfigResult<Self> {
        let defaults = Self::default();

        let alpha: f64 = provider.get_or("search.alpha", defaults.alpha).await?;
        let default_limit: usize = provider
            .get_or("search.limit", defaults.default_limit)
            .await?;
        let min_score: f64 = provider
            .get_or("search.min_score", defaults.min_score)
            .await?;
        let search_mode = match provider.get_raw("search.mode").await? {
            Some(raw) => raw
                .trim()
                .trim_matches('"')
                .parse::<SearchMode>()
                .map_err(|e: String| ConfigError::invalid_value("search.mode", e))?,
            None => defaults.search_mode,
        };

        let config = Self {
            alpha,
            default_limit,
            min_score,
            search_mode,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::invalid_value(
                "search.alpha",
                format!("{} is outside [0, 1]", self.alpha),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigError::invalid_value(
                "search.min_score",
                format!("{} is outside [0, 1]", self.min_score),
            ));
        }
        Ok(())
    }

    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.search_mode).with_alpha(self.alpha)
    }
}

/// Owns one catalog snapshot and the index built from it on first use.
///
/// Concurrent first searches share a single build. The index is dropped with
/// the manager; a changed catalog needs a new manager.
pub struct ToolSearchManager {
    config: ToolSearchConfig,
    catalog: ToolCatalog,
    engine: SearchEngine,
    ranker_factory: RankerFactory,
    index: OnceCell<Arc<ToolIndex>>,
    metrics: Arc<DiscoveryMetrics>,
    spans: DiscoverySpans,
}

impl ToolSearchManager {
    pub fn new(catalog: ToolCatalog, config: ToolSearchConfig) -> Self {
        let engine = config.engine();
        Self {
            config,
            catalog,
            engine,
            ranker_factory: bm25_factory(),
            index: OnceCell::new(),
            metrics: Arc::new(DiscoveryMetrics::new()),
            spans: DiscoverySpans::new(),
        }
    }

    /// Replaces the keyword engine used when the index is built.
    pub fn with_ranker_factory(mut self, factory: RankerFactory) -> Self {
        self.ranker_factory = factory;
        self
    }

    pub fn with_observability(self, config: &ObservabilityConfig) -> Self {
        self.with_spans(config.build_spans())
            .with_metrics(config.build_metrics())
    }

    pub fn with_metrics(mut self, metrics: Arc<DiscoveryMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_spans(mut self, spans: DiscoverySpans) -> Self {
        self.spans = spans;
        self
    }

    pub fn config(&self) -> &ToolSearchConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn metrics(&self) -> &Arc<DiscoveryMetrics> {
        &self.metrics
    }

    pub fn spans(&self) -> &DiscoverySpans {
        &self.spans
    }

    pub fn is_indexed(&self) -> bool {
        self.index.initialized()
    }

    /// Returns the index, building it on the first call.
    pub async fn index(&self) -> Arc<ToolIndex> {
        self.index
            .get_or_init(|| async {
                let timed = self.spans.index_build_span(self.catalog.len());
                let index = timed
                    .span()
                    .in_scope(|| ToolIndex::build_with(&self.catalog, &self.ranker_factory));
                timed.record("vocabulary_size", index.vocabulary_size() as u64);
                timed.finish();
                self.metrics.record_index_build(index.len());
                Arc::new(index)
            })
            .await
            .clone()
    }

    /// Searches with the configured limit and minimum score.
    pub async fn search_default(&self, query: &str) -> SearchResults {
        self.search(query, self.config.default_limit, self.config.min_score)
            .await
    }

    /// A NaN `min_score` falls back to the configured one.
    pub async fn search(&self, query: &str, limit: usize, min_score: f64) -> SearchResults {
        let min_score = unit_or(min_score, self.config.min_score);
        let index = self.index().await;

        let timed = self.spans.search_span(query, limit, min_score);
        let hits = timed
            .span()
            .in_scope(|| self.engine.search(&index, query, limit, min_score));
        timed.record("result_count", hits.len() as u64);
        let latency_ms = timed.finish();
        self.metrics.record_search(hits.len(), latency_ms);

        SearchResults::new(hits.into_iter().map(SearchResult::from).collect())
    }
}

fn unit_or(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for ToolSearchManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSearchManager")
            .field("config", &self.config)
            .field("tools", &self.catalog.len())
            .field("indexed", &self.is_indexed())
            .finish()
    }
}
