//! Metrics collection for discovery and dispatch.
//!
//! All metrics are lock-free atomics so a single registry can be shared by
//! any number of concurrent searches and executions.

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe atomic counter.
#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Simple histogram using fixed buckets.
pub struct Histogram {
    buckets: Vec<AtomicU64>,
    bucket_bounds: Vec<f64>,
    sum: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    pub fn new(bucket_bounds: Vec<f64>) -> Self {
        let buckets = (0..=bucket_bounds.len())
            .map(|_| AtomicU64::new(0))
            .collect();
        Self {
            buckets,
            bucket_bounds,
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Buckets tuned for in-memory lookups, in milliseconds.
    pub fn search_latency() -> Self {
        Self::new(vec![0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0])
    }

    pub fn observe(&self, value: f64) {
        let bucket_idx = self
            .bucket_bounds
            .iter()
            .position(|&bound| value <= bound)
            .unwrap_or(self.bucket_bounds.len());

        self.buckets[bucket_idx].fetch_add(1, Ordering::Relaxed);
        // Stored scaled by 1000 to keep sub-millisecond precision.
        self.sum
            .fetch_add((value.max(0.0) * 1000.0) as u64, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn bucket_counts(&self) -> Vec<u64> {
        self.buckets
            .iter()
            .map(|b| b.load(Ordering::Relaxed))
            .collect()
    }

    pub fn sum_ms(&self) -> f64 {
        self.sum.load(Ordering::Relaxed) as f64 / 1000.0
    }

    pub fn mean_ms(&self) -> f64 {
        match self.count() {
            0 => 0.0,
            n => self.sum_ms() / n as f64,
        }
    }
}

/// Counters for the search and execute meta-tools.
pub struct DiscoveryMetrics {
    pub index_builds: Counter,
    pub indexed_tools: Counter,
    pub searches_total: Counter,
    pub searches_empty: Counter,
    pub executions_total: Counter,
    pub execution_errors: Counter,
    pub search_latency_ms: Histogram,
}

impl DiscoveryMetrics {
    pub fn new() -> Self {
        Self {
            index_builds: Counter::new(),
            indexed_tools: Counter::new(),
            searches_total: Counter::new(),
            searches_empty: Counter::new(),
            executions_total: Counter::new(),
            execution_errors: Counter::new(),
            search_latency_ms: Histogram::search_latency(),
        }
    }

    pub fn record_index_build(&self, tool_count: usize) {
        self.index_builds.inc();
        self.indexed_tools.add(tool_count as u64);
    }

    pub fn record_search(&self, result_count: usize, latency_ms: f64) {
        self.searches_total.inc();
        if result_count == 0 {
            self.searches_empty.inc();
        }
        self.search_latency_ms.observe(latency_ms);
    }

    pub fn record_execution(&self, success: bool) {
        self.executions_total.inc();
        if !success {
            self.execution_errors.inc();
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary::from_metrics(self)
    }
}

impl Default for DiscoveryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time snapshot of [`DiscoveryMetrics`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSummary {
    pub index_builds: u64,
    pub total_searches: u64,
    pub empty_searches: u64,
    pub total_executions: u64,
    pub failed_executions: u64,
    pub avg_search_latency_ms: f64,
}

impl MetricsSummary {
    pub fn from_metrics(metrics: &DiscoveryMetrics) -> Self {
        Self {
            index_builds: metrics.index_builds.get(),
            total_searches: metrics.searches_total.get(),
            empty_searches: metrics.searches_empty.get(),
            total_executions: metrics.executions_total.get(),
            failed_executions: metrics.execution_errors.get(),
            avg_search_latency_ms: metrics.search_latency_ms.mean_ms(),
        }
    }
}
