//! Keyword relevance signal.
//!
//! The fusion layer only needs raw per-tool scores, so the keyword engine is a
//! trait object. [`Bm25Ranker`] is the default, built on the `bm25` crate.

use bm25::{Document, Language, SearchEngine, SearchEngineBuilder};

/// A relevance engine producing raw, non-negative scores for a query.
///
/// Scores are unordered and unbounded; [`normalize_score`] maps them into
/// `[0, 1]` before fusion. Documents with no relevance may simply be absent.
pub trait KeywordRanker: Send + Sync {
    fn rank(&self, query: &str) -> Vec<(String, f64)>;
}

impl<F> KeywordRanker for F
where
    F: Fn(&str) -> Vec<(String, f64)> + Send + Sync,
{
    fn rank(&self, query: &str) -> Vec<(String, f64)> {
        self(query)
    }
}

/// BM25 score at which [`Bm25Ranker`] reports a relevance of 0.5.
pub const BM25_SATURATION: f64 = 1.0;

/// Clamps a raw keyword score into `[0, 1]`; NaN counts as no relevance.
pub fn normalize_score(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

/// BM25 ranking with the English stemming tokenizer.
///
/// Raw BM25 scores are unbounded, so [`KeywordRanker::rank`] reports
/// `s / (s + BM25_SATURATION)`. The mapping is strictly increasing and lands in
/// `[0, 1)`, which keeps BM25 order intact through fusion.
pub struct Bm25Ranker {
    /// `None` for an empty corpus.
    engine: Option<SearchEngine<String>>,
    document_count: usize,
}

impl Bm25Ranker {
    pub fn new<I, K, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let documents: Vec<Document<String>> = documents
            .into_iter()
            .map(|(id, contents)| Document {
                id: id.into(),
                contents: contents.into(),
            })
            .collect();
        let document_count = documents.len();

        let engine = (document_count > 0).then(|| -> SearchEngine<String> {
            SearchEngineBuilder::with_documents(Language::English, documents).build()
        });

        Self {
            engine,
            document_count,
        }
    }

    pub fn len(&self) -> usize {
        self.document_count
    }

    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }

    /// Unbounded BM25 scores, rounded to six decimals.
    pub fn raw_scores(&self, query: &str) -> Vec<(String, f64)> {
        let Some(engine) = self.engine.as_ref() else {
            return Vec::new();
        };
        if query.trim().is_empty() {
            return Vec::new();
        }

        engine
            .search(query, self.document_count)
            .into_iter()
            .map(|result| (result.document.id, round_score(result.score)))
            .collect()
    }
}

impl KeywordRanker for Bm25Ranker {
    fn rank(&self, query: &str) -> Vec<(String, f64)> {
        self.raw_scores(query)
            .into_iter()
            .map(|(id, raw)| (id, saturate(raw)))
            .collect()
    }
}

/// Rounds to six decimals so scores are stable across index rebuilds, whose
/// internal hash ordering may change float summation order.
fn round_score(score: f32) -> f64 {
    (f64::from(score) * 1e6).round() / 1e6
}

fn saturate(raw: f64) -> f64 {
    if raw.is_nan() || raw <= 0.0 {
        0.0
    } else {
        raw / (raw + BM25_SATURATION)
    }
}

impl std::fmt::Debug for Bm25Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bm25Ranker")
            .field("document_count", &self.document_count)
            .finish()
    }
}
