//! Search engine combining vector and keyword relevance.

use super::fusion::{DEFAULT_ALPHA, FusionOptions, fuse};
use super::index::ToolIndex;
use crate::types::{SearchResult, ToolDescriptor};

/// Which relevance signals contribute to the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Weighted fusion of both signals.
    #[default]
    Hybrid,
    /// TF-IDF cosine similarity only.
    Vector,
    /// Keyword engine only.
    Keyword,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid",
            Self::Vector => "vector",
            Self::Keyword => "keyword",
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hybrid" => Ok(Self::Hybrid),
            "vector" | "tfidf" => Ok(Self::Vector),
            "keyword" | "bm25" => Ok(Self::Keyword),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub descriptor: ToolDescriptor,
    pub score: f64,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        SearchResult::new(&hit.descriptor, hit.score)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    mode: SearchMode,
    alpha: f64,
}

impl SearchEngine {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            alpha: DEFAULT_ALPHA,
        }
    }

    pub fn hybrid(alpha: f64) -> Self {
        Self::new(SearchMode::Hybrid).with_alpha(alpha)
    }

    pub fn vector() -> Self {
        Self::new(SearchMode::Vector)
    }

    pub fn keyword() -> Self {
        Self::new(SearchMode::Keyword)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = if alpha.is_nan() { DEFAULT_ALPHA } else { alpha.clamp(0.0, 1.0) };
        self
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Keyword weight actually applied for the current mode.
    pub fn effective_alpha(&self) -> f64 {
        match self.mode {
            SearchMode::Hybrid => self.alpha,
            SearchMode::Vector => 0.0,
            SearchMode::Keyword => 1.0,
        }
    }

    /// Ranks the indexed tools against `query`.
    ///
    /// Returns at most `limit` hits with scores in `[min_score, 1]`, best
    /// first, ties in catalog order. Never fails: unmatched queries simply
    /// produce no hits.
    pub fn search(
        &self,
        index: &ToolIndex,
        query: &str,
        limit: usize,
        min_score: f64,
    ) -> Vec<SearchHit> {
        if query.trim().is_empty() || index.is_empty() || limit == 0 {
            return Vec::new();
        }

        let alpha = self.effective_alpha();
        let vector_scores = if alpha < 1.0 {
            index.vector().search(query)
        } else {
            Vec::new()
        };
        let keyword_scores = if alpha > 0.0 {
            index.keyword().rank(query)
        } else {
            Vec::new()
        };

        let options = FusionOptions::new(alpha, min_score, limit);
        fuse(index.names(), &vector_scores, &keyword_scores, &options)
            .into_iter()
            .filter_map(|fused| {
                index.get(fused.position).map(|descriptor| SearchHit {
                    descriptor: descriptor.clone(),
                    score: fused.score,
                })
            })
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchMode::Hybrid)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tools::search::{Bm25Ranker, CorpusEntry, KeywordRanker, RankerFactory};
    use crate::tools::testing::helpers::sample_catalog;

    fn make_index() -> ToolIndex {
        ToolIndex::build(&sample_catalog())
    }

    fn names(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.descriptor.name.as_str()).collect()
    }

    /// Keyword engine that prefers catalog entries in reverse order.
    fn reversed_index() -> ToolIndex {
        let factory: RankerFactory = Arc::new(|corpus: &[CorpusEntry]| {
            let n = corpus.len() as f64;
            let scores: Vec<(String, f64)> = corpus
                .iter()
                .enumerate()
                .map(|(i, e)| (e.name.clone(), (i as f64 + 1.0) / n))
                .collect();
            Arc::new(move |_query: &str| scores.clone()) as Arc<dyn KeywordRanker>
        });
        ToolIndex::build_with(&sample_catalog(), &factory)
    }

    #[test]
    fn test_hybrid_search_finds_relevant_tool() {
        let hits = SearchEngine::default().search(&make_index(), "delete contact", 5, 0.0);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].descriptor.name, "crm_delete_contact");
    }

    #[test]
    fn test_scores_bounded_sorted_and_limited() {
        let index = make_index();
        for limit in [0, 1, 3, 50] {
            let hits = SearchEngine::default().search(&index, "list employees", limit, 0.0);
            assert!(hits.len() <= limit);
            assert!(hits.iter().all(|h| (0.0..=1.0).contains(&h.score)));
            assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_min_score_filters() {
        let hits = SearchEngine::default().search(&make_index(), "list employees", 10, 0.3);
        assert!(hits.iter().all(|h| h.score >= 0.3));
    }

    #[test]
    fn test_empty_query() {
        assert!(SearchEngine::default().search(&make_index(), "", 5, 0.0).is_empty());
    }

    #[test]
    fn test_vector_mode_ignores_keyword_engine() {
        let index = reversed_index();
        let stubbed = SearchEngine::vector().search(&index, "employees", 10, 0.0);
        let plain = SearchEngine::vector().search(&make_index(), "employees", 10, 0.0);
        assert!(!plain.is_empty());
        assert_eq!(names(&stubbed), names(&plain));
    }

    #[test]
    fn test_keyword_mode_follows_keyword_order() {
        let index = reversed_index();
        let hits = SearchEngine::keyword().search(&index, "anything", 3, 0.0);
        assert_eq!(
            names(&hits),
            vec!["crm_delete_contact", "crm_update_contact", "crm_list_contacts"]
        );
    }

    #[test]
    fn test_keyword_mode_follows_bm25_order() {
        let index = make_index();
        let bm25 = Bm25Ranker::new(index.corpus().iter().map(|e| (e.name.clone(), e.text.clone())));

        for query in ["delete contact", "list employees", "create"] {
            let mut raw: Vec<(usize, f64)> = bm25
                .raw_scores(query)
                .into_iter()
                .filter(|(_, score)| *score > 0.0)
                .filter_map(|(id, score)| index.names().position(|n| n == id).map(|p| (p, score)))
                .collect();
            raw.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
            let expected: Vec<&str> = raw
                .iter()
                .filter_map(|(p, _)| index.get(*p).map(|d| d.name.as_str()))
                .collect();

            let hits = SearchEngine::keyword().search(&index, query, 50, 0.0);
            assert!(expected.len() > 1, "{query}");
            assert_eq!(names(&hits), expected, "{query}");
        }
    }

    #[test]
    fn test_keyword_mode_delete_contact_first() {
        let hits = SearchEngine::keyword().search(&make_index(), "delete contact", 1, 0.0);
        assert_eq!(names(&hits), vec!["crm_delete_contact"]);
        assert!(hits[0].score < 1.0);
    }

    #[test]
    fn test_effective_alpha() {
        assert_eq!(SearchEngine::default().effective_alpha(), DEFAULT_ALPHA);
        assert_eq!(SearchEngine::hybrid(0.7).effective_alpha(), 0.7);
        assert_eq!(SearchEngine::hybrid(4.0).effective_alpha(), 1.0);
        assert_eq!(SearchEngine::vector().effective_alpha(), 0.0);
        assert_eq!(SearchEngine::keyword().effective_alpha(), 1.0);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Hybrid".parse::<SearchMode>(), Ok(SearchMode::Hybrid));
        assert_eq!("bm25".parse::<SearchMode>(), Ok(SearchMode::Keyword));
        assert_eq!("tfidf".parse::<SearchMode>(), Ok(SearchMode::Vector));
        assert!("regex".parse::<SearchMode>().is_err());
        assert_eq!(SearchMode::Vector.as_str(), "vector");
    }

    #[test]
    fn test_hit_into_result() {
        let hits = SearchEngine::default().search(&make_index(), "jobs", 1, 0.0);
        let result: SearchResult = hits[0].clone().into();
        assert_eq!(result.name, "ats_list_jobs");
        assert_eq!(result.score, hits[0].score);
    }
}
