//! Hybrid index over a catalog snapshot.

use std::sync::Arc;

use super::corpus::{CorpusEntry, build_corpus};
use super::keyword::{Bm25Ranker, KeywordRanker};
use super::vector::TfIdfIndex;
use crate::tools::ToolCatalog;
use crate::types::ToolDescriptor;

/// Builds the keyword engine for a corpus.
pub type RankerFactory = Arc<dyn Fn(&[CorpusEntry]) -> Arc<dyn KeywordRanker> + Send + Sync>;

/// Factory producing a [`Bm25Ranker`] over the corpus text.
pub fn bm25_factory() -> RankerFactory {
    Arc::new(|corpus: &[CorpusEntry]| {
        Arc::new(Bm25Ranker::new(
            corpus.iter().map(|e| (e.name.clone(), e.text.clone())),
        )) as Arc<dyn KeywordRanker>
    })
}

/// Vector and keyword indexes plus the descriptors they were built from.
///
/// Built once per catalog snapshot and never mutated; share it behind an `Arc`.
pub struct ToolIndex {
    descriptors: Vec<ToolDescriptor>,
    corpus: Vec<CorpusEntry>,
    vector: TfIdfIndex,
    keyword: Arc<dyn KeywordRanker>,
    total_tokens: usize,
}

impl ToolIndex {
    /// Indexes `catalog` with the default BM25 keyword engine.
    pub fn build(catalog: &ToolCatalog) -> Self {
        Self::build_with(catalog, &bm25_factory())
    }

    pub fn build_with(catalog: &ToolCatalog, factory: &RankerFactory) -> Self {
        Self::from_descriptors(catalog.descriptors(), factory)
    }

    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>, factory: &RankerFactory) -> Self {
        let corpus = build_corpus(&descriptors);
        let vector = TfIdfIndex::build(corpus.iter().map(|e| (e.name.as_str(), e.text.as_str())));
        let keyword = factory(&corpus);
        let total_tokens = descriptors.iter().map(ToolDescriptor::estimated_tokens).sum();

        tracing::debug!(
            tools = descriptors.len(),
            vocabulary = vector.vocabulary().len(),
            total_tokens,
            "Built tool index"
        );

        Self {
            descriptors,
            corpus,
            vector,
            keyword,
            total_tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in catalog order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, position: usize) -> Option<&ToolDescriptor> {
        self.descriptors.get(position)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    pub fn corpus(&self) -> &[CorpusEntry] {
        &self.corpus
    }

    pub fn vector(&self) -> &TfIdfIndex {
        &self.vector
    }

    pub fn keyword(&self) -> &dyn KeywordRanker {
        self.keyword.as_ref()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vector.vocabulary().len()
    }

    /// Estimated prompt tokens the full catalog would cost if sent verbatim.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }
}

impl std::fmt::Debug for ToolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolIndex")
            .field("tools", &self.descriptors.len())
            .field("vocabulary", &self.vocabulary_size())
            .field("total_tokens", &self.total_tokens)
            .finish()
    }
}
