//! Hybrid lexical search over a tool catalog.
//!
//! A catalog snapshot is turned into one [`CorpusEntry`] per tool, indexed
//! twice (TF-IDF vectors and a keyword engine, BM25 by default), and queried
//! by fusing both signals into a single score in `[0, 1]`.

mod corpus;
mod engine;
mod fusion;
mod index;
mod keyword;
mod manager;
mod tokenizer;
mod vector;

pub use corpus::{ACTION_TYPES, CorpusEntry, build_corpus};
pub use engine::{SearchEngine, SearchHit, SearchMode};
pub use fusion::{DEFAULT_ALPHA, FusedScore, FusionOptions, fuse};
pub use index::{RankerFactory, ToolIndex, bm25_factory};
pub use keyword::{BM25_SATURATION, Bm25Ranker, KeywordRanker, normalize_score};
pub use manager::{DEFAULT_LIMIT, DEFAULT_MIN_SCORE, ToolSearchConfig, ToolSearchManager};
pub use tokenizer::{is_stopword, tokenize};
pub use vector::{TermVector, TfIdfIndex, Vocabulary};
