//! TF-IDF vector-space index with cosine-similarity search.
//!
//! `idf(t) = ln((N + 1) / (df(t) + 1)) + 1`, so every indexed term has a
//! strictly positive weight and no division by zero can occur. Term vectors
//! are stored sorted by term id, which keeps floating-point summation order
//! (and therefore every score) reproducible across builds.

use std::collections::{HashMap, HashSet};

use super::tokenizer::tokenize;

/// Frozen term → id mapping; ids follow first appearance in document order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    fn intern(&mut self, term: &str) -> usize {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.ids.len();
        self.ids.insert(term.to_string(), id);
        id
    }

    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Sparse weighted vector plus its precomputed L2 norm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Sorted by term id, zero weights omitted.
    weights: Vec<(usize, f64)>,
    norm: f64,
}

impl TermVector {
    fn from_counts(counts: HashMap<usize, usize>, length: usize, idf: &[f64]) -> Self {
        if length == 0 {
            return Self::default();
        }
        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(id, count)| (id, (count as f64 / length as f64) * idf[id]))
            .filter(|&(_, w)| w > 0.0)
            .collect();
        weights.sort_unstable_by_key(|&(id, _)| id);

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, term_id: usize) -> Option<f64> {
        self.weights
            .binary_search_by_key(&term_id, |&(id, _)| id)
            .ok()
            .map(|idx| self.weights[idx].1)
    }

    /// Sparse dot product, walking the shorter vector and probing the longer.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|&(id, w)| large.weight(id).map(|v| w * v))
            .sum()
    }

    /// Cosine similarity clamped to `[0, 1]`; zero when either vector is empty.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let denominator = self.norm * other.norm;
        if denominator <= 0.0 {
            return 0.0;
        }
        (self.dot(other) / denominator).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    id: String,
    vector: TermVector,
}

/// Immutable TF-IDF index over `(id, text)` documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    documents: Vec<IndexedDocument>,
}

impl TfIdfIndex {
    /// Builds the index in a single pass over `documents` in the given order.
    pub fn build<I, K, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::default();
        let mut document_frequency: Vec<usize> = Vec::new();
        let mut tokenized: Vec<(String, HashMap<usize, usize>, usize)> = Vec::new();

        for (id, text) in documents {
            let tokens = tokenize(text.as_ref());
            let mut counts: HashMap<usize, usize> = HashMap::new();
            let mut seen: HashSet<usize> = HashSet::new();

            for token in &tokens {
                let term_id = vocabulary.intern(token);
                if term_id == document_frequency.len() {
                    document_frequency.push(0);
                }
                *counts.entry(term_id).or_insert(0) += 1;
                if seen.insert(term_id) {
                    document_frequency[term_id] += 1;
                }
            }

            tokenized.push((id.into(), counts, tokens.len()));
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        let documents = tokenized
            .into_iter()
            .map(|(id, counts, length)| IndexedDocument {
                id,
                vector: TermVector::from_counts(counts, length, &idf),
            })
            .collect();

        Self {
            vocabulary,
            idf,
            documents,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.id(term).map(|id| self.idf[id])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Vector for `query` under the frozen IDF table; unseen terms are ignored.
    pub fn query_vector(&self, query: &str) -> TermVector {
        let tokens = tokenize(query);
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in &tokens {
            if let Some(id) = self.vocabulary.id(token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        TermVector::from_counts(counts, tokens.len(), &self.idf)
    }

    /// All documents with non-zero cosine similarity, best first.
    ///
    /// Equal scores keep document order. Results are not truncated.
    pub fn search(&self, query: &str) -> Vec<(String, f64)> {
        let query_vector = self.query_vector(query);
        if query_vector.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(String, f64)> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let score = query_vector.cosine(&doc.vector);
                (score > 0.0).then(|| (doc.id.clone(), score))
            })
            .collect();

        // Stable: ties stay in document order.
        matches.sort_by(|a, b| b.1.total_cmp(&a.1));
        matches
    }
}
