//! Linear fusion of the vector and keyword signals.

use std::collections::HashMap;

use super::keyword::normalize_score;

/// Weight of the keyword signal when none is configured.
pub const DEFAULT_ALPHA: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionOptions {
    /// Keyword weight; the vector signal gets `1 - alpha`.
    pub alpha: f64,
    pub min_score: f64,
    pub limit: usize,
}

impl FusionOptions {
    pub fn new(alpha: f64, min_score: f64, limit: usize) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            min_score,
            limit,
        }
    }
}

impl Default for FusionOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, 0.0, usize::MAX)
    }
}

/// A fused score for the tool at `position` in catalog order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedScore {
    pub position: usize,
    pub score: f64,
}

/// Combines per-tool scores as `alpha * keyword + (1 - alpha) * vector`.
///
/// `catalog_order` lists every candidate name in insertion order; names that
/// appear only in the score lists are ignored. Keyword scores are clamped into
/// `[0, 1]` first and a missing score counts as zero. Results with a fused
/// score of zero or below `min_score` are dropped, the rest are sorted best
/// first with ties in catalog order, then truncated to `limit`.
pub fn fuse<'a>(
    catalog_order: impl IntoIterator<Item = &'a str>,
    vector_scores: &[(String, f64)],
    keyword_scores: &[(String, f64)],
    options: &FusionOptions,
) -> Vec<FusedScore> {
    if options.limit == 0 {
        return Vec::new();
    }

    let alpha = clamp_unit(options.alpha);
    let vector: HashMap<&str, f64> = vector_scores
        .iter()
        .map(|(name, score)| (name.as_str(), clamp_unit(*score)))
        .collect();
    let keyword: HashMap<&str, f64> = keyword_scores
        .iter()
        .map(|(name, score)| (name.as_str(), normalize_score(*score)))
        .collect();

    let mut fused: Vec<FusedScore> = catalog_order
        .into_iter()
        .enumerate()
        .filter_map(|(position, name)| {
            let v = vector.get(name).copied().unwrap_or(0.0);
            let k = keyword.get(name).copied().unwrap_or(0.0);
            let score = clamp_unit(alpha * k + (1.0 - alpha) * v);
            (score > 0.0 && score >= options.min_score).then_some(FusedScore { position, score })
        })
        .collect();

    fused.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.position.cmp(&b.position))
    });
    fused.truncate(options.limit);
    fused
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [&str; 3] = ["a", "b", "c"];

    fn scores(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(n, s)| (n.to_string(), *s)).collect()
    }

    fn positions(fused: &[FusedScore]) -> Vec<usize> {
        fused.iter().map(|f| f.position).collect()
    }

    #[test]
    fn test_weighted_sum() {
        let fused = fuse(
            ORDER,
            &scores(&[("a", 0.5)]),
            &scores(&[("a", 1.0)]),
            &FusionOptions::new(0.2, 0.0, 10),
        );
        assert_eq!(fused.len(), 1);
        assert!((fused[0].score - (0.2 * 1.0 + 0.8 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_zero_is_vector_order() {
        let vector = scores(&[("a", 0.2), ("b", 0.9), ("c", 0.5)]);
        let keyword = scores(&[("a", 1.0), ("b", 0.1), ("c", 0.3)]);
        let fused = fuse(ORDER, &vector, &keyword, &FusionOptions::new(0.0, 0.0, 10));
        assert_eq!(positions(&fused), vec![1, 2, 0]);
    }

    #[test]
    fn test_alpha_one_is_keyword_order() {
        let vector = scores(&[("a", 0.2), ("b", 0.9), ("c", 0.5)]);
        let keyword = scores(&[("a", 1.0), ("b", 0.1), ("c", 0.3)]);
        let fused = fuse(ORDER, &vector, &keyword, &FusionOptions::new(1.0, 0.0, 10));
        assert_eq!(positions(&fused), vec![0, 2, 1]);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let options = FusionOptions::new(3.0, 0.0, 10);
        assert_eq!(options.alpha, 1.0);
        assert_eq!(FusionOptions::new(-1.0, 0.0, 10).alpha, 0.0);
    }

    #[test]
    fn test_raw_keyword_scores_are_clamped() {
        let fused = fuse(
            ORDER,
            &[],
            &scores(&[("a", 12.5), ("b", -4.0)]),
            &FusionOptions::new(1.0, 0.0, 10),
        );
        assert_eq!(positions(&fused), vec![0]);
        assert_eq!(fused[0].score, 1.0);
    }

    #[test]
    fn test_ties_follow_catalog_order() {
        let vector = scores(&[("c", 0.5), ("a", 0.5), ("b", 0.5)]);
        let fused = fuse(ORDER, &vector, &[], &FusionOptions::new(0.0, 0.0, 10));
        assert_eq!(positions(&fused), vec![0, 1, 2]);
    }

    #[test]
    fn test_min_score_and_limit() {
        let vector = scores(&[("a", 0.9), ("b", 0.6), ("c", 0.1)]);
        let fused = fuse(ORDER, &vector, &[], &FusionOptions::new(0.0, 0.3, 10));
        assert_eq!(positions(&fused), vec![0, 1]);

        let fused = fuse(ORDER, &vector, &[], &FusionOptions::new(0.0, 0.0, 1));
        assert_eq!(positions(&fused), vec![0]);

        let fused = fuse(ORDER, &vector, &[], &FusionOptions::new(0.0, 0.0, 0));
        assert!(fused.is_empty());
    }

    #[test]
    fn test_zero_scores_dropped() {
        let fused = fuse(ORDER, &[], &[], &FusionOptions::default());
        assert!(fused.is_empty());
    }

    #[test]
    fn test_unknown_names_ignored() {
        let fused = fuse(
            ORDER,
            &scores(&[("ghost", 1.0)]),
            &[],
            &FusionOptions::new(0.0, 0.0, 10),
        );
        assert!(fused.is_empty());
    }
}
