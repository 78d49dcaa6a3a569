//! Composite string similarity over canonical labels.
//!
//! Three sub-scores are combined as a weighted average over the enabled ones:
//! normalized edit distance, Jaro-Winkler, and token overlap. All scores lie in
//! `[0, 1]` and are exactly reproducible for fixed inputs and settings.

use std::collections::BTreeSet;

use crate::config::{Settings, SimilarityAlgorithms, SimilarityWeights};

/// Maximum prefix length rewarded by the Winkler boost.
const WINKLER_PREFIX_LIMIT: usize = 4;

/// Scaling factor of the Winkler prefix boost.
const WINKLER_SCALING: f64 = 0.1;

/// Scores pairs of canonical labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityEngine {
    algorithms: SimilarityAlgorithms,
    weights: SimilarityWeights,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new(SimilarityAlgorithms::default(), SimilarityWeights::default())
    }
}

impl SimilarityEngine {
    pub fn new(algorithms: SimilarityAlgorithms, weights: SimilarityWeights) -> Self {
        Self {
            algorithms,
            weights,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.similarity_algorithms, settings.similarity_weights)
    }

    /// Computes the composite similarity of two canonical labels.
    ///
    /// Identical inputs score 1.0 without evaluating any sub-score. With no
    /// sub-score enabled, or all enabled weights zero, the result is 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcat::SimilarityEngine;
    ///
    /// let engine = SimilarityEngine::default();
    /// assert_eq!(engine.score("", ""), 1.0);
    /// assert_eq!(engine.score("proj-be", "proj-be"), 1.0);
    /// assert!(engine.score("proj-be", "proj_be") > 0.75);
    /// assert_eq!(engine.score("proj-be", "xyz"), engine.score("xyz", "proj-be"));
    /// ```
    pub fn score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        // Greedy Jaro matching depends on argument order; fix it for symmetry
        let (a, b) = if a <= b { (a, b) } else { (b, a) };

        let mut total = 0.0;
        let mut weights = 0.0;

        if self.algorithms.levenshtein {
            total += levenshtein_similarity(a, b) * self.weights.levenshtein;
            weights += self.weights.levenshtein;
        }

        if self.algorithms.jaro_winkler {
            total += jaro_winkler_similarity(a, b) * self.weights.jaro_winkler;
            weights += self.weights.jaro_winkler;
        }

        if self.algorithms.token_overlap {
            total += token_overlap_similarity(a, b) * self.weights.token_overlap;
            weights += self.weights.token_overlap;
        }

        if weights > 0.0 { total / weights } else { 0.0 }
    }
}

/// `1 - distance / max_len` over characters; two empty strings score 1.0.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - strsim::levenshtein(a, b) as f64 / max_len as f64
}

/// Standard Jaro similarity.
///
/// Characters match when equal and no further apart than
/// `floor(max_len / 2) - 1`; transpositions are matched characters that
/// appear in a different order.
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut b_matches = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    for (ca, _) in a.iter().zip(&a_matched).filter(|(_, m)| **m) {
        if b_matches.next() != Some(ca) {
            transpositions += 1;
        }
    }

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0
}

/// Jaro similarity boosted by `0.1 * prefix * (1 - jaro)` for a common
/// prefix of up to four characters.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let jaro = jaro_similarity(a, b);
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(WINKLER_PREFIX_LIMIT)
        .take_while(|(ca, cb)| ca == cb)
        .count();

    jaro + prefix as f64 * WINKLER_SCALING * (1.0 - jaro)
}

/// Splits a label into lowercase tokens.
///
/// Splits on `/`, `-` and `_`, then before every uppercase letter, and drops
/// empty tokens.
///
/// # Examples
///
/// ```
/// use tagcat::matcher::tokenize;
///
/// assert_eq!(tokenize("proj/backEnd_v2"), vec!["proj", "back", "end", "v2"]);
/// assert!(tokenize("--/").is_empty());
/// ```
pub fn tokenize(label: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for part in label.split(['/', '-', '_']) {
        let mut current = String::new();
        for c in part.chars() {
            if c.is_uppercase() && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }

    tokens
        .into_iter()
        .map(|token| token.to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Jaccard index of the two token sets.
///
/// Both empty scores 1.0; exactly one empty scores 0.0.
pub fn token_overlap_similarity(a: &str, b: &str) -> f64 {
    let a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let b: BTreeSet<String> = tokenize(b).into_iter().collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();
    intersection as f64 / union as f64
}
