use crate::catalog::Catalog;
use crate::config::Settings;
use crate::models::{LabelInfo, SimilarityBand, Suggestion};

use super::similarity::SimilarityEngine;

/// Produces ranked merge suggestions from a catalog.
///
/// Canonical forms are compared with one leading marker removed, so labels
/// normalized without punctuation stripping still compare by their bodies.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGenerator {
    engine: SimilarityEngine,
    threshold: f64,
    marker: char,
}

impl SuggestionGenerator {
    pub fn new(engine: SimilarityEngine, threshold: f64, marker: char) -> Self {
        Self {
            engine,
            threshold,
            marker,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            SimilarityEngine::from_settings(settings),
            settings.similarity_threshold,
            settings.marker,
        )
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores every unordered pair of distinct labels.
    ///
    /// Pairs at or above the threshold become suggestions, sorted by
    /// descending similarity. The sort is stable, so equal scores keep pair
    /// generation order (catalog label order). Quadratic in catalog size.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use tagcat::{CatalogIndexer, MemoryStore, Settings, SuggestionGenerator};
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// store.insert("a.md", "#project-backend #project-backend");
    /// store.insert("b.md", "#project_backend");
    ///
    /// let settings = Settings::default();
    /// let indexer = CatalogIndexer::with_store(store, settings.clone());
    /// indexer.rebuild_all(None).unwrap();
    ///
    /// let suggestions = SuggestionGenerator::from_settings(&settings)
    ///     .find_similar_pairs(&indexer.catalog());
    /// assert_eq!(suggestions[0].source, "#project_backend");
    /// assert_eq!(suggestions[0].target, "#project-backend");
    /// assert_eq!(suggestions[0].similarity, 1.0);
    /// ```
    pub fn find_similar_pairs(&self, catalog: &Catalog) -> Vec<Suggestion> {
        let infos: Vec<&LabelInfo> = catalog.iter().collect();
        let mut suggestions = Vec::new();

        for (i, first) in infos.iter().enumerate() {
            for second in &infos[i + 1..] {
                if let Some(suggestion) = self.compare(first, second) {
                    suggestions.push(suggestion);
                }
            }
        }

        sort_by_similarity(&mut suggestions);
        suggestions
    }

    /// Scores `label` against every other label in the catalog.
    ///
    /// Returns an empty list if `label` is not cataloged.
    pub fn find_similar_to(&self, label: &str, catalog: &Catalog) -> Vec<Suggestion> {
        let Some(target) = catalog.get(label) else {
            return Vec::new();
        };

        let mut suggestions: Vec<Suggestion> = catalog
            .iter()
            .filter(|other| other.label() != label)
            .filter_map(|other| self.compare(target, other))
            .collect();

        sort_by_similarity(&mut suggestions);
        suggestions
    }

    fn compare(&self, first: &LabelInfo, second: &LabelInfo) -> Option<Suggestion> {
        let similarity = self.engine.score(
            self.comparable(first.canonical()),
            self.comparable(second.canonical()),
        );
        if similarity < self.threshold {
            return None;
        }

        // The less used label folds into the more used one; ties keep `first`
        let (source, target) = if first.count() >= second.count() {
            (second, first)
        } else {
            (first, second)
        };

        let band = SimilarityBand::from_score(similarity);
        Some(Suggestion {
            source: source.label().to_string(),
            target: target.label().to_string(),
            similarity,
            occurrence_count: source.count(),
            affected_documents: source.documents(),
            band,
            reason: band.rationale(similarity),
        })
    }

    fn comparable<'a>(&self, canonical: &'a str) -> &'a str {
        canonical.strip_prefix(self.marker).unwrap_or(canonical)
    }
}

fn sort_by_similarity(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}
