use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{DocumentId, LabelInfo, Occurrence};

/// Aggregate counts over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    /// Distinct raw labels.
    pub labels: usize,
    /// Occurrences across all labels.
    pub occurrences: usize,
    /// Documents with at least one occurrence.
    pub documents: usize,
}

/// Mapping from raw label to its catalog entry.
///
/// Keys are kept sorted so iteration, and therefore pair generation, is
/// deterministic. An entry never exists with zero occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, LabelInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for a raw label.
    pub fn get(&self, label: &str) -> Option<&LabelInfo> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of distinct raw labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = &LabelInfo> {
        self.entries.values()
    }

    /// Returns every raw label in label order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns entries sorted by descending count, ties broken by label.
    pub fn labels_by_count(&self) -> Vec<&LabelInfo> {
        let mut infos: Vec<&LabelInfo> = self.entries.values().collect();
        infos.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.label().cmp(b.label())));
        infos
    }

    /// Returns the raw labels mentioned at least once in `document`.
    pub fn document_labels(&self, document: &DocumentId) -> Vec<&str> {
        self.entries
            .values()
            .filter(|info| info.appears_in(document))
            .map(LabelInfo::label)
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let documents: BTreeSet<&DocumentId> = self
            .entries
            .values()
            .flat_map(|info| info.occurrences().iter().map(Occurrence::document))
            .collect();

        CatalogStats {
            labels: self.entries.len(),
            occurrences: self.entries.values().map(LabelInfo::count).sum(),
            documents: documents.len(),
        }
    }

    /// Appends an occurrence, creating the entry with `canonical` if needed.
    pub(crate) fn add_occurrence(
        &mut self,
        label: String,
        canonical: impl FnOnce(&str) -> String,
        occurrence: Occurrence,
    ) {
        self.entries
            .entry(label)
            .or_insert_with_key(|label| LabelInfo::new(label.clone(), canonical(label.as_str())))
            .push(occurrence);
    }

    /// Strips every occurrence of `document` and deletes emptied entries.
    ///
    /// Returns the number of occurrences removed.
    pub(crate) fn remove_document(&mut self, document: &DocumentId) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, info| {
            removed += info.remove_document(document);
            !info.is_empty()
        });
        removed
    }

    /// Recomputes every canonical form, used after normalization rules change.
    pub(crate) fn recanonicalize(&mut self, canonical: impl Fn(&str) -> String) {
        for info in self.entries.values_mut() {
            let updated = canonical(info.label());
            info.set_canonical(updated);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
