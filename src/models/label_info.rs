use serde::{Deserialize, Serialize};

use super::{DocumentId, Occurrence};

/// A catalog entry for one distinct raw label.
///
/// The raw label is kept exactly as typed, marker included. `canonical` is the
/// normalized comparison form. `count` always equals the number of
/// occurrences; entries are only mutated through the catalog so the two never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelInfo {
    label: String,
    canonical: String,
    count: usize,
    occurrences: Vec<Occurrence>,
}

impl LabelInfo {
    /// Creates an entry with no occurrences yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcat::LabelInfo;
    ///
    /// let info = LabelInfo::new("#Rust", "rust");
    /// assert_eq!(info.label(), "#Rust");
    /// assert_eq!(info.canonical(), "rust");
    /// assert_eq!(info.count(), 0);
    /// ```
    pub fn new(label: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            canonical: canonical.into(),
            count: 0,
            occurrences: Vec::new(),
        }
    }

    /// Returns the raw label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the normalized form used for similarity.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns occurrences in discovery order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Returns the document of every occurrence, one entry per occurrence.
    pub fn documents(&self) -> Vec<DocumentId> {
        self.occurrences
            .iter()
            .map(|occ| occ.document().clone())
            .collect()
    }

    /// Returns true if any occurrence belongs to `document`.
    pub fn appears_in(&self, document: &DocumentId) -> bool {
        self.occurrences.iter().any(|occ| occ.document() == document)
    }

    pub(crate) fn set_canonical(&mut self, canonical: String) {
        self.canonical = canonical;
    }

    pub(crate) fn push(&mut self, occurrence: Occurrence) {
        self.occurrences.push(occurrence);
        self.count = self.occurrences.len();
    }

    /// Drops every occurrence belonging to `document`, returning how many were removed.
    pub(crate) fn remove_document(&mut self, document: &DocumentId) -> usize {
        let before = self.occurrences.len();
        self.occurrences.retain(|occ| occ.document() != document);
        self.count = self.occurrences.len();
        before - self.count
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(doc: &str, line: usize) -> Occurrence {
        Occurrence::inline(DocumentId::from(doc), line, "#todo", 0, 5)
    }

    #[test]
    fn push_keeps_count_in_sync() {
        let mut info = LabelInfo::new("#todo", "todo");
        info.push(occ("a.md", 0));
        info.push(occ("a.md", 4));

        assert_eq!(info.count(), 2);
        assert_eq!(info.occurrences().len(), 2);
    }

    #[test]
    fn remove_document_only_drops_matching_occurrences() {
        let mut info = LabelInfo::new("#todo", "todo");
        info.push(occ("a.md", 0));
        info.push(occ("b.md", 1));
        info.push(occ("a.md", 2));

        let removed = info.remove_document(&DocumentId::from("a.md"));

        assert_eq!(removed, 2);
        assert_eq!(info.count(), 1);
        assert!(!info.appears_in(&DocumentId::from("a.md")));
        assert!(info.appears_in(&DocumentId::from("b.md")));
    }

    #[test]
    fn documents_lists_one_entry_per_occurrence() {
        let mut info = LabelInfo::new("#todo", "todo");
        info.push(occ("a.md", 0));
        info.push(occ("a.md", 3));

        assert_eq!(
            info.documents(),
            vec![DocumentId::from("a.md"), DocumentId::from("a.md")]
        );
    }

    #[test]
    fn serialization_includes_count() {
        let mut info = LabelInfo::new("#todo", "todo");
        info.push(occ("a.md", 0));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["label"], "#todo");
    }
}
