use std::collections::BTreeMap;
use std::io;
use std::sync::{PoisonError, RwLock};

use super::{DocumentStore, FrontMatterProvider, frontmatter};
use crate::models::DocumentId;

/// In-memory document store.
///
/// Front-matter tags come from an explicit override when one was set with
/// [`MemoryStore::set_front_matter`], otherwise from parsing the document's
/// own YAML front-matter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<DocumentId, String>>,
    front_matter: RwLock<BTreeMap<DocumentId, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a document's text.
    pub fn insert(&self, id: impl Into<DocumentId>, text: impl Into<String>) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), text.into());
    }

    /// Overrides the front-matter tags reported for a document.
    pub fn set_front_matter(&self, id: impl Into<DocumentId>, tags: Vec<String>) {
        self.front_matter
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), tags);
    }

    /// Removes a document and any front-matter override, returning whether it existed.
    pub fn remove(&self, id: &DocumentId) -> bool {
        self.front_matter
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }
}

impl DocumentStore for MemoryStore {
    fn list_documents(&self) -> io::Result<Vec<DocumentId>> {
        Ok(self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect())
    }

    fn read_document(&self, id: &DocumentId) -> io::Result<String> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no document {id}")))
    }
}

impl FrontMatterProvider for MemoryStore {
    fn front_matter_tags(&self, id: &DocumentId) -> Option<Vec<String>> {
        if let Some(tags) = self
            .front_matter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
        {
            return Some(tags.clone());
        }

        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        frontmatter::front_matter_tags(documents.get(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_documents_in_id_order() {
        let store = MemoryStore::new();
        store.insert("b.md", "");
        store.insert("a.md", "");

        let ids = store.list_documents().unwrap();
        assert_eq!(ids, vec![DocumentId::from("a.md"), DocumentId::from("b.md")]);
    }

    #[test]
    fn reading_missing_document_is_not_found() {
        let store = MemoryStore::new();
        let err = store.read_document(&DocumentId::from("nope.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn front_matter_parsed_from_text() {
        let store = MemoryStore::new();
        store.insert("a.md", "---\ntags: [x, y]\n---\n");

        let tags = store.front_matter_tags(&DocumentId::from("a.md"));
        assert_eq!(tags, Some(vec!["x".to_string(), "y".to_string()]));
    }

    #[test]
    fn explicit_front_matter_overrides_text() {
        let store = MemoryStore::new();
        store.insert("a.md", "---\ntags: [x]\n---\n");
        store.set_front_matter("a.md", vec!["z".to_string()]);

        let tags = store.front_matter_tags(&DocumentId::from("a.md"));
        assert_eq!(tags, Some(vec!["z".to_string()]));
    }

    #[test]
    fn remove_reports_existence() {
        let store = MemoryStore::new();
        store.insert("a.md", "x");

        assert!(store.remove(&DocumentId::from("a.md")));
        assert!(!store.remove(&DocumentId::from("a.md")));
    }
}
