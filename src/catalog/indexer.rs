//! Catalog indexer: owns the label catalog and keeps it in sync with the corpus.
//!
//! Every mutation (full rebuild, single-document index, single-document
//! removal) runs behind one writer lock, so incremental updates that arrive
//! during a rebuild wait for it to finish and then apply on top of it.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::entries::Catalog;
use super::events::{DocumentEvent, Listeners, SubscriptionId};
use super::extractor::OccurrenceExtractor;
use super::normalizer::LabelNormalizer;
use crate::config::{NormalizationRules, Settings};
use crate::models::{DocumentId, LabelInfo};
use crate::store::{DocumentStore, FrontMatterProvider};

/// Errors that can occur while indexing documents.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A full rebuild was requested while another one was running
    #[error("A catalog rebuild is already in progress")]
    RebuildInProgress,

    /// The document does not exist in the store
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// The document exists but its text could not be read
    #[error("Failed to read document {id}: {source}")]
    DocumentRead {
        id: DocumentId,
        #[source]
        source: io::Error,
    },

    /// The store could not enumerate its documents
    #[error("Failed to list documents: {0}")]
    ListDocuments(#[source] io::Error),
}

impl IndexError {
    fn from_read(id: &DocumentId, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::DocumentNotFound(id.clone())
        } else {
            Self::DocumentRead {
                id: id.clone(),
                source,
            }
        }
    }
}

/// A document that failed during a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub document: DocumentId,
    pub error: String,
}

/// Outcome of a completed full rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RebuildReport {
    /// Documents enumerated by the store.
    pub total: usize,
    /// Documents indexed successfully.
    pub indexed: usize,
    /// Occurrences inserted across all documents.
    pub occurrences: usize,
    /// Documents skipped because they could not be read.
    pub failures: Vec<DocumentFailure>,
}

/// Clears the rebuild flag on drop, including on panic.
struct RebuildFlag<'a>(&'a AtomicBool);

impl Drop for RebuildFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Maintains the label catalog for a document corpus.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tagcat::{CatalogIndexer, DocumentId, MemoryStore, Settings};
///
/// let store = Arc::new(MemoryStore::new());
/// store.insert("a.md", "#todo buy milk\n#todo call mom");
///
/// let indexer = CatalogIndexer::with_store(store, Settings::default());
/// indexer.rebuild_all(None).unwrap();
///
/// let info = indexer.label_info("#todo").unwrap();
/// assert_eq!(info.count(), 2);
/// ```
pub struct CatalogIndexer {
    store: Arc<dyn DocumentStore>,
    front_matter: Arc<dyn FrontMatterProvider>,
    rules: RwLock<NormalizationRules>,
    extractor: OccurrenceExtractor,
    catalog: RwLock<Catalog>,
    writer: Mutex<()>,
    rebuilding: AtomicBool,
    listeners: Listeners,
}

impl CatalogIndexer {
    /// Creates an indexer reading text from `store` and front-matter from `front_matter`.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        front_matter: Arc<dyn FrontMatterProvider>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            front_matter,
            rules: RwLock::new(settings.normalization_rules),
            extractor: OccurrenceExtractor::new(settings.marker),
            catalog: RwLock::new(Catalog::new()),
            writer: Mutex::new(()),
            rebuilding: AtomicBool::new(false),
            listeners: Listeners::default(),
        }
    }

    /// Creates an indexer over a store that also provides front-matter.
    pub fn with_store<S>(store: Arc<S>, settings: Settings) -> Self
    where
        S: DocumentStore + FrontMatterProvider + 'static,
    {
        let front_matter: Arc<dyn FrontMatterProvider> = store.clone();
        Self::new(store, front_matter, settings)
    }

    /// Returns the label marker this indexer extracts.
    pub fn marker(&self) -> char {
        self.extractor.marker()
    }

    /// Returns true while a full rebuild is running.
    pub fn is_rebuilding(&self) -> bool {
        self.rebuilding.load(Ordering::SeqCst)
    }

    /// Clears the catalog and indexes every document in the store.
    ///
    /// `progress` is called with `(current, total)` after each document.
    /// A document that cannot be read is logged, recorded in the report and
    /// skipped; the rebuild carries on with the rest.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::RebuildInProgress` without touching the catalog if
    /// another rebuild is running; the running one is unaffected. Returns
    /// `IndexError::ListDocuments` if the store cannot enumerate documents, in
    /// which case the catalog is left as it was.
    pub fn rebuild_all(
        &self,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> Result<RebuildReport, IndexError> {
        if self
            .rebuilding
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("catalog rebuild already in progress, dropping request");
            return Err(IndexError::RebuildInProgress);
        }
        let _flag = RebuildFlag(&self.rebuilding);

        let report = {
            let _writer = self.lock_writer();

            let documents = self
                .store
                .list_documents()
                .map_err(IndexError::ListDocuments)?;
            let total = documents.len();
            info!(documents = total, "rebuilding catalog");

            self.write_catalog().clear();

            let mut report = RebuildReport {
                total,
                ..RebuildReport::default()
            };
            for (index, document) in documents.iter().enumerate() {
                match self.index_locked(document) {
                    Ok(occurrences) => {
                        report.indexed += 1;
                        report.occurrences += occurrences;
                    }
                    Err(e) => {
                        warn!(document = %document, error = %e, "skipping unreadable document");
                        report.failures.push(DocumentFailure {
                            document: document.clone(),
                            error: e.to_string(),
                        });
                    }
                }

                if let Some(progress) = progress.as_deref_mut() {
                    progress(index + 1, total);
                }
            }
            report
        };

        info!(
            indexed = report.indexed,
            failed = report.failures.len(),
            labels = self.label_count(),
            "catalog rebuild complete"
        );
        self.listeners.notify();
        Ok(report)
    }

    /// Re-indexes one document from its current content.
    ///
    /// Existing occurrences for the document are always removed first, so
    /// indexing the same content twice leaves the catalog unchanged. Returns
    /// the number of occurrences inserted.
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` or `DocumentRead` if the text cannot be
    /// read. The document's stale occurrences are still removed.
    pub fn index_document(&self, document: &DocumentId) -> Result<usize, IndexError> {
        let result = {
            let _writer = self.lock_writer();
            self.index_locked(document)
        };
        self.listeners.notify();
        result
    }

    /// Removes every occurrence belonging to `document`.
    ///
    /// Labels left without occurrences are deleted. Removing a document that
    /// was never indexed is a no-op. Returns the number of occurrences removed.
    pub fn remove_document(&self, document: &DocumentId) -> usize {
        let removed = {
            let _writer = self.lock_writer();
            self.write_catalog().remove_document(document)
        };
        debug!(document = %document, removed, "removed document from catalog");
        self.listeners.notify();
        removed
    }

    /// Applies one host change notification.
    ///
    /// # Errors
    ///
    /// Propagates the indexing error for `Changed` events.
    pub fn handle_event(&self, event: DocumentEvent) -> Result<(), IndexError> {
        match event {
            DocumentEvent::Changed(document) => self.index_document(&document).map(|_| ()),
            DocumentEvent::Deleted(document) => {
                self.remove_document(&document);
                Ok(())
            }
        }
    }

    /// Applies events from `events` until every sender has hung up.
    ///
    /// Failures are logged and do not stop the loop. Returns the number of
    /// events handled.
    pub fn run_events(&self, events: Receiver<DocumentEvent>) -> usize {
        let mut handled = 0;
        for event in events {
            if let Err(e) = self.handle_event(event) {
                warn!(error = %e, "failed to apply document event");
            }
            handled += 1;
        }
        handled
    }

    /// Registers a listener fired after every catalog mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.subscribe(Arc::new(listener))
    }

    /// Removes a listener, returning whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replaces the normalization rules and recomputes every canonical form.
    pub fn set_normalization_rules(&self, rules: NormalizationRules) {
        {
            let _writer = self.lock_writer();
            *self.rules.write().unwrap_or_else(PoisonError::into_inner) = rules;
            self.write_catalog()
                .recanonicalize(|label| LabelNormalizer::normalize(label, &rules));
        }
        self.listeners.notify();
    }

    /// Read-only view of the catalog. Holding it blocks writers.
    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the current catalog.
    pub fn snapshot(&self) -> Catalog {
        self.catalog().clone()
    }

    pub fn label_info(&self, label: &str) -> Option<LabelInfo> {
        self.catalog().get(label).cloned()
    }

    pub fn all_labels(&self) -> Vec<String> {
        self.catalog().labels()
    }

    pub fn label_count(&self) -> usize {
        self.catalog().len()
    }

    /// Indexes one document. Caller must hold the writer lock.
    fn index_locked(&self, document: &DocumentId) -> Result<usize, IndexError> {
        let text = self.store.read_document(document);
        let front_matter = self.front_matter.front_matter_tags(document);
        let rules = *self.rules.read().unwrap_or_else(PoisonError::into_inner);

        let mut catalog = self.write_catalog();
        catalog.remove_document(document);

        let text = text.map_err(|e| IndexError::from_read(document, e))?;
        let found = self
            .extractor
            .extract(document, &text, front_matter.as_deref().unwrap_or_default());
        let inserted = found.len();

        for (label, occurrence) in found {
            catalog.add_occurrence(
                label,
                |label| LabelNormalizer::normalize(label, &rules),
                occurrence,
            );
        }

        debug!(document = %document, occurrences = inserted, "indexed document");
        Ok(inserted)
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_catalog(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Barrier, mpsc};
    use std::thread;

    fn indexer_with(docs: &[(&str, &str)]) -> (Arc<MemoryStore>, CatalogIndexer) {
        let store = Arc::new(MemoryStore::new());
        for (id, text) in docs {
            store.insert(*id, *text);
        }
        let indexer = CatalogIndexer::with_store(Arc::clone(&store), Settings::default());
        (store, indexer)
    }

    #[test]
    fn index_document_counts_repeated_label() {
        let (_store, indexer) = indexer_with(&[("a.md", "#todo one\nplain\n#todo two")]);

        let inserted = indexer
            .index_document(&DocumentId::from("a.md"))
            .expect("indexing should succeed");

        assert_eq!(inserted, 2);
        let info = indexer.label_info("#todo").expect("label should exist");
        assert_eq!(info.count(), 2);
        assert_eq!(info.occurrences()[0].line(), 0);
        assert_eq!(info.occurrences()[1].line(), 2);
    }

    #[test]
    fn index_document_is_idempotent() {
        let (_store, indexer) = indexer_with(&[("a.md", "#x #y\n#x")]);
        let id = DocumentId::from("a.md");

        indexer.index_document(&id).unwrap();
        let once = indexer.snapshot();
        indexer.index_document(&id).unwrap();

        assert_eq!(indexer.snapshot(), once);
    }

    #[test]
    fn reindex_drops_labels_removed_from_content() {
        let (store, indexer) = indexer_with(&[("a.md", "#old")]);
        let id = DocumentId::from("a.md");
        indexer.index_document(&id).unwrap();

        store.insert("a.md", "#new");
        indexer.index_document(&id).unwrap();

        assert_eq!(indexer.all_labels(), vec!["#new".to_string()]);
    }

    #[test]
    fn canonical_form_uses_normalization_rules() {
        let (_store, indexer) = indexer_with(&[("a.md", "#Café_Notes")]);
        indexer.index_document(&DocumentId::from("a.md")).unwrap();

        let info = indexer.label_info("#Café_Notes").unwrap();
        assert_eq!(info.canonical(), "cafe-notes");
    }

    #[test]
    fn front_matter_tags_are_indexed() {
        let (_store, indexer) =
            indexer_with(&[("a.md", "---\ntags: [rust]\n---\nbody #rust")]);
        indexer.index_document(&DocumentId::from("a.md")).unwrap();

        let info = indexer.label_info("#rust").unwrap();
        assert_eq!(info.count(), 2);
        assert!(info.occurrences()[0].is_front_matter());
        assert!(!info.occurrences()[1].is_front_matter());
    }

    #[test]
    fn empty_document_contributes_nothing() {
        let (_store, indexer) = indexer_with(&[("empty.md", "")]);

        let inserted = indexer.index_document(&DocumentId::from("empty.md")).unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(indexer.label_count(), 0);
    }

    #[test]
    fn remove_document_is_complete() {
        let (_store, indexer) = indexer_with(&[("a.md", "#only-a #shared"), ("b.md", "#shared")]);
        indexer.rebuild_all(None).unwrap();

        let a = DocumentId::from("a.md");
        let removed = indexer.remove_document(&a);

        assert_eq!(removed, 2);
        assert!(indexer.label_info("#only-a").is_none());
        let catalog = indexer.catalog();
        assert!(catalog.iter().all(|info| !info.appears_in(&a)));
        assert_eq!(catalog.get("#shared").map(LabelInfo::count), Some(1));
    }

    #[test]
    fn remove_unindexed_document_is_noop() {
        let (_store, indexer) = indexer_with(&[("a.md", "#x")]);
        indexer.rebuild_all(None).unwrap();

        assert_eq!(indexer.remove_document(&DocumentId::from("never.md")), 0);
        assert_eq!(indexer.label_count(), 1);
    }

    #[test]
    fn missing_document_fails_and_clears_stale_occurrences() {
        let (store, indexer) = indexer_with(&[("a.md", "#gone")]);
        let id = DocumentId::from("a.md");
        indexer.index_document(&id).unwrap();

        store.remove(&id);
        let result = indexer.index_document(&id);

        assert!(matches!(result, Err(IndexError::DocumentNotFound(_))));
        assert_eq!(indexer.label_count(), 0);
    }

    #[test]
    fn rebuild_reports_progress_for_each_document() {
        let (_store, indexer) = indexer_with(&[("a.md", "#a"), ("b.md", "#b"), ("c.md", "")]);
        let mut calls = Vec::new();

        let report = indexer
            .rebuild_all(Some(&mut |current: usize, total: usize| {
                calls.push((current, total))
            }))
            .unwrap();

        assert_eq!(calls, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(report.total, 3);
        assert_eq!(report.indexed, 3);
        assert_eq!(report.occurrences, 2);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn rebuild_clears_previous_state() {
        let (store, indexer) = indexer_with(&[("a.md", "#a")]);
        indexer.rebuild_all(None).unwrap();

        store.remove(&DocumentId::from("a.md"));
        store.insert("b.md", "#b");
        indexer.rebuild_all(None).unwrap();

        assert_eq!(indexer.all_labels(), vec!["#b".to_string()]);
    }

    /// Lists one document it cannot read.
    struct FlakyStore;

    impl DocumentStore for FlakyStore {
        fn list_documents(&self) -> io::Result<Vec<DocumentId>> {
            Ok(vec![DocumentId::from("bad.md"), DocumentId::from("good.md")])
        }

        fn read_document(&self, id: &DocumentId) -> io::Result<String> {
            if id.as_str() == "bad.md" {
                Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"))
            } else {
                Ok("#fine".to_string())
            }
        }
    }

    impl FrontMatterProvider for FlakyStore {
        fn front_matter_tags(&self, _id: &DocumentId) -> Option<Vec<String>> {
            None
        }
    }

    #[test]
    fn rebuild_isolates_unreadable_documents() {
        let indexer = CatalogIndexer::with_store(Arc::new(FlakyStore), Settings::default());

        let report = indexer.rebuild_all(None).expect("rebuild should complete");

        assert_eq!(report.indexed, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].document.as_str(), "bad.md");
        assert_eq!(indexer.all_labels(), vec!["#fine".to_string()]);
    }

    /// Lists its documents once, then fails every later listing.
    struct VanishingStore {
        inner: MemoryStore,
        listed: AtomicBool,
    }

    impl DocumentStore for VanishingStore {
        fn list_documents(&self) -> io::Result<Vec<DocumentId>> {
            if self.listed.swap(true, Ordering::SeqCst) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "folder gone"));
            }
            self.inner.list_documents()
        }

        fn read_document(&self, id: &DocumentId) -> io::Result<String> {
            self.inner.read_document(id)
        }
    }

    impl FrontMatterProvider for VanishingStore {
        fn front_matter_tags(&self, id: &DocumentId) -> Option<Vec<String>> {
            self.inner.front_matter_tags(id)
        }
    }

    #[test]
    fn failed_listing_keeps_previous_catalog() {
        let inner = MemoryStore::new();
        inner.insert("a.md", "#kept #kept");
        let store = Arc::new(VanishingStore {
            inner,
            listed: AtomicBool::new(false),
        });
        let indexer = CatalogIndexer::with_store(store, Settings::default());
        indexer.rebuild_all(None).expect("first rebuild should succeed");
        let before = indexer.snapshot();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        indexer.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let result = indexer.rebuild_all(None);

        assert!(matches!(result, Err(IndexError::ListDocuments(_))));
        assert_eq!(indexer.snapshot(), before);
        assert_eq!(indexer.label_info("#kept").map(|info| info.count()), Some(2));
        assert!(!indexer.is_rebuilding());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    /// Blocks inside `list_documents` until the test releases it.
    struct GatedStore {
        inner: MemoryStore,
        entered: Barrier,
        release: Barrier,
    }

    impl GatedStore {
        fn new(docs: &[(&str, &str)]) -> Self {
            let inner = MemoryStore::new();
            for (id, text) in docs {
                inner.insert(*id, *text);
            }
            Self {
                inner,
                entered: Barrier::new(2),
                release: Barrier::new(2),
            }
        }
    }

    impl DocumentStore for GatedStore {
        fn list_documents(&self) -> io::Result<Vec<DocumentId>> {
            self.entered.wait();
            self.release.wait();
            self.inner.list_documents()
        }

        fn read_document(&self, id: &DocumentId) -> io::Result<String> {
            self.inner.read_document(id)
        }
    }

    impl FrontMatterProvider for GatedStore {
        fn front_matter_tags(&self, id: &DocumentId) -> Option<Vec<String>> {
            self.inner.front_matter_tags(id)
        }
    }

    #[test]
    fn concurrent_rebuild_is_rejected_not_queued() {
        let store = Arc::new(GatedStore::new(&[("a.md", "#alpha")]));
        let indexer = CatalogIndexer::with_store(Arc::clone(&store), Settings::default());

        thread::scope(|scope| {
            let first = scope.spawn(|| indexer.rebuild_all(None));

            store.entered.wait();
            assert!(indexer.is_rebuilding());
            let second = indexer.rebuild_all(None);
            assert!(matches!(second, Err(IndexError::RebuildInProgress)));
            store.release.wait();

            let report = first.join().expect("rebuild thread panicked");
            assert_eq!(report.expect("first rebuild should succeed").indexed, 1);
        });

        assert!(!indexer.is_rebuilding());
        assert_eq!(indexer.all_labels(), vec!["#alpha".to_string()]);
    }

    #[test]
    fn incremental_update_waits_for_running_rebuild() {
        let store = Arc::new(GatedStore::new(&[("a.md", "#alpha"), ("b.md", "#beta")]));
        let indexer = CatalogIndexer::with_store(Arc::clone(&store), Settings::default());

        thread::scope(|scope| {
            let rebuild = scope.spawn(|| indexer.rebuild_all(None));
            store.entered.wait();

            let incremental = scope.spawn(|| {
                indexer.index_document(&DocumentId::from("b.md")).unwrap();
                // Serialized behind the rebuild, so its labels are already in place
                indexer.label_info("#alpha").is_some()
            });

            store.release.wait();
            rebuild.join().expect("rebuild thread panicked").unwrap();
            assert!(incremental.join().expect("index thread panicked"));
        });

        assert_eq!(indexer.label_info("#beta").map(|i| i.count()), Some(1));
    }

    #[test]
    fn every_mutation_notifies_subscribers() {
        let (_store, indexer) = indexer_with(&[("a.md", "#a")]);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        indexer.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        indexer.rebuild_all(None).unwrap();
        indexer.index_document(&DocumentId::from("a.md")).unwrap();
        indexer.remove_document(&DocumentId::from("a.md"));

        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn rejected_rebuild_does_not_notify() {
        let (_store, indexer) = indexer_with(&[]);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = indexer.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        indexer.rebuilding.store(true, Ordering::SeqCst);
        assert!(indexer.rebuild_all(None).is_err());
        indexer.rebuilding.store(false, Ordering::SeqCst);

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(indexer.unsubscribe(id));
    }

    #[test]
    fn events_drive_incremental_updates() {
        let (store, indexer) = indexer_with(&[("a.md", "#a")]);
        let (tx, rx) = mpsc::channel();

        tx.send(DocumentEvent::Changed(DocumentId::from("a.md"))).unwrap();
        store.insert("b.md", "#b");
        tx.send(DocumentEvent::Changed(DocumentId::from("b.md"))).unwrap();
        tx.send(DocumentEvent::Deleted(DocumentId::from("a.md"))).unwrap();
        tx.send(DocumentEvent::Changed(DocumentId::from("missing.md"))).unwrap();
        drop(tx);

        let handled = indexer.run_events(rx);

        assert_eq!(handled, 4);
        assert_eq!(indexer.all_labels(), vec!["#b".to_string()]);
    }

    #[test]
    fn changing_rules_recomputes_canonical_forms() {
        let (_store, indexer) = indexer_with(&[("a.md", "#Big_Idea")]);
        indexer.rebuild_all(None).unwrap();
        assert_eq!(indexer.label_info("#Big_Idea").unwrap().canonical(), "big-idea");

        indexer.set_normalization_rules(NormalizationRules {
            case_folding: false,
            ..NormalizationRules::default()
        });

        assert_eq!(indexer.label_info("#Big_Idea").unwrap().canonical(), "Big-Idea");
    }
}
