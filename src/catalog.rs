//! Label catalog: extraction, normalization, and incremental maintenance.
//!
//! The catalog maps every raw label (as typed, marker included) to its
//! occurrences across the corpus. It is owned by a [`CatalogIndexer`], which
//! is the only component allowed to mutate it.
//!
//! # Examples
//!
//! ## Full rebuild and incremental updates
//!
//! ```
//! use std::sync::Arc;
//! use tagcat::{CatalogIndexer, DocumentId, MemoryStore, Settings};
//!
//! let store = Arc::new(MemoryStore::new());
//! store.insert("daily.md", "#todo water plants\n#Todo call bank");
//! store.insert("work.md", "---\ntags: [project/backend]\n---\n#project_backend notes");
//!
//! let indexer = CatalogIndexer::with_store(Arc::clone(&store), Settings::default());
//! let report = indexer
//!     .rebuild_all(Some(&mut |current: usize, total: usize| {
//!         println!("Indexing {current}/{total}")
//!     }))
//!     .unwrap();
//! assert_eq!(report.indexed, 2);
//!
//! // "#todo" and "#Todo" stay distinct entries even though they share a canonical form
//! assert_eq!(indexer.label_count(), 4);
//!
//! store.insert("daily.md", "nothing left");
//! indexer.index_document(&DocumentId::from("daily.md")).unwrap();
//! assert!(indexer.label_info("#todo").is_none());
//! ```
//!
//! ## Change notifications
//!
//! ```
//! use std::sync::{mpsc, Arc};
//! use tagcat::{CatalogIndexer, DocumentEvent, DocumentId, MemoryStore, Settings};
//!
//! let store = Arc::new(MemoryStore::new());
//! store.insert("a.md", "#draft");
//! let indexer = CatalogIndexer::with_store(store, Settings::default());
//! indexer.subscribe(|| println!("catalog changed"));
//!
//! let (tx, rx) = mpsc::channel();
//! tx.send(DocumentEvent::Changed(DocumentId::from("a.md"))).unwrap();
//! tx.send(DocumentEvent::Deleted(DocumentId::from("a.md"))).unwrap();
//! drop(tx);
//!
//! assert_eq!(indexer.run_events(rx), 2);
//! assert_eq!(indexer.label_count(), 0);
//! ```

mod entries;
mod events;
mod extractor;
mod indexer;
mod normalizer;

pub use entries::{Catalog, CatalogStats};
pub use events::{DocumentEvent, SubscriptionId};
pub use extractor::{OccurrenceExtractor, is_label_char};
pub use indexer::{CatalogIndexer, DocumentFailure, IndexError, RebuildReport};
pub use normalizer::LabelNormalizer;
