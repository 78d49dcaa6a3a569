//! Collaborator capabilities the catalog reads documents through.
//!
//! The core never writes documents. A store only has to enumerate ids, hand
//! back current text, and report pre-parsed front-matter tags.

use std::io;

use crate::models::DocumentId;

pub mod frontmatter;
mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Read access to the document corpus.
///
/// Implementations must be shareable across threads so a single store can
/// serve both a full rebuild and incremental change handling.
pub trait DocumentStore: Send + Sync {
    /// Enumerates every document. Order must be deterministic.
    fn list_documents(&self) -> io::Result<Vec<DocumentId>>;

    /// Returns the full current text of a document.
    fn read_document(&self, id: &DocumentId) -> io::Result<String>;
}

/// Source of structured front-matter tags.
pub trait FrontMatterProvider: Send + Sync {
    /// Returns the document's front-matter tags, or `None` if it has none or
    /// has not been parsed yet.
    fn front_matter_tags(&self, id: &DocumentId) -> Option<Vec<String>>;
}
