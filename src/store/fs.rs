use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{DocumentStore, FrontMatterProvider, frontmatter};
use crate::models::DocumentId;

/// Directory-backed document store.
///
/// Every `*.md` file under the root is a document. Hidden files and
/// directories are skipped. Document ids are `/`-separated paths relative to
/// the root.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a document id to its path under the root.
    pub fn path_of(&self, id: &DocumentId) -> PathBuf {
        self.root.join(id.as_str())
    }

    /// Maps a path under the root back to its document id.
    pub fn id_of(&self, path: &Path) -> Option<DocumentId> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(DocumentId::new(parts.join("/")))
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

impl DocumentStore for FsStore {
    fn list_documents(&self) -> io::Result<Vec<DocumentId>> {
        let mut ids = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || !is_hidden(&entry.file_name().to_string_lossy())
        });

        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
            if entry.file_type().is_file()
                && is_markdown
                && let Some(id) = self.id_of(entry.path())
            {
                ids.push(id);
            }
        }

        ids.sort();
        debug!(root = %self.root.display(), documents = ids.len(), "listed documents");
        Ok(ids)
    }

    fn read_document(&self, id: &DocumentId) -> io::Result<String> {
        fs::read_to_string(self.path_of(id))
    }
}

impl FrontMatterProvider for FsStore {
    fn front_matter_tags(&self, id: &DocumentId) -> Option<Vec<String>> {
        let text = fs::read_to_string(self.path_of(id)).ok()?;
        frontmatter::front_matter_tags(&text)
    }
}
