use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocumentId;

/// Where a label mention was found inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OccurrenceSource {
    /// Declared in the document's structured front-matter.
    FrontMatter,
    /// Written inline in the document body.
    Inline,
}

impl fmt::Display for OccurrenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontMatter => write!(f, "front-matter"),
            Self::Inline => write!(f, "inline"),
        }
    }
}

/// One physical mention of a label.
///
/// `start` and `end` are character offsets into `context`. For front-matter
/// mentions they are always `0..tag_length` and carry no positional meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    document: DocumentId,
    line: usize,
    context: String,
    source: OccurrenceSource,
    start: usize,
    end: usize,
}

impl Occurrence {
    /// Creates an inline occurrence spanning `start..end` of the line.
    pub fn inline(
        document: DocumentId,
        line: usize,
        context: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            document,
            line,
            context: context.into(),
            source: OccurrenceSource::Inline,
            start,
            end,
        }
    }

    /// Creates a front-matter occurrence for a tag of `tag_length` characters.
    pub fn front_matter(
        document: DocumentId,
        line: usize,
        context: impl Into<String>,
        tag_length: usize,
    ) -> Self {
        Self {
            document,
            line,
            context: context.into(),
            source: OccurrenceSource::FrontMatter,
            start: 0,
            end: tag_length,
        }
    }

    /// Returns the owning document.
    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    /// Returns the zero-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the full text of the line containing the mention.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn source(&self) -> OccurrenceSource {
        self.source
    }

    pub fn is_front_matter(&self) -> bool {
        self.source == OccurrenceSource::FrontMatter
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}
