use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocumentId;

/// Coarse similarity bands used to phrase a suggestion's rationale.
///
/// Band edges are exclusive lower bounds: a score of exactly 0.95 is
/// `VerySimilar`, not `NearIdentical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityBand {
    NearIdentical,
    VerySimilar,
    Similar,
    PossiblyRelated,
}

impl SimilarityBand {
    /// Classifies a composite similarity score.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcat::SimilarityBand;
    ///
    /// assert_eq!(SimilarityBand::from_score(0.96), SimilarityBand::NearIdentical);
    /// assert_eq!(SimilarityBand::from_score(0.95), SimilarityBand::VerySimilar);
    /// assert_eq!(SimilarityBand::from_score(0.80), SimilarityBand::Similar);
    /// assert_eq!(SimilarityBand::from_score(0.75), SimilarityBand::PossiblyRelated);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score > 0.95 {
            Self::NearIdentical
        } else if score > 0.85 {
            Self::VerySimilar
        } else if score > 0.75 {
            Self::Similar
        } else {
            Self::PossiblyRelated
        }
    }

    /// Builds the human-readable rationale for a score in this band.
    pub fn rationale(self, score: f64) -> String {
        let percentage = (score * 100.0).round();
        match self {
            Self::NearIdentical => {
                format!("Near-identical ({percentage}% similar). Probably spelling variants.")
            }
            Self::VerySimilar => {
                format!("Very similar ({percentage}% similar). May denote the same concept.")
            }
            Self::Similar => format!("Similar ({percentage}% similar). Consider unifying."),
            Self::PossiblyRelated => format!("Possibly related ({percentage}% similar)."),
        }
    }
}

impl fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearIdentical => write!(f, "near-identical"),
            Self::VerySimilar => write!(f, "very similar"),
            Self::Similar => write!(f, "similar"),
            Self::PossiblyRelated => write!(f, "possibly related"),
        }
    }
}

/// A proposed merge of one label into another.
///
/// # Fields
///
/// - `source`: the label proposed to be folded away (fewer occurrences)
/// - `target`: the label proposed to be kept
/// - `similarity`: composite score in `[0, 1]`
/// - `occurrence_count`: how many occurrences `source` has
/// - `affected_documents`: the document of every `source` occurrence
/// - `band` / `reason`: rationale derived from `similarity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub source: String,
    pub target: String,
    pub similarity: f64,
    pub occurrence_count: usize,
    pub affected_documents: Vec<DocumentId>,
    pub band: SimilarityBand,
    pub reason: String,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.0}%, {} occurrence(s))",
            self.source,
            self.target,
            self.similarity * 100.0,
            self.occurrence_count
        )
    }
}
