//! Similarity scoring and merge suggestions.
//!
//! The engine scores two canonical labels; the generator runs it over a
//! catalog and ranks the pairs worth merging.

mod similarity;
mod suggest;

pub use similarity::{
    SimilarityEngine, jaro_similarity, jaro_winkler_similarity, levenshtein_similarity,
    token_overlap_similarity, tokenize,
};
pub use suggest::SuggestionGenerator;
