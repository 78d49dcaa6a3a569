mod ids;
mod label_info;
mod occurrence;
mod suggestion;

pub use ids::DocumentId;
pub use label_info::LabelInfo;
pub use occurrence::{Occurrence, OccurrenceSource};
pub use suggestion::{SimilarityBand, Suggestion};
