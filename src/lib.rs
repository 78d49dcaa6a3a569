pub mod catalog;
pub mod config;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod store;

pub use catalog::{
    Catalog, CatalogIndexer, CatalogStats, DocumentEvent, DocumentFailure, IndexError,
    LabelNormalizer, OccurrenceExtractor, RebuildReport, SubscriptionId,
};
pub use config::{
    ConfigError, NormalizationRules, Settings, SimilarityAlgorithms, SimilarityWeights,
};
pub use matcher::{SimilarityEngine, SuggestionGenerator};
pub use models::{
    DocumentId, LabelInfo, Occurrence, OccurrenceSource, SimilarityBand, Suggestion,
};
pub use store::{DocumentStore, FrontMatterProvider, FsStore, MemoryStore};
