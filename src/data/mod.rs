//! Dataset loading, row types, date normalization and derived features

pub mod dates;
pub mod features;
pub mod loader;
pub mod types;

pub use dates::{DateNormalizer, NormalizeReport};
pub use features::{headline_features, HeadlineFeatures};
pub use loader::{load_news, save_enriched, DataError};
pub use types::{EnrichedRecord, NewsRecord};
