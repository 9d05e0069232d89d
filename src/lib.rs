//! # News Topics - Financial Headline Analysis
//!
//! This library ingests a financial-news headline dataset, repairs its
//! mixed date encodings and discovers latent topics over the headlines:
//!
//! - CSV loading with required-column validation
//! - Date normalization into canonical UTC timestamps
//! - Headline cleaning and TF-IDF vectorization (unigrams + bigrams)
//! - NMF topic modeling with reproducible seeded initialization
//! - Dominant-topic assignment and corpus keyword extraction

pub mod data;
pub mod models;
pub mod pipeline;
pub mod preprocessing;

pub use data::{load_news, DateNormalizer, EnrichedRecord, NewsRecord, NormalizeReport};
pub use models::{Nmf, NmfConfig, NmfModel};
pub use pipeline::{PipelineError, TopicAssignment, TopicPipeline};
pub use preprocessing::{HeadlineCleaner, TermMatrix, VectorizerConfig};
