//! Text preprocessing: cleaning, tokenization and TF-IDF vectorization

pub mod cleaner;
pub mod vectorizer;

pub use cleaner::HeadlineCleaner;
pub use vectorizer::{TermMatrix, VectorizeError, VectorizerConfig};
