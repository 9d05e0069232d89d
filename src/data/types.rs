//! Row types for the news dataset

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the raw analyst-ratings news dataset.
///
/// `headline` and `date` are always present as strings (possibly empty);
/// `stock` may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Raw date string, mixed encodings
    pub date: String,
    /// Headline text
    pub headline: String,
    /// Publishing outlet
    pub publisher: String,
    /// Associated stock symbol, if any
    #[serde(default)]
    pub stock: Option<String>,
}

/// A row enriched with the derived columns produced by the pipeline.
///
/// The raw date string is superseded by the canonical timestamp; `None`
/// marks an unparseable date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Canonical UTC timestamp, or `None` if the raw date was unparseable
    pub date: Option<DateTime<Utc>>,
    pub headline: String,
    pub publisher: String,
    pub stock: Option<String>,
    /// Headline length in characters
    pub headline_len_chars: usize,
    /// Headline length in whitespace-delimited words
    pub headline_len_words: usize,
    /// Index of the document's dominant topic
    pub dominant_topic: usize,
}
