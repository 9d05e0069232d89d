//! Simple textual features derived from headlines

use super::types::NewsRecord;
use serde::Serialize;

/// Per-headline length features
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeadlineFeatures {
    /// Length in characters
    pub len_chars: usize,
    /// Length in whitespace-delimited words
    pub len_words: usize,
}

/// Compute length features for every record, in row order.
pub fn headline_features(records: &[NewsRecord]) -> Vec<HeadlineFeatures> {
    records
        .iter()
        .map(|r| HeadlineFeatures {
            len_chars: r.headline.chars().count(),
            len_words: r.headline.split_whitespace().count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_features() {
        let records = vec![
            NewsRecord {
                date: String::new(),
                headline: "Stocks rally on earnings".to_string(),
                publisher: "Benzinga".to_string(),
                stock: None,
            },
            NewsRecord {
                date: String::new(),
                headline: String::new(),
                publisher: "Reuters".to_string(),
                stock: None,
            },
        ];

        let features = headline_features(&records);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].len_chars, 24);
        assert_eq!(features[0].len_words, 4);
        assert_eq!(features[1].len_chars, 0);
        assert_eq!(features[1].len_words, 0);
    }
}
