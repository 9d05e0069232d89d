//! Headline cleaning and tokenization
//!
//! Cleaning is a deterministic, idempotent function of the headline text:
//! lowercase, strip everything outside `[a-z0-9]` and whitespace, collapse
//! whitespace runs, trim. Tokenization splits cleaned text, drops stop
//! words and appends n-grams up to the configured span.

use regex::Regex;
use std::collections::HashSet;

/// Cleans and tokenizes headline text.
#[derive(Debug, Clone)]
pub struct HeadlineCleaner {
    stop_words: HashSet<String>,
    /// Inclusive n-gram span; `(1, 2)` produces unigrams and bigrams
    ngram_span: (usize, usize),
    strip_pattern: Regex,
    whitespace_pattern: Regex,
}

impl HeadlineCleaner {
    pub fn new() -> Self {
        Self {
            stop_words: default_stop_words(),
            ngram_span: (1, 2),
            strip_pattern: Regex::new(r"[^a-z0-9\s]").unwrap(),
            whitespace_pattern: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Set the inclusive n-gram span.
    pub fn ngram_span(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_span = (min_n.max(1), max_n.max(min_n.max(1)));
        self
    }

    /// Add custom stop words.
    pub fn add_stop_words(&mut self, words: &[&str]) {
        for word in words {
            self.stop_words.insert(word.to_lowercase());
        }
    }

    /// Clean a headline. Idempotent: cleaning already-clean text is a no-op.
    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.strip_pattern.replace_all(&lowered, "");
        let collapsed = self.whitespace_pattern.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }

    /// Tokenize a headline into unigrams and higher n-grams.
    ///
    /// Stop words are removed before n-gram generation, so bigrams span
    /// adjacent surviving tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);

        let unigrams: Vec<String> = cleaned
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .map(|s| s.to_string())
            .collect();

        let (min_n, max_n) = self.ngram_span;
        let mut tokens = Vec::new();
        for n in min_n..=max_n {
            if n == 1 {
                tokens.extend(unigrams.iter().cloned());
            } else {
                tokens.extend(unigrams.windows(n).map(|window| window.join(" ")));
            }
        }
        tokens
    }

    /// Tokenize multiple headlines, preserving order.
    pub fn tokenize_documents(&self, documents: &[String]) -> Vec<Vec<String>> {
        documents.iter().map(|doc| self.tokenize(doc)).collect()
    }
}

impl Default for HeadlineCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Default English stop words
fn default_stop_words() -> HashSet<String> {
    let words = [
        // Articles
        "a", "an", "the",
        // Pronouns
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those",
        // Verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "would", "should", "could", "ought", "might", "must",
        "shall", "will", "can", "may",
        // Prepositions
        "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about", "against",
        "between", "during", "before", "after", "above", "below", "up", "down", "out", "off",
        "over", "under", "again", "further", "then", "once",
        // Conjunctions
        "and", "but", "or", "nor", "so", "yet", "both", "either", "neither", "not", "only",
        "than", "when", "where", "while", "if", "because", "as", "until", "although",
        // Other common words
        "here", "there", "all", "each", "few", "more", "most", "other", "some", "such", "no",
        "any", "own", "same", "too", "very", "just", "also", "now", "how", "why", "well",
    ];

    words.iter().map(|s| s.to_string()).collect()
}
