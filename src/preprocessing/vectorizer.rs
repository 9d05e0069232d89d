//! TF-IDF vectorization
//!
//! Converts tokenized documents into a rarity-weighted term-frequency
//! matrix. Configuration is immutable; fitting produces a [`TermMatrix`]
//! that downstream consumers (factorization, keyword extraction) share, so
//! both always see the same vocabulary.

use hashbrown::HashMap;
use ndarray::{Array1, Array2};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building the term-weight matrix
#[derive(Error, Debug)]
pub enum VectorizeError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("no usable vocabulary after document-frequency filtering")]
    EmptyVocabulary,

    #[error("invalid vectorizer configuration: {0}")]
    InvalidConfig(String),
}

/// TF-IDF vectorizer configuration
///
/// Defaults mirror the production pipeline: vocabulary capped at 20,000
/// terms, terms dropped below 5 documents or above 95% of documents.
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    /// Maximum vocabulary size
    pub max_features: usize,
    /// Minimum document frequency for term inclusion
    pub min_df: usize,
    /// Maximum document frequency ratio for term inclusion
    pub max_df_ratio: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: 20_000,
            min_df: 5,
            max_df_ratio: 0.95,
        }
    }
}

impl VectorizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum vocabulary size
    pub fn max_features(mut self, max: usize) -> Self {
        self.max_features = max;
        self
    }

    /// Set minimum document frequency
    pub fn min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set maximum document frequency ratio
    pub fn max_df_ratio(mut self, ratio: f64) -> Self {
        self.max_df_ratio = ratio;
        self
    }

    fn validate(&self, n_docs: usize) -> Result<(), VectorizeError> {
        if self.max_features == 0 {
            return Err(VectorizeError::InvalidConfig(
                "max_features must be positive".into(),
            ));
        }
        if self.min_df == 0 {
            return Err(VectorizeError::InvalidConfig(
                "min_df must be positive".into(),
            ));
        }
        if self.min_df > n_docs {
            return Err(VectorizeError::InvalidConfig(format!(
                "min_df ({}) exceeds corpus size ({})",
                self.min_df, n_docs
            )));
        }
        if !(self.max_df_ratio > 0.0 && self.max_df_ratio <= 1.0) {
            return Err(VectorizeError::InvalidConfig(format!(
                "max_df_ratio must be in (0, 1], got {}",
                self.max_df_ratio
            )));
        }
        Ok(())
    }

    /// Fit the vectorizer on tokenized documents and build the term-weight
    /// matrix.
    ///
    /// Vocabulary selection: terms are filtered by document frequency,
    /// capped at `max_features` (keeping the highest-df terms), then
    /// ordered alphabetically for a deterministic layout. Weight of a term
    /// in a document is its raw frequency times smooth inverse document
    /// frequency, `ln(N / (1 + df)) + 1`.
    pub fn fit(&self, tokenized_docs: &[Vec<String>]) -> Result<TermMatrix, VectorizeError> {
        let n_docs = tokenized_docs.len();
        if n_docs == 0 {
            return Err(VectorizeError::EmptyCorpus);
        }
        self.validate(n_docs)?;

        // Document frequency per term
        let mut term_doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in tokenized_docs {
            let unique_terms: HashSet<&String> = doc.iter().collect();
            for term in unique_terms {
                *term_doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let max_df = (n_docs as f64 * self.max_df_ratio) as usize;
        let mut filtered_terms: Vec<(String, usize)> = term_doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && *df <= max_df)
            .collect();

        if filtered_terms.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        // Keep the highest-df terms when capping; tie-break alphabetically
        // so the cap is deterministic
        filtered_terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        filtered_terms.truncate(self.max_features);

        // Final vocabulary ordering is alphabetical
        filtered_terms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = HashMap::with_capacity(filtered_terms.len());
        let mut terms = Vec::with_capacity(filtered_terms.len());
        let mut document_frequencies = Vec::with_capacity(filtered_terms.len());
        for (idx, (term, df)) in filtered_terms.into_iter().enumerate() {
            vocabulary.insert(term.clone(), idx);
            terms.push(term);
            document_frequencies.push(df);
        }

        // Smooth IDF
        let idf: Vec<f64> = document_frequencies
            .iter()
            .map(|&df| (n_docs as f64 / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut matrix = Array2::zeros((n_docs, terms.len()));
        for (doc_idx, doc) in tokenized_docs.iter().enumerate() {
            let mut term_counts: HashMap<&String, usize> = HashMap::new();
            for term in doc {
                *term_counts.entry(term).or_insert(0) += 1;
            }

            for (term, &count) in &term_counts {
                if let Some(&term_idx) = vocabulary.get(*term) {
                    matrix[[doc_idx, term_idx]] = count as f64 * idf[term_idx];
                }
            }
        }

        Ok(TermMatrix {
            matrix,
            vocabulary,
            terms,
            document_frequencies,
            n_documents: n_docs,
        })
    }
}

/// Fitted term-weight matrix with its vocabulary
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// Document-term weights, shape (n_documents, n_terms)
    pub matrix: Array2<f64>,
    /// Term to column-index mapping
    pub vocabulary: HashMap<String, usize>,
    /// Column index to term, alphabetical
    pub terms: Vec<String>,
    /// Document frequency per term
    pub document_frequencies: Vec<usize>,
    /// Corpus size at fit time
    pub n_documents: usize,
}

impl TermMatrix {
    /// Matrix dimensions (documents, terms)
    pub fn shape(&self) -> (usize, usize) {
        (self.matrix.nrows(), self.matrix.ncols())
    }

    pub fn n_terms(&self) -> usize {
        self.matrix.ncols()
    }

    /// Get term by column index
    pub fn get_term(&self, index: usize) -> Option<&String> {
        self.terms.get(index)
    }

    /// Mean weight of each term across all documents
    pub fn mean_weights(&self) -> Array1<f64> {
        self.matrix.sum_axis(ndarray::Axis(0)) / self.n_documents as f64
    }

    /// Top `k` terms by mean weight across the corpus, descending.
    ///
    /// Ties resolve to the lower column index, so repeated calls are
    /// stable.
    pub fn top_terms(&self, k: usize) -> Vec<(String, f64)> {
        let means = self.mean_weights();
        let mut ranked: Vec<(usize, f64)> = means.iter().cloned().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(k);

        ranked
            .into_iter()
            .filter_map(|(idx, weight)| self.terms.get(idx).map(|t| (t.clone(), weight)))
            .collect()
    }
}
