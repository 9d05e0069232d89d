//! Topic-modeling pipeline
//!
//! Orchestrates the full path from raw headlines to topic assignments:
//! clean and tokenize, build the term-weight matrix once, factor it, and
//! derive dominant topics and corpus keywords. Keyword extraction and
//! factorization share the same [`TermMatrix`], so their vocabularies can
//! never diverge.

use crate::models::{Nmf, NmfConfig, NmfError, NmfModel};
use crate::preprocessing::{HeadlineCleaner, TermMatrix, VectorizeError, VectorizerConfig};
use thiserror::Error;
use tracing::info;

/// Errors raised by the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("vectorization failed: {0}")]
    Vectorize(#[from] VectorizeError),

    #[error("factorization failed: {0}")]
    Factorize(#[from] NmfError),
}

/// End-to-end topic pipeline configuration
#[derive(Debug, Clone)]
pub struct TopicPipeline {
    cleaner: HeadlineCleaner,
    vectorizer: VectorizerConfig,
    nmf: NmfConfig,
    n_keywords: usize,
}

impl TopicPipeline {
    pub fn new() -> Self {
        Self {
            cleaner: HeadlineCleaner::new(),
            vectorizer: VectorizerConfig::new(),
            nmf: NmfConfig::default(),
            n_keywords: 50,
        }
    }

    /// Replace the cleaner
    pub fn cleaner(mut self, cleaner: HeadlineCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Replace the vectorizer configuration
    pub fn vectorizer(mut self, config: VectorizerConfig) -> Self {
        self.vectorizer = config;
        self
    }

    /// Replace the factorization configuration
    pub fn nmf(mut self, config: NmfConfig) -> Self {
        self.nmf = config;
        self
    }

    /// Number of corpus-wide keywords to extract
    pub fn n_keywords(mut self, n: usize) -> Self {
        self.n_keywords = n;
        self
    }

    /// Run the pipeline over raw headlines.
    ///
    /// Structural failures (bad configuration, empty vocabulary) abort the
    /// run; there are no per-row failure modes here since cleaning accepts
    /// any string.
    pub fn run(&self, headlines: &[String]) -> Result<TopicAssignment, PipelineError> {
        let tokenized = self.cleaner.tokenize_documents(headlines);

        // One vectorization pass shared by factorization and keywords
        let term_matrix = self.vectorizer.fit(&tokenized)?;
        info!(
            documents = term_matrix.n_documents,
            terms = term_matrix.n_terms(),
            "built term-weight matrix"
        );

        let nmf = Nmf::new(self.nmf.clone())?;
        let model = nmf.fit(&term_matrix.matrix)?;
        info!(
            topics = model.n_topics(),
            iterations = model.n_iter,
            error = model.reconstruction_error,
            "factorization complete"
        );

        let dominant_topics = model.dominant_topics();
        let top_keywords = term_matrix
            .top_terms(self.n_keywords)
            .into_iter()
            .map(|(term, _)| term)
            .collect();

        Ok(TopicAssignment {
            term_matrix,
            model,
            dominant_topics,
            top_keywords,
        })
    }
}

impl Default for TopicPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one pipeline run produces
#[derive(Debug, Clone)]
pub struct TopicAssignment {
    /// The shared term-weight matrix and vocabulary
    pub term_matrix: TermMatrix,
    /// Fitted factorization (document-topic and topic-term weights)
    pub model: NmfModel,
    /// Dominant topic index per document, in input order
    pub dominant_topics: Vec<usize>,
    /// Top corpus keywords by mean term weight
    pub top_keywords: Vec<String>,
}

impl TopicAssignment {
    /// Top `k` terms for every topic
    pub fn topic_terms(&self, k: usize) -> Result<Vec<Vec<(String, f64)>>, PipelineError> {
        Ok(self.model.topic_terms(&self.term_matrix.terms, k)?)
    }
}
