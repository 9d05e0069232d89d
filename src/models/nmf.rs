//! Non-negative matrix factorization (NMF)
//!
//! Factors a non-negative document-term matrix `X` into document-topic
//! weights `W` and topic-term weights `H` with `X ≈ W·H`, minimizing the
//! Frobenius reconstruction error under non-negativity. Uses multiplicative
//! updates with a seeded random initialization, so results are reproducible
//! for a fixed seed and configuration.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Guard against division by zero in the multiplicative updates.
const EPS: f64 = 1e-10;

/// Errors that can occur during NMF computation
#[derive(Error, Debug)]
pub enum NmfError {
    #[error("number of topics must be positive")]
    InvalidTopicCount,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("input matrix is empty")]
    EmptyInput,

    #[error("matrix dimensions mismatch")]
    DimensionMismatch,
}

/// NMF configuration
#[derive(Debug, Clone)]
pub struct NmfConfig {
    /// Number of latent topics
    pub n_topics: usize,
    /// Maximum number of update iterations
    pub max_iter: usize,
    /// Relative reconstruction-error change below which iteration stops
    pub tolerance: f64,
    /// Seed for the random initialization
    pub random_seed: u64,
}

impl Default for NmfConfig {
    fn default() -> Self {
        Self {
            n_topics: 10,
            max_iter: 200,
            tolerance: 1e-4,
            random_seed: 42,
        }
    }
}

impl NmfConfig {
    /// Create a configuration with the given number of topics
    pub fn new(n_topics: usize) -> Self {
        Self {
            n_topics,
            ..Default::default()
        }
    }

    /// Set the iteration bound
    pub fn max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Set the early-stopping tolerance
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set the random seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }
}

/// Non-negative matrix factorization solver
#[derive(Debug, Clone)]
pub struct Nmf {
    config: NmfConfig,
}

impl Nmf {
    /// Create a solver, validating the configuration before any heavy
    /// computation.
    pub fn new(config: NmfConfig) -> Result<Self, NmfError> {
        if config.n_topics == 0 {
            return Err(NmfError::InvalidTopicCount);
        }
        if config.max_iter == 0 {
            return Err(NmfError::InvalidParameter(
                "max_iter must be positive".into(),
            ));
        }
        if config.tolerance < 0.0 {
            return Err(NmfError::InvalidParameter(
                "tolerance must be non-negative".into(),
            ));
        }
        Ok(Self { config })
    }

    /// Factor `x` (documents × terms, all entries >= 0) into a fitted
    /// [`NmfModel`].
    pub fn fit(&self, x: &Array2<f64>) -> Result<NmfModel, NmfError> {
        let (n_docs, n_terms) = x.dim();
        let k = self.config.n_topics;

        if n_docs == 0 || n_terms == 0 {
            return Err(NmfError::EmptyInput);
        }
        if x.iter().any(|&v| v < 0.0) {
            return Err(NmfError::InvalidParameter(
                "input matrix contains negative entries".into(),
            ));
        }

        // Seeded uniform init scaled to the magnitude of the input, the
        // usual choice for multiplicative updates
        let mut rng = StdRng::seed_from_u64(self.config.random_seed);
        let x_mean = x.mean().unwrap_or(0.0);
        let scale = (x_mean / k as f64).sqrt().max(f64::EPSILON);

        let mut w = Array2::from_shape_fn((n_docs, k), |_| rng.gen::<f64>() * scale);
        let mut h = Array2::from_shape_fn((k, n_terms), |_| rng.gen::<f64>() * scale);

        let mut err = reconstruction_error(x, &w, &h);
        let mut n_iter = 0;

        for iter in 0..self.config.max_iter {
            // H <- H * (WᵀX) / (WᵀW H)
            let numer_h = w.t().dot(x);
            let denom_h = w.t().dot(&w).dot(&h) + EPS;
            h = &h * &(&numer_h / &denom_h);

            // W <- W * (XHᵀ) / (W HHᵀ)
            let numer_w = x.dot(&h.t());
            let denom_w = w.dot(&h.dot(&h.t())) + EPS;
            w = &w * &(&numer_w / &denom_w);

            n_iter = iter + 1;

            let new_err = reconstruction_error(x, &w, &h);
            if (err - new_err).abs() <= self.config.tolerance * err.max(EPS) {
                err = new_err;
                break;
            }
            err = new_err;
        }

        Ok(NmfModel {
            w,
            h,
            reconstruction_error: err,
            n_iter,
        })
    }
}

/// Frobenius norm of `x - w·h`
fn reconstruction_error(x: &Array2<f64>, w: &Array2<f64>, h: &Array2<f64>) -> f64 {
    let diff = x - &w.dot(h);
    diff.mapv(|v| v * v).sum().sqrt()
}

/// A fitted factorization
#[derive(Debug, Clone)]
pub struct NmfModel {
    /// Document-topic weights, shape (n_documents, n_topics)
    pub w: Array2<f64>,
    /// Topic-term weights, shape (n_topics, n_terms)
    pub h: Array2<f64>,
    /// Final Frobenius reconstruction error
    pub reconstruction_error: f64,
    /// Iterations actually run
    pub n_iter: usize,
}

impl NmfModel {
    /// Number of topics
    pub fn n_topics(&self) -> usize {
        self.w.ncols()
    }

    /// Dominant topic per document: the column index of the maximum entry
    /// in each row of `W`. Ties resolve to the lowest index (first
    /// maximum).
    pub fn dominant_topics(&self) -> Vec<usize> {
        self.w
            .rows()
            .into_iter()
            .map(|row| {
                let mut best_idx = 0;
                let mut best_val = f64::NEG_INFINITY;
                for (idx, &val) in row.iter().enumerate() {
                    if val > best_val {
                        best_idx = idx;
                        best_val = val;
                    }
                }
                best_idx
            })
            .collect()
    }

    /// Top `k` terms per topic by topic-term weight, descending.
    ///
    /// `terms` must be the vocabulary the input matrix was built over.
    pub fn topic_terms(
        &self,
        terms: &[String],
        k: usize,
    ) -> Result<Vec<Vec<(String, f64)>>, NmfError> {
        if terms.len() != self.h.ncols() {
            return Err(NmfError::DimensionMismatch);
        }

        let topics = self
            .h
            .rows()
            .into_iter()
            .map(|row| {
                let mut ranked: Vec<(usize, f64)> = row.iter().cloned().enumerate().collect();
                ranked.sort_by(|a, b| {
                    b.1.partial_cmp(&a.1)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| a.0.cmp(&b.0))
                });
                ranked
                    .into_iter()
                    .take(k)
                    .map(|(idx, weight)| (terms[idx].clone(), weight))
                    .collect()
            })
            .collect();

        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_matrix() -> Array2<f64> {
        // Two clear blocks: docs 0-2 use terms 0-1, docs 3-5 use terms 2-3
        array![
            [5.0, 4.0, 0.0, 0.0],
            [4.0, 5.0, 0.0, 0.0],
            [5.0, 5.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 5.0],
            [0.0, 0.0, 5.0, 4.0],
            [0.0, 0.0, 5.0, 5.0],
        ]
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Nmf::new(NmfConfig::new(0)),
            Err(NmfError::InvalidTopicCount)
        ));
        assert!(matches!(
            Nmf::new(NmfConfig::new(2).max_iter(0)),
            Err(NmfError::InvalidParameter(_))
        ));
        assert!(matches!(
            Nmf::new(NmfConfig::new(2).tolerance(-1.0)),
            Err(NmfError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let x: Array2<f64> = Array2::zeros((0, 4));
        assert!(matches!(nmf.fit(&x), Err(NmfError::EmptyInput)));
    }

    #[test]
    fn test_negative_input_rejected() {
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let x = array![[1.0, -0.5], [0.0, 1.0]];
        assert!(matches!(nmf.fit(&x), Err(NmfError::InvalidParameter(_))));
    }

    #[test]
    fn test_factors_non_negative() {
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let model = nmf.fit(&sample_matrix()).unwrap();

        assert!(model.w.iter().all(|&v| v >= 0.0));
        assert!(model.h.iter().all(|&v| v >= 0.0));
        assert_eq!(model.w.dim(), (6, 2));
        assert_eq!(model.h.dim(), (2, 4));
    }

    #[test]
    fn test_reconstruction_improves() {
        let x = sample_matrix();
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let model = nmf.fit(&x).unwrap();

        // The block structure is rank 2; error should come down well below
        // the norm of the input
        let x_norm = x.mapv(|v| v * v).sum().sqrt();
        assert!(model.reconstruction_error < 0.25 * x_norm);
        assert!(model.n_iter <= 200);
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let x = sample_matrix();
        let nmf = Nmf::new(NmfConfig::new(2).random_seed(7)).unwrap();

        let a = nmf.fit(&x).unwrap();
        let b = nmf.fit(&x).unwrap();

        assert_eq!(a.w, b.w);
        assert_eq!(a.h, b.h);
        assert_eq!(a.n_iter, b.n_iter);
    }

    #[test]
    fn test_different_seeds_differ() {
        let x = sample_matrix();
        let a = Nmf::new(NmfConfig::new(2).random_seed(1))
            .unwrap()
            .fit(&x)
            .unwrap();
        let b = Nmf::new(NmfConfig::new(2).random_seed(2))
            .unwrap()
            .fit(&x)
            .unwrap();

        assert_ne!(a.w, b.w);
    }

    #[test]
    fn test_dominant_topics_separate_blocks() {
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let model = nmf.fit(&sample_matrix()).unwrap();
        let topics = model.dominant_topics();

        assert_eq!(topics.len(), 6);
        // Docs within a block share a topic; the two blocks differ
        assert_eq!(topics[0], topics[1]);
        assert_eq!(topics[1], topics[2]);
        assert_eq!(topics[3], topics[4]);
        assert_eq!(topics[4], topics[5]);
        assert_ne!(topics[0], topics[3]);
    }

    #[test]
    fn test_dominant_topic_tie_breaks_to_first_maximum() {
        let model = NmfModel {
            w: array![[0.5, 0.5, 0.1], [0.0, 0.3, 0.3]],
            h: Array2::zeros((3, 2)),
            reconstruction_error: 0.0,
            n_iter: 0,
        };

        assert_eq!(model.dominant_topics(), vec![0, 1]);
    }

    #[test]
    fn test_topic_terms_dimension_check() {
        let nmf = Nmf::new(NmfConfig::new(2)).unwrap();
        let model = nmf.fit(&sample_matrix()).unwrap();

        let wrong = vec!["a".to_string()];
        assert!(matches!(
            model.topic_terms(&wrong, 3),
            Err(NmfError::DimensionMismatch)
        ));

        let terms: Vec<String> = ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let topics = model.topic_terms(&terms, 2).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].len(), 2);
    }
}
