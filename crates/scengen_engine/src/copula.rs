//! Copula samplers for joint variate matrices.
//!
//! A copula couples several uniform(0,1) marginals into a joint distribution
//! that carries correlation without fixing the marginal laws. The correlated
//! multi-path generator asks its copula for an `N x steps` matrix up front
//! (rows = generators, columns = time steps) and replays each row through
//! one model's transition.

use scengen_models::distributions::normal_cdf;

use crate::correlation::{CholeskyFactor, CorrelationError, CorrelationMatrix};
use crate::rng::ScenarioRng;

/// Keeps Gaussian-copula marginals strictly inside the open unit interval;
/// the normal CDF rounds to exactly 0 or 1 for |w| beyond about 8.
const UNIT_MARGIN: f64 = 1e-12;

/// Joint sampler over `dimension()` uniform(0,1) marginals.
pub trait Copula {
    /// Number of marginals in a joint sample.
    fn dimension(&self) -> usize;

    /// Draw a joint matrix of variates.
    ///
    /// Returns `dimension()` rows of `steps` values each, every value
    /// strictly inside (0, 1). Rows are jointly correlated within each
    /// column; columns are independent across time.
    fn sample_matrix(&self, rng: &mut ScenarioRng, steps: usize) -> Vec<Vec<f64>>;
}

/// Gaussian copula over a validated correlation matrix.
///
/// Per column: draw independent standard normals, transform them through the
/// Cholesky factor, and map each correlated normal back to a uniform
/// marginal via the normal CDF.
///
/// # Examples
///
/// ```
/// use scengen_engine::copula::{Copula, GaussianCopula};
/// use scengen_engine::correlation::CorrelationMatrix;
/// use scengen_engine::rng::ScenarioRng;
///
/// let corr = CorrelationMatrix::new(&[1.0, 0.7, 0.7, 1.0], 2).unwrap();
/// let copula = GaussianCopula::new(corr).unwrap();
///
/// let mut rng = ScenarioRng::from_seed(1);
/// let matrix = copula.sample_matrix(&mut rng, 120);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix[0].len(), 120);
/// ```
#[derive(Clone, Debug)]
pub struct GaussianCopula {
    cholesky: CholeskyFactor<f64>,
}

impl GaussianCopula {
    /// Build a Gaussian copula from a correlation matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::NotPositiveDefinite`] if the matrix has
    /// no Cholesky factor.
    pub fn new(correlation: CorrelationMatrix<f64>) -> Result<Self, CorrelationError> {
        Ok(Self {
            cholesky: correlation.cholesky()?,
        })
    }

    /// Build from a flat row-major slice, validating the matrix first.
    pub fn from_flat(data: &[f64], dim: usize) -> Result<Self, CorrelationError> {
        Self::new(CorrelationMatrix::new(data, dim)?)
    }
}

impl Copula for GaussianCopula {
    fn dimension(&self) -> usize {
        self.cholesky.dim()
    }

    fn sample_matrix(&self, rng: &mut ScenarioRng, steps: usize) -> Vec<Vec<f64>> {
        let dim = self.dimension();
        let mut matrix = vec![vec![0.0; steps]; dim];
        let mut z = vec![0.0; dim];

        for step in 0..steps {
            for slot in z.iter_mut() {
                *slot = rng.gen_normal();
            }
            let w = self.cholesky.transform(&z);
            for (row, &value) in matrix.iter_mut().zip(w.iter()) {
                row[step] = normal_cdf(value).clamp(UNIT_MARGIN, 1.0 - UNIT_MARGIN);
            }
        }

        matrix
    }
}

/// Independence copula: uniform marginals with no cross-dimension coupling.
///
/// Useful as the neutral element in tests and for running a correlated group
/// without actual correlation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndependenceCopula {
    dimension: usize,
}

impl IndependenceCopula {
    /// Create an independence copula of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Copula for IndependenceCopula {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn sample_matrix(&self, rng: &mut ScenarioRng, steps: usize) -> Vec<Vec<f64>> {
        (0..self.dimension)
            .map(|_| {
                let mut row = vec![0.0; steps];
                rng.fill_uniform(&mut row);
                row
            })
            .collect()
    }
}
