//! Correlation matrices and Cholesky factors.
//!
//! The Gaussian copula correlates standard normals via the lower-triangular
//! Cholesky factor `L` of a validated correlation matrix `C = L * L^T`:
//! given independent `Z`, the vector `W = L * Z` carries the target
//! correlation structure.
//!
//! ## Usage
//!
//! ```
//! use scengen_engine::correlation::CorrelationMatrix;
//!
//! let corr = CorrelationMatrix::new(&[1.0_f64, 0.5, 0.5, 1.0], 2).unwrap();
//! let factor = corr.cholesky().unwrap();
//! let w = factor.transform(&[1.0, 0.0]);
//! assert!((w[1] - 0.5).abs() < 1e-12);
//! ```

use num_traits::Float;
use thiserror::Error;

/// Correlation matrix validation and decomposition errors.
///
/// All variants are construction-time failures; nothing downstream of a
/// successfully built factor can raise them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CorrelationError {
    /// Matrix is not positive definite, so no Cholesky factor exists.
    #[error("correlation matrix is not positive definite")]
    NotPositiveDefinite,

    /// Flat data length does not match the declared dimension.
    #[error("invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions {
        /// Expected element count (dim * dim)
        expected: usize,
        /// Provided element count
        got: usize,
    },

    /// A diagonal element differs from 1.
    #[error("diagonal element at index {index} is {value}, expected 1.0")]
    InvalidDiagonal {
        /// Row/column index of the offending element
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The matrix is not symmetric.
    #[error("matrix is not symmetric at ({i}, {j})")]
    NotSymmetric {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
    },

    /// An off-diagonal element lies outside [-1, 1].
    #[error("correlation at ({i}, {j}) is {value}, must be in [-1, 1]")]
    OutOfRange {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
        /// The offending value
        value: f64,
    },
}

/// Validated correlation matrix (row-major storage).
///
/// Construction enforces: square shape, unit diagonal, symmetry, and
/// off-diagonal values in [-1, 1]. Positive definiteness is checked by
/// [`cholesky`](CorrelationMatrix::cholesky).
#[derive(Clone, Debug)]
pub struct CorrelationMatrix<T: Float> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Build a correlation matrix from a flat row-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] describing the first violated property.
    pub fn new(data: &[T], dim: usize) -> Result<Self, CorrelationError> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }

        let one = T::one();
        let epsilon = T::from(1e-10).unwrap_or_else(T::zero);

        for i in 0..dim {
            let diag = data[i * dim + i];
            if (diag - one).abs() > epsilon {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                let upper = data[i * dim + j];
                let lower = data[j * dim + i];
                if (upper - lower).abs() > epsilon {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }
                if upper < -one || upper > one {
                    return Err(CorrelationError::OutOfRange {
                        i,
                        j,
                        value: upper.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Identity correlation matrix (no correlation).
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self { data, dim }
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dim + j]
    }

    /// Lower-triangular Cholesky factor `L` with `C = L * L^T`.
    ///
    /// # Errors
    ///
    /// [`CorrelationError::NotPositiveDefinite`] if the matrix is singular
    /// or indefinite (including a correlation of exactly ±1).
    pub fn cholesky(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let mut lower = vec![T::zero(); n * n];

        // Cholesky-Banachiewicz: row by row, each entry from the dot product
        // of the two partial rows built so far.
        for i in 0..n {
            for j in 0..=i {
                let dot = (0..j).fold(T::zero(), |acc, k| {
                    acc + lower[i * n + k] * lower[j * n + k]
                });
                let residual = self.get(i, j) - dot;

                if i == j {
                    if residual <= T::zero() {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[i * n + i] = residual.sqrt();
                } else {
                    let pivot = lower[j * n + j];
                    if pivot <= T::zero() {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[i * n + j] = residual / pivot;
                }
            }
        }

        Ok(CholeskyFactor {
            data: lower,
            dim: n,
        })
    }
}

/// Lower-triangular Cholesky factor of a correlation matrix.
#[derive(Clone, Debug)]
pub struct CholeskyFactor<T: Float> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(i, j)`; zero above the diagonal.
    pub fn get(&self, i: usize, j: usize) -> T {
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Transform independent standard normals into correlated normals,
    /// `W = L * Z`.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`.
    pub fn transform(&self, z: &[T]) -> Vec<T> {
        assert!(
            z.len() >= self.dim,
            "input length {} is less than matrix dimension {}",
            z.len(),
            self.dim
        );

        let n = self.dim;
        let mut w = Vec::with_capacity(n);
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..=i {
                sum = sum + self.get(i, j) * z[j];
            }
            w.push(sum);
        }
        w
    }
}
