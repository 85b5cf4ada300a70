//! Correlated multi-path generation.
//!
//! A [`Correlated`] group wraps several scenario generators that share one
//! time grid, plus a copula. Instead of each generator drawing its own
//! independent variates, a traversal samples one joint matrix from the
//! copula up front (rows = generators, columns = time steps) and replays
//! each generator's model transition along its row. The emitted items are
//! therefore full per-generator paths, statistically correlated through the
//! copula.
//!
//! Unlike a standalone traversal, a correlated path excludes the t = 0
//! point: each emitted vector holds the `endtime/timestep` post-initial
//! values only.

use scengen_models::economic::EconomicModel;

use crate::copula::Copula;
use crate::error::CorrelatedError;
use crate::generator::ScenarioGenerator;
use crate::grid::transition_steps;
use crate::rng::ScenarioRng;

/// Copula-coupled group of scenario generators on a shared grid.
///
/// # Examples
///
/// ```
/// use scengen_engine::{Correlated, GaussianCopula, ScenarioGenerator, ScenarioRng};
/// use scengen_models::equity::BlackScholesMerton;
/// use scengen_models::rates::Vasicek;
/// use scengen_models::Model;
///
/// let equity: Model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap().into();
/// let rates: Model = Vasicek::new(0.136, 0.0168, 0.0119, 0.01).unwrap().into();
///
/// let generators = vec![
///     ScenarioGenerator::new(1.0, 30.0, equity).unwrap(),
///     ScenarioGenerator::new(1.0, 30.0, rates).unwrap(),
/// ];
/// let copula = GaussianCopula::from_flat(&[1.0, 0.7, 0.7, 1.0], 2).unwrap();
///
/// let mut group =
///     Correlated::with_rng(generators, copula, ScenarioRng::from_seed(42)).unwrap();
/// assert_eq!(group.len(), 2);
///
/// let paths: Vec<Vec<f64>> = group.iter().collect();
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[0].len(), 30); // post-initial points only
/// ```
#[derive(Clone, Debug)]
pub struct Correlated<M, C> {
    generators: Vec<ScenarioGenerator<M>>,
    copula: C,
    rng: ScenarioRng,
}

impl<M: EconomicModel, C: Copula> Correlated<M, C> {
    /// Create a correlated group with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// See [`with_rng`](Self::with_rng).
    pub fn new(
        generators: Vec<ScenarioGenerator<M>>,
        copula: C,
    ) -> Result<Self, CorrelatedError> {
        Self::with_rng(generators, copula, ScenarioRng::from_entropy())
    }

    /// Create a correlated group with an injected random source.
    ///
    /// # Errors
    ///
    /// Fails fast — before any object is produced — if the group is empty,
    /// if any generator's `timestep` or `endtime` differs from the first
    /// generator's, or if the copula dimension does not equal the number of
    /// generators. Grid equality is exact: the group invariant is identity
    /// of configuration, not numerical closeness.
    pub fn with_rng(
        generators: Vec<ScenarioGenerator<M>>,
        copula: C,
        rng: ScenarioRng,
    ) -> Result<Self, CorrelatedError> {
        let first = generators.first().ok_or(CorrelatedError::Empty)?;
        let (timestep, endtime) = (first.timestep(), first.endtime());

        for (index, generator) in generators.iter().enumerate().skip(1) {
            if generator.timestep() != timestep {
                return Err(CorrelatedError::TimestepMismatch {
                    index,
                    expected: timestep,
                    found: generator.timestep(),
                });
            }
            if generator.endtime() != endtime {
                return Err(CorrelatedError::EndtimeMismatch {
                    index,
                    expected: endtime,
                    found: generator.endtime(),
                });
            }
        }

        if copula.dimension() != generators.len() {
            return Err(CorrelatedError::DimensionMismatch {
                copula: copula.dimension(),
                generators: generators.len(),
            });
        }

        Ok(Self {
            generators,
            copula,
            rng,
        })
    }

    /// Number of wrapped generators (= number of paths per traversal).
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Always false: construction rejects empty groups.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// The shared grid step size.
    pub fn timestep(&self) -> f64 {
        self.generators[0].timestep()
    }

    /// The shared grid horizon.
    pub fn endtime(&self) -> f64 {
        self.generators[0].endtime()
    }

    /// Start a traversal: one emitted path per wrapped generator.
    ///
    /// The joint variate matrix is sampled exactly once, on the first
    /// `next()` call, and never resampled mid-traversal; every emitted path
    /// is deterministic given that matrix.
    pub fn iter(&mut self) -> CorrelatedIter<'_, M, C> {
        CorrelatedIter {
            group: self,
            variates: None,
            index: 0,
        }
    }
}

/// Explicit cursor over a correlated traversal.
#[derive(Debug)]
pub struct CorrelatedIter<'a, M, C> {
    group: &'a mut Correlated<M, C>,
    /// Joint matrix, rows = generators; sampled on the first `next()`.
    variates: Option<Vec<Vec<f64>>>,
    /// Index of the next generator whose path will be emitted.
    index: usize,
}

impl<M: EconomicModel, C: Copula> Iterator for CorrelatedIter<'_, M, C> {
    type Item = Vec<M::Output>;

    fn next(&mut self) -> Option<Vec<M::Output>> {
        let group = &mut *self.group;
        if self.index >= group.generators.len() {
            return None;
        }

        if self.variates.is_none() {
            let steps = transition_steps(group.generators[0].timestep(), group.endtime());
            self.variates = Some(group.copula.sample_matrix(&mut group.rng, steps));
        }
        let variates = self.variates.as_ref().expect("sampled above");

        let generator = &group.generators[self.index];
        let timestep = generator.timestep();
        let model = generator.model();
        let row = &variates[self.index];

        let mut path = Vec::with_capacity(row.len());
        let mut value = model.initial_value_at(timestep);
        let mut time = 0.0;
        for &variate in row {
            value = model.next_value(value, time, timestep, variate);
            time += timestep;
            path.push(value);
        }

        self.index += 1;
        Some(path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.group.generators.len() - self.index;
        (remaining, Some(remaining))
    }
}
