use std::fmt;

use super::checks;
use super::config::HomeomorphismConfig;
use super::error::HomeomorphismError;
use super::report::{Check, ValidityReport};
use crate::point::PointSet;
use crate::space::{Space, SpaceError};

/// A candidate homeomorphism between two finite spaces.
///
/// Holds a forward mapping, its claimed inverse, and owned copies of the two
/// spaces. Construction performs no evaluation; every query recomputes its
/// checks from scratch.
///
/// # Invariants
///
/// - The stored config always passes [`HomeomorphismConfig::validate`]
/// - No validity result is cached
///
/// # Example
///
/// ```rust
/// use homeomorph::{Homeomorphism, Space};
///
/// let domain = Space::new([1.0, 2.0, 3.0], vec![vec![1.0], vec![2.0], vec![3.0]]);
/// let range = Space::new([4.0, 5.0, 6.0], vec![vec![4.0], vec![5.0], vec![6.0]]);
/// let h = Homeomorphism::new(|x| x + 3.0, |y| y - 3.0, domain, range);
/// assert!(h.is_valid());
/// ```
#[derive(Clone)]
pub struct Homeomorphism<F, G> {
    function: F,
    inverse: G,
    domain: Space,
    range: Space,
    config: HomeomorphismConfig,
}

impl<F, G> Homeomorphism<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    /// Creates a homeomorphism candidate with the default configuration.
    pub fn new(function: F, inverse: G, domain: impl Into<Space>, range: impl Into<Space>) -> Self {
        Self {
            function,
            inverse,
            domain: domain.into(),
            range: range.into(),
            config: HomeomorphismConfig::default(),
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: HomeomorphismConfig) -> Result<Self, HomeomorphismError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn domain(&self) -> &Space {
        &self.domain
    }

    pub fn range(&self) -> &Space {
        &self.range
    }

    pub fn config(&self) -> &HomeomorphismConfig {
        &self.config
    }

    /// Applies the forward mapping.
    pub fn forward(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Applies the inverse mapping.
    pub fn backward(&self, y: f64) -> f64 {
        (self.inverse)(y)
    }

    /// Returns true if the forward mapping sends `domain` one-to-one onto `range`.
    pub fn is_bijective_between(&self, domain: &Space, range: &Space) -> bool {
        or_false(checks::is_bijective(&self.function, domain, range))
    }

    /// Returns true if the forward mapping is a bijection between the stored spaces.
    pub fn is_bijective(&self) -> bool {
        self.check_or_false(Check::Bijective)
    }

    /// Finite-difference continuity of `f` at each of `points`, using the configured epsilon.
    pub fn is_continuous<H>(&self, f: H, points: &PointSet) -> bool
    where
        H: Fn(f64) -> f64,
    {
        or_false(checks::is_continuous(f, points, self.config.epsilon))
    }

    /// Continuity of the forward mapping over the domain points.
    pub fn is_forward_continuous(&self) -> bool {
        self.check_or_false(Check::ForwardContinuous)
    }

    /// Continuity of the inverse mapping over the range points.
    pub fn is_inverse_continuous(&self) -> bool {
        self.check_or_false(Check::InverseContinuous)
    }

    /// Returns true if `f` maps every open set of `from` onto an open set of `to`.
    pub fn preserves_open_sets<H>(&self, f: H, from: &Space, to: &Space) -> bool
    where
        H: Fn(f64) -> f64,
    {
        or_false(checks::preserves_open_sets(f, from, to))
    }

    /// Returns true if `f` maps the complement of every open set of `from`
    /// onto a closed set of `to`.
    pub fn preserves_closed_sets<H>(&self, f: H, from: &Space, to: &Space) -> bool
    where
        H: Fn(f64) -> f64,
    {
        or_false(checks::preserves_closed_sets(f, from, to))
    }

    fn check_or_false(&self, check: Check) -> bool {
        self.check(check).unwrap_or_else(|err| {
            tracing::warn!(%check, %err, "check could not be evaluated");
            false
        })
    }

    /// Evaluates a single check against the stored mappings and spaces.
    pub fn check(&self, check: Check) -> Result<bool, HomeomorphismError> {
        let (domain, range, epsilon) = (&self.domain, &self.range, self.config.epsilon);
        let f = &self.function;
        let g = &self.inverse;
        let outcome = match check {
            Check::Bijective => checks::is_bijective(f, domain, range),
            Check::ForwardContinuous => checks::is_continuous(f, domain.points(), epsilon),
            Check::InverseContinuous => checks::is_continuous(g, range.points(), epsilon),
            Check::ForwardPreservesOpenSets => checks::preserves_open_sets(f, domain, range),
            Check::InversePreservesOpenSets => checks::preserves_open_sets(g, range, domain),
            Check::ForwardPreservesClosedSets => checks::preserves_closed_sets(f, domain, range),
            Check::InversePreservesClosedSets => checks::preserves_closed_sets(g, range, domain),
        }?;
        Ok(outcome)
    }

    /// Runs every check in order, stopping at the first failure.
    ///
    /// Each failure is narrated at `info` level through `tracing`.
    pub fn try_is_valid(&self) -> Result<bool, HomeomorphismError> {
        for check in Check::ALL {
            if !self.check(check)? {
                tracing::info!(%check, "{}", check.failure_message());
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns [`try_is_valid`](Self::try_is_valid), treating an evaluation error as invalid.
    pub fn is_valid(&self) -> bool {
        self.try_is_valid().unwrap_or_else(|err| {
            tracing::warn!(%err, "homeomorphism could not be evaluated");
            false
        })
    }

    /// Runs every check without short-circuiting.
    pub fn evaluate(&self) -> Result<ValidityReport, HomeomorphismError> {
        let outcomes = Check::ALL
            .iter()
            .map(|check| self.check(*check).map(|passed| (*check, passed)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ValidityReport::new(outcomes))
    }
}

fn or_false(result: Result<bool, SpaceError>) -> bool {
    result.unwrap_or_else(|err| {
        tracing::warn!(%err, "mapping could not be evaluated");
        false
    })
}

impl<F, G> fmt::Debug for Homeomorphism<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Homeomorphism")
            .field("domain", &self.domain)
            .field("range", &self.range)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
