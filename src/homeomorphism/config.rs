//! Configuration for homeomorphism evaluation.

use super::error::HomeomorphismError;

/// Step and tolerance of the finite-difference continuity check.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Configuration for [`Homeomorphism`](super::Homeomorphism) evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeomorphismConfig {
    /// Offset used to sample each side of a point, and the tolerance the
    /// two-sided average must stay within.
    pub epsilon: f64,
}

impl HomeomorphismConfig {
    /// Checks that `epsilon` is finite and strictly positive.
    pub fn validate(&self) -> Result<(), HomeomorphismError> {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            Ok(())
        } else {
            Err(HomeomorphismError::InvalidEpsilon(self.epsilon))
        }
    }
}

impl Default for HomeomorphismConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = HomeomorphismConfig::default();
        assert_eq!(cfg.epsilon, 1e-4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let cfg = HomeomorphismConfig { epsilon };
            assert!(matches!(
                cfg.validate(),
                Err(HomeomorphismError::InvalidEpsilon(_))
            ));
        }
    }
}
