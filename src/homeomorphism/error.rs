use thiserror::Error;

use crate::space::SpaceError;

/// Errors that prevent a homeomorphism from being evaluated.
///
/// A check that simply fails is not an error; it is reported as `false`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HomeomorphismError {
    #[error("Continuity epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    #[error(transparent)]
    Space(#[from] SpaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_epsilon_display() {
        let e = HomeomorphismError::InvalidEpsilon(-1.0);
        assert_eq!(
            e.to_string(),
            "Continuity epsilon must be finite and positive, got -1"
        );
    }

    #[test]
    fn space_error_is_transparent() {
        let e: HomeomorphismError = SpaceError::EmptySpace.into();
        assert_eq!(e.to_string(), SpaceError::EmptySpace.to_string());
        assert_eq!(e, HomeomorphismError::Space(SpaceError::EmptySpace));
    }
}
