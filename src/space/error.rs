use thiserror::Error;

/// Errors that can occur when a space query is undefined for its input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpaceError {
    #[error("Cannot evaluate: the space has no points")]
    EmptySpace,

    #[error("Cannot build a discrete space over {count} points (limit is {max})")]
    TooManyPoints { count: usize, max: usize },

    #[error("Mapping sent finite point {input} outside floating-point range ({output})")]
    NonFiniteImage { input: f64, output: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_space_display() {
        let e = SpaceError::EmptySpace;
        assert_eq!(e.to_string(), "Cannot evaluate: the space has no points");
    }

    #[test]
    fn too_many_points_display() {
        let e = SpaceError::TooManyPoints { count: 20, max: 16 };
        assert_eq!(
            e.to_string(),
            "Cannot build a discrete space over 20 points (limit is 16)"
        );
    }

    #[test]
    fn non_finite_image_display() {
        let e = SpaceError::NonFiniteImage {
            input: 0.0,
            output: f64::INFINITY,
        };
        let s = e.to_string();
        assert!(s.contains("finite point 0"));
        assert!(s.contains("inf"));
    }
}
