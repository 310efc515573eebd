use ordered_float::OrderedFloat;

use crate::point::{Point, PointSet};
use crate::space::SpaceError;

/// Applies `f` to a single point.
///
/// A finite point mapped to ±∞ or NaN has left floating-point range and is
/// reported as [`SpaceError::NonFiniteImage`]. Non-finite inputs are passed
/// through unchecked.
pub fn apply<F>(f: F, point: Point) -> Result<Point, SpaceError>
where
    F: Fn(f64) -> f64,
{
    let input = point.into_inner();
    let output = f(input);
    if input.is_finite() && !output.is_finite() {
        return Err(SpaceError::NonFiniteImage { input, output });
    }
    Ok(OrderedFloat(output))
}

/// Returns `{ f(x) : x ∈ set }`.
pub fn compute_image<F>(f: F, set: &PointSet) -> Result<PointSet, SpaceError>
where
    F: Fn(f64) -> f64,
{
    let mut image = PointSet::new();
    for &point in set {
        image.insert(apply(&f, point)?);
    }
    debug_assert!(image.len() <= set.len());
    Ok(image)
}
