//! The individual homeomorphism predicates, usable on any mapping and pair of spaces.
//!
//! Each check returns `Ok(false)` when the property does not hold and an error
//! only when a mapping leaves floating-point range.

use crate::point::PointSet;
use crate::space::operations::{apply, compute_image};
use crate::space::{Space, SpaceError};

/// Returns true if `f` maps the points of `domain` one-to-one onto the points of `range`.
///
/// Fails on the first image that repeats an earlier one or is not a point of
/// `range`; otherwise requires the images to cover `range` exactly.
pub fn is_bijective<F>(f: F, domain: &Space, range: &Space) -> Result<bool, SpaceError>
where
    F: Fn(f64) -> f64,
{
    let mut mapped = PointSet::new();
    for &x in domain.points() {
        let y = apply(&f, x)?;
        if !range.points().contains(&y) || !mapped.insert(y) {
            return Ok(false);
        }
    }
    Ok(&mapped == range.points())
}

/// Finite-difference continuity heuristic.
///
/// For each `x` the two-sided average `(f(x - ε) + f(x + ε)) / 2` stands in for
/// the limit, and `|f(x) - limit|` must not exceed `ε`. This is a numeric
/// proxy: a jump smaller than `ε` passes, and a smooth function with enough
/// curvature (second derivative above roughly `1 / ε`) fails.
///
/// Only `f(x)` is range-checked. The side samples at `x ± ε` are not points of
/// any space: a NaN limit never exceeds `ε`, so the point passes, and an
/// infinite limit fails it.
pub fn is_continuous<F>(f: F, points: &PointSet, epsilon: f64) -> Result<bool, SpaceError>
where
    F: Fn(f64) -> f64,
{
    for &x in points {
        let at = apply(&f, x)?.into_inner();
        let below = f(x.into_inner() - epsilon);
        let above = f(x.into_inner() + epsilon);
        let limit = (below + above) / 2.0;
        if (at - limit).abs() > epsilon {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns true if the image of every open set of `from` is an open set of `to`.
pub fn preserves_open_sets<F>(f: F, from: &Space, to: &Space) -> Result<bool, SpaceError>
where
    F: Fn(f64) -> f64,
{
    for open in from.open_sets() {
        if !to.is_open(&compute_image(&f, open)?) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns true if the image of the complement of every open set of `from`
/// is a closed set of `to`.
///
/// Closed sets are enumerated only as complements of declared open sets.
pub fn preserves_closed_sets<F>(f: F, from: &Space, to: &Space) -> Result<bool, SpaceError>
where
    F: Fn(f64) -> f64,
{
    for closed in from.closed_sets() {
        if !to.is_closed(&compute_image(&f, &closed)?) {
            return Ok(false);
        }
    }
    Ok(true)
}
