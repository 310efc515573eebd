//! Point values and point sets.
//!
//! Points are real numbers compared by exact value. Wrapping `f64` in
//! [`OrderedFloat`] gives them a total order, so a [`PointSet`] iterates in
//! ascending order and sets of points can themselves be stored in ordered
//! collections.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

/// A point of a space.
pub type Point = OrderedFloat<f64>;

/// A finite set of points, iterated in ascending order.
pub type PointSet = BTreeSet<Point>;

/// Builds a [`PointSet`] from raw values. Duplicates collapse.
pub fn point_set<I>(values: I) -> PointSet
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().map(OrderedFloat).collect()
}

/// Builds a collection of point sets from nested raw values.
pub fn point_sets<I, S>(sets: I) -> BTreeSet<PointSet>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = f64>,
{
    sets.into_iter().map(point_set).collect()
}

/// Returns true if `point` is neither infinite nor NaN.
pub fn is_finite(point: Point) -> bool {
    point.into_inner().is_finite()
}
