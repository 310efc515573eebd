use crate::point::PointSet;

/// Returns `universe \ set`.
///
/// Elements of `set` that are not in `universe` have no effect.
pub fn compute_complement(universe: &PointSet, set: &PointSet) -> PointSet {
    universe.difference(set).copied().collect()
}
