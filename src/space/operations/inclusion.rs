use crate::point::PointSet;

/// Returns true if every element of `inner` appears in `outer`.
pub fn includes(outer: &PointSet, inner: &PointSet) -> bool {
    inner.is_subset(outer)
}

/// Returns true if `a` and `b` share no point.
pub fn is_disjoint(a: &PointSet, b: &PointSet) -> bool {
    a.is_disjoint(b)
}
