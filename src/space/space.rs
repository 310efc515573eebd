//! Finite topological space over real-valued points.
//!
//! A [`Space`] is a lookup structure: callers declare the points and the open
//! sets up front and then query openness, closedness and neighborhoods.

use std::collections::BTreeSet;
use std::fmt::Display;

use ordered_float::OrderedFloat;

use super::error::SpaceError;
use super::operations::{compute_complement, includes};
use crate::point::{point_set, point_sets, Point, PointSet};

/// Largest point count accepted by [`Space::discrete`].
pub const MAX_DISCRETE_POINTS: usize = 16;

/// A finite point set with an explicit collection of open subsets.
///
/// # Design
///
/// - Openness is declared, never derived: a set is open only if it is exactly
///   one of the stored open sets
/// - The topology axioms are not enforced; see
///   [`topology_violations`](Self::topology_violations) for an advisory check
/// - Immutable after construction, so every query is a pure function of the
///   stored sets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    points: PointSet,
    open_sets: BTreeSet<PointSet>,
}

impl Space {
    /// Creates a space from raw point values and raw open sets.
    pub fn new<P, O, S>(points: P, open_sets: O) -> Self
    where
        P: IntoIterator<Item = f64>,
        O: IntoIterator<Item = S>,
        S: IntoIterator<Item = f64>,
    {
        Self::from_sets(point_set(points), point_sets(open_sets))
    }

    /// Creates a space from already-built sets.
    pub fn from_sets(points: PointSet, open_sets: BTreeSet<PointSet>) -> Self {
        Self { points, open_sets }
    }

    /// Creates the indiscrete space over `points`: only `∅` and the whole set are open.
    pub fn indiscrete<P>(points: P) -> Self
    where
        P: IntoIterator<Item = f64>,
    {
        let points = point_set(points);
        let open_sets = BTreeSet::from([PointSet::new(), points.clone()]);
        Self::from_sets(points, open_sets)
    }

    /// Creates the discrete space over `points`: every subset is open.
    ///
    /// The open-set collection is the full power set, so the point count is
    /// capped at [`MAX_DISCRETE_POINTS`].
    pub fn discrete<P>(points: P) -> Result<Self, SpaceError>
    where
        P: IntoIterator<Item = f64>,
    {
        let points = point_set(points);
        if points.len() > MAX_DISCRETE_POINTS {
            return Err(SpaceError::TooManyPoints {
                count: points.len(),
                max: MAX_DISCRETE_POINTS,
            });
        }

        let ordered: Vec<Point> = points.iter().copied().collect();
        let open_sets = (0u32..1u32 << ordered.len())
            .map(|mask| {
                ordered
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1u32 << bit) != 0)
                    .map(|(_, p)| *p)
                    .collect::<PointSet>()
            })
            .collect();
        Ok(Self::from_sets(points, open_sets))
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn open_sets(&self) -> &BTreeSet<PointSet> {
        &self.open_sets
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if `x` is a point of this space.
    pub fn contains(&self, x: f64) -> bool {
        self.points.contains(&OrderedFloat(x))
    }

    /// Returns true if `set` is exactly one of the declared open sets.
    ///
    /// No subset or union reasoning is performed.
    pub fn is_open(&self, set: &PointSet) -> bool {
        self.open_sets.contains(set)
    }

    /// Returns true if `set` contains an open set that contains `x`.
    pub fn is_neighborhood(&self, x: f64, set: &PointSet) -> bool {
        let x = OrderedFloat(x);
        self.open_sets
            .iter()
            .any(|open| open.contains(&x) && includes(set, open))
    }

    /// Returns every point of the space that is not in `set`.
    pub fn complement(&self, set: &PointSet) -> PointSet {
        compute_complement(&self.points, set)
    }

    /// Returns true if the complement of `set` is a declared open set.
    pub fn is_closed(&self, set: &PointSet) -> bool {
        self.is_open(&self.complement(set))
    }

    /// Returns the complements of the declared open sets.
    pub fn closed_sets(&self) -> impl Iterator<Item = PointSet> + '_ {
        self.open_sets.iter().map(|open| self.complement(open))
    }

    /// Returns the union of every declared open set contained in `set`.
    ///
    /// Only meaningful when the open sets form a topology.
    pub fn interior(&self, set: &PointSet) -> PointSet {
        self.open_sets
            .iter()
            .filter(|open| includes(set, open))
            .flat_map(|open| open.iter().copied())
            .collect()
    }

    /// Returns the complement of the interior of the complement of `set`.
    ///
    /// Only meaningful when the open sets form a topology.
    pub fn closure(&self, set: &PointSet) -> PointSet {
        self.complement(&self.interior(&self.complement(set)))
    }
}

impl Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Space {{")?;
        writeln!(f, "  Points: {}", format_set(&self.points))?;
        writeln!(f, "  Open sets: {}", self.open_sets.len())?;
        for (i, open) in self.open_sets.iter().enumerate() {
            writeln!(f, "    [{}] {}", i, format_set(open))?;
        }
        write!(f, "}}")
    }
}

fn format_set(set: &PointSet) -> String {
    let items: Vec<String> = set.iter().map(|p| p.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(values: &[f64]) -> PointSet {
        point_set(values.iter().copied())
    }

    fn chain() -> Space {
        Space::new(
            [1.0, 2.0, 3.0],
            vec![vec![], vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0, 3.0]],
        )
    }

    #[test]
    fn test_new_space() {
        let space = chain();
        assert_eq!(space.len(), 3);
        assert!(!space.is_empty());
        assert_eq!(space.open_sets().len(), 4);
        assert!(space.contains(2.0));
        assert!(!space.contains(4.0));
    }

    #[test]
    fn test_default_is_empty() {
        let space = Space::default();
        assert!(space.is_empty());
        assert!(space.open_sets().is_empty());
    }

    #[test]
    fn test_is_open_exact_match_only() {
        let space = chain();
        assert!(space.is_open(&s(&[1.0])));
        assert!(space.is_open(&s(&[1.0, 2.0])));
        assert!(space.is_open(&PointSet::new()));
        // {2} is a subset of an open set but not itself declared.
        assert!(!space.is_open(&s(&[2.0])));
    }

    #[test]
    fn test_is_closed() {
        let space = chain();
        assert!(space.is_closed(&s(&[3.0])));
        assert!(space.is_closed(&s(&[2.0, 3.0])));
        assert!(space.is_closed(&s(&[1.0, 2.0, 3.0])));
        assert!(space.is_closed(&PointSet::new()));
        assert!(!space.is_closed(&s(&[1.0])));
    }

    #[test]
    fn test_is_neighborhood() {
        let space = chain();
        assert!(space.is_neighborhood(1.0, &s(&[1.0, 3.0])));
        assert!(space.is_neighborhood(2.0, &s(&[1.0, 2.0])));
        // The only open sets holding 2 also hold 1.
        assert!(!space.is_neighborhood(2.0, &s(&[2.0, 3.0])));
        assert!(!space.is_neighborhood(4.0, &s(&[1.0, 2.0, 3.0])));
    }

    #[test]
    fn test_neighborhood_need_not_be_open() {
        let space = chain();
        let set = s(&[1.0, 3.0]);
        assert!(!space.is_open(&set));
        assert!(space.is_neighborhood(1.0, &set));
    }

    #[test]
    fn test_complement_ignores_foreign_points() {
        let space = chain();
        assert_eq!(space.complement(&s(&[2.0, 9.0])), s(&[1.0, 3.0]));
    }

    #[test]
    fn test_closed_sets() {
        let space = chain();
        let closed: BTreeSet<PointSet> = space.closed_sets().collect();
        assert!(closed.contains(&s(&[1.0, 2.0, 3.0])));
        assert!(closed.contains(&s(&[2.0, 3.0])));
        assert!(closed.contains(&s(&[3.0])));
        assert!(closed.contains(&PointSet::new()));
    }

    #[test]
    fn test_interior_and_closure() {
        let space = chain();
        assert_eq!(space.interior(&s(&[1.0, 3.0])), s(&[1.0]));
        assert_eq!(space.interior(&s(&[2.0, 3.0])), PointSet::new());
        assert_eq!(space.closure(&s(&[3.0])), s(&[3.0]));
        assert_eq!(space.closure(&s(&[2.0])), s(&[2.0, 3.0]));
        assert_eq!(space.closure(&s(&[1.0])), s(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_indiscrete() {
        let space = Space::indiscrete([1.0, 2.0]);
        assert_eq!(space.open_sets().len(), 2);
        assert!(space.is_open(&PointSet::new()));
        assert!(space.is_open(&s(&[1.0, 2.0])));
        assert!(!space.is_open(&s(&[1.0])));
    }

    #[test]
    fn test_discrete() {
        let space = Space::discrete([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(space.open_sets().len(), 8);
        assert!(space.is_open(&s(&[1.0, 3.0])));
        assert!(space.is_closed(&s(&[2.0])));
    }

    #[test]
    fn test_discrete_rejects_large_point_sets() {
        let result = Space::discrete((0..20).map(f64::from));
        assert_eq!(
            result,
            Err(SpaceError::TooManyPoints {
                count: 20,
                max: MAX_DISCRETE_POINTS
            })
        );
    }

    #[test]
    fn test_display() {
        let space = Space::new([1.0, 2.0], vec![vec![1.0]]);
        let text = space.to_string();
        assert!(text.contains("Points: {1, 2}"));
        assert!(text.contains("[0] {1}"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn space_serializes_points_as_numbers() {
        let space = Space::new([1.0, 2.5], vec![vec![1.0]]);
        let json = serde_json::to_value(&space).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "points": [1.0, 2.5], "open_sets": [[1.0]] })
        );
        let back: Space = serde_json::from_value(json).unwrap();
        assert_eq!(back, space);
    }
}
