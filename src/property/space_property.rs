use std::collections::BTreeSet;
use std::ops::Deref;

use super::connectivity;
use crate::point::{is_finite, PointSet};
use crate::space::operations::is_disjoint;
use crate::space::{Space, SpaceError};

/// A [`Space`] with derived topological properties.
///
/// Holds no state beyond the wrapped space; every property is recomputed from
/// the points and open sets on each call. All [`Space`] queries are reachable
/// through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SpaceProperty(Space);

impl SpaceProperty {
    /// Creates a space from raw point values and raw open sets.
    pub fn new<P, O, S>(points: P, open_sets: O) -> Self
    where
        P: IntoIterator<Item = f64>,
        O: IntoIterator<Item = S>,
        S: IntoIterator<Item = f64>,
    {
        Self(Space::new(points, open_sets))
    }

    pub fn from_sets(points: PointSet, open_sets: BTreeSet<PointSet>) -> Self {
        Self(Space::from_sets(points, open_sets))
    }

    pub fn space(&self) -> &Space {
        &self.0
    }

    pub fn into_space(self) -> Space {
        self.0
    }

    /// Closed-and-bounded test for subsets of the real line.
    ///
    /// The whole point set is closed when `∅` is declared open; it is bounded
    /// when its minimum and maximum are finite. This is the Heine–Borel shortcut,
    /// not a general compactness test.
    ///
    /// # Errors
    ///
    /// [`SpaceError::EmptySpace`] when there are no points to bound.
    pub fn try_compact(&self) -> Result<bool, SpaceError> {
        let (Some(&min), Some(&max)) = (self.points().first(), self.points().last()) else {
            return Err(SpaceError::EmptySpace);
        };
        let closed = self.is_closed(self.points());
        Ok(closed && is_finite(min) && is_finite(max))
    }

    /// Returns [`try_compact`](Self::try_compact), treating the empty space as not compact.
    pub fn is_compact(&self) -> bool {
        self.try_compact().unwrap_or_else(|err| {
            tracing::warn!(%err, "compactness undefined, reporting not compact");
            false
        })
    }

    /// Returns true if every pair of points is linked through shared open sets.
    pub fn is_connected(&self) -> bool {
        connectivity::is_connected(&self.0)
    }

    /// Returns the classes of the shared-open-set relation, ordered by lowest point.
    pub fn connected_components(&self) -> Vec<PointSet> {
        connectivity::connected_components(&self.0)
    }

    /// Always true: points are reals and the real line is Hausdorff.
    ///
    /// See [`is_hausdorff_strict`](Self::is_hausdorff_strict) for a check
    /// against the declared open sets.
    pub fn is_hausdorff(&self) -> bool {
        true
    }

    /// Returns true if every two distinct points lie in disjoint declared open sets.
    pub fn is_hausdorff_strict(&self) -> bool {
        let points: Vec<_> = self.points().iter().copied().collect();
        points.iter().enumerate().all(|(i, x)| {
            points[i + 1..].iter().all(|y| {
                self.open_sets()
                    .iter()
                    .filter(|u| u.contains(x))
                    .any(|u| {
                        self.open_sets()
                            .iter()
                            .any(|v| v.contains(y) && is_disjoint(u, v))
                    })
            })
        })
    }
}

impl Deref for SpaceProperty {
    type Target = Space;

    fn deref(&self) -> &Space {
        &self.0
    }
}

impl From<Space> for SpaceProperty {
    fn from(space: Space) -> Self {
        Self(space)
    }
}

impl From<SpaceProperty> for Space {
    fn from(property: SpaceProperty) -> Self {
        property.0
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn property_is_transparent() {
        let property = SpaceProperty::new([1.0], vec![vec![1.0]]);
        let json = serde_json::to_string(&property).unwrap();
        assert_eq!(json, serde_json::to_string(property.space()).unwrap());
        let back: SpaceProperty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, property);
    }
}
