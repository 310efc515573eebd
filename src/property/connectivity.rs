//! Connectedness through shared open-set membership.
//!
//! Two points are linked when some declared open set holds both; the space is
//! connected when every pair of points is joined by a chain of such links.
//! The classes are computed with petgraph's [`UnionFind`] over the indices of
//! the sorted point set.

use std::collections::{BTreeMap, HashMap};

use petgraph::unionfind::UnionFind;

use crate::point::{Point, PointSet};
use crate::space::Space;

/// Builds the union-find over `space.points()` and returns it with the index map.
///
/// For every open set the representative is its lowest element that is a
/// point of the space; every other such element is unioned with it. Elements
/// outside the point set are skipped.
fn link_open_sets(space: &Space) -> (UnionFind<usize>, Vec<Point>) {
    let ordered: Vec<Point> = space.points().iter().copied().collect();
    let index: HashMap<Point, usize> = ordered.iter().enumerate().map(|(i, p)| (*p, i)).collect();

    let mut sets = UnionFind::new(ordered.len());
    for open in space.open_sets() {
        let mut members = open.iter().filter_map(|p| index.get(p).copied());
        let Some(representative) = members.next() else {
            continue;
        };
        for member in members {
            sets.union(representative, member);
        }
    }
    (sets, ordered)
}

/// Returns the connected components of `space`, each ordered by its lowest point.
pub fn connected_components(space: &Space) -> Vec<PointSet> {
    let (mut sets, ordered) = link_open_sets(space);

    let mut by_root: BTreeMap<usize, PointSet> = BTreeMap::new();
    for (i, point) in ordered.iter().enumerate() {
        let root = sets.find_mut(i);
        by_root.entry(root).or_default().insert(*point);
    }

    let mut components: Vec<PointSet> = by_root.into_values().collect();
    components.sort_by_key(|component| component.first().copied());
    tracing::debug!(
        points = ordered.len(),
        components = components.len(),
        "computed connected components"
    );
    components
}

/// Returns true if every point shares one union-find root.
///
/// The empty space is connected.
pub fn is_connected(space: &Space) -> bool {
    let (mut sets, ordered) = link_open_sets(space);
    if ordered.is_empty() {
        return true;
    }
    let root = sets.find_mut(0);
    (1..ordered.len()).all(|i| sets.find_mut(i) == root)
}
