//! Derived properties of a space: compactness, connectedness, Hausdorff separation.
//!
//! # Scope
//!
//! [`SpaceProperty::is_compact`] and [`SpaceProperty::is_hausdorff`] are
//! shortcuts for point sets on the real line, not general topological
//! algorithms. Connectedness is computed from the declared open sets.

pub mod connectivity;
mod space_property;

pub use connectivity::{connected_components, is_connected};
pub use space_property::SpaceProperty;

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::algo;
    use petgraph::graph::UnGraph;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn open_sets() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            vec![5.0, 6.0],
            vec![7.0],
            vec![6.0, 8.0, 9.0],
        ]
    }

    /// Counts components of the "same open set" adjacency with plain graph reachability.
    fn reachability_components(points: &[f64], open_sets: &[Vec<f64>]) -> usize {
        let mut graph = UnGraph::<f64, ()>::new_undirected();
        let nodes: Vec<_> = points.iter().map(|p| graph.add_node(*p)).collect();
        let node_of = |x: f64| points.iter().position(|p| *p == x).map(|i| nodes[i]);
        for open in open_sets {
            for (i, a) in open.iter().enumerate() {
                for b in &open[i + 1..] {
                    if let (Some(na), Some(nb)) = (node_of(*a), node_of(*b)) {
                        graph.add_edge(na, nb, ());
                    }
                }
            }
        }
        algo::connected_components(&graph)
    }

    #[test]
    fn connectedness_ignores_supply_order() {
        let points = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let expected = SpaceProperty::new(points, open_sets()).connected_components();

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut shuffled = open_sets();
            shuffled.shuffle(&mut rng);
            for set in shuffled.iter_mut() {
                set.shuffle(&mut rng);
            }
            let space = SpaceProperty::new(points, shuffled);
            assert_eq!(space.connected_components(), expected);
            assert!(!space.is_connected());
        }
    }

    #[test]
    fn components_agree_with_graph_reachability() {
        let points = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let space = SpaceProperty::new(points, open_sets());
        assert_eq!(
            space.connected_components().len(),
            reachability_components(&points, &open_sets())
        );

        let mut linked = open_sets();
        linked.push(vec![3.0, 4.0, 5.0, 7.0, 9.0]);
        let space = SpaceProperty::new(points, linked.clone());
        assert_eq!(reachability_components(&points, &linked), 1);
        assert!(space.is_connected());
    }
}
