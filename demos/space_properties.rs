//! Compactness, connectedness and Hausdorff checks on small spaces.

use homeomorph::{Space, SpaceProperty};

fn describe(name: &str, space: &SpaceProperty) {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    println!("{name}:");
    println!("  compact:          {}", yes_no(space.is_compact()));
    println!("  connected:        {}", yes_no(space.is_connected()));
    println!("  Hausdorff:        {}", yes_no(space.is_hausdorff()));
    println!("  Hausdorff strict: {}", yes_no(space.is_hausdorff_strict()));
    println!("  topology:         {}", yes_no(space.is_topology()));
    for violation in space.topology_violations() {
        println!("    - {violation}");
    }
    let components: Vec<Vec<f64>> = space
        .connected_components()
        .iter()
        .map(|c| c.iter().map(|p| p.into_inner()).collect())
        .collect();
    println!("  components:       {components:?}");
}

fn main() {
    let chained = SpaceProperty::new(
        [1.0, 2.0, 3.0, 4.0, 5.0],
        vec![
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            vec![3.0, 4.0, 5.0],
            vec![1.0, 3.0, 5.0],
        ],
    );
    describe("Chained open sets", &chained);

    let split = SpaceProperty::new(
        [1.0, 2.0, 3.0, 4.0],
        vec![vec![], vec![1.0, 2.0], vec![3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]],
    );
    describe("Two blocks plus the whole space", &split);

    match Space::discrete([0.0, 1.0, 2.0]) {
        Ok(space) => describe("Discrete space on {0, 1, 2}", &SpaceProperty::from(space)),
        Err(err) => println!("cannot build discrete space: {err}"),
    }
}
