//! Demonstration of homeomorphism evaluation between finite spaces.

use homeomorph::{Homeomorphism, Space, SpaceProperty};

fn singletons(points: &[f64]) -> SpaceProperty {
    SpaceProperty::new(points.iter().copied(), points.iter().map(|p| vec![*p]))
}

fn main() {
    // Two discrete-looking spaces that differ only by a shift
    let space1 = singletons(&[1.0, 2.0, 3.0]);
    let space2 = singletons(&[4.0, 5.0, 6.0]);
    let space3 = singletons(&[4.0, 5.0, 7.0]);

    let shift = |x: f64| x + 3.0;
    let unshift = |y: f64| y - 3.0;

    println!("=== Shift onto {{4, 5, 6}} ===");
    let h = Homeomorphism::new(shift, unshift, space1.clone(), space2);
    match h.evaluate() {
        Ok(report) => println!("{report}"),
        Err(err) => println!("cannot evaluate: {err}"),
    }

    println!("\n=== Shift onto {{4, 5, 7}} ===");
    let h = Homeomorphism::new(shift, unshift, space1, space3);
    match h.evaluate() {
        Ok(report) => {
            println!("{report}");
            for check in report.failures() {
                println!("  - {}", check.failure_message());
            }
        }
        Err(err) => println!("cannot evaluate: {err}"),
    }

    // Sampled open interval (0, 1) stretched onto (0, 2)
    println!("\n=== Doubling (0, 1) onto (0, 2) ===");
    let points1: Vec<f64> = (1..=9).map(|i| f64::from(i) / 10.0).collect();
    let points2: Vec<f64> = points1.iter().map(|x| 2.0 * x).collect();
    let space1 = Space::new(
        points1.iter().copied(),
        points1.windows(2).map(|w| w.to_vec()),
    );
    let space2 = Space::new(
        points2.iter().copied(),
        points2.windows(2).map(|w| w.to_vec()),
    );
    println!("{space1}");
    let h = Homeomorphism::new(|x| 2.0 * x, |y| y / 2.0, space1, space2);
    println!(
        "The spaces are {}homeomorphic.",
        if h.is_valid() { "" } else { "not " }
    );
}
