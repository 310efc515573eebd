//! Advisory check of the topology axioms.
//!
//! [`Space`] never enforces the axioms and no predicate consults this report.
//! It exists so callers can find out why a query behaves unexpectedly on an
//! ill-formed open-set collection.

use std::fmt::Display;

use super::operations::includes;
use super::Space;
use crate::point::PointSet;

/// A single way in which the declared open sets fail to form a topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxiomViolation {
    /// `∅` is not declared open.
    MissingEmptySet,
    /// The whole point set is not declared open.
    MissingWholeSpace,
    /// An open set holds points that are not points of the space.
    StrayPoints { open_set: PointSet, stray: PointSet },
    /// The union of two open sets is not declared open.
    UnionNotOpen { a: PointSet, b: PointSet },
    /// The intersection of two open sets is not declared open.
    IntersectionNotOpen { a: PointSet, b: PointSet },
}

impl Display for AxiomViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxiomViolation::MissingEmptySet => write!(f, "the empty set is not open"),
            AxiomViolation::MissingWholeSpace => write!(f, "the whole space is not open"),
            AxiomViolation::StrayPoints { open_set, stray } => write!(
                f,
                "open set {:?} holds points outside the space: {:?}",
                values(open_set),
                values(stray)
            ),
            AxiomViolation::UnionNotOpen { a, b } => write!(
                f,
                "union of {:?} and {:?} is not open",
                values(a),
                values(b)
            ),
            AxiomViolation::IntersectionNotOpen { a, b } => write!(
                f,
                "intersection of {:?} and {:?} is not open",
                values(a),
                values(b)
            ),
        }
    }
}

fn values(set: &PointSet) -> Vec<f64> {
    set.iter().map(|p| p.into_inner()).collect()
}

impl Space {
    /// Lists every axiom violation of the declared open sets.
    ///
    /// Pairwise closure is sufficient because the collection is finite.
    pub fn topology_violations(&self) -> Vec<AxiomViolation> {
        let mut violations = Vec::new();

        if !self.is_open(&PointSet::new()) {
            violations.push(AxiomViolation::MissingEmptySet);
        }
        if !self.is_open(self.points()) {
            violations.push(AxiomViolation::MissingWholeSpace);
        }

        for open in self.open_sets() {
            if !includes(self.points(), open) {
                let stray: PointSet = open.difference(self.points()).copied().collect();
                violations.push(AxiomViolation::StrayPoints {
                    open_set: open.clone(),
                    stray,
                });
            }
        }

        let opens: Vec<&PointSet> = self.open_sets().iter().collect();
        for (i, a) in opens.iter().enumerate() {
            for b in &opens[i + 1..] {
                let union: PointSet = a.union(b).copied().collect();
                if !self.is_open(&union) {
                    violations.push(AxiomViolation::UnionNotOpen {
                        a: (*a).clone(),
                        b: (*b).clone(),
                    });
                }
                let intersection: PointSet = a.intersection(b).copied().collect();
                if !self.is_open(&intersection) {
                    violations.push(AxiomViolation::IntersectionNotOpen {
                        a: (*a).clone(),
                        b: (*b).clone(),
                    });
                }
            }
        }

        tracing::debug!(
            points = self.len(),
            open_sets = self.open_sets().len(),
            violations = violations.len(),
            "checked topology axioms"
        );
        violations
    }

    /// Returns true if the declared open sets form a topology on the points.
    pub fn is_topology(&self) -> bool {
        self.topology_violations().is_empty()
    }
}
