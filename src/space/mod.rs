//! Finite topological spaces: points, declared open sets, and the queries
//! answered from them.

mod axioms;
pub mod error;
pub mod operations;
mod space;

pub use axioms::AxiomViolation;
pub use error::SpaceError;
pub use space::{Space, MAX_DISCRETE_POINTS};
