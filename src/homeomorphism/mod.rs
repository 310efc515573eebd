//! Homeomorphism evaluation between two finite spaces.
//!
//! A [`Homeomorphism`] pairs a forward mapping and its claimed inverse with a
//! domain and a range. It is valid when all of the following hold, checked in
//! this order:
//!
//! 1. The forward mapping is a bijection from the domain points onto the range points
//! 2. The forward mapping passes the finite-difference continuity check on the domain
//! 3. The inverse passes the same check on the range
//! 4. The forward mapping sends open sets to open sets
//! 5. The inverse sends open sets to open sets
//! 6. The forward mapping sends complements of open sets to closed sets
//! 7. The inverse sends complements of open sets to closed sets
//!
//! # Module Structure
//!
//! - [`checks`] - the predicates as free functions over any mapping and spaces
//! - [`config`] - continuity tolerance
//! - [`report`] - per-check outcomes

pub mod checks;
pub mod config;
pub mod error;
mod homeomorphism;
pub mod report;

pub use config::{HomeomorphismConfig, DEFAULT_EPSILON};
pub use error::HomeomorphismError;
pub use homeomorphism::Homeomorphism;
pub use report::{Check, ValidityReport};
