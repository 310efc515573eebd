//! homeomorph - finite topological spaces and homeomorphism checks
//!
//! Models topological spaces over finite sets of real points with an explicitly
//! declared collection of open sets, and decides whether a forward/inverse
//! mapping pair is a homeomorphism between two such spaces.

pub mod homeomorphism;
pub mod point;
pub mod property;
pub mod space;

pub use homeomorphism::{Check, Homeomorphism, HomeomorphismConfig, HomeomorphismError};
pub use point::{point_set, Point, PointSet};
pub use property::SpaceProperty;
pub use space::{Space, SpaceError};
