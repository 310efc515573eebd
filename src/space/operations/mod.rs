mod complement;
mod image;
mod inclusion;

pub use complement::compute_complement;
pub use image::{apply, compute_image};
pub use inclusion::{includes, is_disjoint};
