#![deny(clippy::all)]

mod nearest;
mod two_opt;

pub use nearest::{nearest_neighbor, nearest_neighbor_from};
pub use two_opt::{two_opt, TwoOptParams};
