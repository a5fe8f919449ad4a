#![deny(clippy::all)]

mod colony;
mod params;

pub use colony::AntColony;
pub use params::AcoParams;
