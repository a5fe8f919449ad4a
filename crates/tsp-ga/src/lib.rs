#![deny(clippy::all)]

mod genetic;
mod params;

pub use genetic::{order_crossover, Genetic};
pub use params::GaParams;
