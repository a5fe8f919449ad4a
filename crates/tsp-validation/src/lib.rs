#![deny(clippy::all)]

//! Boundary layer over the solver crates.
//!
//! Owns the policy the solvers deliberately leave out: refusing exact solvers
//! on graphs that are too large, choosing a 2-opt seed, and driving the
//! steppers synchronously to completion.

mod algorithm;
mod config;
mod driver;
mod error;

pub use algorithm::Algorithm;
pub use config::SuiteConfig;
pub use driver::{run, score_tour, sweep, Outcome, Report, SweepRow, UserScore};
pub use error::SuiteError;
