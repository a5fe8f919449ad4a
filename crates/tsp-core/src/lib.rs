#![deny(clippy::all)]

//! Shared primitives for the tour solvers.
//!
//! A [`Graph`] is a node count plus a dense weight table in which any pair may
//! be [`Cost::Forbidden`]. Every solver compares tours through
//! [`Graph::tour_length`]; the resumable metaheuristics implement [`Stepper`].

mod cost;
mod error;
mod graph;
mod spec;
mod stepper;

pub use cost::Cost;
pub use error::{GraphError, TourError};
pub use graph::Graph;
pub use spec::{EdgeSpec, GraphSpec, PointSpec};
pub use stepper::{drive, Stepper, StepperSnapshot};

/// Node identifier in `[0, N)`.
pub type Node = usize;

/// Ordered visiting sequence. Closed implicitly once it covers every node.
pub type Tour = Vec<Node>;
