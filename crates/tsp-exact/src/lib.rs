#![deny(clippy::all)]

//! Exact solvers. Both run to completion and perform the computation at any
//! size; callers decide whether `N` is small enough (roughly 20 nodes for
//! [`held_karp`], 11 for [`brute_force`]).

mod brute_force;
mod held_karp;

pub use brute_force::{brute_force, BruteForce};
pub use held_karp::held_karp;
