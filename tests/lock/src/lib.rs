//! Shared helpers for the lock tests: bundle mutation and brute-force
//! reference solvers.

pub mod brute_force;
