//! Deliberate Harness: concrete worlds and report bundles for the engines.
//!
//! The harness runs a named scenario (world + engine + policy) and packages
//! the result as a self-contained, digest-addressed bundle.
//!
//! The harness does NOT implement search logic. It delegates to
//! `deliberate_search`. Worlds provide domain data only; the runner owns
//! policy selection, hashing and bundling.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod contract;
pub mod runner;
pub mod worlds;
