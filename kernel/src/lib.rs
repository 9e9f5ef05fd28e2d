//! Deliberate Kernel: the problem-model layer shared by every search engine.
//!
//! # API Surface
//!
//! - [`graph`] -- read-only weighted adjacency ([`graph::AdjacencyGraph`],
//!   [`graph::GraphSource`]) consumed by the frontier-ordered searches
//! - [`proof`] -- canonical JSON bytes and domain-separated content hashing
//!   used to make every search report digest-addressable
//!
//! # Module Dependency Direction
//!
//! `graph` and `proof` are independent. Neither depends on the other.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod proof;
