//! Proof module: canonical JSON bytes and domain-separated content hashing.
//!
//! Search reports are serialized through [`canon`] and addressed through
//! [`hash`], so that two runs over the same inputs can be compared by digest.

pub mod canon;
pub mod hash;
pub mod hash_domain;
