//! Property-based tests for the Prim implementations.
//!
//! Checks both variants against a sequential Kruskal oracle, verifies the
//! structural invariants of every produced tree, and confirms that the
//! validator rejects single-entry corruptions, across graph topologies with
//! varied weight distributions.

mod corruption;
mod strategies;
mod structural;
mod types;
