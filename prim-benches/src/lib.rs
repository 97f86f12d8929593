//! Benchmark support crate for the Prim implementations.
//!
//! Provides seeded random graph generation and parameter types used by the
//! Criterion benchmarks comparing the heap and quadratic variants.

pub mod error;
pub mod graphs;
pub mod params;
