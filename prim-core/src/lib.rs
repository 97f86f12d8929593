//! Prim core library.
//!
//! Builds minimum spanning trees of dense undirected graphs with two Prim
//! variants and validates the trees they produce.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
mod queue;


pub use crate::{
    error::{
        GraphError, GraphErrorCode, MstError, MstErrorCode, QueueError, QueueErrorCode,
    },
    graph::{Graph, INFINITE_WEIGHT, MAX_EDGE_WEIGHT, Weight},
    mst::{
        Algorithm, MstEdge, MstResult, MstViolation, inspect_mst, prim_mst, prim_mst_simple,
        validate_mst,
    },
    queue::VertexQueue,
};
