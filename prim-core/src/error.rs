//! Error types for the Prim core library.
//!
//! Construction and mutation contract violations surface as typed errors so
//! the caller decides whether to stop. Each enum carries a stable,
//! machine-readable code for logging surfaces.

use std::fmt;

use thiserror::Error;

use crate::graph::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge endpoint was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Edge weights must be non-negative.
    #[error("edge ({src}, {dest}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint as supplied.
        src: usize,
        /// Second endpoint as supplied.
        dest: usize,
        /// The rejected weight.
        weight: Weight,
    },
    /// Edge weights must stay below the reserved "no edge" sentinel.
    #[error("edge ({src}, {dest}) has weight {weight}, above the maximum of {max}")]
    WeightOutOfRange {
        /// First endpoint as supplied.
        src: usize,
        /// Second endpoint as supplied.
        dest: usize,
        /// The rejected weight.
        weight: Weight,
        /// Largest weight accepted by the graph.
        max: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge endpoint was outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Edge weights must be non-negative.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// Edge weights must stay below the sentinel.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
    }
}

/// An error produced by [`crate::VertexQueue`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// A queue must be able to hold at least one vertex.
    #[error("priority queue capacity must be at least 1")]
    ZeroCapacity,
    /// The vertex id does not fit the queue's index space.
    #[error("vertex {vertex} is out of range for a queue of capacity {capacity}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Capacity of the queue.
        capacity: usize,
    },
    /// Every slot of the queue is occupied.
    #[error("priority queue is full (capacity {capacity})")]
    Full {
        /// Capacity of the queue.
        capacity: usize,
    },
    /// Each vertex may be inserted at most once.
    #[error("vertex {vertex} is already queued")]
    AlreadyQueued {
        /// The duplicate vertex id.
        vertex: usize,
    },
    /// The vertex is not currently in the queue.
    #[error("vertex {vertex} is not queued")]
    NotQueued {
        /// The absent vertex id.
        vertex: usize,
    },
    /// `extract_min` was called on an empty queue.
    #[error("priority queue is empty")]
    Empty,
    /// `decrease_key` was asked to raise a key.
    #[error("cannot raise key of vertex {vertex} from {current} to {requested}")]
    KeyIncrease {
        /// The vertex whose key was to change.
        vertex: usize,
        /// The key currently stored.
        current: Weight,
        /// The rejected, larger key.
        requested: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// A queue must be able to hold at least one vertex.
        ZeroCapacity => ZeroCapacity => "QUEUE_ZERO_CAPACITY",
        /// The vertex id does not fit the queue's index space.
        VertexOutOfRange => VertexOutOfRange { .. } => "QUEUE_VERTEX_OUT_OF_RANGE",
        /// Every slot of the queue is occupied.
        Full => Full { .. } => "QUEUE_FULL",
        /// Each vertex may be inserted at most once.
        AlreadyQueued => AlreadyQueued { .. } => "QUEUE_ALREADY_QUEUED",
        /// The vertex is not currently in the queue.
        NotQueued => NotQueued { .. } => "QUEUE_NOT_QUEUED",
        /// `extract_min` was called on an empty queue.
        Empty => Empty => "QUEUE_EMPTY",
        /// `decrease_key` was asked to raise a key.
        KeyIncrease => KeyIncrease { .. } => "QUEUE_KEY_INCREASE",
    }
}

/// Errors returned by the Prim entry points.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The start vertex is not part of the graph.
    #[error("start vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidStartVertex {
        /// The rejected start vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The graph has more than one component, so no spanning tree exists.
    #[error("graph with {vertex_count} vertices is not connected")]
    NotConnected {
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The internal priority queue rejected an operation.
    #[error("priority queue failed during MST construction: {0}")]
    Queue(#[from] QueueError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The start vertex is not part of the graph.
        InvalidStartVertex => InvalidStartVertex { .. } => "MST_INVALID_START_VERTEX",
        /// The graph has more than one component.
        NotConnected => NotConnected { .. } => "MST_NOT_CONNECTED",
        /// The internal priority queue rejected an operation.
        QueueFailure => Queue { .. } => "MST_QUEUE_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`QueueErrorCode`] when the error originated in the queue.
    #[must_use]
    pub const fn queue_code(&self) -> Option<QueueErrorCode> {
        match self {
            Self::Queue(error) => Some(error.code()),
            _ => None,
        }
    }
}
