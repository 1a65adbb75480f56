//! Error types for the Paver core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

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

/// An error raised while building or indexing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph was declared with zero vertices.
    #[error("a graph must contain at least one vertex")]
    EmptyGraph,
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge was given a negative weight.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// The left endpoint id (as provided).
        left: usize,
        /// The right endpoint id (as provided).
        right: usize,
        /// The rejected weight.
        weight: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph was declared with zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// A vertex id fell outside `[0, vertex_count)`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge was given a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}

/// Error type produced when configuring or running [`crate::Paver`] and the
/// routing primitives beneath it.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PaverError {
    /// Building or indexing the graph failed.
    #[error("graph construction failed: {error}")]
    Graph {
        #[source]
        /// Underlying graph error.
        error: GraphError,
    },
    /// The pipeline was configured without any hubs.
    #[error("at least one hub must be configured")]
    NoHubs,
    /// A hub referenced a vertex outside the graph.
    #[error("hub {hub} is out of range for a graph with {vertex_count} vertices")]
    HubOutOfRange {
        /// The offending hub id.
        hub: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A shortest-path query started from a vertex outside the graph.
    #[error("source {vertex} is out of range for a graph with {vertex_count} vertices")]
    SourceOutOfRange {
        /// The offending source vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A path was requested to a vertex outside the graph.
    #[error("destination {vertex} is out of range for a graph with {vertex_count} vertices")]
    DestinationOutOfRange {
        /// The offending destination vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A generator was configured with `min_weight > max_weight`.
    #[error("weight range is empty: min {min} exceeds max {max}")]
    InvalidWeightRange {
        /// Requested lower bound.
        min: u64,
        /// Requested upper bound.
        max: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`PaverError`] variants.
    enum PaverErrorCode for PaverError {
        /// Building or indexing the graph failed.
        GraphFailure => Graph { .. } => "PAVER_GRAPH",
        /// The pipeline was configured without any hubs.
        NoHubs => NoHubs => "PAVER_NO_HUBS",
        /// A hub referenced a vertex outside the graph.
        HubOutOfRange => HubOutOfRange { .. } => "PAVER_HUB_OUT_OF_RANGE",
        /// A shortest-path query started from a vertex outside the graph.
        SourceOutOfRange => SourceOutOfRange { .. } => "PAVER_SOURCE_OUT_OF_RANGE",
        /// A path was requested to a vertex outside the graph.
        DestinationOutOfRange => DestinationOutOfRange { .. } => "PAVER_DESTINATION_OUT_OF_RANGE",
        /// A generator was configured with an empty weight range.
        InvalidWeightRange => InvalidWeightRange { .. } => "PAVER_INVALID_WEIGHT_RANGE",
    }
}

impl PaverError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated while
    /// building the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<GraphError> for PaverError {
    fn from(error: GraphError) -> Self {
        Self::Graph { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PaverError>;
