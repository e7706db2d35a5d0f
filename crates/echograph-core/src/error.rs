//! Error types for the recommendation core.

use thiserror::Error;

use crate::node::NodeType;

/// Errors produced while assembling a graph, building a kernel, or running a
/// random walk.
#[derive(Debug, Error)]
pub enum Error {
    /// A type-transition matrix row did not sum to 1, or an unknown strategy
    /// name was requested.
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Graph assembly produced zero nodes.
    #[error("assembled graph has no nodes")]
    GraphEmpty,

    /// The seed list was empty, or none of its nodes exist in the graph.
    #[error("no seed node is present in the graph")]
    NoValidSeeds,

    /// An edge was requested between two node types outside the authorized
    /// relation set.
    #[error("forbidden relation between {0:?} and {1:?}")]
    ForbiddenRelation(NodeType, NodeType),

    /// The constructed transition matrix violated a row-stochasticity or
    /// non-negativity invariant.
    #[error("kernel invariant violated: {0}")]
    KernelInvariant(String),

    /// Power iteration produced a non-finite value.
    #[error("random walk solver diverged: {0}")]
    SolverDiverged(String),

    /// The caller's cancellation token fired before the walk completed.
    #[error("operation cancelled")]
    Cancelled,

    /// The upstream entity store failed; its message is surfaced unchanged.
    #[error("entity store unavailable: {0}")]
    StoreUnavailable(String),

    /// Failed to read or parse a configuration document.
    #[error("failed to read configuration file '{path}': {source}")]
    ConfigRead {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML configuration document.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
