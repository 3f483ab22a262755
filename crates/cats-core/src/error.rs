//! Engine Errors

use thiserror::Error;

use crate::components::{CatId, NodeId};

/// Errors that abort a run.
///
/// A run never recovers from any of these; the world is discarded and the
/// caller decides whether to start again with a fresh seed.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected before any simulation state exists
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("initial state has not been generated")]
    NotInitialized,

    #[error("initial state has already been generated")]
    AlreadyInitialized,

    /// A cat was told to leave for the node it is already on
    #[error("cat {cat} cannot leave for node {node}, it is already there")]
    InvalidMove { cat: CatId, node: NodeId },

    #[error("cat {cat} is in transit without a target node")]
    MissingTarget { cat: CatId },

    #[error("no relationship between cat {0} and cat {1}")]
    MissingRelationship(CatId, CatId),

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("cat {0} has no movement options")]
    NoMoveOptions(CatId),
}

pub type SimResult<T> = Result<T, SimError>;
