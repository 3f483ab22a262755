//! World Components
//!
//! Cats, relationships and the location graph they move over.

pub mod cat;
pub mod relationship;
pub mod topology;

pub use cat::*;
pub use relationship::*;
pub use topology::*;

/// Identity of a cat; equal to its index in the population.
pub type CatId = usize;

/// Identity of a node; equal to its index in the topology.
pub type NodeId = usize;
