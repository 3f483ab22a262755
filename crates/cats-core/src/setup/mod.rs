//! World Setup
//!
//! Topology generation, cat spawning and relationship creation.

pub mod population;
pub mod topology;

pub use population::*;
pub use topology::*;
