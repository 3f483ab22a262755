//! Result types for the cat colony simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine fills them in at the end of a run and consumers read them
//! back from the serialized result document.

pub mod metrics;
pub mod report;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

pub use metrics::{CatMetrics, RelationshipMetrics, SimulationMetrics};
pub use report::{
    CatRecord, RelationshipRecord, SimulationReport, SimulationSection, TraitsRecord,
};
