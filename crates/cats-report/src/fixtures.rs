//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // [dev-dependencies]
//! // cats-report = { path = "../cats-report", features = ["test-fixtures"] }
//!
//! use cats_report::fixtures;
//!
//! let report = fixtures::sample_report();
//! ```

use crate::SimulationReport;

/// Returns a finished three-cat run.
///
/// Contains:
/// - 3 cats, cat 0 and cat 1 friends after one friendly interaction
/// - 3 relationships, one of them moved to -0.05
/// - no friend groups
pub fn sample_report() -> SimulationReport {
    let json = include_str!("../tests/fixtures/sample_report.json");
    SimulationReport::from_json(json).expect("Failed to parse sample_report.json")
}
