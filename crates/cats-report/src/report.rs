//! Result Document
//!
//! The serialized shape handed to whoever stores or displays a finished run:
//!
//! ```text
//! {"cats": [{"id", "traits": {..}, <metrics>}],
//!  "relationships": [{"key": [cat1, cat2], "value", <metrics>}],
//!  "simulation": {<metrics>}}
//! ```
//!
//! Metric fields are flattened into their parent object and omitted
//! entirely when the run produced none.

use serde::{Deserialize, Serialize};

use crate::metrics::{CatMetrics, RelationshipMetrics, SimulationMetrics};

/// Immutable traits of a cat as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitsRecord {
    pub id: usize,
    pub name: String,
    pub home: usize,
    #[serde(rename = "aggressive")]
    pub aggressiveness: f64,
    #[serde(rename = "lazy")]
    pub laziness: f64,
}

/// One cat in the result document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatRecord {
    pub id: usize,
    pub traits: TraitsRecord,
    #[serde(flatten)]
    pub metrics: Option<CatMetrics>,
}

/// One relationship in the result document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Sorted pair of cat ids
    pub key: (usize, usize),
    pub value: f64,
    #[serde(flatten)]
    pub metrics: Option<RelationshipMetrics>,
}

/// Whole-run section; serializes as `{}` when metrics are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSection {
    #[serde(flatten)]
    pub metrics: Option<SimulationMetrics>,
}

/// Complete result document of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub cats: Vec<CatRecord>,
    pub relationships: Vec<RelationshipRecord>,
    pub simulation: SimulationSection,
}

impl SimulationReport {
    /// Parse a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn cat(&self, id: usize) -> Option<&CatRecord> {
        self.cats.iter().find(|c| c.id == id)
    }

    /// Look up a relationship regardless of argument order.
    pub fn relationship(&self, a: usize, b: usize) -> Option<&RelationshipRecord> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.relationships.iter().find(|r| r.key == key)
    }

    /// True when the engine attached metrics to every part of the document.
    pub fn is_complete(&self) -> bool {
        self.simulation.metrics.is_some()
            && self.cats.iter().all(|c| c.metrics.is_some())
            && self.relationships.iter().all(|r| r.metrics.is_some())
    }
}
