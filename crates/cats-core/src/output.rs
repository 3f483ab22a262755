//! Result Output
//!
//! Extracts the result document from a run and writes it to disk.

use std::fs;
use std::path::Path;

use cats_report::{CatRecord, RelationshipRecord, SimulationReport, SimulationSection};

use crate::simulation::Simulation;
use crate::world::World;

/// Build the result document from a world and, if calculated, its
/// whole-run metrics
pub fn build_report(world: &World, simulation: SimulationSection) -> SimulationReport {
    let cats = world
        .cats
        .iter()
        .map(|cat| CatRecord {
            id: cat.id(),
            traits: cat.traits.to_record(),
            metrics: cat.metrics.clone(),
        })
        .collect();

    let relationships: Vec<RelationshipRecord> =
        world.relationships.values().map(|r| r.to_record()).collect();

    SimulationReport {
        cats,
        relationships,
        simulation,
    }
}

/// Result document of a run; `None` before the initial state exists
pub fn report(sim: &Simulation) -> Option<SimulationReport> {
    let section = SimulationSection {
        metrics: sim.metrics().cloned(),
    };
    sim.world().map(|world| build_report(world, section))
}

/// Write a result document as pretty-printed JSON, creating parent
/// directories as needed
pub fn write_report(report: &SimulationReport, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let json = report
        .to_json_pretty()
        .map_err(std::io::Error::other)?;
    fs::write(path, json)
}
