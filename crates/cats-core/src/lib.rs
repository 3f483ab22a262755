//! Cat Colony Simulation Engine
//!
//! Cats wander a graph of locations, meet, fight or befriend each other,
//! and at the end of a run the colony's social structure is summarized.

pub mod components;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod params;
pub mod request;
pub mod rng;
pub mod runner;
pub mod setup;
pub mod simulation;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::{ConfigError, TuningConfig};
pub use error::{SimError, SimResult};
pub use params::SimulationParameters;
pub use rng::SimRng;
pub use runner::{execute, RunRecord, RunStatus};
pub use simulation::Simulation;
pub use world::World;
