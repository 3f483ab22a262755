//! Simulation Orchestrator
//!
//! Owns the parameters, the random stream and the world of one run, and
//! drives it: generate the initial state, alternate movement and
//! engagement for every iteration, then calculate metrics.

use cats_report::SimulationMetrics;

use crate::components::CatId;
use crate::config::TuningConfig;
use crate::error::{SimError, SimResult};
use crate::metrics::{self, RunMetrics};
use crate::params::SimulationParameters;
use crate::rng::SimRng;
use crate::setup::{create_relationships, generate_topology, spawn_cats};
use crate::systems::{self, EngagementSummary, MovementSummary};
use crate::world::World;

/// One run of the cat colony
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SimulationParameters,
    tuning: TuningConfig,
    rng: SimRng,
    world: Option<World>,
    iterations_run: u32,
    metrics: Option<RunMetrics>,
}

impl Simulation {
    /// Create a run with the default tuning. The random stream is seeded
    /// from the parameters; no state exists until
    /// [`generate_initial_state`](Self::generate_initial_state).
    pub fn new(params: SimulationParameters) -> Self {
        Self::with_tuning(params, TuningConfig::default())
    }

    pub fn with_tuning(params: SimulationParameters, tuning: TuningConfig) -> Self {
        let rng = SimRng::from_seed(params.seed());
        Self {
            params,
            tuning,
            rng,
            world: None,
            iterations_run: 0,
            metrics: None,
        }
    }

    /// Build the topology, the cats and their relationships
    pub fn generate_initial_state(&mut self) -> SimResult<()> {
        if self.world.is_some() {
            return Err(SimError::AlreadyInitialized);
        }

        let topology = generate_topology(&self.params, &mut self.rng)?;
        let cats = spawn_cats(&self.params, &topology, &mut self.rng)?;
        let relationships = create_relationships(&cats);

        tracing::debug!(
            nodes = topology.node_count(),
            edges = topology.edges().len(),
            cats = cats.len(),
            relationships = relationships.len(),
            "Initial state generated"
        );

        self.world = Some(World::new(topology, cats, relationships));
        Ok(())
    }

    /// Move every cat once
    pub fn movement_step(&mut self) -> SimResult<MovementSummary> {
        let world = self.world.as_mut().ok_or(SimError::NotInitialized)?;
        systems::movement_step(world, &self.tuning.movement, &mut self.rng)
    }

    /// Resolve engagements on every node once. This completes an
    /// iteration.
    pub fn engagement_step(&mut self) -> SimResult<EngagementSummary> {
        let world = self.world.as_mut().ok_or(SimError::NotInitialized)?;
        let summary = systems::engagement_step(world, &self.tuning.engagement, &mut self.rng)?;
        self.iterations_run += 1;
        Ok(summary)
    }

    /// Derive metrics from the counters accumulated so far
    pub fn calculate_metrics(&mut self) -> SimResult<&SimulationMetrics> {
        let world = self.world.as_mut().ok_or(SimError::NotInitialized)?;
        let run = metrics::calculate_metrics(world, self.params.iterations())?;
        Ok(&self.metrics.insert(run).simulation)
    }

    /// Run every remaining iteration, then calculate metrics.
    ///
    /// The initial state must already exist.
    pub fn run(&mut self) -> SimResult<&SimulationMetrics> {
        if self.world.is_none() {
            return Err(SimError::NotInitialized);
        }

        tracing::info!(
            seed = self.params.seed(),
            cats = self.params.cat_amount,
            nodes = self.params.node_amount,
            iterations = self.params.iterations(),
            "Starting run"
        );

        while self.iterations_run < self.params.iterations() {
            let moved = self.movement_step()?;
            let engaged = self.engagement_step()?;

            tracing::debug!(
                iteration = self.iterations_run,
                departed = moved.departed,
                arrived = moved.arrived,
                fights = engaged.fights,
                friendly = engaged.friendly,
                "Iteration complete"
            );
        }

        let metrics = self.calculate_metrics()?;
        tracing::info!(
            friend_groups = metrics.friendgroups_total,
            isolated_cats = metrics.isolated_cats_count,
            "Run finished"
        );
        Ok(metrics)
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    /// The world, once the initial state exists
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn iterations_run(&self) -> u32 {
        self.iterations_run
    }

    /// Whole-run metrics, once calculated
    pub fn metrics(&self) -> Option<&SimulationMetrics> {
        self.metrics.as_ref().map(|m| &m.simulation)
    }

    pub fn friend_groups(&self) -> &[Vec<CatId>] {
        self.metrics
            .as_ref()
            .map(|m| m.friend_groups.as_slice())
            .unwrap_or(&[])
    }
}
