//! Simulation Parameters
//!
//! The immutable parameter bundle of one run.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Parameters of a single run.
///
/// The only check made here is that the run has at least one iteration;
/// every other range or ratio is the caller's contract (see
/// [`crate::request::check_contract`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct SimulationParameters {
    iterations: u32,
    seed: u32,
    pub cat_amount: usize,
    pub node_amount: usize,
    pub mean_edges: f64,
    pub var_edges: f64,
    pub mean_aggressive: f64,
    pub var_aggressive: f64,
    pub mean_laziness: f64,
    pub var_laziness: f64,
}

impl SimulationParameters {
    /// Create parameters with default population settings.
    pub fn new(iterations: i64, seed: u32) -> Result<Self, SimError> {
        if iterations <= 0 {
            return Err(SimError::InvalidParameters(
                "iterations must be greater than 0".into(),
            ));
        }
        let iterations = u32::try_from(iterations).map_err(|_| {
            SimError::InvalidParameters(format!("iterations {} is too large", iterations))
        })?;

        Ok(Self {
            iterations,
            seed,
            cat_amount: 10,
            node_amount: 60,
            mean_edges: 4.0,
            var_edges: 1.0,
            mean_aggressive: 0.0,
            var_aggressive: 0.1,
            mean_laziness: 0.5,
            var_laziness: 0.05,
        })
    }

    pub fn with_population(mut self, cat_amount: usize, node_amount: usize) -> Self {
        self.cat_amount = cat_amount;
        self.node_amount = node_amount;
        self
    }

    pub fn with_edges(mut self, mean: f64, variance: f64) -> Self {
        self.mean_edges = mean;
        self.var_edges = variance;
        self
    }

    pub fn with_aggressiveness(mut self, mean: f64, variance: f64) -> Self {
        self.mean_aggressive = mean;
        self.var_aggressive = variance;
        self
    }

    pub fn with_laziness(mut self, mean: f64, variance: f64) -> Self {
        self.mean_laziness = mean;
        self.var_laziness = variance;
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of relationships the population will have.
    pub fn relationship_count(&self) -> usize {
        self.cat_amount * self.cat_amount.saturating_sub(1) / 2
    }
}

/// Unvalidated wire form of [`SimulationParameters`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawParameters {
    pub iterations: i64,
    pub seed: u32,
    pub cat_amount: usize,
    pub node_amount: usize,
    pub mean_edges: f64,
    pub var_edges: f64,
    pub mean_aggressive: f64,
    pub var_aggressive: f64,
    pub mean_laziness: f64,
    pub var_laziness: f64,
}

impl TryFrom<RawParameters> for SimulationParameters {
    type Error = SimError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Ok(SimulationParameters::new(raw.iterations, raw.seed)?
            .with_population(raw.cat_amount, raw.node_amount)
            .with_edges(raw.mean_edges, raw.var_edges)
            .with_aggressiveness(raw.mean_aggressive, raw.var_aggressive)
            .with_laziness(raw.mean_laziness, raw.var_laziness))
    }
}

impl From<SimulationParameters> for RawParameters {
    fn from(params: SimulationParameters) -> Self {
        Self {
            iterations: i64::from(params.iterations),
            seed: params.seed,
            cat_amount: params.cat_amount,
            node_amount: params.node_amount,
            mean_edges: params.mean_edges,
            var_edges: params.var_edges,
            mean_aggressive: params.mean_aggressive,
            var_aggressive: params.var_aggressive,
            mean_laziness: params.mean_laziness,
            var_laziness: params.var_laziness,
        }
    }
}
