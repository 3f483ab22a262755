//! Run Records
//!
//! Wraps one simulation as a job: it is created pending, marked running,
//! and ends finished with its result document or failed with the error
//! message. A failed run never carries partial metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cats_report::SimulationReport;

use crate::config::TuningConfig;
use crate::error::{SimError, SimResult};
use crate::output;
use crate::params::SimulationParameters;
use crate::simulation::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Finished,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub params: SimulationParameters,
    pub status: RunStatus,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub result: Option<SimulationReport>,
}

impl RunRecord {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            id: Uuid::new_v4(),
            params,
            status: RunStatus::Pending,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            error_message: None,
            result: None,
        }
    }

    pub fn mark_running(&mut self) {
        self.status = RunStatus::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_finished(&mut self, result: SimulationReport) {
        self.status = RunStatus::Finished;
        self.finished_at = Some(Utc::now());
        self.result = Some(result);
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.status = RunStatus::Failed;
        self.finished_at = Some(Utc::now());
        self.error_message = Some(message.into());
        self.result = None;
    }

    pub fn is_finished(&self) -> bool {
        self.status == RunStatus::Finished
    }
}

fn simulate(params: &SimulationParameters, tuning: TuningConfig) -> SimResult<SimulationReport> {
    let mut sim = Simulation::with_tuning(params.clone(), tuning);
    sim.generate_initial_state()?;
    sim.run()?;
    output::report(&sim).ok_or(SimError::NotInitialized)
}

/// Execute a full run and return its record
pub fn execute(params: SimulationParameters, tuning: TuningConfig) -> RunRecord {
    let mut record = RunRecord::new(params);
    record.mark_running();
    tracing::info!(run = %record.id, seed = record.params.seed(), "Simulation started");

    match simulate(&record.params, tuning) {
        Ok(report) => {
            record.mark_finished(report);
            tracing::info!(run = %record.id, "Simulation finished");
        }
        Err(e) => {
            tracing::error!(run = %record.id, error = %e, "Simulation failed");
            record.mark_failed(e.to_string());
        }
    }
    record
}
