//! Configuration file parsing and validation.
//!
//! The main type is `JobConfig`, loadable from TOML and convertible into
//! the `SimulationJob` consumed by the stepper.
//!
//! # File Format
//!
//! ```toml
//! [space]
//! start = 0.0
//! stop = 12.566370614359172   # 4π
//! n = 32
//!
//! [velocity]
//! start = -6.0
//! stop = 6.0
//! n = 64
//!
//! total_time = 10.0
//! steps = 100
//!
//! [perturbation]
//! epsilon = 0.001
//! mode = 1
//!
//! [drive]
//! kind = "none"
//!
//! [metrics]
//! enabled = false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{drive::DriveSpec, grid::Mesh1D, metrics::MetricsConfig, stepper::SimulationJob};

/// One axis of the phase-space domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DomainSpec {
    pub start: f64,
    pub stop: f64,
    pub n: usize,
}

/// Cosine perturbation of the initial Maxwellian.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PerturbationSpec {
    pub epsilon: f64,
    pub mode: usize,
}

impl Default for PerturbationSpec {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            mode: 1,
        }
    }
}

/// Configuration for a simulation run (loadable from TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Spatial domain, periodic.
    pub space: DomainSpec,
    /// Velocity domain, bounded.
    pub velocity: DomainSpec,
    /// Total simulated time; dt is total_time / steps.
    pub total_time: f64,
    /// Number of timesteps.
    pub steps: usize,
    /// Initial perturbation of the Maxwellian.
    #[serde(default)]
    pub perturbation: PerturbationSpec,
    /// External drive waveform.
    #[serde(default)]
    pub drive: DriveSpec,
    /// Metrics recording.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
    #[error("invalid time parameters: {0}")]
    InvalidTime(String),
}

impl JobConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, domain) in [("space", &self.space), ("velocity", &self.velocity)] {
            if domain.n == 0 {
                return Err(ConfigError::InvalidDomain(format!(
                    "{name} mesh must have at least one point"
                )));
            }
            if domain.stop <= domain.start {
                return Err(ConfigError::InvalidDomain(format!(
                    "{name} extent must be positive (start={}, stop={})",
                    domain.start, domain.stop
                )));
            }
        }
        if self.steps == 0 {
            return Err(ConfigError::InvalidTime(
                "steps must be at least 1".to_string(),
            ));
        }
        if self.total_time <= 0.0 {
            return Err(ConfigError::InvalidTime(format!(
                "total_time must be positive (got {})",
                self.total_time
            )));
        }
        Ok(())
    }

    pub fn to_job(&self) -> Result<SimulationJob, ConfigError> {
        self.validate()?;
        Ok(SimulationJob {
            x_mesh: Mesh1D::new(self.space.start, self.space.stop, self.space.n),
            v_mesh: Mesh1D::new(self.velocity.start, self.velocity.stop, self.velocity.n),
            total_time: self.total_time,
            steps: self.steps,
        })
    }
}
