//! Per-step diagnostic time series.
//!
//! The stepper itself only produces state; energy, entropy and mass are
//! accumulated here as an explicit append-only series owned by the driver
//! and passed into the run loop as the step observer.

use serde::Serialize;

use crate::{
    grid::Mesh1D,
    metrics::{MetricsEvent, MetricsRecorder},
    stepper::{StepObserver, StepRecord},
};

/// Scalar diagnostics for one completed step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepDiagnostics {
    pub step: usize,
    pub time: f64,
    /// ½ Σ E² dx over the spatial mesh.
    pub field_energy: f64,
    /// ½ Σ f v² dx dv over phase space.
    pub kinetic_energy: f64,
    /// -Σ f ln f dx dv, skipping non-positive values of f.
    pub entropy: f64,
    /// Σ f dx dv; conserved exactly by periodic free-streaming advection.
    pub mass: f64,
    pub max_field: f64,
}

/// Append-only diagnostics recorder; implements [`StepObserver`].
pub struct Diagnostics<'a> {
    x_mesh: Mesh1D,
    v_mesh: Mesh1D,
    series: Vec<StepDiagnostics>,
    metrics: Option<&'a MetricsRecorder>,
}

impl<'a> Diagnostics<'a> {
    pub fn new(x_mesh: Mesh1D, v_mesh: Mesh1D, metrics: Option<&'a MetricsRecorder>) -> Self {
        Self {
            x_mesh,
            v_mesh,
            series: Vec::new(),
            metrics,
        }
    }

    pub fn series(&self) -> &[StepDiagnostics] {
        &self.series
    }

    fn measure(&self, record: &StepRecord<'_>) -> StepDiagnostics {
        let dx = self.x_mesh.step;
        let dv = self.v_mesh.step;
        let cell = dx * dv;

        let field_energy = 0.5 * record.field.iter().map(|&e| e * e).sum::<f64>() * dx;
        let max_field = record
            .field
            .iter()
            .fold(0.0_f64, |acc, &e| acc.max(e.abs()));

        let v_points = self.v_mesh.points();
        let mut kinetic_energy = 0.0;
        let mut entropy = 0.0;
        let mut mass = 0.0;
        for row in 0..record.distribution.rows() {
            for (j, value) in record.distribution.row(row).iter().enumerate() {
                let f = value.re;
                mass += f * cell;
                kinetic_energy += 0.5 * f * v_points[j] * v_points[j] * cell;
                if f > 0.0 {
                    entropy -= f * f.ln() * cell;
                }
            }
        }

        StepDiagnostics {
            step: record.step,
            time: record.time,
            field_energy,
            kinetic_energy,
            entropy,
            mass,
            max_field,
        }
    }
}

impl StepObserver for Diagnostics<'_> {
    fn on_step(&mut self, record: &StepRecord<'_>) {
        let sample = self.measure(record);
        if let Some(recorder) = self.metrics {
            recorder.emit(MetricsEvent::StepDiagnostics {
                step: sample.step,
                time: sample.time,
                field_energy: sample.field_energy,
                kinetic_energy: sample.kinetic_energy,
                entropy: sample.entropy,
                mass: sample.mass,
                max_field: sample.max_field,
            });
        }
        self.series.push(sample);
    }
}
