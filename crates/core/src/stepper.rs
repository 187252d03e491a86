//! Strang-split time integration of the Vlasov–Ampère system.
//!
//! Each step advances f(x, v) by dt with second-order symmetric splitting:
//! a half-step of v-advection with the field frozen, a full x-advection step
//! that simultaneously rebuilds the self-consistent field, then a second
//! half-step of v-advection using the updated field. A one-directional
//! splitting would be first-order only and would leave the field and the
//! density inconsistent at the end of the step.

use std::time::Instant;

use num_complex::Complex64;

use crate::{
    advection::SpectralAdvector,
    backend::SpectralBackend,
    drive::ExternalDrive,
    field::{transpose_into, PhaseSpace},
    grid::Mesh1D,
    poisson,
};

/// Fully resolved simulation setup consumed by the stepper.
#[derive(Debug, Clone, Copy)]
pub struct SimulationJob {
    pub x_mesh: Mesh1D,
    pub v_mesh: Mesh1D,
    pub total_time: f64,
    pub steps: usize,
}

impl SimulationJob {
    pub fn dt(&self) -> f64 {
        self.total_time / self.steps as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Stepping,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Verbose,
}

impl Verbosity {
    fn enabled(self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Per-step state handed to the observer after each full step.
pub struct StepRecord<'a> {
    /// Zero-based index of the step just completed.
    pub step: usize,
    /// Physical time after the step, (step + 1) · dt.
    pub time: f64,
    /// Total field E_self + E_external on the spatial mesh.
    pub field: &'a [f64],
    /// Updated distribution in the x-rows layout.
    pub distribution: &'a PhaseSpace,
    /// External drive used during the step.
    pub drive: &'a [Complex64],
}

pub trait StepObserver {
    fn on_step(&mut self, record: &StepRecord<'_>);
}

/// Observer that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _record: &StepRecord<'_>) {}
}

pub struct VlasovStepper<B: SpectralBackend<Buffer = PhaseSpace>> {
    backend: B,
    x_mesh: Mesh1D,
    v_mesh: Mesh1D,
    x_advector: SpectralAdvector,
    v_advector: SpectralAdvector,
    f_xrows: PhaseSpace,
    f_vrows: PhaseSpace,
    field: Vec<f64>,
    drive: Box<dyn ExternalDrive>,
    drive_values: Vec<Complex64>,
    x_points: Vec<f64>,
    dt: f64,
    steps: usize,
    completed: usize,
    state: RunState,
}

impl<B: SpectralBackend<Buffer = PhaseSpace>> VlasovStepper<B> {
    /// Set up the stepper from an initial distribution in the x-rows layout.
    ///
    /// The initial self-consistent field is solved from the initial density
    /// so that the first velocity half-step sees E(t = 0).
    pub fn new(
        backend: B,
        job: &SimulationJob,
        initial: PhaseSpace,
        drive: Box<dyn ExternalDrive>,
    ) -> Self {
        assert!(job.steps >= 1, "at least one step required");
        assert!(job.total_time > 0.0, "total time must be positive");
        assert_eq!(initial.rows(), job.x_mesh.n, "initial rows must match x mesh");
        assert_eq!(initial.cols(), job.v_mesh.n, "initial cols must match v mesh");

        let density = poisson::compute_density(&job.v_mesh, &initial);
        let field = poisson::compute_field(&backend, &job.x_mesh, &density);

        let mut f_vrows = PhaseSpace::zeros(job.v_mesh.n, job.x_mesh.n);
        transpose_into(&initial, &mut f_vrows);

        Self {
            backend,
            x_mesh: job.x_mesh,
            v_mesh: job.v_mesh,
            x_advector: SpectralAdvector::new(job.x_mesh),
            v_advector: SpectralAdvector::new(job.v_mesh),
            f_xrows: initial,
            f_vrows,
            field,
            drive,
            drive_values: vec![Complex64::ZERO; job.x_mesh.n],
            x_points: job.x_mesh.points(),
            dt: job.dt(),
            steps: job.steps,
            completed: 0,
            state: RunState::Idle,
        }
    }

    /// Advance one full Strang-split step.
    pub fn step(&mut self) {
        assert!(
            self.completed < self.steps,
            "all configured steps already taken"
        );
        self.state = RunState::Stepping;

        let half = 0.5 * self.dt;
        self.drive_values = self.drive.evaluate(&self.x_points, self.completed, self.dt);

        // Half v-advection with the field frozen at the start of the step.
        self.v_advector
            .transport_half_step(&self.backend, &mut self.f_xrows, &self.field, half);

        transpose_into(&self.f_xrows, &mut self.f_vrows);

        // Full x-advection; rebuilds the field from the advected density.
        self.x_advector.advect_and_update_field(
            &self.backend,
            &mut self.f_vrows,
            &mut self.field,
            &self.v_mesh,
            self.dt,
            &self.drive_values,
        );

        transpose_into(&self.f_vrows, &mut self.f_xrows);

        // Half v-advection with the updated field.
        self.v_advector
            .transport_half_step(&self.backend, &mut self.f_xrows, &self.field, half);

        // Keep the layouts exact transposes at the step boundary.
        transpose_into(&self.f_xrows, &mut self.f_vrows);

        self.completed += 1;
        if self.completed == self.steps {
            self.state = RunState::Done;
        }
    }

    /// Run the configured number of steps, handing each step's state to the
    /// observer.
    pub fn run(&mut self, observer: &mut dyn StepObserver, verbosity: Verbosity) {
        let run_timer = Instant::now();
        let log_every = (self.steps / 10).max(1);
        while self.state != RunState::Done {
            self.step();
            let record = StepRecord {
                step: self.completed - 1,
                time: self.completed as f64 * self.dt,
                field: &self.field,
                distribution: &self.f_xrows,
                drive: &self.drive_values,
            };
            observer.on_step(&record);
            if verbosity.enabled() && self.completed % log_every == 0 {
                let max_field = self.field.iter().fold(0.0_f64, |acc, &e| acc.max(e.abs()));
                eprintln!(
                    "[step] {:>5}/{} t={:.4} max|E|={:.3e}",
                    self.completed,
                    self.steps,
                    self.completed as f64 * self.dt,
                    max_field
                );
            }
        }
        if verbosity.enabled() {
            eprintln!(
                "[done] {} steps in {:.2?}",
                self.steps,
                run_timer.elapsed()
            );
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn completed_steps(&self) -> usize {
        self.completed
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn x_mesh(&self) -> Mesh1D {
        self.x_mesh
    }

    pub fn v_mesh(&self) -> Mesh1D {
        self.v_mesh
    }

    /// Total field on the spatial mesh.
    pub fn field(&self) -> &[f64] {
        &self.field
    }

    /// Distribution in the x-rows layout (indexed by (x, v)).
    pub fn distribution(&self) -> &PhaseSpace {
        &self.f_xrows
    }

    /// Distribution in the v-rows layout (indexed by (v, x)).
    pub fn distribution_vrows(&self) -> &PhaseSpace {
        &self.f_vrows
    }
}
