//! Prescribed external driving fields.
//!
//! The stepper superposes an externally imposed field on the self-consistent
//! one after every coupled advection step. Generators are pluggable behind
//! the [`ExternalDrive`] trait; the TOML-facing [`DriveSpec`] maps a config
//! section to a concrete generator.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

pub trait ExternalDrive {
    /// Evaluate the drive at every spatial sample for step index `step`
    /// (physical time `step * dt`). The returned array has one value per
    /// spatial point; only its real part enters the total field.
    fn evaluate(&self, x_points: &[f64], step: usize, dt: f64) -> Vec<Complex64>;
}

/// No external drive; the plasma evolves self-consistently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDrive;

impl ExternalDrive for ZeroDrive {
    fn evaluate(&self, x_points: &[f64], _step: usize, _dt: f64) -> Vec<Complex64> {
        vec![Complex64::ZERO; x_points.len()]
    }
}

/// A traveling-wave pump `a · cos(k x - ω t)` with `k = 2π · mode / length`.
#[derive(Debug, Clone, Copy)]
pub struct TravelingWaveDrive {
    pub amplitude: f64,
    pub wavenumber: f64,
    pub frequency: f64,
}

impl ExternalDrive for TravelingWaveDrive {
    fn evaluate(&self, x_points: &[f64], step: usize, dt: f64) -> Vec<Complex64> {
        let t = step as f64 * dt;
        x_points
            .iter()
            .map(|&x| {
                let phase = self.wavenumber * x - self.frequency * t;
                Complex64::new(self.amplitude * phase.cos(), 0.0)
            })
            .collect()
    }
}

/// TOML-facing drive selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriveSpec {
    #[default]
    None,
    TravelingWave {
        amplitude: f64,
        /// Integer mode number; the wavenumber is 2π · mode / domain length.
        mode: usize,
        frequency: f64,
    },
}

impl DriveSpec {
    pub fn build(&self, domain_length: f64) -> Box<dyn ExternalDrive> {
        match *self {
            DriveSpec::None => Box::new(ZeroDrive),
            DriveSpec::TravelingWave {
                amplitude,
                mode,
                frequency,
            } => Box::new(TravelingWaveDrive {
                amplitude,
                wavenumber: 2.0 * PI * mode as f64 / domain_length,
                frequency,
            }),
        }
    }
}
