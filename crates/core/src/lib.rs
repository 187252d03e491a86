//! Core math, physics, and APIs for the 1D1V Vlasov–Ampère spectral solver.

pub mod advection;
pub mod backend;
pub mod diagnostics;
pub mod drive;
pub mod field;
pub mod grid;
pub mod ics;
pub mod io;
pub mod metrics;
pub mod poisson;
pub mod stepper;


#[cfg(test)]
mod _tests_field;
#[cfg(test)]
mod _tests_grid;
#[cfg(test)]
mod _tests_io;
#[cfg(test)]
mod _tests_poisson;
