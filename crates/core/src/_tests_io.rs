#![cfg(test)]

use std::f64::consts::PI;

use num_complex::Complex64;

use super::drive::{DriveSpec, ExternalDrive};
use super::io::{ConfigError, JobConfig};

const FULL_CONFIG: &str = r#"
total_time = 10.0
steps = 100

[space]
start = 0.0
stop = 12.566370614359172
n = 32

[velocity]
start = -6.0
stop = 6.0
n = 64

[perturbation]
epsilon = 0.001
mode = 1

[drive]
kind = "traveling_wave"
amplitude = 0.01
mode = 1
frequency = 1.4

[metrics]
enabled = false
"#;

#[test]
fn full_config_parses_and_builds_a_job() {
    let config: JobConfig = toml::from_str(FULL_CONFIG).expect("config should parse");
    let job = config.to_job().expect("config should validate");

    assert_eq!(job.x_mesh.n, 32);
    assert_eq!(job.v_mesh.n, 64);
    assert!((job.dt() - 0.1).abs() < 1e-12);
    assert!((config.perturbation.epsilon - 0.001).abs() < 1e-15);
}

#[test]
fn optional_sections_default() {
    let minimal = r#"
total_time = 1.0
steps = 10

[space]
start = 0.0
stop = 1.0
n = 8

[velocity]
start = -1.0
stop = 1.0
n = 8
"#;
    let config: JobConfig = toml::from_str(minimal).expect("config should parse");

    assert_eq!(config.perturbation.epsilon, 0.0);
    assert_eq!(config.perturbation.mode, 1);
    assert!(matches!(config.drive, DriveSpec::None));
    assert!(!config.metrics.enabled);
}

#[test]
fn zero_steps_are_rejected() {
    let mut config: JobConfig = toml::from_str(FULL_CONFIG).unwrap();
    config.steps = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTime(_))));
}

#[test]
fn reversed_domain_is_rejected() {
    let mut config: JobConfig = toml::from_str(FULL_CONFIG).unwrap();
    config.velocity.stop = config.velocity.start;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDomain(_))
    ));
}

#[test]
fn negative_total_time_is_rejected() {
    let mut config: JobConfig = toml::from_str(FULL_CONFIG).unwrap();
    config.total_time = -1.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTime(_))));
}

#[test]
fn traveling_wave_drive_evaluates_the_waveform() {
    let spec = DriveSpec::TravelingWave {
        amplitude: 0.5,
        mode: 1,
        frequency: 2.0,
    };
    let length = 2.0 * PI;
    let drive = spec.build(length);

    let x = [0.0, PI / 2.0, PI];
    let dt = 0.25;
    let step = 2; // t = 0.5
    let values = drive.evaluate(&x, step, dt);

    for (&xi, value) in x.iter().zip(&values) {
        let expected = 0.5 * (xi - 2.0 * 0.5).cos();
        let got: Complex64 = *value;
        assert!(
            (got.re - expected).abs() < 1e-14 && got.im == 0.0,
            "x={xi}: expected {expected}, got {got}"
        );
    }
}

#[test]
fn zero_drive_is_identically_zero() {
    let drive = DriveSpec::None.build(1.0);
    let values = drive.evaluate(&[0.0, 0.5], 3, 0.1);
    assert!(values.iter().all(|&v| v == Complex64::ZERO));
}
