use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use vlasov1d_backend_cpu::CpuBackend;
use vlasov1d_core::{
    diagnostics::Diagnostics,
    ics,
    io::JobConfig,
    metrics::MetricsEvent,
    stepper::{Verbosity, VlasovStepper},
};

#[derive(Parser, Debug)]
#[command(name = "vlasov1d", about = "1D1V Vlasov-Ampere spectral solver CLI")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: PathBuf,
    /// Path to CSV output (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Suppress progress logs (stderr)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if !cli.quiet {
        eprintln!("[cli] loading config {}", cli.config.display());
    }
    let raw = fs::read_to_string(&cli.config)?;
    let config: JobConfig = toml::from_str(&raw)?;
    let job = config.to_job()?;
    let metrics_recorder = config.metrics.build_recorder()?;

    let f0 = ics::landau(
        &job.x_mesh,
        &job.v_mesh,
        config.perturbation.epsilon,
        config.perturbation.mode,
    );
    let drive = config.drive.build(job.x_mesh.extent());

    if !cli.quiet {
        eprintln!(
            "[setup] grid={}x{} x=[{}, {}) v=[{}, {}) steps={} dt={:.6}",
            job.x_mesh.n,
            job.v_mesh.n,
            job.x_mesh.start,
            job.x_mesh.stop,
            job.v_mesh.start,
            job.v_mesh.stop,
            job.steps,
            job.dt()
        );
        eprintln!(
            "[setup] perturbation epsilon={} mode={} drive={:?}",
            config.perturbation.epsilon, config.perturbation.mode, config.drive
        );
    }
    if let Some(recorder) = metrics_recorder.as_ref() {
        recorder.emit(MetricsEvent::RunStart {
            backend: "cpu_rustfft",
            grid_nx: job.x_mesh.n,
            grid_nv: job.v_mesh.n,
            steps: job.steps,
            dt: job.dt(),
            total_time: job.total_time,
        });
    }

    let run_timer = Instant::now();
    let mut stepper = VlasovStepper::new(CpuBackend::new(), &job, f0, drive);
    let mut diagnostics = Diagnostics::new(job.x_mesh, job.v_mesh, metrics_recorder.as_ref());
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::Verbose
    };
    stepper.run(&mut diagnostics, verbosity);

    if let Some(recorder) = metrics_recorder.as_ref() {
        recorder.emit(MetricsEvent::RunDone {
            steps: job.steps,
            duration_ms: run_timer.elapsed().as_secs_f64() * 1000.0,
        });
    }

    emit_csv(&diagnostics, cli.output.as_deref())?;
    if !cli.quiet {
        if let Some(path) = cli.output {
            eprintln!(
                "wrote {} rows to {}",
                diagnostics.series().len(),
                path.display()
            );
        } else {
            eprintln!("wrote {} rows to stdout", diagnostics.series().len());
        }
    }
    Ok(())
}

fn emit_csv(diagnostics: &Diagnostics<'_>, dest: Option<&Path>) -> io::Result<()> {
    let mut writer: Box<dyn Write> = match dest {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    writeln!(
        writer,
        "step,time,field_energy,kinetic_energy,entropy,mass,max_field"
    )?;
    for sample in diagnostics.series() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            sample.step,
            sample.time,
            sample.field_energy,
            sample.kinetic_energy,
            sample.entropy,
            sample.mass,
            sample.max_field
        )?;
    }
    writer.flush()
}
