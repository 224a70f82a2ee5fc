//! imufuse CLI - normalize motion-sensor telemetry exports
//!
//! Commands:
//! - gopro: convert a single-file action-camera export
//! - pilotguru: convert a three-file driving-recorder export
//! - generic: re-emit (and optionally trim) an already-normalized document
//! - inspect: summarize a normalized document

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use imufuse::{
    convert_generic_file, convert_gopro_file, convert_pilotguru_file, ConvertError,
    TelemetrySource, IMUFUSE_VERSION,
};

/// imufuse - motion-sensor telemetry converter
#[derive(Parser)]
#[command(name = "imufuse")]
#[command(version = IMUFUSE_VERSION)]
#[command(about = "Normalize camera and IMU telemetry exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GoPro telemetry export
    Gopro {
        /// Raw telemetry JSON from the camera export
        #[arg(short, long)]
        input: PathBuf,

        /// Normalized output path
        #[arg(short, long)]
        output: PathBuf,

        /// Seconds to cut from both ends of every stream
        #[arg(long, default_value_t = 0.0)]
        skip_seconds: f64,
    },

    /// Convert a PilotGuru driving-recorder export
    Pilotguru {
        /// Accelerations JSON
        #[arg(long)]
        accel: PathBuf,

        /// Rotations JSON
        #[arg(long)]
        gyro: PathBuf,

        /// Camera frames JSON
        #[arg(long)]
        camera: PathBuf,

        /// Normalized output path
        #[arg(short, long)]
        output: PathBuf,

        /// Seconds to cut from both ends of every stream
        #[arg(long, default_value_t = 0.0)]
        skip_seconds: f64,
    },

    /// Re-emit an already-normalized document
    Generic {
        /// Normalized telemetry JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,

        /// Seconds to cut from both ends of every stream
        #[arg(long, default_value_t = 0.0)]
        skip_seconds: f64,
    },

    /// Summarize a normalized document
    Inspect {
        /// Normalized telemetry JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    match cli.command {
        Commands::Gopro {
            input,
            output,
            skip_seconds,
        } => convert_gopro_file(input, output, skip_seconds),

        Commands::Pilotguru {
            accel,
            gyro,
            camera,
            output,
            skip_seconds,
        } => convert_pilotguru_file(accel, gyro, camera, output, skip_seconds),

        Commands::Generic {
            input,
            output,
            skip_seconds,
        } => convert_generic_file(input, output, skip_seconds),

        Commands::Inspect { input, json } => cmd_inspect(input, json),
    }
}

fn cmd_inspect(input: PathBuf, json: bool) -> Result<(), ConvertError> {
    let source = TelemetrySource::Generic { telemetry: input };
    let telemetry = source.import(0.0)?;

    let report = InspectReport {
        samples: telemetry.len(),
        duration_seconds: telemetry.duration_seconds(),
        sample_rate_hz: telemetry.sample_rate_hz(),
        camera_fps: telemetry.camera_fps,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Telemetry Summary");
        println!("=================");
        println!("Samples:     {}", report.samples);
        match report.duration_seconds {
            Some(d) => println!("Duration:    {d:.3} s"),
            None => println!("Duration:    n/a"),
        }
        match report.sample_rate_hz {
            Some(r) => println!("Sample rate: {r:.1} Hz"),
            None => println!("Sample rate: n/a"),
        }
        println!("Camera fps:  {}", report.camera_fps);
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct InspectReport {
    samples: usize,
    duration_seconds: Option<f64>,
    sample_rate_hz: Option<f64>,
    camera_fps: f64,
}
