//! Paraboloid Puck entry point
//!
//! Samples one trajectory and prints it as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use paraboloid_puck::{PuckError, Settings, sample_trajectory};

/// Trace a frictionless puck on a rotating paraboloid
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Effective rotation rate (rad/s)
    #[arg(long, allow_hyphen_values = true)]
    omega: Option<f64>,

    /// Initial x velocity
    #[arg(long, allow_hyphen_values = true)]
    u0: Option<f64>,

    /// Initial y velocity (accepted, currently has no effect)
    #[arg(long, allow_hyphen_values = true)]
    v0: Option<f64>,

    /// Initial x displacement
    #[arg(long, allow_hyphen_values = true)]
    x0: Option<f64>,

    /// Rim radius
    #[arg(long)]
    radius: Option<f64>,

    /// Seconds between samples
    #[arg(long)]
    dt: Option<f64>,

    /// Last sample time (seconds)
    #[arg(long)]
    duration: Option<f64>,

    /// Print the effective settings and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings, PuckError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => {
                log::info!("Using default settings");
                Settings::default()
            }
        };

        if let Some(omega) = self.omega {
            settings.motion.omega = omega;
        }
        if let Some(u0) = self.u0 {
            settings.motion.u0 = u0;
        }
        if let Some(v0) = self.v0 {
            settings.motion.v0 = v0;
        }
        if let Some(x0) = self.x0 {
            settings.motion.x0 = x0;
        }
        if let Some(radius) = self.radius {
            settings.rim_radius = radius;
        }
        if let Some(dt) = self.dt {
            settings.time_step = dt;
        }
        if let Some(duration) = self.duration {
            settings.max_duration = duration;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn run(args: &Args) -> Result<(), PuckError> {
    let settings = args.settings()?;

    if args.print_config {
        println!("{}", settings.to_json_string()?);
        return Ok(());
    }

    let trace = sample_trajectory(&settings)?;
    match trace.left_rim_at {
        Some(t) => log::info!("{} samples, left the bowl at t={t:.3}s", trace.samples.len()),
        None => log::info!("{} samples, stayed inside the bowl", trace.samples.len()),
    }

    println!("{}", serde_json::to_string_pretty(&trace)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
