use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rocket_calculator::*;

#[derive(Parser)]
#[command(name = "rocket-calc")]
#[command(about = "Single-stage rocket calculator and vertical flight simulator")]
#[command(version)]
struct Cli {
    /// TOML scenario with [rocket] and [constants] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Engine thrust in kN
    #[arg(long)]
    thrust_kn: Option<f64>,

    /// Specific impulse in s
    #[arg(long)]
    isp: Option<f64>,

    /// Burn time in s
    #[arg(long)]
    burn_time: Option<f64>,

    /// Dry mass in kg
    #[arg(long)]
    dry_mass: Option<f64>,

    /// Payload mass in kg
    #[arg(long)]
    payload_mass: Option<f64>,

    /// Propellant: "LH2/LOX", "Methane/LOX" or "Kerosene/LOX"
    #[arg(long)]
    propellant: Option<PropellantType>,

    /// Use the selected propellant's typical specific impulse
    #[arg(long)]
    typical_isp: bool,
}

impl Cli {
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => load_scenario(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => Scenario::default(),
        };

        let rocket = &mut scenario.rocket;
        if let Some(thrust_kn) = self.thrust_kn {
            rocket.thrust_n = thrust_kn * 1_000.0;
        }
        if let Some(isp) = self.isp {
            rocket.specific_impulse_s = isp;
        }
        if let Some(burn_time) = self.burn_time {
            rocket.burn_time_s = burn_time;
        }
        if let Some(dry_mass) = self.dry_mass {
            rocket.dry_mass_kg = dry_mass;
        }
        if let Some(payload_mass) = self.payload_mass {
            rocket.payload_mass_kg = payload_mass;
        }
        if let Some(propellant) = self.propellant {
            rocket.propellant = propellant;
        }
        if self.typical_isp {
            *rocket = rocket.with_typical_isp();
        }

        Ok(scenario)
    }
}

fn main() -> Result<()> {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let cli = Cli::parse();
    let Scenario { rocket, constants } = cli.scenario()?;

    let params = compute(&rocket, &constants)?;
    println!("{}", render_parameters(&params));

    let trajectory = simulate(&rocket, &params, &constants)?;
    info!(
        "Simulated {} samples ({} powered)",
        trajectory.samples.len(),
        trajectory.burn_samples
    );

    match FlightSummary::from_trajectory(&trajectory) {
        Some(summary) => {
            if summary.degenerate {
                warn!("Trajectory is degenerate; treat the flight results as unreliable");
            }
            println!("{}", summary.render());
        }
        None => warn!("Simulation produced no samples"),
    }

    Ok(())
}
