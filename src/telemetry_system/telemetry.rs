use crate::control::propulsion::DerivedParameters;
use crate::trajectory_system::flight::{Termination, Trajectory};
use crate::trajectory_system::kinematics::TrajectorySample;

/// Headline numbers of a flight, as the height and velocity plots annotate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub max_height: f64,
    pub max_height_time: f64,
    pub max_velocity: f64,
    pub max_velocity_time: f64,
    pub burnout_time: f64,
    pub final_time: f64,
    pub termination: Termination,
    pub degenerate: bool,
}

impl FlightSummary {
    pub fn from_trajectory(trajectory: &Trajectory) -> Option<Self> {
        let final_time = trajectory.last()?.time_s;
        let highest = Self::first_max_by(&trajectory.samples, |sample| sample.height_m)?;
        let fastest = Self::first_max_by(&trajectory.samples, |sample| sample.velocity_m_s)?;

        Some(FlightSummary {
            max_height: highest.height_m,
            max_height_time: highest.time_s,
            max_velocity: fastest.velocity_m_s,
            max_velocity_time: fastest.time_s,
            burnout_time: trajectory.burn_time_s,
            final_time,
            termination: trajectory.termination,
            degenerate: trajectory.is_degenerate(),
        })
    }

    // Earliest sample wins ties, like argmax.
    fn first_max_by<F>(samples: &[TrajectorySample], key: F) -> Option<&TrajectorySample>
    where
        F: Fn(&TrajectorySample) -> f64,
    {
        samples.iter().fold(None, |best, sample| match best {
            Some(current) if key(current) >= key(sample) => Some(current),
            _ => Some(sample),
        })
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn render(&self) -> String {
        let outcome = match (self.termination, self.degenerate) {
            (Termination::Timeout, _) => "time cap reached before ground contact (unreliable)",
            (Termination::GroundImpact, true) => "never left the ground (unreliable)",
            (Termination::GroundImpact, false) => "ground impact",
        };
        format!(
            "Flight Simulation Summary:\n\
             - Max Height: {} at t={:.0}s\n\
             - Max Velocity: {:.0} m/s at t={:.0}s\n\
             - Burn End: {:.0}s\n\
             - Simulated Until: {:.1}s ({})\n",
            Self::format_altitude(self.max_height),
            self.max_height_time,
            self.max_velocity,
            self.max_velocity_time,
            self.burnout_time,
            self.final_time,
            outcome
        )
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (index, digit) in rounded.chars().enumerate() {
        if index > 0 && (rounded.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0.0 && rounded != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn render_parameters(params: &DerivedParameters) -> String {
    format!(
        "Rocket Parameters ({}):\n\
         \n\
         Exhaust Velocity: {:.1} m/s\n\
         \n\
         Mass Distribution:\n\
         - Dry Mass: {} kg ({:.1}%)\n\
         - Payload Mass: {} kg ({:.1}%)\n\
         - Propellant Mass: {} kg ({:.1}%)\n\
         - Total Initial Mass: {} kg\n\
         - Final Mass: {} kg\n\
         \n\
         Performance:\n\
         - Delta-V: {} m/s ({:.2} km/s)\n\
         - Mass Flow Rate: {:.1} kg/s\n\
         - Initial Thrust-to-Weight Ratio: {:.2}\n\
         - Final Thrust-to-Weight Ratio: {:.2}\n\
         - Estimated Tank Volume: {:.1} m³\n",
        params.propellant,
        params.exhaust_velocity,
        group_thousands(params.dry_mass_kg),
        params.dry_mass_percent,
        group_thousands(params.payload_mass_kg),
        params.payload_percent,
        group_thousands(params.propellant_mass),
        params.propellant_percent,
        group_thousands(params.total_initial_mass),
        group_thousands(params.final_mass),
        group_thousands(params.delta_v),
        params.delta_v / 1000.0,
        params.mass_flow_rate,
        params.initial_twr,
        params.final_twr,
        params.tank_volume,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConstants;
    use crate::control::propulsion::compute;
    use crate::control::rocket::RocketConfig;

    fn sample(time_s: f64, height_m: f64, velocity_m_s: f64) -> TrajectorySample {
        TrajectorySample {
            time_s,
            height_m,
            velocity_m_s,
            mass_kg: 100.0,
        }
    }

    fn trajectory(samples: Vec<TrajectorySample>, termination: Termination) -> Trajectory {
        Trajectory {
            samples,
            burn_samples: 2,
            burn_time_s: 0.1,
            termination,
        }
    }

    #[test]
    fn test_summary_picks_maxima() {
        let flight = trajectory(
            vec![
                sample(0.0, 0.0, 0.0),
                sample(0.1, 5.0, 40.0),
                sample(0.2, 9.0, 30.0),
                sample(0.3, 9.0, -5.0),
                sample(0.4, 0.0, -20.0),
            ],
            Termination::GroundImpact,
        );
        let summary = FlightSummary::from_trajectory(&flight).unwrap();

        assert_eq!(summary.max_height, 9.0);
        assert_eq!(summary.max_height_time, 0.2);
        assert_eq!(summary.max_velocity, 40.0);
        assert_eq!(summary.max_velocity_time, 0.1);
        assert_eq!(summary.final_time, 0.4);
        assert_eq!(summary.burnout_time, 0.1);
        assert!(!summary.degenerate);
    }

    #[test]
    fn test_summary_of_empty_trajectory() {
        let flight = trajectory(Vec::new(), Termination::GroundImpact);
        assert!(FlightSummary::from_trajectory(&flight).is_none());
    }

    #[test]
    fn test_render_flags_timeout() {
        let flight = trajectory(
            vec![sample(0.0, 0.0, 0.0), sample(0.1, 2_500.0, 10.0)],
            Termination::Timeout,
        );
        let text = FlightSummary::from_trajectory(&flight).unwrap().render();
        assert!(text.contains("Max Height: 2.50 km"), "{}", text);
        assert!(text.contains("unreliable"), "{}", text);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(45_000.0), "45,000");
        assert_eq!(group_thousands(382_290.88), "382,291");
        assert_eq!(group_thousands(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn test_render_parameters() {
        let params = compute(&RocketConfig::default(), &SimulationConstants::default()).unwrap();
        let text = render_parameters(&params);
        assert!(text.contains("Kerosene/LOX"));
        assert!(text.contains("Exhaust Velocity: 3335.4 m/s"), "{}", text);
        assert!(text.contains("Final Mass: 45,000 kg"), "{}", text);
        assert!(text.contains("Delta-V: 7,136 m/s (7.14 km/s)"), "{}", text);
    }
}
