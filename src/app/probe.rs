//! Ambient temperature probe used to perturb the random seed.
//!
//! Sensors are optional hardware. Every failure mode collapses to `None`
//! and the run continues with the plain seed.

use sysinfo::Components;

pub trait EnvironmentProbe {
    /// Degrees Celsius, if a sensor could be read.
    fn ambient_temperature(&self) -> Option<f64>;
}

/// Reads the first component sensor reporting a plausible temperature.
#[derive(Debug, Default, Clone, Copy)]
pub struct SensorProbe;

impl EnvironmentProbe for SensorProbe {
    fn ambient_temperature(&self) -> Option<f64> {
        let components = Components::new_with_refreshed_list();
        let reading = components
            .iter()
            .map(|c| (c.label().to_string(), f64::from(c.temperature())))
            .find(|(_, t)| plausible(*t));
        match reading {
            Some((label, t)) => {
                tracing::info!(sensor = %label, temperature = t, "Environmental sensor read");
                Some(t)
            }
            None => {
                tracing::info!("No temperature sensor available, using plain seed");
                None
            }
        }
    }
}

/// Probe for `--no-probe` and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl EnvironmentProbe for NoProbe {
    fn ambient_temperature(&self) -> Option<f64> {
        None
    }
}

/// A fixed reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub f64);

impl EnvironmentProbe for FixedProbe {
    fn ambient_temperature(&self) -> Option<f64> {
        plausible(self.0).then_some(self.0)
    }
}

fn plausible(t: f64) -> bool {
    t.is_finite() && (-60.0..=150.0).contains(&t)
}
