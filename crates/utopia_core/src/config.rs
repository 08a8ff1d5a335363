//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section has defaults, so a file only needs
//! the values it wants to change.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! initial_population = 40
//! resource_capacity = 1000.0
//! birth_rate = 0.3
//! time_scale = 1.0
//! resource_spots = 5
//! resource_regeneration_rate = 0.1
//!
//! [world]
//! width = 800.0
//! height = 600.0
//! seed = 42
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The externally supplied run parameters. Immutable for a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    pub initial_population: usize,
    /// Total capacity, divided evenly among the resource spots.
    pub resource_capacity: f64,
    /// Probability that a mating encounter produces offspring.
    pub birth_rate: f64,
    pub time_scale: f64,
    pub resource_spots: usize,
    pub resource_regeneration_rate: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_population: 40,
            resource_capacity: 1000.0,
            birth_rate: 0.3,
            time_scale: 1.0,
            resource_spots: 5,
            resource_regeneration_rate: 0.1,
        }
    }
}

/// Viewport bounds and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Fixed seed; `None` derives one from the wall clock.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: None,
        }
    }
}

/// Per-tick physiological rates. All except `max_age` are scaled by the
/// time-scale multiplier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    pub age_rate: f64,
    pub hunger_rate: f64,
    pub energy_decay: f64,
    pub stress_per_neighbor: f64,
    pub stress_decay: f64,
    pub crowding_radius: f64,
    pub max_age: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            age_rate: 1.0,
            hunger_rate: 0.2,
            energy_decay: 0.1,
            stress_per_neighbor: 0.05,
            stress_decay: 0.2,
            crowding_radius: 50.0,
            max_age: 2000.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    pub mating_distance: f64,
    pub partner_min_energy: f64,
    /// Energy each parent pays, multiplied by the time-scale.
    pub energy_cost: f64,
    /// Offspring land within this many units of the parents' midpoint per axis.
    pub offspring_jitter: f64,
    /// Chance per failed courtship tick of giving up and exploring again.
    pub abandon_chance: f64,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            mating_distance: 30.0,
            partner_min_energy: 30.0,
            energy_cost: 10.0,
            offspring_jitter: 20.0,
            abandon_chance: 0.01,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationParameters,
    pub world: WorldConfig,
    pub metabolism: MetabolismConfig,
    pub reproduction: ReproductionConfig,
}

fn ensure_rate(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { field, value })
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeValue { field, value })
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found. The engine calls this before it
    /// creates any resource or agent.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.initial_population == 0 {
            return Err(ConfigError::InvalidPopulation(sim.initial_population));
        }
        if sim.resource_spots == 0 {
            return Err(ConfigError::InvalidSpotCount(sim.resource_spots));
        }
        if !(sim.resource_capacity.is_finite() && sim.resource_capacity > 0.0) {
            return Err(ConfigError::InvalidCapacity(sim.resource_capacity));
        }
        if !(sim.time_scale.is_finite() && sim.time_scale > 0.0) {
            return Err(ConfigError::InvalidTimeScale(sim.time_scale));
        }
        ensure_rate("birth_rate", sim.birth_rate)?;
        ensure_rate("resource_regeneration_rate", sim.resource_regeneration_rate)?;

        let world = &self.world;
        if !(world.width.is_finite() && world.width > 0.0)
            || !(world.height.is_finite() && world.height > 0.0)
        {
            return Err(ConfigError::InvalidBounds {
                width: world.width,
                height: world.height,
            });
        }

        let m = &self.metabolism;
        ensure_non_negative("age_rate", m.age_rate)?;
        ensure_non_negative("hunger_rate", m.hunger_rate)?;
        ensure_non_negative("energy_decay", m.energy_decay)?;
        ensure_non_negative("stress_per_neighbor", m.stress_per_neighbor)?;
        ensure_non_negative("stress_decay", m.stress_decay)?;
        ensure_non_negative("crowding_radius", m.crowding_radius)?;
        ensure_non_negative("max_age", m.max_age)?;

        let r = &self.reproduction;
        ensure_non_negative("mating_distance", r.mating_distance)?;
        ensure_non_negative("partner_min_energy", r.partner_min_energy)?;
        ensure_non_negative("energy_cost", r.energy_cost)?;
        ensure_non_negative("offspring_jitter", r.offspring_jitter)?;
        ensure_rate("abandon_chance", r.abandon_chance)?;

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but does not parse or validate is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Digest of every setting that influences the random stream or the
    /// rules, so two runs can be compared for reproducibility.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hex::encode(hasher.finalize())
    }
}
