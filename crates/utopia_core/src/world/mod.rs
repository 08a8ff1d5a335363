//! The engine instance: owns the population, the resource field, the death
//! counters and the random stream, and advances them one tick at a time.
//!
//! Collaborators only ever see shared borrows or owned copies of this state.

use crate::config::AppConfig;
use crate::error::Result;
use crate::lifecycle::IdSequence;
use crate::resource::ResourceField;
use crate::rng::SeededRng;
use crate::systems::stats::{self, StatsInput};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utopia_data::{
    Agent, AgentId, DeathStatistics, LiveEvent, Point, PopulationStats, Resource, Sex,
};

mod init;
mod update;

/// Undrained events kept by default; older ones are dropped first.
pub const EVENT_LOG_CAPACITY: usize = 4096;

pub struct World {
    config: AppConfig,
    tick: u64,
    agents: Vec<Agent>,
    resources: ResourceField,
    deaths: DeathStatistics,
    ids: IdSequence,
    rng: SeededRng,
    events: VecDeque<LiveEvent>,
    event_capacity: usize,
    recent_lifespans: VecDeque<f64>,
}

/// Owned copy of everything a renderer or dashboard reads in one frame.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub agents: Vec<Agent>,
    pub resources: Vec<Resource>,
    pub stats: PopulationStats,
}

impl World {
    /// Validates `config`, then places resources and the initial population
    /// using `rng`. Fold any environmental factor into `rng` beforehand.
    pub fn new(config: AppConfig, mut rng: SeededRng) -> Result<Self> {
        config.validate()?;
        rng.set_bounds(config.world.width, config.world.height);

        let mut world = Self {
            config,
            tick: 0,
            agents: Vec::new(),
            resources: ResourceField::default(),
            deaths: DeathStatistics::default(),
            ids: IdSequence::new(),
            rng,
            events: VecDeque::new(),
            event_capacity: EVENT_LOG_CAPACITY,
            recent_lifespans: VecDeque::with_capacity(stats::LIFESPAN_WINDOW),
        };
        world.populate();
        Ok(world)
    }

    /// Like [`World::new`] but places only the resources. Agents come from
    /// [`World::spawn_agent`]; `initial_population` is still validated.
    pub fn empty(config: AppConfig, rng: SeededRng) -> Result<Self> {
        let mut world = Self::new(config, rng)?;
        world.agents.clear();
        world.ids = IdSequence::new();
        Ok(world)
    }

    /// Seeds from `seed`, or from `config.world.seed`, or from the clock.
    pub fn with_seed(config: AppConfig, seed: Option<u64>) -> Result<Self> {
        let (width, height) = (config.world.width, config.world.height);
        let rng = match seed.or(config.world.seed) {
            Some(s) => SeededRng::new(s, width, height),
            None => SeededRng::from_time(width, height),
        };
        Self::new(config, rng)
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current population in storage order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        self.resources.as_slice()
    }

    #[must_use]
    pub fn population_count(&self) -> usize {
        self.agents.len()
    }

    /// All-time created agents, the initial population included.
    #[must_use]
    pub fn births(&self) -> u64 {
        self.ids.issued()
    }

    #[must_use]
    pub fn deaths(&self) -> &DeathStatistics {
        &self.deaths
    }

    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        stats::compute_stats(&StatsInput {
            tick: self.tick,
            agents: &self.agents,
            resources: &self.resources,
            births: self.ids.issued(),
            deaths: &self.deaths,
            recent_lifespans: &self.recent_lifespans,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            agents: self.agents.clone(),
            resources: self.resources.as_slice().to_vec(),
            stats: self.stats(),
        }
    }

    /// Births and deaths recorded since the last drain, oldest first.
    /// Only the most recent `event_capacity` are kept between drains.
    pub fn drain_events(&mut self) -> Vec<LiveEvent> {
        self.events.drain(..).collect()
    }

    /// Bounds the undrained event log. Zero disables recording.
    pub fn set_event_capacity(&mut self, capacity: usize) {
        self.event_capacity = capacity;
        self.trim_events();
    }

    fn record_events(&mut self, events: Vec<LiveEvent>) {
        self.events.extend(events);
        self.trim_events();
    }

    fn trim_events(&mut self) {
        let excess = self.events.len().saturating_sub(self.event_capacity);
        if excess > 0 {
            self.events.drain(..excess);
        }
    }

    /// Resizes the viewport. Later placement and reflection use the new
    /// bounds; agents left outside are pulled back to the edge.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            tracing::warn!(width, height, "Ignoring invalid viewport");
            return;
        }
        self.config.world.width = width;
        self.config.world.height = height;
        self.rng.set_bounds(width, height);
        for a in &mut self.agents {
            a.position.x = a.position.x.clamp(0.0, width);
            a.position.y = a.position.y.clamp(0.0, height);
        }
    }

    /// Adds an agent at `(x, y)` with a fresh id. Intended for scenario
    /// setup by tests and tools.
    pub fn spawn_agent(&mut self, x: f64, y: f64, sex: Sex) -> AgentId {
        let id = self.ids.next_id();
        let heading = self.rng.random_heading();
        self.agents
            .push(Agent::new(id, Point::new(x, y), sex, self.tick, heading));
        self.deaths.total = self.ids.issued() - self.agents.len() as u64;
        id
    }

    /// Mutable access to one agent for scenario setup. Identity, sex and
    /// parentage stay read-only through the `Agent` API.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    /// Mutable access to one resource spot for scenario setup.
    pub fn resource_mut(&mut self, index: usize) -> Option<&mut Resource> {
        self.resources.get_mut(index)
    }
}
