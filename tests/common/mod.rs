pub mod macros;

use utopia_core::config::AppConfig;
use utopia_core::{SeededRng, World};
use utopia_data::{Agent, AgentId, BehaviorState, Point, Sex};

type AgentMod = Box<dyn FnOnce(&mut Agent)>;
type WorldMod = Box<dyn FnOnce(&mut World)>;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    seed: u64,
    agents: Vec<(f64, f64, Sex, Vec<AgentMod>)>,
    world_mods: Vec<WorldMod>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// Starts with no agents and one resource spot of 100 that never
    /// regrows.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.simulation.resource_spots = 1;
        config.simulation.resource_capacity = 100.0;
        config.simulation.resource_regeneration_rate = 0.0;
        Self {
            config,
            seed: 42,
            agents: Vec::new(),
            world_mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(self, x: f64, y: f64, sex: Sex) -> Self {
        self.with_agent_where(x, y, sex, |_| {})
    }

    pub fn with_agent_where<F>(mut self, x: f64, y: f64, sex: Sex, setup: F) -> Self
    where
        F: FnOnce(&mut Agent) + 'static,
    {
        let setup: AgentMod = Box::new(setup);
        self.agents.push((x, y, sex, vec![setup]));
        self
    }

    /// Empties every resource spot.
    pub fn without_food(mut self) -> Self {
        self.world_mods.push(Box::new(|world| {
            for i in 0..world.resources().len() {
                if let Some(r) = world.resource_mut(i) {
                    r.set_amount(0.0);
                }
            }
        }));
        self
    }

    /// Moves the first resource spot to `(x, y)`.
    pub fn with_food_at(mut self, x: f64, y: f64) -> Self {
        self.world_mods.push(Box::new(move |world| {
            if let Some(r) = world.resource_mut(0) {
                r.position = Point::new(x, y);
            }
        }));
        self
    }

    pub fn build(self) -> (World, Vec<AgentId>) {
        let (w, h) = (self.config.world.width, self.config.world.height);
        let rng = SeededRng::new(self.seed, w, h);
        let mut world = World::empty(self.config, rng).expect("Failed to create world in test builder");

        for modifier in self.world_mods {
            modifier(&mut world);
        }

        let mut ids = Vec::new();
        for (x, y, sex, setups) in self.agents {
            let id = world.spawn_agent(x, y, sex);
            if let Some(agent) = world.agent_mut(id) {
                for setup in setups {
                    setup(agent);
                }
            }
            ids.push(id);
        }
        (world, ids)
    }
}

/// Puts an agent into courtship the way the state machine would.
#[allow(dead_code)]
pub fn courting(agent: &mut Agent) {
    agent.state = BehaviorState::Mating;
    agent.target = None;
}

#[allow(dead_code)]
pub fn run(world: &mut World, ticks: u64) {
    for _ in 0..ticks {
        world.update();
    }
}
