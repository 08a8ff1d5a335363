use super::World;
use crate::systems::reproduction::ReproductionContext;
use crate::systems::{action, behavior, biological, mortality, reproduction, stats};
use utopia_data::{BehaviorState, LiveEvent};

impl World {
    /// Advances one tick at the configured time scale.
    pub fn update(&mut self) {
        self.step(self.config.simulation.time_scale);
    }

    /// Advances one tick at `time_scale`. A non-finite or non-positive
    /// scale falls back to the configured one.
    pub fn step(&mut self, time_scale: f64) {
        let ts = if time_scale.is_finite() && time_scale > 0.0 {
            time_scale
        } else {
            tracing::warn!(time_scale, "Invalid time scale, using configured value");
            self.config.simulation.time_scale
        };
        self.tick += 1;
        let population_before = self.agents.len();

        self.resources.regenerate_all(ts);

        let metabolism = &self.config.metabolism;
        biological::decay_vitals(&mut self.agents, metabolism, ts);
        biological::accumulate_crowding(&mut self.agents, metabolism, ts);

        self.transition_pass();
        self.movement_pass(ts);

        let mut events = {
            let mut ctx = ReproductionContext {
                config: &self.config.reproduction,
                birth_rate: self.config.simulation.birth_rate,
                time_scale: ts,
                tick: self.tick,
                resources: &self.resources,
                ids: &mut self.ids,
                rng: &mut self.rng,
            };
            reproduction::mating_pass(&mut self.agents, &mut ctx)
        };
        let births = events.len();

        self.feeding_pass();
        biological::relieve_stress(&mut self.agents, &self.config.metabolism, ts);

        let died = mortality::mortality_sweep(
            &mut self.agents,
            &mut self.deaths,
            &self.config.metabolism,
            self.tick,
        );
        for event in &died {
            if let LiveEvent::Death { age, .. } = event {
                stats::record_lifespan(&mut self.recent_lifespans, *age);
            }
        }
        self.deaths.total = self.ids.issued() - self.agents.len() as u64;

        tracing::trace!(
            tick = self.tick,
            before = population_before,
            after = self.agents.len(),
            births,
            deaths = died.len(),
            "Tick complete"
        );
        events.extend(died);
        self.record_events(events);
    }

    /// Eating agents chase whichever spot is nearest now and take a bite
    /// when they have arrived; then every agent runs its state machine, so a
    /// bite that sates an agent releases it in the same tick.
    fn transition_pass(&mut self) {
        for agent in &mut self.agents {
            let nearest = self.resources.find_nearest(&agent.position);
            let nearest_pos = nearest
                .and_then(|i| self.resources.get(i))
                .map(|r| r.position);
            if agent.state == BehaviorState::Eating {
                agent.target = nearest_pos;
                if let Some(index) = nearest {
                    if self.resources.in_reach(index, &agent.position) {
                        self.resources.feed(index, agent);
                    }
                }
            }
            behavior::transition(agent, nearest_pos);
        }
    }

    fn movement_pass(&mut self, ts: f64) {
        let (width, height) = (self.config.world.width, self.config.world.height);
        for agent in &mut self.agents {
            action::move_agent(agent, &mut self.rng, width, height, ts);
        }
    }

    /// Any agent standing on its nearest non-empty spot takes a bite,
    /// whatever its state.
    fn feeding_pass(&mut self) {
        for agent in &mut self.agents {
            let Some(index) = self.resources.find_nearest(&agent.position) else {
                continue;
            };
            if self.resources.in_reach(index, &agent.position) {
                self.resources.feed(index, agent);
            }
        }
    }
}
