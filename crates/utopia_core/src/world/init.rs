use super::World;
use crate::lifecycle;
use crate::resource::ResourceField;

impl World {
    /// Places the resource spots and the founders. Resources come first so
    /// the random stream is consumed in a fixed order.
    pub(super) fn populate(&mut self) {
        let params = self.config.simulation.clone();
        self.resources = ResourceField::generate(&params, &mut self.rng);
        self.agents = (0..params.initial_population)
            .map(|_| {
                let id = self.ids.next_id();
                lifecycle::create_agent(id, self.tick, &mut self.rng)
            })
            .collect();

        tracing::info!(
            population = self.agents.len(),
            spots = self.resources.len(),
            capacity = params.resource_capacity,
            fingerprint = %self.config.fingerprint(),
            "World populated"
        );
    }

    /// Full restart with the same configuration: fresh resources and
    /// founders, counters and the id sequence reset. The random stream
    /// carries on, so a restart does not replay the previous run.
    pub fn restart(&mut self) {
        self.tick = 0;
        self.deaths = Default::default();
        self.ids = Default::default();
        self.events.clear();
        self.recent_lifespans.clear();
        self.populate();
    }
}
