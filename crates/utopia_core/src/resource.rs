//! Resource field: the fixed set of regenerating deposits.

use crate::config::SimulationParameters;
use crate::rng::SeededRng;
use utopia_data::{Agent, Point, Resource};

/// Multiplier applied to `regeneration_rate * time_scale` each tick.
pub const REGENERATION_SCALE: f64 = 1.0;
/// Spots are kept this far from the viewport edges.
pub const RESOURCE_PADDING: f64 = 50.0;
/// An agent closer than this to a deposit can eat from it.
pub const CONSUMPTION_RANGE: f64 = 5.0;
/// Most an agent takes from a deposit in one bite.
pub const BITE_SIZE: f64 = 20.0;
/// Energy gained per unit of food eaten.
pub const FOOD_ENERGY_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Default)]
pub struct ResourceField {
    resources: Vec<Resource>,
}

impl ResourceField {
    /// Places `resource_spots` full deposits, splitting the total capacity
    /// evenly. Callers validate the parameters first, so the spot count is
    /// never zero here.
    pub fn generate(params: &SimulationParameters, rng: &mut SeededRng) -> Self {
        let spots = params.resource_spots.max(1);
        let capacity = params.resource_capacity / spots as f64;
        let resources = (0..spots)
            .map(|_| {
                let position = rng.random_position(RESOURCE_PADDING);
                Resource::new(position, capacity, params.resource_regeneration_rate)
            })
            .collect();
        Self { resources }
    }

    #[must_use]
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// `amount = min(max_amount, amount + rate * K * time_scale)` for every spot.
    pub fn regenerate_all(&mut self, time_scale: f64) {
        for r in &mut self.resources {
            r.replenish(r.regeneration_rate() * REGENERATION_SCALE * time_scale);
        }
    }

    /// Index of the nearest non-empty deposit. Ties go to the one stored first.
    #[must_use]
    pub fn find_nearest(&self, point: &Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, r) in self.resources.iter().enumerate() {
            if r.is_depleted() {
                continue;
            }
            let d = point.distance(&r.position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Takes `min(requested, amount)` from deposit `index` and returns it.
    pub fn consume(&mut self, index: usize, requested: f64) -> f64 {
        self.resources
            .get_mut(index)
            .map_or(0.0, |r| r.take(requested))
    }

    /// Whether `point` is strictly inside eating range of non-empty deposit `index`.
    #[must_use]
    pub fn in_reach(&self, index: usize, point: &Point) -> bool {
        self.resources
            .get(index)
            .is_some_and(|r| !r.is_depleted() && r.position.distance(point) < CONSUMPTION_RANGE)
    }

    /// One bite from deposit `index`: hunger drops by the amount taken and
    /// energy rises by [`FOOD_ENERGY_RATIO`] of it. Returns the amount taken.
    pub fn feed(&mut self, index: usize, agent: &mut Agent) -> f64 {
        let taken = self.consume(index, BITE_SIZE);
        agent.adjust_hunger(-taken);
        agent.adjust_energy(taken * FOOD_ENERGY_RATIO);
        taken
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Resource> {
        self.resources.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Resource> {
        self.resources.get_mut(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.resources.iter().map(Resource::amount).sum()
    }
}
