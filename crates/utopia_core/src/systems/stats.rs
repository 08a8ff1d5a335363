use crate::resource::ResourceField;
use std::collections::VecDeque;
use utopia_data::{Agent, DeathStatistics, PopulationStats};

/// Number of recent deaths averaged into `avg_lifespan`.
pub const LIFESPAN_WINDOW: usize = 100;

/// Read-only world state for statistics computation.
pub struct StatsInput<'a> {
    pub tick: u64,
    pub agents: &'a [Agent],
    pub resources: &'a ResourceField,
    pub births: u64,
    pub deaths: &'a DeathStatistics,
    pub recent_lifespans: &'a VecDeque<f64>,
}

/// Derives population-wide summaries. Pure: reads, never mutates.
#[must_use]
pub fn compute_stats(input: &StatsInput<'_>) -> PopulationStats {
    let mut stats = PopulationStats {
        population: input.agents.len(),
        tick: input.tick,
        births: input.births,
        deaths: input.deaths.clone(),
        total_resources: input.resources.total_amount(),
        ..PopulationStats::default()
    };

    if !input.recent_lifespans.is_empty() {
        stats.avg_lifespan =
            input.recent_lifespans.iter().sum::<f64>() / input.recent_lifespans.len() as f64;
    }

    if input.agents.is_empty() {
        return stats;
    }

    let (mut stress, mut hunger, mut energy, mut age) = (0.0, 0.0, 0.0, 0.0);
    for a in input.agents {
        *stats.by_state.entry(a.state).or_insert(0) += 1;
        stress += a.stress();
        hunger += a.hunger();
        energy += a.energy();
        age += a.age;
    }
    let n = input.agents.len() as f64;
    stats.avg_stress = stress / n;
    stats.avg_hunger = hunger / n;
    stats.avg_energy = energy / n;
    stats.avg_age = age / n;
    stats
}

pub fn record_lifespan(window: &mut VecDeque<f64>, age: f64) {
    window.push_back(age);
    if window.len() > LIFESPAN_WINDOW {
        window.pop_front();
    }
}
