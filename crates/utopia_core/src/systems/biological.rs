//! Physiological decay and crowding stress.

use crate::config::MetabolismConfig;
use utopia_data::Agent;

/// Ages every agent and advances hunger and energy decay, all scaled by
/// `time_scale`.
pub fn decay_vitals(agents: &mut [Agent], config: &MetabolismConfig, time_scale: f64) {
    for agent in agents.iter_mut() {
        agent.age += config.age_rate * time_scale;
        agent.adjust_hunger(config.hunger_rate * time_scale);
        agent.adjust_energy(-config.energy_decay * time_scale);
    }
}

/// Counts, for every agent, the others inside the crowding radius (using
/// positions as they stand when called) and raises stress in proportion.
///
/// The count is kept on the agent so the later relief pass knows who felt
/// no pressure this tick.
pub fn accumulate_crowding(agents: &mut [Agent], config: &MetabolismConfig, time_scale: f64) {
    let radius = config.crowding_radius;
    let counts: Vec<u32> = agents
        .iter()
        .enumerate()
        .map(|(i, a)| {
            agents
                .iter()
                .enumerate()
                .filter(|(j, b)| *j != i && a.position.distance(&b.position) < radius)
                .count() as u32
        })
        .collect();

    for (agent, count) in agents.iter_mut().zip(counts) {
        agent.crowding = count;
        if count > 0 {
            agent.adjust_stress(f64::from(count) * config.stress_per_neighbor * time_scale);
        }
    }
}

/// Lets stress fall for agents that recorded no crowding this tick.
pub fn relieve_stress(agents: &mut [Agent], config: &MetabolismConfig, time_scale: f64) {
    for agent in agents.iter_mut().filter(|a| a.crowding == 0) {
        agent.adjust_stress(-config.stress_decay * time_scale);
    }
}
