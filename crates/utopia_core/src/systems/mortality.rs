//! Mortality sweep.

use crate::config::MetabolismConfig;
use utopia_data::{Agent, DeathCause, DeathStatistics, LiveEvent, VITAL_MAX};

/// Every cause of death `agent` currently satisfies, in a fixed order.
///
/// Old age means the age has gone past `max_age`; starvation and stress
/// mean the vital has reached its ceiling.
#[must_use]
pub fn death_causes(agent: &Agent, config: &MetabolismConfig) -> Vec<DeathCause> {
    let mut causes = Vec::new();
    if agent.age > config.max_age {
        causes.push(DeathCause::OldAge);
    }
    if agent.hunger() >= VITAL_MAX {
        causes.push(DeathCause::Starvation);
    }
    if agent.stress() >= VITAL_MAX {
        causes.push(DeathCause::Stress);
    }
    causes
}

/// Removes every agent with at least one cause of death, bumping one counter
/// per satisfied cause. Survivors keep their relative order.
///
/// `deaths.total` is left to the caller, which derives it from the
/// population delta.
pub fn mortality_sweep(
    agents: &mut Vec<Agent>,
    deaths: &mut DeathStatistics,
    config: &MetabolismConfig,
    tick: u64,
) -> Vec<LiveEvent> {
    let mut events = Vec::new();
    agents.retain(|agent| {
        let causes = death_causes(agent, config);
        if causes.is_empty() {
            return true;
        }
        for cause in &causes {
            deaths.record(*cause);
        }
        tracing::debug!(
            id = %agent.id(),
            age = agent.age,
            causes = ?causes,
            tick,
            "Agent died"
        );
        events.push(LiveEvent::Death {
            id: agent.id(),
            age: agent.age,
            tick,
            causes,
            x: agent.position.x,
            y: agent.position.y,
        });
        false
    });
    events
}
