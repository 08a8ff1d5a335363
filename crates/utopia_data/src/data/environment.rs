use super::agent::{AgentId, BehaviorState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why an agent was removed by the mortality sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    Starvation,
    OldAge,
    Stress,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeathCause::Starvation => "starvation",
            DeathCause::OldAge => "old age",
            DeathCause::Stress => "stress",
        })
    }
}

/// Cause-tagged death counters for one run.
///
/// The cause counters are bumped once per satisfied cause, so an agent dying
/// of two causes counts twice there. `total` is set from the population delta
/// (`births - population`) and is not their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathStatistics {
    pub starvation: u64,
    pub old_age: u64,
    pub stress: u64,
    pub total: u64,
}

impl DeathStatistics {
    pub fn record(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::Starvation => self.starvation += 1,
            DeathCause::OldAge => self.old_age += 1,
            DeathCause::Stress => self.stress += 1,
        }
    }

    /// Sum of the per-cause counters.
    #[must_use]
    pub fn cause_sum(&self) -> u64 {
        self.starvation + self.old_age + self.stress
    }
}

/// Aggregated population-wide summary, derived on demand from engine state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PopulationStats {
    /// Number of living agents.
    pub population: usize,
    /// Ticks advanced since the run started.
    pub tick: u64,
    /// All-time created agents, initial population included.
    pub births: u64,
    pub deaths: DeathStatistics,
    /// Living agents per behavioural state; every state is present.
    pub by_state: BTreeMap<BehaviorState, usize>,
    pub avg_stress: f64,
    pub avg_hunger: f64,
    pub avg_energy: f64,
    pub avg_age: f64,
    /// Mean age at death over the most recent deaths.
    pub avg_lifespan: f64,
    /// Sum of the current amount over all resource spots.
    pub total_resources: f64,
}

impl Default for PopulationStats {
    fn default() -> Self {
        Self {
            population: 0,
            tick: 0,
            births: 0,
            deaths: DeathStatistics::default(),
            by_state: BehaviorState::ALL.iter().map(|s| (*s, 0)).collect(),
            avg_stress: 0.0,
            avg_hunger: 0.0,
            avg_energy: 0.0,
            avg_age: 0.0,
            avg_lifespan: 0.0,
            total_resources: 0.0,
        }
    }
}

impl PopulationStats {
    #[must_use]
    pub fn count(&self, state: BehaviorState) -> usize {
        self.by_state.get(&state).copied().unwrap_or(0)
    }
}

/// Births and deaths as they happen, for loggers and dashboards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    Birth {
        id: AgentId,
        parent_ids: Option<(AgentId, AgentId)>,
        tick: u64,
        x: f64,
        y: f64,
    },
    Death {
        id: AgentId,
        age: f64,
        tick: u64,
        causes: Vec<DeathCause>,
        x: f64,
        y: f64,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            LiveEvent::Birth { tick, .. } | LiveEvent::Death { tick, .. } => *tick,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_list_every_state() {
        let stats = PopulationStats::default();
        assert_eq!(stats.by_state.len(), 4);
        assert_eq!(stats.count(BehaviorState::Mating), 0);
    }

    #[test]
    fn test_record_double_cause() {
        let mut deaths = DeathStatistics::default();
        deaths.record(DeathCause::Starvation);
        deaths.record(DeathCause::Stress);
        assert_eq!(deaths.cause_sum(), 2);
        assert_eq!(deaths.total, 0);
    }

    #[test]
    fn test_stats_json_uses_state_names() {
        let json = serde_json::to_string(&PopulationStats::default()).unwrap();
        assert!(json.contains("\"exploring\":0"));
        assert!(json.contains("\"old_age\":0"));
    }

    #[test]
    fn test_death_event_json() {
        let event = LiveEvent::Death {
            id: AgentId(4),
            age: 12.0,
            tick: 9,
            causes: vec![DeathCause::OldAge],
            x: 1.0,
            y: 2.0,
        };
        let json = event.to_json().unwrap();
        assert!(json.contains("\"type\":\"death\""));
        assert!(json.contains("\"old_age\""));
        assert_eq!(event.tick(), 9);
    }
}
