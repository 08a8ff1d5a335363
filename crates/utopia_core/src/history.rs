//! Bounded history of population samples for charts.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utopia_data::PopulationStats;

pub const DEFAULT_HISTORY_CAPACITY: usize = 600;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsHistory {
    capacity: usize,
    samples: VecDeque<PopulationStats>,
}

impl Default for StatsHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl StatsHistory {
    /// A zero capacity is bumped to one so `latest` stays meaningful.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a sample, evicting the oldest one when full.
    pub fn record(&mut self, stats: PopulationStats) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(stats);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&PopulationStats> {
        self.samples.back()
    }

    /// `(tick, population)` pairs, oldest first.
    #[must_use]
    pub fn population_series(&self) -> Vec<(u64, usize)> {
        self.samples.iter().map(|s| (s.tick, s.population)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopulationStats> {
        self.samples.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tick: u64, population: usize) -> PopulationStats {
        PopulationStats {
            tick,
            population,
            ..PopulationStats::default()
        }
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = StatsHistory::with_capacity(3);
        for t in 0..5 {
            history.record(sample(t, t as usize * 10));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.population_series(), vec![(2, 20), (3, 30), (4, 40)]);
        assert_eq!(history.latest().map(|s| s.tick), Some(4));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = StatsHistory::with_capacity(0);
        history.record(sample(1, 5));
        history.record(sample(2, 6));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.latest().map(|s| s.population), Some(6));
    }

    #[test]
    fn test_empty_history() {
        let history = StatsHistory::default();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }
}
