//! Performance metrics and logging setup.
//!
//! The engine logs through `tracing`; binaries and tests pick the
//! subscriber.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Ticks between throughput log lines.
pub const REPORT_INTERVAL: u64 = 1000;

/// Tick timing for a single run.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    population: usize,
    busiest: Duration,
    total: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            population: 0,
            busiest: Duration::ZERO,
            total: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, population: usize, resources: f64) {
        self.tick_count += 1;
        self.population = population;
        self.total += duration;
        self.busiest = self.busiest.max(duration);

        if self.tick_count % REPORT_INTERVAL == 0 {
            tracing::info!(
                tick = self.tick_count,
                population,
                resources,
                mean_us = self.mean_tick().as_micros() as u64,
                busiest_us = self.busiest.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn mean_tick(&self) -> Duration {
        match u32::try_from(self.tick_count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.tick_count as f64),
        }
    }

    #[must_use]
    pub fn busiest_tick(&self) -> Duration {
        self.busiest
    }

    /// Ticks per wall-clock second since creation.
    #[must_use]
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.tick_count as f64 / secs
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a fmt subscriber. `RUST_LOG` wins over `default_level` when set.
/// Later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
