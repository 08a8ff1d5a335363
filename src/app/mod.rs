//! Headless runner: drives a [`World`] until a tick limit or extinction,
//! reporting stats along the way.

pub mod probe;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use probe::EnvironmentProbe;
use utopia_core::{AppConfig, Metrics, SeededRng, StatsHistory, World};
use utopia_data::{BehaviorState, DeathStatistics, PopulationStats};

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Stop after this many ticks; `None` runs until extinction.
    pub max_ticks: Option<u64>,
    /// Ticks between report lines; 0 disables periodic reports.
    pub report_every: u64,
    /// Emit reports as JSON lines instead of text.
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_ticks: Some(10_000),
            report_every: 100,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub population: usize,
    pub births: u64,
    pub deaths: DeathStatistics,
    pub extinct: bool,
    pub ticks_per_second: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Finished after {} ticks{}",
            self.ticks,
            if self.extinct { " (extinct)" } else { "" }
        )?;
        writeln!(f, "  population  {}", self.population)?;
        writeln!(f, "  births      {}", self.births)?;
        writeln!(
            f,
            "  deaths      {} (starvation {}, old age {}, stress {})",
            self.deaths.total, self.deaths.starvation, self.deaths.old_age, self.deaths.stress
        )?;
        write!(f, "  speed       {:.0} ticks/s", self.ticks_per_second)
    }
}

pub struct App {
    pub world: World,
    pub history: StatsHistory,
    pub metrics: Metrics,
    pub running: bool,
    options: RunOptions,
}

impl App {
    /// Builds the world, folding the probe's temperature into the seed when
    /// one is available.
    pub fn new(
        config: AppConfig,
        seed: Option<u64>,
        probe: &dyn EnvironmentProbe,
        options: RunOptions,
    ) -> Result<Self> {
        let (width, height) = (config.world.width, config.world.height);
        let mut rng = match seed.or(config.world.seed) {
            Some(s) => SeededRng::new(s, width, height),
            None => SeededRng::from_time(width, height),
        };
        if let Some(t) = probe.ambient_temperature() {
            rng.set_environmental_factor(t);
        }
        let world = World::new(config, rng).context("Failed to create world")?;

        Ok(Self {
            world,
            history: StatsHistory::default(),
            metrics: Metrics::new(),
            running: true,
            options,
        })
    }

    /// Advances one tick and records its stats. Clears `running` once the
    /// tick limit is hit or nobody is left.
    pub fn step(&mut self) -> PopulationStats {
        let started = Instant::now();
        self.world.update();
        let stats = self.world.stats();
        self.metrics
            .record_tick(started.elapsed(), stats.population, stats.total_resources);
        for event in self.world.drain_events() {
            if let Ok(line) = event.to_json() {
                tracing::trace!(event = %line, "Live event");
            }
        }
        self.history.record(stats.clone());

        let limit_hit = self.options.max_ticks.is_some_and(|max| stats.tick >= max);
        if limit_hit || stats.population == 0 {
            self.running = false;
        }
        stats
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        if self.options.max_ticks == Some(0) {
            self.running = false;
        }
        while self.running {
            let stats = self.step();
            let every = self.options.report_every;
            if every > 0 && (stats.tick % every == 0 || !self.running) {
                self.report(out, &stats)?;
            }
        }
        let summary = self.summary();
        tracing::info!(
            ticks = summary.ticks,
            population = summary.population,
            extinct = summary.extinct,
            "Run finished"
        );
        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.world.tick(),
            population: self.world.population_count(),
            births: self.world.births(),
            deaths: self.world.deaths().clone(),
            extinct: self.world.population_count() == 0,
            ticks_per_second: self.metrics.throughput(),
        }
    }

    fn report<W: Write>(&self, out: &mut W, stats: &PopulationStats) -> Result<()> {
        if self.options.json {
            let line = serde_json::to_string(stats).context("Failed to encode stats")?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}", format_stats(stats))?;
        }
        Ok(())
    }
}

/// One-line text rendering of a stats sample.
#[must_use]
pub fn format_stats(stats: &PopulationStats) -> String {
    let states: Vec<String> = BehaviorState::ALL
        .iter()
        .map(|s| format!("{}{}", s.symbol(), stats.count(*s)))
        .collect();
    format!(
        "[{:>6}] pop {:>4} | born {:>5} died {:>5} | {} | hunger {:>5.1} energy {:>5.1} stress {:>5.1} | food {:>7.1}",
        stats.tick,
        stats.population,
        stats.births,
        stats.deaths.total,
        states.join(" "),
        stats.avg_hunger,
        stats.avg_energy,
        stats.avg_stress,
        stats.total_resources,
    )
}
