//! # Utopia Core
//!
//! The simulation engine for Utopia, a small artificial society of agents
//! that wander, forage, rest, court and die on a flat 2-D field.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Validated configuration loaded from TOML
//! - A seeded mulberry32 random stream
//! - Resource deposits with regeneration
//! - Per-tick systems (biological decay, behavior, movement, reproduction, mortality)
//! - Population statistics and a bounded stats history
//!
//! ## Example
//!
//! ```
//! use utopia_core::config::AppConfig;
//! use utopia_core::World;
//!
//! let mut world = World::with_seed(AppConfig::default(), Some(42)).unwrap();
//! for _ in 0..10 {
//!     world.update();
//! }
//! assert_eq!(world.stats().tick, 10);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Configuration error types
pub mod error;
/// Bounded population history for charts
pub mod history;
/// Agent creation and id allocation
pub mod lifecycle;
/// Tick timing and logging setup
pub mod metrics;
/// Resource deposits and their placement
pub mod resource;
/// Seeded mulberry32 random stream
pub mod rng;
/// Per-tick simulation systems
pub mod systems;
/// The tick scheduler and its owned state
pub mod world;

pub use config::AppConfig;
pub use error::ConfigError;
pub use history::StatsHistory;
pub use metrics::{init_logging, Metrics};
pub use rng::SeededRng;
pub use world::{World, WorldSnapshot};
