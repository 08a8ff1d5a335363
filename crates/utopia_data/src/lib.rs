//! # Utopia Data
//!
//! Plain data shared by the engine and its collaborators: agents, resource
//! deposits, death counters, population statistics and live events.

pub mod data;

pub use data::agent::{Agent, AgentId, BehaviorState, Point, Sex, NEWBORN_GRACE_TICKS, VITAL_MAX};
pub use data::environment::{DeathCause, DeathStatistics, LiveEvent, PopulationStats};
pub use data::resource::Resource;
