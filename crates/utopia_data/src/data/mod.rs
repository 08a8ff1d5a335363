//! Core data structures for the Utopia simulation.

pub mod agent;
pub mod environment;
pub mod resource;
