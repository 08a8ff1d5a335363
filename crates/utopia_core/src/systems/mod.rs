//! Per-tick simulation systems, run by [`crate::world::World::update`] in
//! a fixed order, each over the population in storage order.

pub mod action;
pub mod behavior;
pub mod biological;
pub mod mortality;
pub mod reproduction;
pub mod stats;
