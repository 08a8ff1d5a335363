//! Movement: heading-persistent wandering with boundary reflection, or
//! straight-line pursuit of a target.

use crate::rng::SeededRng;
use utopia_data::{Agent, BehaviorState, Point};

/// Chance per wandering tick of picking a fresh heading.
pub const TURN_CHANCE: f64 = 0.05;

/// Units per tick before time scaling.
#[must_use]
pub fn speed_for(state: BehaviorState) -> f64 {
    match state {
        BehaviorState::Exploring => 1.0,
        BehaviorState::Eating => 1.5,
        BehaviorState::Mating => 1.2,
        BehaviorState::Resting => 0.0,
    }
}

/// Moves one agent for one tick inside a `width` x `height` viewport.
pub fn move_agent(agent: &mut Agent, rng: &mut SeededRng, width: f64, height: f64, time_scale: f64) {
    let step = speed_for(agent.state) * time_scale;
    if step <= 0.0 {
        return;
    }
    match agent.target {
        Some(target) => pursue(agent, target, step),
        None => wander(agent, rng, step, width, height),
    }
}

fn pursue(agent: &mut Agent, target: Point, step: f64) {
    let d = agent.position.distance(&target);
    if d <= step {
        agent.position = target;
        return;
    }
    agent.position.x += (target.x - agent.position.x) / d * step;
    agent.position.y += (target.y - agent.position.y) / d * step;
}

fn wander(agent: &mut Agent, rng: &mut SeededRng, step: f64, width: f64, height: f64) {
    if rng.next_f64() < TURN_CHANCE {
        agent.heading = rng.random_heading();
    }
    agent.position.x += agent.heading.x * step;
    agent.position.y += agent.heading.y * step;
    reflect(&mut agent.position.x, &mut agent.heading.x, width);
    reflect(&mut agent.position.y, &mut agent.heading.y, height);
}

/// Mirrors a coordinate that left `[0, bound]` back inside and turns the
/// heading component around.
fn reflect(pos: &mut f64, dir: &mut f64, bound: f64) {
    if *pos < 0.0 {
        *pos = -*pos;
        *dir = dir.abs();
    } else if *pos > bound {
        *pos = 2.0 * bound - *pos;
        *dir = -dir.abs();
    }
    *pos = pos.clamp(0.0, bound);
}
