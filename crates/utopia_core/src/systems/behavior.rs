//! Behaviour state machine.
//!
//! Each state has its own transition function; [`transition`] dispatches on
//! the current state. Mating has no outgoing edge here: courtship success and
//! abandonment are resolved by the reproduction system.

use utopia_data::{Agent, BehaviorState, Point};

/// Above this hunger an exploring agent goes looking for food.
pub const HUNGER_SEEK: f64 = 70.0;
/// Below this hunger an eating agent is satisfied.
pub const HUNGER_SATED: f64 = 30.0;
/// Below this energy an exploring agent rests.
pub const ENERGY_TIRED: f64 = 20.0;
/// Above this energy a resting agent gets up.
pub const ENERGY_RESTED: f64 = 80.0;
/// Energy regained per resting tick.
pub const REST_GAIN: f64 = 3.0;
/// An exploring agent courts when hunger is below this...
pub const MATING_HUNGER_MAX: f64 = 50.0;
/// ...and energy above this.
pub const MATING_ENERGY_MIN: f64 = 50.0;

/// Applies one tick of state logic. `nearest_food` is the position of the
/// nearest non-empty resource, if any. Returns the resulting state.
pub fn transition(agent: &mut Agent, nearest_food: Option<Point>) -> BehaviorState {
    match agent.state {
        BehaviorState::Exploring => explore(agent, nearest_food),
        BehaviorState::Eating => eat(agent),
        BehaviorState::Resting => rest(agent),
        BehaviorState::Mating => {}
    }
    agent.state
}

/// Guards are checked in priority order: food, rest, courtship.
fn explore(agent: &mut Agent, nearest_food: Option<Point>) {
    if agent.hunger() > HUNGER_SEEK {
        if let Some(food) = nearest_food {
            enter(agent, BehaviorState::Eating, Some(food));
            return;
        }
    }
    if agent.energy() < ENERGY_TIRED {
        enter(agent, BehaviorState::Resting, None);
    } else if agent.hunger() < MATING_HUNGER_MAX && agent.energy() > MATING_ENERGY_MIN {
        enter(agent, BehaviorState::Mating, None);
    }
}

fn eat(agent: &mut Agent) {
    if agent.hunger() < HUNGER_SATED {
        enter(agent, BehaviorState::Exploring, None);
    }
}

fn rest(agent: &mut Agent) {
    agent.adjust_energy(REST_GAIN);
    if agent.energy() > ENERGY_RESTED {
        enter(agent, BehaviorState::Exploring, None);
    }
}

/// Switches state and target together so the target always matches the state.
pub fn enter(agent: &mut Agent, state: BehaviorState, target: Option<Point>) {
    agent.state = state;
    agent.target = target;
}

/// Points an agent at its nearest food, or leaves it exploring when there is
/// none. Used for parents after a birth and for newborns.
pub fn seek_food(agent: &mut Agent, nearest_food: Option<Point>) {
    match nearest_food {
        Some(food) => enter(agent, BehaviorState::Eating, Some(food)),
        None => enter(agent, BehaviorState::Exploring, None),
    }
}
