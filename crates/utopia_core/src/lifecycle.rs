//! Agent creation: initial population and offspring.

use crate::rng::SeededRng;
use rand::Rng;
use utopia_data::{Agent, AgentId, BehaviorState, Point, Sex};

/// Initial agents are kept this far from the viewport edges.
pub const AGENT_PADDING: f64 = 20.0;
/// Energy an offspring starts with.
pub const NEWBORN_ENERGY: f64 = 50.0;

/// Independent fair coin flip.
pub fn random_sex<R: Rng + ?Sized>(rng: &mut R) -> Sex {
    if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    }
}

/// A founder agent at a random position: age 0, hunger 0, full energy.
pub fn create_agent(id: AgentId, tick: u64, rng: &mut SeededRng) -> Agent {
    let position = rng.random_position(AGENT_PADDING);
    let sex = random_sex(rng);
    let heading = rng.random_heading();
    Agent::new(id, position, sex, tick, heading)
}

/// Offspring of `a` and `b`, placed at their midpoint plus up to `jitter`
/// units per axis and clamped into the viewport.
///
/// The caller picks the initial behavioural state and target.
pub fn create_offspring(
    id: AgentId,
    a: &Agent,
    b: &Agent,
    tick: u64,
    jitter: f64,
    rng: &mut SeededRng,
) -> Agent {
    let (width, height) = rng.bounds();
    let mid = a.position.midpoint(&b.position);
    let x = (mid.x + rng.random_in_range(-jitter, jitter)).clamp(0.0, width);
    let y = (mid.y + rng.random_in_range(-jitter, jitter)).clamp(0.0, height);
    let sex = random_sex(rng);
    let heading = rng.random_heading();

    let mut child = Agent::new(id, Point::new(x, y), sex, tick, heading).with_parents(a.id(), b.id());
    child.set_energy(NEWBORN_ENERGY);
    child.state = BehaviorState::Exploring;
    child.connect(a.id());
    child.connect(b.id());
    child
}

/// Hands out agent ids. Ids only ever increase, so a dead agent's id is
/// never seen again within a run.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far, i.e. all-time created agents.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next
    }
}
