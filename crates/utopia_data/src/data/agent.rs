use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Upper bound shared by hunger, energy and stress.
pub const VITAL_MAX: f64 = 100.0;

/// Ticks after birth during which an agent is drawn with the newborn tint.
pub const NEWBORN_GRACE_TICKS: u64 = 60;

/// Monotonically assigned agent identity. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous world position or direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[must_use]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Base RGB colour used by renderers once the newborn tint has faded.
    #[must_use]
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Sex::Male => (90, 150, 255),
            Sex::Female => (255, 120, 180),
        }
    }
}

/// Behavioural state of an agent for the current tick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorState {
    #[default]
    Exploring,
    Eating,
    Mating,
    Resting,
}

impl BehaviorState {
    pub const ALL: [BehaviorState; 4] = [
        BehaviorState::Exploring,
        BehaviorState::Eating,
        BehaviorState::Mating,
        BehaviorState::Resting,
    ];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            BehaviorState::Exploring => '●',
            BehaviorState::Eating => '♣',
            BehaviorState::Mating => '♥',
            BehaviorState::Resting => '◦',
        }
    }

    /// Outline colour renderers draw around an agent in this state.
    #[must_use]
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            BehaviorState::Exploring => (200, 200, 200),
            BehaviorState::Eating => (80, 220, 80),
            BehaviorState::Mating => (255, 60, 90),
            BehaviorState::Resting => (120, 120, 255),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BehaviorState::Exploring => "exploring",
            BehaviorState::Eating => "eating",
            BehaviorState::Mating => "mating",
            BehaviorState::Resting => "resting",
        }
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single autonomous agent.
///
/// Hunger, energy and stress are private so every write goes through a
/// clamping setter and stays in `[0, VITAL_MAX]`. Identity, sex and parentage
/// are fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    pub position: Point,
    /// Movement target; `None` means free wandering along `heading`.
    pub target: Option<Point>,
    pub age: f64,
    hunger: f64,
    energy: f64,
    stress: f64,
    pub state: BehaviorState,
    sex: Sex,
    /// Unit heading used only while wandering with no target.
    pub heading: Point,
    birth_tick: u64,
    parent_ids: Option<(AgentId, AgentId)>,
    social_connections: BTreeSet<AgentId>,
    /// Other agents seen inside the crowding radius during the last tick.
    #[serde(default)]
    pub crowding: u32,
}

impl Agent {
    #[must_use]
    pub fn new(id: AgentId, position: Point, sex: Sex, birth_tick: u64, heading: Point) -> Self {
        Self {
            id,
            position,
            target: None,
            age: 0.0,
            hunger: 0.0,
            energy: VITAL_MAX,
            stress: 0.0,
            state: BehaviorState::Exploring,
            sex,
            heading,
            birth_tick,
            parent_ids: None,
            social_connections: BTreeSet::new(),
            crowding: 0,
        }
    }

    /// Builder-style parentage for offspring.
    #[must_use]
    pub fn with_parents(mut self, a: AgentId, b: AgentId) -> Self {
        self.parent_ids = Some((a, b));
        self
    }

    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub fn birth_tick(&self) -> u64 {
        self.birth_tick
    }

    #[must_use]
    pub fn parent_ids(&self) -> Option<(AgentId, AgentId)> {
        self.parent_ids
    }

    #[must_use]
    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    #[must_use]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    #[must_use]
    pub fn stress(&self) -> f64 {
        self.stress
    }

    pub fn set_hunger(&mut self, value: f64) {
        self.hunger = clamp_vital(value);
    }

    pub fn set_energy(&mut self, value: f64) {
        self.energy = clamp_vital(value);
    }

    pub fn set_stress(&mut self, value: f64) {
        self.stress = clamp_vital(value);
    }

    pub fn adjust_hunger(&mut self, delta: f64) {
        self.set_hunger(self.hunger + delta);
    }

    pub fn adjust_energy(&mut self, delta: f64) {
        self.set_energy(self.energy + delta);
    }

    pub fn adjust_stress(&mut self, delta: f64) {
        self.set_stress(self.stress + delta);
    }

    /// Records a historical interaction. The set only ever grows.
    pub fn connect(&mut self, other: AgentId) {
        if other != self.id {
            self.social_connections.insert(other);
        }
    }

    #[must_use]
    pub fn social_connections(&self) -> &BTreeSet<AgentId> {
        &self.social_connections
    }

    #[must_use]
    pub fn is_newborn(&self, tick: u64) -> bool {
        tick.saturating_sub(self.birth_tick) < NEWBORN_GRACE_TICKS
    }

    /// Fill colour for renderers: a pale newborn tint during the grace
    /// period, the sex colour afterwards.
    #[must_use]
    pub fn tint(&self, tick: u64) -> (u8, u8, u8) {
        if self.is_newborn(tick) {
            (255, 255, 210)
        } else {
            self.sex.color()
        }
    }
}

fn clamp_vital(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, VITAL_MAX)
}
