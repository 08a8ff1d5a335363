//! Courtship and birth.
//!
//! Every agent in the mating state looks for a partner once per tick. The
//! partner is the first eligible agent in population order; one roll against
//! the birth rate then decides the encounter. Newborns are appended after the
//! whole pass, so they never court in the tick they are born.

use crate::config::ReproductionConfig;
use crate::lifecycle::{self, IdSequence};
use crate::resource::ResourceField;
use crate::rng::SeededRng;
use crate::systems::behavior;
use utopia_data::{Agent, BehaviorState, LiveEvent};

pub struct ReproductionContext<'a> {
    pub config: &'a ReproductionConfig,
    pub birth_rate: f64,
    pub time_scale: f64,
    pub tick: u64,
    pub resources: &'a ResourceField,
    pub ids: &'a mut IdSequence,
    pub rng: &'a mut SeededRng,
}

/// Whether `candidate` can mate with `seeker`: a different, opposite-sex
/// agent that is itself courting, has enough energy, and is close enough.
#[must_use]
pub fn is_eligible_partner(seeker: &Agent, candidate: &Agent, config: &ReproductionConfig) -> bool {
    candidate.id() != seeker.id()
        && candidate.state == BehaviorState::Mating
        && candidate.sex() != seeker.sex()
        && candidate.energy() > config.partner_min_energy
        && seeker.position.distance(&candidate.position) < config.mating_distance
}

/// Index of the first eligible partner for `agents[seeker]`.
#[must_use]
pub fn find_partner(agents: &[Agent], seeker: usize, config: &ReproductionConfig) -> Option<usize> {
    let me = agents.get(seeker)?;
    agents
        .iter()
        .position(|candidate| is_eligible_partner(me, candidate, config))
}

/// Runs courtship for every mating agent and appends the newborns.
/// Returns a birth event per newborn.
pub fn mating_pass(agents: &mut Vec<Agent>, ctx: &mut ReproductionContext<'_>) -> Vec<LiveEvent> {
    let mut newborns: Vec<Agent> = Vec::new();

    for i in 0..agents.len() {
        if agents[i].state != BehaviorState::Mating {
            continue;
        }
        if let Some(j) = find_partner(agents, i, ctx.config) {
            if ctx.rng.next_f64() < ctx.birth_rate {
                newborns.push(give_birth(agents, i, j, ctx));
                continue;
            }
        }
        if ctx.rng.next_f64() < ctx.config.abandon_chance {
            tracing::trace!(id = %agents[i].id(), tick = ctx.tick, "Courtship abandoned");
            behavior::enter(&mut agents[i], BehaviorState::Exploring, None);
        }
    }

    let events = newborns
        .iter()
        .map(|child| LiveEvent::Birth {
            id: child.id(),
            parent_ids: child.parent_ids(),
            tick: ctx.tick,
            x: child.position.x,
            y: child.position.y,
        })
        .collect();
    agents.extend(newborns);
    events
}

fn give_birth(agents: &mut [Agent], i: usize, j: usize, ctx: &mut ReproductionContext<'_>) -> Agent {
    let child_id = ctx.ids.next_id();
    let mut child = lifecycle::create_offspring(
        child_id,
        &agents[i],
        &agents[j],
        ctx.tick,
        ctx.config.offspring_jitter,
        ctx.rng,
    );
    let food = nearest_food(ctx.resources, &child);
    behavior::seek_food(&mut child, food);

    let (a_id, b_id) = (agents[i].id(), agents[j].id());
    let cost = ctx.config.energy_cost * ctx.time_scale;
    for (parent, partner) in [(i, b_id), (j, a_id)] {
        let p = &mut agents[parent];
        p.adjust_energy(-cost);
        p.connect(partner);
        p.connect(child_id);
        let food = nearest_food(ctx.resources, p);
        behavior::seek_food(p, food);
    }

    tracing::debug!(
        child = %child_id,
        parents = %format!("{a_id}+{b_id}"),
        tick = ctx.tick,
        "Offspring born"
    );
    child
}

fn nearest_food(resources: &ResourceField, agent: &Agent) -> Option<utopia_data::Point> {
    resources
        .find_nearest(&agent.position)
        .and_then(|idx| resources.get(idx))
        .map(|r| r.position)
}
