//! Movement System
//!
//! Advances every cat's position by one iteration. Cats are processed in
//! id order and each sees the positions left by the cats before it.

use crate::components::{CatId, NodeId};
use crate::config::MovementConfig;
use crate::error::{SimError, SimResult};
use crate::rng::SimRng;
use crate::world::World;

use super::location::{classify_location, LocationKind};
use super::select::{weighted_choice, WeightedOption};

/// What a cat sitting at a node decided to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Travel(NodeId),
    Stay,
}

/// Counts for one movement step, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementSummary {
    pub arrived: usize,
    pub departed: usize,
    pub stayed: usize,
}

/// Sum of `aggressiveness * relationship * weight` over the given cats.
/// Hostile company attracts aggressive cats and repels friendly ones.
fn social_pull(
    world: &World,
    cat: CatId,
    aggressiveness: f64,
    others: &[CatId],
    relationship_weight: f64,
) -> SimResult<f64> {
    let mut pull = 0.0;
    for &other in others {
        if other == cat {
            continue;
        }
        pull += aggressiveness * world.relationship(cat, other)?.value * relationship_weight;
    }
    Ok(pull)
}

/// Build the weighted options for a cat sitting at `node`
fn movement_options(
    world: &World,
    cat_id: CatId,
    node: NodeId,
    tuning: &MovementConfig,
    rng: &mut SimRng,
) -> SimResult<Vec<WeightedOption<MoveChoice>>> {
    let cat = world.cat(cat_id).ok_or(SimError::NoMoveOptions(cat_id))?;
    let aggressiveness = cat.traits.aggressiveness;
    let laziness = cat.traits.laziness;

    let mut options = Vec::new();
    for &neighbor in world.topology.neighbors(node)? {
        if world.is_home_of_enemy(neighbor, cat_id)? {
            continue;
        }
        let base = (1.0 - laziness) * (1.0 - tuning.lazy_weight);
        let pull = social_pull(
            world,
            cat_id,
            aggressiveness,
            &world.cats_at(neighbor),
            tuning.relationship_weight,
        )?;
        let jitter = rng.uniform(tuning.jitter_min, tuning.jitter_max);
        let weight = (jitter * (base + pull)).clamp(0.0, 1.0);
        options.push(WeightedOption::new(MoveChoice::Travel(neighbor), weight));
    }

    let stay = if cat.needs_to_flee {
        0.0
    } else {
        let base = laziness * tuning.lazy_weight;
        let pull = social_pull(
            world,
            cat_id,
            aggressiveness,
            &world.cats_at(node),
            tuning.relationship_weight,
        )?;
        let jitter = rng.uniform(tuning.jitter_min, tuning.jitter_max);
        (jitter * (base + pull)).clamp(0.0, 1.0)
    };
    options.push(WeightedOption::new(MoveChoice::Stay, stay));

    Ok(options)
}

/// Decide where a cat at a node goes this iteration
fn decide(
    world: &World,
    cat_id: CatId,
    node: NodeId,
    tuning: &MovementConfig,
    rng: &mut SimRng,
) -> SimResult<MoveChoice> {
    let options = movement_options(world, cat_id, node, tuning, rng)?;
    weighted_choice(rng, &options)
        .map(|chosen| chosen.option)
        .ok_or(SimError::NoMoveOptions(cat_id))
}

/// Run one movement iteration over every cat
pub fn movement_step(
    world: &mut World,
    tuning: &MovementConfig,
    rng: &mut SimRng,
) -> SimResult<MovementSummary> {
    let mut summary = MovementSummary::default();

    for cat_id in 0..world.cats.len() {
        let current = world.cats[cat_id].current_node;

        let Some(node) = current else {
            let cat = &mut world.cats[cat_id];
            let arrived_at = cat.arrive()?;
            cat.stats.iter_on_edge += 1;
            cat.needs_to_flee = false;
            summary.arrived += 1;
            tracing::trace!(cat = cat_id, node = arrived_at, "Arrived");
            continue;
        };

        let kind: LocationKind = classify_location(world, &world.cats[cat_id], node);
        let choice = decide(world, cat_id, node, tuning, rng)?;

        let cat = &mut world.cats[cat_id];
        kind.count_iteration(&mut cat.stats);
        match choice {
            MoveChoice::Travel(target) => {
                kind.count_departure(&mut cat.stats);
                cat.leave(target)?;
                summary.departed += 1;
                tracing::trace!(cat = cat_id, from = node, to = target, ?kind, "Departed");
            }
            MoveChoice::Stay => {
                summary.stayed += 1;
            }
        }
        cat.needs_to_flee = false;
    }

    Ok(summary)
}
