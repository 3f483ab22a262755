//! Engagement System
//!
//! Pairs up cats sharing a node and resolves each pair into a fight or a
//! friendly interaction.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::components::CatId;
use crate::config::EngagementConfig;
use crate::error::SimResult;
use crate::rng::SimRng;
use crate::world::World;

/// A candidate pair and how much they want to interact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engagement {
    pub cat1: CatId,
    pub cat2: CatId,
    pub intent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fight,
    Friendly,
}

/// Counts for one engagement step, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementSummary {
    pub fights: usize,
    pub friendly: usize,
    pub idle: usize,
}

/// Highest intent first, ties by cat ids
fn by_priority(a: &Engagement, b: &Engagement) -> Ordering {
    b.intent
        .partial_cmp(&a.intent)
        .unwrap_or(Ordering::Equal)
        .then(a.cat1.cmp(&b.cat1))
        .then(a.cat2.cmp(&b.cat2))
}

/// Score every pair of co-located cats and greedily accept the strongest
/// non-overlapping pairs above the threshold.
fn select_pairs(
    world: &World,
    present: &[CatId],
    tuning: &EngagementConfig,
    rng: &mut SimRng,
) -> SimResult<Vec<Engagement>> {
    let mut candidates = Vec::new();
    for (i, &cat1) in present.iter().enumerate() {
        for &cat2 in &present[i + 1..] {
            let value = world.relationship(cat1, cat2)?.value;
            let a1 = world.cats[cat1].traits.aggressiveness;
            let a2 = world.cats[cat2].traits.aggressiveness;
            let jitter = rng.uniform(-tuning.intent_jitter, tuning.intent_jitter);
            let intent = a1 * value + a2 * value + jitter;

            if intent > tuning.intent_threshold {
                candidates.push(Engagement { cat1, cat2, intent });
            }
        }
    }
    candidates.sort_by(by_priority);

    let mut engaged = BTreeSet::new();
    let mut accepted = Vec::new();
    for candidate in candidates {
        if engaged.contains(&candidate.cat1) || engaged.contains(&candidate.cat2) {
            continue;
        }
        engaged.insert(candidate.cat1);
        engaged.insert(candidate.cat2);
        accepted.push(candidate);
    }
    Ok(accepted)
}

/// Apply the outcome of one accepted pair
fn resolve(world: &mut World, pair: &Engagement, tuning: &EngagementConfig) -> SimResult<Outcome> {
    let (c1, c2) = (pair.cat1, pair.cat2);
    let a1 = world.cats[c1].traits.aggressiveness;
    let a2 = world.cats[c2].traits.aggressiveness;

    let relationship = world.relationship_mut(c1, c2)?;
    let interaction_value = a1 + a2 + relationship.value;
    let outcome = if interaction_value > 0.0 {
        relationship.shift(tuning.relationship_step);
        Outcome::Fight
    } else {
        relationship.shift(-tuning.relationship_step);
        Outcome::Friendly
    };

    for (me, other) in [(c1, c2), (c2, c1)] {
        let stats = &mut world.cats[me].stats;
        match outcome {
            Outcome::Fight => stats.fights += 1,
            Outcome::Friendly => stats.friendly_interactions += 1,
        }
        stats.interacted_with.insert(other);
    }

    if outcome == Outcome::Fight {
        // The less aggressive cat runs off next iteration
        let loser = if a1 > a2 { c2 } else { c1 };
        world.cats[loser].needs_to_flee = true;
    }

    tracing::trace!(cat1 = c1, cat2 = c2, intent = pair.intent, ?outcome, "Engaged");
    Ok(outcome)
}

/// Run one engagement iteration over every node
pub fn engagement_step(
    world: &mut World,
    tuning: &EngagementConfig,
    rng: &mut SimRng,
) -> SimResult<EngagementSummary> {
    let mut summary = EngagementSummary::default();

    for node in 0..world.topology.node_count() {
        let present = world.cats_at(node);

        let pairs = if present.len() < 2 {
            Vec::new()
        } else {
            select_pairs(world, &present, tuning, rng)?
        };

        let engaged: BTreeSet<CatId> = pairs.iter().flat_map(|p| [p.cat1, p.cat2]).collect();
        for &cat in &present {
            if !engaged.contains(&cat) {
                world.cats[cat].stats.sleeps += 1;
                summary.idle += 1;
            }
        }

        for pair in &pairs {
            match resolve(world, pair, tuning)? {
                Outcome::Fight => summary.fights += 1,
                Outcome::Friendly => summary.friendly += 1,
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Cat, CatTraits, Node, Relationship, RelationshipKey, Topology};
    use std::collections::BTreeMap;

    /// Two nodes; all cats start on node 0.
    fn crowded_world(aggressiveness: &[f64]) -> World {
        let topology =
            Topology::with_nodes((0..2).map(|id| Node { id, number_of_edges: 1 }).collect());
        let cats: Vec<Cat> = aggressiveness
            .iter()
            .enumerate()
            .map(|(id, &a)| {
                Cat::new(CatTraits {
                    id,
                    name: format!("cat-{}", id),
                    home: 0,
                    aggressiveness: a,
                    laziness: 0.5,
                })
            })
            .collect();
        let mut relationships = BTreeMap::new();
        for a in 0..cats.len() {
            for b in a + 1..cats.len() {
                relationships.insert(RelationshipKey::new(a, b), Relationship::new(a, b));
            }
        }
        World::new(topology, cats, relationships)
    }

    /// Tuning with no jitter so intent is exact
    fn exact() -> EngagementConfig {
        EngagementConfig {
            intent_jitter: 0.0,
            ..EngagementConfig::default()
        }
    }

    #[test]
    fn test_lonely_cat_sleeps() {
        let mut world = crowded_world(&[0.5]);
        let mut rng = SimRng::from_seed(1);
        let summary = engagement_step(&mut world, &exact(), &mut rng).unwrap();

        assert_eq!(summary.idle, 1);
        assert_eq!(world.cats[0].stats.sleeps, 1);
    }

    #[test]
    fn test_in_transit_cat_neither_sleeps_nor_engages() {
        let mut world = crowded_world(&[0.5, 0.5]);
        world.cats[1].leave(1).unwrap();
        let mut rng = SimRng::from_seed(1);
        engagement_step(&mut world, &exact(), &mut rng).unwrap();

        assert_eq!(world.cats[0].stats.sleeps, 1);
        assert_eq!(world.cats[1].stats.sleeps, 0);
    }

    #[test]
    fn test_hostile_pair_fights() {
        let mut world = crowded_world(&[0.8, 0.4]);
        world.relationship_mut(0, 1).unwrap().value = 0.5;
        let mut rng = SimRng::from_seed(1);

        let summary = engagement_step(&mut world, &exact(), &mut rng).unwrap();

        assert_eq!(summary.fights, 1);
        let rel = world.relationship(0, 1).unwrap();
        assert!((rel.value - 0.55).abs() < 1e-12);
        assert!((rel.stats.absolute_delta - 0.05).abs() < 1e-12);
        assert_eq!(world.cats[0].stats.fights, 1);
        assert_eq!(world.cats[1].stats.fights, 1);
        assert!(world.cats[0].stats.interacted_with.contains(&1));
        assert!(world.cats[1].stats.interacted_with.contains(&0));
        // Less aggressive cat flees
        assert!(world.cats[1].needs_to_flee);
        assert!(!world.cats[0].needs_to_flee);
    }

    #[test]
    fn test_friendly_pair_bonds() {
        // Intent: (-0.8 + -0.6) * -0.5 = 0.7, interaction: -1.4 - 0.5 < 0
        let mut world = crowded_world(&[-0.8, -0.6]);
        world.relationship_mut(0, 1).unwrap().value = -0.5;
        let mut rng = SimRng::from_seed(1);

        let summary = engagement_step(&mut world, &exact(), &mut rng).unwrap();

        assert_eq!(summary.friendly, 1);
        assert!((world.relationship(0, 1).unwrap().value + 0.55).abs() < 1e-12);
        assert_eq!(world.cats[0].stats.friendly_interactions, 1);
        assert!(!world.cats[0].needs_to_flee && !world.cats[1].needs_to_flee);
    }

    #[test]
    fn test_below_threshold_sleeps() {
        let mut world = crowded_world(&[0.9, 0.9]);
        let mut rng = SimRng::from_seed(1);
        let summary = engagement_step(&mut world, &exact(), &mut rng).unwrap();

        // Neutral relationship and no jitter: intent 0
        assert_eq!(summary.idle, 2);
        assert_eq!(world.relationship(0, 1).unwrap().stats.absolute_delta, 0.0);
    }

    #[test]
    fn test_each_cat_engages_once() {
        // Cats 0,1,2 all hostile with one another; strongest pair goes first
        let mut world = crowded_world(&[0.9, 0.8, 0.1]);
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            world.relationship_mut(a, b).unwrap().value = 0.5;
        }
        let mut rng = SimRng::from_seed(1);

        let summary = engagement_step(&mut world, &exact(), &mut rng).unwrap();

        assert_eq!(summary.fights, 1);
        assert_eq!(summary.idle, 1);
        assert_eq!(world.cats[2].stats.sleeps, 1);
        assert_eq!(world.relationship(0, 1).unwrap().stats.absolute_delta, 0.05);
        assert_eq!(world.relationship(0, 2).unwrap().stats.absolute_delta, 0.0);
    }

    #[test]
    fn test_ties_break_by_id() {
        let a = Engagement { cat1: 0, cat2: 2, intent: 0.5 };
        let b = Engagement { cat1: 1, cat2: 3, intent: 0.5 };
        let c = Engagement { cat1: 0, cat2: 1, intent: 0.7 };
        let mut pairs = vec![b, a, c];
        pairs.sort_by(by_priority);
        assert_eq!(pairs, vec![c, a, b]);
    }

    #[test]
    fn test_value_stays_clamped() {
        let mut world = crowded_world(&[1.0, 1.0]);
        world.relationship_mut(0, 1).unwrap().value = 1.0;
        let mut rng = SimRng::from_seed(1);
        for _ in 0..5 {
            engagement_step(&mut world, &exact(), &mut rng).unwrap();
        }
        let rel = world.relationship(0, 1).unwrap();
        assert_eq!(rel.value, 1.0);
        assert!((rel.stats.absolute_delta - 0.25).abs() < 1e-12);
    }
}
