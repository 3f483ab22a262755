//! End-of-run Metrics
//!
//! Turns the counters accumulated over a run into the metric records of
//! every cat, every relationship and the run as a whole.

pub mod cliques;
pub mod stats;

use cats_report::{CatMetrics, RelationshipMetrics, SimulationMetrics};

use crate::components::{Cat, CatId, Disposition};
use crate::error::SimResult;
use crate::world::World;

pub use cliques::{friend_groups, maximal_cliques};
use stats::{mean, ratio, shannon_entropy};

/// Whole-run metrics along with the friend groups they were derived from
#[derive(Debug, Clone, PartialEq)]
pub struct RunMetrics {
    pub simulation: SimulationMetrics,
    pub friend_groups: Vec<Vec<CatId>>,
}

/// Fill in the metrics of every relationship and cat, and summarize the run
pub fn calculate_metrics(world: &mut World, iterations: u32) -> SimResult<RunMetrics> {
    let total = f64::from(iterations);

    for rel in world.relationships.values_mut() {
        rel.metrics = Some(RelationshipMetrics {
            stability: 1.0 - ratio(rel.stats.absolute_delta, total),
            volatility: ratio(rel.stats.absolute_delta, total),
            min_value: rel.stats.min_value,
            max_value: rel.stats.max_value,
            number_of_sign_flips: rel.stats.sign_flips,
        });
    }

    let groups = friend_groups(world);

    let mut per_cat = Vec::with_capacity(world.cats.len());
    for cat in &world.cats {
        per_cat.push(cat_metrics(world, cat, &groups, total)?);
    }
    for (cat, metrics) in world.cats.iter_mut().zip(per_cat) {
        cat.metrics = Some(metrics);
    }

    let simulation = SimulationMetrics {
        friendgroups_total: groups.len(),
        average_size_friendgroups: mean(groups.iter().map(|g| g.len() as f64)),
        largest_group_size: groups.iter().map(Vec::len).max().unwrap_or(0),
        interaction_density: ratio(
            world.cats.iter().map(|c| f64::from(c.stats.interactions())).sum(),
            total,
        ),
        isolated_cats_count: world
            .cats
            .iter()
            .filter(|c| c.stats.interacted_with.is_empty())
            .count(),
        mean_relationship_value: mean(world.relationships.values().map(|r| r.value)),
    };

    tracing::debug!(
        friend_groups = simulation.friendgroups_total,
        isolated = simulation.isolated_cats_count,
        "Metrics calculated"
    );

    Ok(RunMetrics {
        simulation,
        friend_groups: groups,
    })
}

fn cat_metrics(world: &World, cat: &Cat, groups: &[Vec<CatId>], total: f64) -> SimResult<CatMetrics> {
    let id = cat.id();
    let s = &cat.stats;

    let (mut friendly, mut hostile, mut neutral) = (0usize, 0usize, 0usize);
    for &partner in &s.interacted_with {
        match world.relationship(id, partner)?.disposition() {
            Disposition::Friendly => friendly += 1,
            Disposition::Hostile => hostile += 1,
            Disposition::Neutral => neutral += 1,
        }
    }
    let partners = s.interacted_with.len() as f64;
    let split = [
        ratio(friendly as f64, partners),
        ratio(hostile as f64, partners),
        ratio(neutral as f64, partners),
    ];

    let own_groups: Vec<&Vec<CatId>> = groups.iter().filter(|g| g.contains(&id)).collect();
    let others = world.cats.len().saturating_sub(1) as f64;

    Ok(CatMetrics {
        percent_time_spent_home: ratio(f64::from(s.iter_at_home), total),
        percent_time_spent_on_edge: ratio(f64::from(s.iter_on_edge), total),
        percent_time_spent_on_neutral_ground: ratio(f64::from(s.iter_at_neutral), total),
        percent_time_spent_at_friends_house: ratio(f64::from(s.iter_at_friendly), total),
        average_iter_spent_at_home: ratio(f64::from(s.iter_at_home), f64::from(s.times_at_home)),
        average_iter_spent_at_friends_home: ratio(
            f64::from(s.iter_at_friendly),
            f64::from(s.times_at_friendly),
        ),
        average_iter_spent_on_neutral_node: ratio(
            f64::from(s.iter_at_neutral),
            f64::from(s.times_at_neutral),
        ),
        amount_of_cats_interacted_with: s.interacted_with.len(),
        percent_of_cats_interacted_with: ratio(partners, others),
        amount_of_friends: world.friends_of(id).len(),
        amount_of_enemies: world.enemies_of(id).len(),
        percent_of_friends: split[0],
        percent_of_enemies: split[1],
        percent_of_acquaintances: split[2],
        percent_time_spent_fighting: ratio(f64::from(s.fights), total),
        percent_time_spent_friendly_interaction: ratio(f64::from(s.friendly_interactions), total),
        percent_time_spent_sleeping: ratio(f64::from(s.sleeps), total),
        amount_friendgroups: own_groups.len(),
        average_size_friendgroup: mean(own_groups.iter().map(|g| g.len() as f64)),
        exploration_index: ratio(s.nodes_visited.len() as f64, world.topology.node_count() as f64),
        relationship_entropy: shannon_entropy(&split),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CatTraits, Node, Relationship, RelationshipKey, Topology};
    use std::collections::BTreeMap;

    fn world_of(cats: usize) -> World {
        let topology =
            Topology::with_nodes((0..4).map(|id| Node { id, number_of_edges: 1 }).collect());
        let cats: Vec<Cat> = (0..cats)
            .map(|id| {
                Cat::new(CatTraits {
                    id,
                    name: format!("cat-{}", id),
                    home: id % 4,
                    aggressiveness: 0.0,
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

    fn befriend(world: &mut World, a: CatId, b: CatId) {
        world.relationship_mut(a, b).unwrap().shift(-0.05);
        world.cats[a].stats.friendly_interactions += 1;
        world.cats[b].stats.friendly_interactions += 1;
        world.cats[a].stats.interacted_with.insert(b);
        world.cats[b].stats.interacted_with.insert(a);
    }

    #[test]
    fn test_never_departed_average_is_zero() {
        let mut world = world_of(2);
        world.cats[0].stats.iter_at_home = 10;
        calculate_metrics(&mut world, 10).unwrap();

        let metrics = world.cats[0].metrics.as_ref().unwrap();
        assert_eq!(metrics.percent_time_spent_home, 1.0);
        assert_eq!(metrics.average_iter_spent_at_home, 0.0);
        assert_eq!(metrics.average_iter_spent_on_neutral_node, 0.0);
    }

    #[test]
    fn test_per_visit_average() {
        let mut world = world_of(2);
        world.cats[0].stats.iter_at_home = 6;
        world.cats[0].stats.times_at_home = 3;
        calculate_metrics(&mut world, 10).unwrap();
        assert_eq!(world.cats[0].metrics.as_ref().unwrap().average_iter_spent_at_home, 2.0);
    }

    #[test]
    fn test_relationship_stability() {
        let mut world = world_of(2);
        world.relationship_mut(0, 1).unwrap().shift(0.05);
        world.relationship_mut(0, 1).unwrap().shift(-0.05);
        calculate_metrics(&mut world, 10).unwrap();

        let metrics = world.relationship(0, 1).unwrap().metrics.clone().unwrap();
        assert!((metrics.stability - 0.99).abs() < 1e-12);
        assert!((metrics.volatility - 0.01).abs() < 1e-12);
        assert_eq!(metrics.number_of_sign_flips, 2);
        assert_eq!(metrics.min_value, 0.0);
        assert!((metrics.max_value - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_pair_is_not_a_friend_group() {
        let mut world = world_of(3);
        befriend(&mut world, 0, 1);
        let run = calculate_metrics(&mut world, 10).unwrap();

        assert!(run.friend_groups.is_empty());
        assert_eq!(run.simulation.friendgroups_total, 0);
        assert_eq!(run.simulation.average_size_friendgroups, 0.0);
        assert_eq!(run.simulation.isolated_cats_count, 1);
        let metrics = world.cats[0].metrics.as_ref().unwrap();
        assert_eq!(metrics.amount_of_friends, 1);
        assert_eq!(metrics.amount_friendgroups, 0);
        assert_eq!(metrics.average_size_friendgroup, 0.0);
    }

    #[test]
    fn test_friend_groups() {
        let mut world = world_of(5);
        for (a, b) in [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)] {
            befriend(&mut world, a, b);
        }
        let run = calculate_metrics(&mut world, 10).unwrap();

        assert_eq!(run.friend_groups, vec![vec![0, 1, 2], vec![2, 3, 4]]);
        assert_eq!(run.simulation.friendgroups_total, 2);
        assert_eq!(run.simulation.average_size_friendgroups, 3.0);
        assert_eq!(run.simulation.largest_group_size, 3);
        assert_eq!(run.simulation.isolated_cats_count, 0);

        let hub = world.cats[2].metrics.as_ref().unwrap();
        assert_eq!(hub.amount_friendgroups, 2);
        assert_eq!(hub.amount_of_friends, 4);
        assert_eq!(hub.percent_of_friends, 1.0);
        assert_eq!(hub.relationship_entropy, 0.0);
        assert_eq!(hub.percent_of_cats_interacted_with, 1.0);
    }

    #[test]
    fn test_partner_split_and_entropy() {
        let mut world = world_of(3);
        befriend(&mut world, 0, 1);
        // Fought once then made up: back to neutral
        world.relationship_mut(0, 2).unwrap().shift(0.05);
        world.relationship_mut(0, 2).unwrap().shift(-0.05);
        world.cats[0].stats.interacted_with.insert(2);
        world.cats[2].stats.interacted_with.insert(0);
        calculate_metrics(&mut world, 4).unwrap();

        let metrics = world.cats[0].metrics.as_ref().unwrap();
        assert_eq!(metrics.percent_of_friends, 0.5);
        assert_eq!(metrics.percent_of_acquaintances, 0.5);
        assert_eq!(metrics.percent_of_enemies, 0.0);
        assert!((metrics.relationship_entropy - 1.0).abs() < 1e-12);
        assert_eq!(metrics.exploration_index, 0.25);
    }

    #[test]
    fn test_interaction_density() {
        let mut world = world_of(2);
        befriend(&mut world, 0, 1);
        let run = calculate_metrics(&mut world, 4).unwrap();
        assert_eq!(run.simulation.interaction_density, 0.5);
        assert!((run.simulation.mean_relationship_value + 0.05).abs() < 1e-12);
    }
}
