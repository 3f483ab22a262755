//! Cat Spawning
//!
//! Places cats on the topology with randomized traits and creates the
//! complete set of pairwise relationships.

use std::collections::BTreeMap;

use crate::components::{Cat, CatTraits, Relationship, RelationshipKey, Topology};
use crate::error::{SimError, SimResult};
use crate::params::SimulationParameters;
use crate::rng::SimRng;

/// Clip bounds for generated traits
pub const AGGRESSIVENESS_RANGE: (f64, f64) = (-1.0, 1.0);
pub const LAZINESS_RANGE: (f64, f64) = (0.0, 1.0);

/// Generate agent name
fn generate_name(index: usize) -> String {
    format!("cat-{}", index)
}

/// Spawn every cat at a uniformly drawn home node
pub fn spawn_cats(
    params: &SimulationParameters,
    topology: &Topology,
    rng: &mut SimRng,
) -> SimResult<Vec<Cat>> {
    if params.cat_amount > 0 && topology.is_empty() {
        return Err(SimError::InvalidParameters(
            "cannot place cats on a topology without nodes".into(),
        ));
    }

    let aggressive_sigma = params.var_aggressive.max(0.0).sqrt();
    let lazy_sigma = params.var_laziness.max(0.0).sqrt();

    let cats: Vec<Cat> = (0..params.cat_amount)
        .map(|id| {
            let home = topology.nodes()[rng.index(topology.node_count())].id;
            let aggressiveness = rng
                .gauss(params.mean_aggressive, aggressive_sigma)
                .clamp(AGGRESSIVENESS_RANGE.0, AGGRESSIVENESS_RANGE.1);
            let laziness = rng
                .gauss(params.mean_laziness, lazy_sigma)
                .clamp(LAZINESS_RANGE.0, LAZINESS_RANGE.1);

            Cat::new(CatTraits {
                id,
                name: generate_name(id),
                home,
                aggressiveness,
                laziness,
            })
        })
        .collect();

    tracing::debug!(cats = cats.len(), "Spawned cats");
    Ok(cats)
}

/// One neutral relationship per unordered pair of cats
pub fn create_relationships(cats: &[Cat]) -> BTreeMap<RelationshipKey, Relationship> {
    let mut relationships = BTreeMap::new();
    for (i, first) in cats.iter().enumerate() {
        for second in &cats[i + 1..] {
            let relationship = Relationship::new(first.id(), second.id());
            relationships.insert(relationship.key(), relationship);
        }
    }
    relationships
}
