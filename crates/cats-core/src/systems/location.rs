//! Location Classification
//!
//! What kind of place a node is from one cat's point of view.

use crate::components::{Cat, CatStats, NodeId};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// The cat's own home
    Home,
    /// Nobody lives here
    Neutral,
    /// Someone else lives here
    Friendly,
}

impl LocationKind {
    /// Count one iteration spent at this kind of location
    pub fn count_iteration(self, stats: &mut CatStats) {
        match self {
            LocationKind::Home => stats.iter_at_home += 1,
            LocationKind::Neutral => stats.iter_at_neutral += 1,
            LocationKind::Friendly => stats.iter_at_friendly += 1,
        }
    }

    /// Count one departure from this kind of location
    pub fn count_departure(self, stats: &mut CatStats) {
        match self {
            LocationKind::Home => stats.times_at_home += 1,
            LocationKind::Neutral => stats.times_at_neutral += 1,
            LocationKind::Friendly => stats.times_at_friendly += 1,
        }
    }
}

pub fn classify_location(world: &World, cat: &Cat, node: NodeId) -> LocationKind {
    if node == cat.traits.home {
        LocationKind::Home
    } else if world.residents(node).is_empty() {
        LocationKind::Neutral
    } else {
        LocationKind::Friendly
    }
}
