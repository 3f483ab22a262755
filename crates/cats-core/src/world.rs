//! World Aggregate
//!
//! The complete mutable state of one run. The orchestrator owns it and
//! lends it by exclusive reference to each step in turn.

use std::collections::BTreeMap;

use crate::components::{Cat, CatId, NodeId, Relationship, RelationshipKey, Topology};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub topology: Topology,
    pub cats: Vec<Cat>,
    pub relationships: BTreeMap<RelationshipKey, Relationship>,
    /// Cats indexed by home node; homes never change during a run
    residents: Vec<Vec<CatId>>,
}

impl World {
    pub fn new(
        topology: Topology,
        cats: Vec<Cat>,
        relationships: BTreeMap<RelationshipKey, Relationship>,
    ) -> Self {
        let mut residents = vec![Vec::new(); topology.node_count()];
        for cat in &cats {
            if let Some(list) = residents.get_mut(cat.traits.home) {
                list.push(cat.id());
            }
        }

        Self {
            topology,
            cats,
            relationships,
            residents,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topology.is_empty() && self.cats.is_empty()
    }

    pub fn cat(&self, id: CatId) -> Option<&Cat> {
        self.cats.get(id)
    }

    pub fn cat_mut(&mut self, id: CatId) -> Option<&mut Cat> {
        self.cats.get_mut(id)
    }

    pub fn relationship(&self, a: CatId, b: CatId) -> SimResult<&Relationship> {
        self.relationships
            .get(&RelationshipKey::new(a, b))
            .ok_or(SimError::MissingRelationship(a, b))
    }

    pub fn relationship_mut(&mut self, a: CatId, b: CatId) -> SimResult<&mut Relationship> {
        self.relationships
            .get_mut(&RelationshipKey::new(a, b))
            .ok_or(SimError::MissingRelationship(a, b))
    }

    /// Cats currently sitting at `node`, in id order
    pub fn cats_at(&self, node: NodeId) -> Vec<CatId> {
        self.cats
            .iter()
            .filter(|c| c.current_node == Some(node))
            .map(Cat::id)
            .collect()
    }

    /// Cats whose home is `node`
    pub fn residents(&self, node: NodeId) -> &[CatId] {
        self.residents.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if a resident of `node` other than `cat` is hostile to it.
    /// Only residents count; hostile visitors do not make a node an
    /// enemy home. A hostile co-resident makes even the cat's own home one.
    pub fn is_home_of_enemy(&self, node: NodeId, cat: CatId) -> SimResult<bool> {
        for &resident in self.residents(node) {
            if resident == cat {
                continue;
            }
            if self.relationship(resident, cat)?.is_hostile() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Cats `cat` has a friendly relationship with
    pub fn friends_of(&self, cat: CatId) -> Vec<CatId> {
        self.relationships
            .values()
            .filter(|r| r.involves(cat) && r.is_friendly())
            .map(|r| r.other_cat(cat))
            .collect()
    }

    /// Cats `cat` has a hostile relationship with
    pub fn enemies_of(&self, cat: CatId) -> Vec<CatId> {
        self.relationships
            .values()
            .filter(|r| r.involves(cat) && r.is_hostile())
            .map(|r| r.other_cat(cat))
            .collect()
    }

    pub fn cats_in_transit(&self) -> usize {
        self.cats.iter().filter(|c| c.is_in_transit()).count()
    }
}
