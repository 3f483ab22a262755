//! Cat Components
//!
//! Traits fixed at creation, the mutable movement state and the counters
//! accumulated over a run.

use std::collections::BTreeSet;
use std::fmt;

use cats_report::{CatMetrics, TraitsRecord};
use serde::{Deserialize, Serialize};

use super::{CatId, NodeId};
use crate::error::{SimError, SimResult};

/// Cat personality - fixed at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatTraits {
    pub id: CatId,
    pub name: String,
    pub home: NodeId,
    /// -1.0 (very friendly) to 1.0 (very aggressive)
    pub aggressiveness: f64,
    /// 0.0 (restless) to 1.0 (never wants to leave)
    pub laziness: f64,
}

impl CatTraits {
    pub fn to_record(&self) -> TraitsRecord {
        TraitsRecord {
            id: self.id,
            name: self.name.clone(),
            home: self.home,
            aggressiveness: self.aggressiveness,
            laziness: self.laziness,
        }
    }
}

/// Counters accumulated during a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatStats {
    /// Iterations spent per location type
    pub iter_at_home: u32,
    pub iter_on_edge: u32,
    pub iter_at_friendly: u32,
    pub iter_at_neutral: u32,
    /// Departures out of each location type
    pub times_at_home: u32,
    pub times_at_friendly: u32,
    pub times_at_neutral: u32,
    pub fights: u32,
    pub friendly_interactions: u32,
    pub sleeps: u32,
    pub interacted_with: BTreeSet<CatId>,
    pub nodes_visited: BTreeSet<NodeId>,
}

impl CatStats {
    /// Iterations accounted for across all location types
    pub fn iterations_tracked(&self) -> u32 {
        self.iter_at_home + self.iter_on_edge + self.iter_at_friendly + self.iter_at_neutral
    }

    pub fn interactions(&self) -> u32 {
        self.fights + self.friendly_interactions
    }
}

/// A cat and its state during a run
#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    pub traits: CatTraits,
    /// `None` while in transit
    pub current_node: Option<NodeId>,
    /// Set only while in transit
    pub target_node: Option<NodeId>,
    /// Set by a lost fight, consumed by the next movement step
    pub needs_to_flee: bool,
    pub stats: CatStats,
    pub metrics: Option<CatMetrics>,
}

impl Cat {
    /// Create a cat sitting at home
    pub fn new(traits: CatTraits) -> Self {
        let mut stats = CatStats::default();
        stats.nodes_visited.insert(traits.home);

        Self {
            current_node: Some(traits.home),
            target_node: None,
            needs_to_flee: false,
            stats,
            metrics: None,
            traits,
        }
    }

    pub fn id(&self) -> CatId {
        self.traits.id
    }

    pub fn is_in_transit(&self) -> bool {
        self.current_node.is_none()
    }

    pub fn is_at_home(&self) -> bool {
        self.current_node == Some(self.traits.home)
    }

    /// Start moving toward `target`
    pub fn leave(&mut self, target: NodeId) -> SimResult<()> {
        if self.current_node == Some(target) {
            return Err(SimError::InvalidMove {
                cat: self.id(),
                node: target,
            });
        }
        self.current_node = None;
        self.target_node = Some(target);
        Ok(())
    }

    /// Finish the transit started by [`Cat::leave`]
    pub fn arrive(&mut self) -> SimResult<NodeId> {
        let target = self
            .target_node
            .take()
            .ok_or(SimError::MissingTarget { cat: self.id() })?;
        self.current_node = Some(target);
        self.stats.nodes_visited.insert(target);
        Ok(target)
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.current_node, self.target_node) {
            (Some(node), _) => write!(f, "{} (n: #{})", self.traits.name, node),
            (None, Some(target)) => write!(f, "{} -> n #{}", self.traits.name, target),
            (None, None) => write!(f, "{} (lost)", self.traits.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cat() -> Cat {
        Cat::new(CatTraits {
            id: 0,
            name: "Thima".into(),
            home: 0,
            aggressiveness: -0.5,
            laziness: 0.3,
        })
    }

    #[test]
    fn test_new_cat_is_home() {
        let cat = sample_cat();
        assert_eq!(cat.current_node, Some(0));
        assert!(cat.target_node.is_none());
        assert!(!cat.needs_to_flee);
        assert!(cat.is_at_home());
        assert_eq!(cat.stats.iterations_tracked(), 0);
        assert!(cat.stats.interacted_with.is_empty());
        assert_eq!(cat.stats.nodes_visited, BTreeSet::from([0]));
        assert!(cat.metrics.is_none());
        assert_eq!(cat.to_string(), "Thima (n: #0)");
    }

    #[test]
    fn test_leave_and_arrive() {
        let mut cat = sample_cat();
        cat.leave(1).unwrap();
        assert!(cat.is_in_transit());
        assert_eq!(cat.to_string(), "Thima -> n #1");

        assert_eq!(cat.arrive().unwrap(), 1);
        assert_eq!(cat.current_node, Some(1));
        assert!(!cat.is_in_transit());
        assert_eq!(cat.stats.nodes_visited, BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_cannot_leave_for_current_node() {
        let mut cat = sample_cat();
        assert!(matches!(
            cat.leave(0),
            Err(SimError::InvalidMove { cat: 0, node: 0 })
        ));
        assert_eq!(cat.current_node, Some(0));
    }

    #[test]
    fn test_arrive_without_target_fails() {
        let mut cat = sample_cat();
        assert!(matches!(cat.arrive(), Err(SimError::MissingTarget { cat: 0 })));
    }

    #[test]
    fn test_traits_record_uses_wire_names() {
        let json = serde_json::to_value(sample_cat().traits.to_record()).unwrap();
        assert_eq!(json["aggressive"], -0.5);
        assert_eq!(json["lazy"], 0.3);
        assert_eq!(json["name"], "Thima");
    }
}
