//! Relationship Components
//!
//! One signed affinity value per unordered pair of cats.
//! Negative values are friendly, positive values hostile, 0 is neutral.

use std::fmt;

use cats_report::{RelationshipMetrics, RelationshipRecord};
use serde::{Deserialize, Serialize};

use super::CatId;

/// Sorted pair of cat ids; each unordered pair maps to exactly one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelationshipKey(CatId, CatId);

impl RelationshipKey {
    pub fn new(a: CatId, b: CatId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn first(&self) -> CatId {
        self.0
    }

    pub fn second(&self) -> CatId {
        self.1
    }

    pub fn as_tuple(&self) -> (CatId, CatId) {
        (self.0, self.1)
    }
}

/// Who a relationship connects - fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTraits {
    pub cat1: CatId,
    pub cat2: CatId,
}

/// Sign class of a relationship value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Friendly,
    Neutral,
    Hostile,
}

impl Disposition {
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Disposition::Friendly
        } else if value > 0.0 {
            Disposition::Hostile
        } else {
            Disposition::Neutral
        }
    }
}

/// Counters accumulated during a run
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipStats {
    /// Sum of the absolute per-interaction changes
    pub absolute_delta: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub sign_flips: u32,
}

impl Default for RelationshipStats {
    fn default() -> Self {
        Self {
            absolute_delta: 0.0,
            min_value: 0.0,
            max_value: 0.0,
            sign_flips: 0,
        }
    }
}

/// A relationship between two cats
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub traits: RelationshipTraits,
    /// -1.0 to 1.0
    pub value: f64,
    pub stats: RelationshipStats,
    pub metrics: Option<RelationshipMetrics>,
}

impl Relationship {
    /// Create a neutral relationship
    pub fn new(cat1: CatId, cat2: CatId) -> Self {
        Self {
            traits: RelationshipTraits { cat1, cat2 },
            value: 0.0,
            stats: RelationshipStats::default(),
            metrics: None,
        }
    }

    pub fn key(&self) -> RelationshipKey {
        RelationshipKey::new(self.traits.cat1, self.traits.cat2)
    }

    pub fn disposition(&self) -> Disposition {
        Disposition::of(self.value)
    }

    pub fn is_friendly(&self) -> bool {
        self.value < 0.0
    }

    pub fn is_hostile(&self) -> bool {
        self.value > 0.0
    }

    /// The cat on the other side of `cat`
    pub fn other_cat(&self, cat: CatId) -> CatId {
        if cat == self.traits.cat2 {
            self.traits.cat1
        } else {
            self.traits.cat2
        }
    }

    /// True if this relationship is between `a` and `b`, in either order
    pub fn connects(&self, a: CatId, b: CatId) -> bool {
        (self.traits.cat1 == a && self.traits.cat2 == b)
            || (self.traits.cat1 == b && self.traits.cat2 == a)
    }

    pub fn involves(&self, cat: CatId) -> bool {
        self.traits.cat1 == cat || self.traits.cat2 == cat
    }

    /// Move the value by `delta`, clamped to [-1, 1], and record the change
    /// in the run statistics. The absolute-change statistic grows by
    /// `|delta|` even when the clamp absorbs the move.
    pub fn shift(&mut self, delta: f64) {
        let before = Disposition::of(self.value);
        self.value = (self.value + delta).clamp(-1.0, 1.0);
        self.stats.absolute_delta += delta.abs();
        self.stats.min_value = self.stats.min_value.min(self.value);
        self.stats.max_value = self.stats.max_value.max(self.value);
        if Disposition::of(self.value) != before {
            self.stats.sign_flips += 1;
        }
    }

    pub fn to_record(&self) -> RelationshipRecord {
        RelationshipRecord {
            key: self.key().as_tuple(),
            value: self.value,
            metrics: self.metrics.clone(),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relationship: Cat {} - Cat {}", self.traits.cat1, self.traits.cat2)
    }
}
