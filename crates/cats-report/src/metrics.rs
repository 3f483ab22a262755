//! Metric Records
//!
//! Derived statistics computed once, after the last iteration of a run.

use serde::{Deserialize, Serialize};

/// Per-cat statistics derived from the counters accumulated during a run.
///
/// Ratios are relative to the total iteration count unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatMetrics {
    pub percent_time_spent_home: f64,
    pub percent_time_spent_on_edge: f64,
    pub percent_time_spent_on_neutral_ground: f64,
    pub percent_time_spent_at_friends_house: f64,
    /// Iterations at home per departure from home, 0 if the cat never left
    pub average_iter_spent_at_home: f64,
    pub average_iter_spent_at_friends_home: f64,
    pub average_iter_spent_on_neutral_node: f64,
    pub amount_of_cats_interacted_with: usize,
    /// Distinct partners relative to every other cat in the run
    pub percent_of_cats_interacted_with: f64,
    pub amount_of_friends: usize,
    pub amount_of_enemies: usize,
    /// Friendly partners relative to distinct partners
    pub percent_of_friends: f64,
    pub percent_of_enemies: f64,
    /// Partners whose relationship ended exactly neutral
    pub percent_of_acquaintances: f64,
    pub percent_time_spent_fighting: f64,
    pub percent_time_spent_friendly_interaction: f64,
    pub percent_time_spent_sleeping: f64,
    pub amount_friendgroups: usize,
    pub average_size_friendgroup: f64,
    /// Distinct nodes visited relative to the number of nodes
    pub exploration_index: f64,
    /// Shannon entropy (bits) of the friend/enemy/acquaintance split
    pub relationship_entropy: f64,
}

/// Per-relationship statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipMetrics {
    /// 1 minus the cumulative absolute change divided by the iteration count
    pub stability: f64,
    /// Average absolute change per iteration
    pub volatility: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub number_of_sign_flips: u32,
}

/// Whole-run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    pub friendgroups_total: usize,
    pub average_size_friendgroups: f64,
    pub largest_group_size: usize,
    pub interaction_density: f64,
    pub isolated_cats_count: usize,
    pub mean_relationship_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_metrics_field_names() {
        let metrics = SimulationMetrics {
            friendgroups_total: 2,
            average_size_friendgroups: 3.5,
            largest_group_size: 4,
            interaction_density: 0.25,
            isolated_cats_count: 1,
            mean_relationship_value: -0.1,
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["friendgroups_total"], 2);
        assert_eq!(json["average_size_friendgroups"], 3.5);
        assert_eq!(json["largest_group_size"], 4);
    }

    #[test]
    fn test_relationship_metrics_parse() {
        let json = r#"{
            "stability": 0.9,
            "volatility": 0.5,
            "min_value": 0.0,
            "max_value": 0.5,
            "number_of_sign_flips": 2
        }"#;

        let metrics: RelationshipMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.number_of_sign_flips, 2);
        assert!((metrics.stability - 0.9).abs() < f64::EPSILON);
    }
}
