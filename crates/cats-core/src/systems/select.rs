//! Option Selection
//!
//! Weighted random choice over unnormalized, non-negative weights.

use crate::rng::SimRng;

/// An option paired with its selection weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedOption<T> {
    pub option: T,
    pub weight: f64,
}

impl<T> WeightedOption<T> {
    pub fn new(option: T, weight: f64) -> Self {
        Self { option, weight }
    }
}

/// Pick one option with probability proportional to its weight.
///
/// A single option is returned without consuming randomness. If every
/// weight is zero the pick is uniform. Returns `None` only for an empty
/// slice.
pub fn weighted_choice<'a, T>(
    rng: &mut SimRng,
    candidates: &'a [WeightedOption<T>],
) -> Option<&'a WeightedOption<T>> {
    match candidates {
        [] => return None,
        [only] => return Some(only),
        _ => {}
    }

    let total: f64 = candidates.iter().map(|c| c.weight.max(0.0)).sum();
    if total <= 0.0 {
        return candidates.get(rng.index(candidates.len()));
    }

    let roll = rng.unit() * total;
    let mut cumulative = 0.0;
    for candidate in candidates {
        let weight = candidate.weight.max(0.0);
        cumulative += weight;
        if weight > 0.0 && roll < cumulative {
            return Some(candidate);
        }
    }

    // Rounding can leave the roll a hair above the final sum
    candidates.iter().rev().find(|c| c.weight > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_random_choice() {
        let mut rng = SimRng::from_seed(12345);
        let candidates = vec![
            WeightedOption::new("stay", 0.1),
            WeightedOption::new("move", 0.9),
        ];

        let mut stay_count = 0;
        let mut move_count = 0;
        for _ in 0..1000 {
            match weighted_choice(&mut rng, &candidates).unwrap().option {
                "stay" => stay_count += 1,
                _ => move_count += 1,
            }
        }

        // Move should be selected ~90% of the time
        assert!(move_count > stay_count * 5);
    }

    #[test]
    fn test_single_option_consumes_no_randomness() {
        let mut rng = SimRng::from_seed(1);
        let mut untouched = SimRng::from_seed(1);
        let only = vec![WeightedOption::new(7, 0.0)];

        assert_eq!(weighted_choice(&mut rng, &only).unwrap().option, 7);
        assert_eq!(rng.unit(), untouched.unit());
    }

    #[test]
    fn test_zero_weights_fall_back_to_uniform() {
        let mut rng = SimRng::from_seed(99);
        let candidates: Vec<_> = (0..3).map(|i| WeightedOption::new(i, 0.0)).collect();

        let mut seen = [0usize; 3];
        for _ in 0..300 {
            seen[weighted_choice(&mut rng, &candidates).unwrap().option] += 1;
        }
        assert!(seen.iter().all(|&n| n > 50), "{:?}", seen);
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let mut rng = SimRng::from_seed(3);
        let candidates = vec![
            WeightedOption::new("never", 0.0),
            WeightedOption::new("always", 0.4),
            WeightedOption::new("never", 0.0),
        ];
        for _ in 0..500 {
            assert_eq!(weighted_choice(&mut rng, &candidates).unwrap().option, "always");
        }
    }

    #[test]
    fn test_empty() {
        let mut rng = SimRng::from_seed(3);
        let candidates: Vec<WeightedOption<u8>> = Vec::new();
        assert!(weighted_choice(&mut rng, &candidates).is_none());
    }
}
