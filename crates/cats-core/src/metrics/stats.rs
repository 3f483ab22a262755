//! Numeric helpers shared by the metric calculations.

/// `part / whole`, or 0 when there is nothing to divide by
pub fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    ratio(sum, count as f64)
}

/// Shannon entropy in bits of a distribution given as fractions.
///
/// Zero fractions contribute nothing.
pub fn shannon_entropy(fractions: &[f64]) -> f64 {
    fractions
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(5.0, 0.0), 0.0);
        assert_eq!(ratio(3.0, 4.0), 0.75);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::new()), 0.0);
        assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_entropy() {
        assert_eq!(shannon_entropy(&[1.0, 0.0, 0.0]), 0.0);
        assert!((shannon_entropy(&[0.5, 0.5, 0.0]) - 1.0).abs() < 1e-12);
        assert!((shannon_entropy(&[0.25; 4]) - 2.0).abs() < 1e-12);
        assert_eq!(shannon_entropy(&[]), 0.0);
    }
}
