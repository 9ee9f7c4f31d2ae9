// SPDX-License-Identifier: MIT OR Apache-2.0

/// Mean and sample standard deviation of a series
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    /// Arithmetic mean, zero for an empty series
    pub mean: f64,
    /// Sample standard deviation (n - 1), zero below two values
    pub std_dev: f64,
}

impl Stats {
    /// Statistics of `values`
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self::default();
        }
        let mean = values.iter().sum::<f64>() / n as f64;
        if n == 1 {
            return Self { mean, std_dev: 0.0 };
        }
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(Stats::from_values(&[]), Stats::default());
        assert_eq!(Stats::from_values(&[4.0]), Stats { mean: 4.0, std_dev: 0.0 });
    }

    #[test]
    fn test_sample_std_dev() {
        let stats = Stats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        // Sample variance is 32 / 7.
        assert!((stats.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }
}
