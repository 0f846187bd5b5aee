use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

pub type Label = u8;

/// Feature matrix with one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Array1<Label>,
}

/// Train and test partitions. Row `i` of a feature matrix belongs to entry `i`
/// of the labels with the same suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDataset {
    pub features_train: Array2<f64>,
    pub features_test: Array2<f64>,
    pub labels_train: Array1<Label>,
    pub labels_test: Array1<Label>,
}

impl Dataset {
    /// Features are drawn before labels from one generator seeded with `seed`.
    pub fn generate(samples: usize, dimensions: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let features = generate_features(&mut rng, samples, dimensions);
        let labels = generate_labels(&mut rng, samples);

        Self { features, labels }
    }

    pub fn samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn dimensions(&self) -> usize {
        self.features.ncols()
    }
}

/// Fills a `samples x dimensions` matrix in row-major order with standard normal draws.
pub fn generate_features<R: Rng + ?Sized>(
    rng: &mut R,
    samples: usize,
    dimensions: usize,
) -> Array2<f64> {
    Array2::from_shape_simple_fn((samples, dimensions), || rng.sample(StandardNormal))
}

pub fn generate_labels<R: Rng + ?Sized>(rng: &mut R, samples: usize) -> Array1<Label> {
    Array1::from_shape_simple_fn(samples, || rng.random_range(0..=1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FEATURES, DEFAULT_SAMPLES, DEFAULT_SEED};

    #[test]
    fn test_shapes() {
        let dataset = Dataset::generate(DEFAULT_SAMPLES, DEFAULT_FEATURES, DEFAULT_SEED);

        assert_eq!(dataset.features.dim(), (1024, 512));
        assert_eq!(dataset.labels.len(), 1024);
        assert_eq!(dataset.samples(), 1024);
        assert_eq!(dataset.dimensions(), 512);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let first = Dataset::generate(64, 16, DEFAULT_SEED);
        let second = Dataset::generate(64, 16, DEFAULT_SEED);

        let first_bits: Vec<u64> = first.features.iter().map(|x| x.to_bits()).collect();
        let second_bits: Vec<u64> = second.features.iter().map(|x| x.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
        assert_eq!(first.labels, second.labels);
    }

    #[test]
    fn test_different_seed_changes_data() {
        let first = Dataset::generate(64, 16, 1);
        let second = Dataset::generate(64, 16, 2);

        assert_ne!(first.features, second.features);
    }

    #[test]
    fn test_labels_are_binary_and_both_present() {
        let dataset = Dataset::generate(DEFAULT_SAMPLES, 1, DEFAULT_SEED);

        assert!(dataset.labels.iter().all(|&label| label <= 1));
        let ones = dataset.labels.iter().filter(|&&label| label == 1).count();
        assert!(ones > 400 && ones < 624, "implausible label balance: {ones}");
    }

    #[test]
    fn test_features_look_standard_normal() {
        let dataset = Dataset::generate(DEFAULT_SAMPLES, 64, DEFAULT_SEED);
        let values = dataset.features.as_slice().unwrap();
        let n = values.len() as f64;

        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < 0.02, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.03, "variance {variance}");
    }
}
