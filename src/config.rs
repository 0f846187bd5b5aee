use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SAMPLES: usize = 1024;
pub const DEFAULT_FEATURES: usize = 512;
pub const DEFAULT_TEST_SIZE: f64 = 0.3;
pub const DEFAULT_SEED: u64 = 42;

/// Run parameters. Every flag is optional; the defaults reproduce the
/// standard 1024 x 512 dataset with a 30% stratified test split.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "datagen",
    version,
    about = "Generate a random feature matrix and binary labels, then write a stratified train/test split as CSV."
)]
pub struct Config {
    /// Number of rows (samples) to generate
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Number of feature columns per sample
    #[arg(long, default_value_t = DEFAULT_FEATURES)]
    pub features: usize,

    /// Fraction of rows placed in the test partition
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Seed for both generation and the split
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving X_train.csv, X_test.csv, y_train.csv and y_test.csv
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            features: DEFAULT_FEATURES,
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_matches_default() {
        let config = Config::try_parse_from(["datagen"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "datagen",
            "--samples",
            "100",
            "--test-size",
            "0.25",
            "--output-dir",
            "out",
        ])
        .unwrap();

        assert_eq!(config.samples, 100);
        assert_eq!(config.features, DEFAULT_FEATURES);
        assert!((config.test_size - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
