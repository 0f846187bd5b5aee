pub mod config;
pub mod dataset;
pub mod error;
pub mod parse;
pub mod persist;
pub mod split;

use std::path::Path;

pub use config::Config;
pub use dataset::{Dataset, SplitDataset};
pub use error::Error;

/// Generates a dataset, splits it and writes the four CSV files into
/// `config.output_dir`.
pub fn run(config: &Config) -> Result<SplitDataset, Error> {
    let dataset = Dataset::generate(config.samples, config.features, config.seed);
    tracing::info!(
        samples = dataset.samples(),
        features = dataset.dimensions(),
        seed = config.seed,
        "generated dataset"
    );

    let split = split::stratified_split(
        &dataset.features,
        &dataset.labels,
        config.test_size,
        config.seed,
    )?;
    tracing::info!(
        train = split.labels_train.len(),
        test = split.labels_test.len(),
        "split dataset"
    );

    write_split(&split, &config.output_dir)?;

    Ok(split)
}

fn write_split(split: &SplitDataset, output_dir: &Path) -> Result<(), Error> {
    persist::persist(&split.features_train, output_dir.join(persist::FEATURES_TRAIN_FILE))?;
    persist::persist(&split.features_test, output_dir.join(persist::FEATURES_TEST_FILE))?;
    persist::persist(&split.labels_train, output_dir.join(persist::LABELS_TRAIN_FILE))?;
    persist::persist(&split.labels_test, output_dir.join(persist::LABELS_TEST_FILE))?;

    Ok(())
}
