use anyhow::{Context, Result};
use clap::Parser;
use datagen::{persist, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("datagen=info".parse()?))
        .init();

    let config = Config::parse();
    let split = datagen::run(&config).with_context(|| {
        format!(
            "failed to write dataset split to {}",
            config.output_dir.display()
        )
    })?;

    println!(
        "wrote {} train and {} test rows to {}, {}, {}, {} in {}",
        split.labels_train.len(),
        split.labels_test.len(),
        persist::FEATURES_TRAIN_FILE,
        persist::FEATURES_TEST_FILE,
        persist::LABELS_TRAIN_FILE,
        persist::LABELS_TEST_FILE,
        config.output_dir.display(),
    );

    Ok(())
}
