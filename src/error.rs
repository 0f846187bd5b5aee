use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("test fraction must lie strictly between 0 and 1, got {0}")]
    InvalidTestFraction(f64),

    #[error("features have {features} rows but labels have {labels} entries")]
    LengthMismatch { features: usize, labels: usize },

    /// A class needs at least one member in each partition.
    #[error("label {label} has {count} member(s), at least 2 are needed to stratify")]
    TooFewMembers { label: u8, count: usize },

    #[error("{partition} partition holds {size} row(s), fewer than the {classes} classes")]
    PartitionTooSmall {
        partition: &'static str,
        size: usize,
        classes: usize,
    },

    #[error("failed to access {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("invalid value {value:?} in {path} at row {row}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("malformed table in {path}: {source}")]
    Shape {
        path: PathBuf,
        source: ndarray::ShapeError,
    },
}
