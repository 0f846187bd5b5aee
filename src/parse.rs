use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use ndarray::{Array1, Array2};

use crate::dataset::Label;
use crate::error::Error;
use crate::persist::DELIMITER;

/// Reads a feature table written by [`crate::persist::persist`] back into a matrix.
pub fn read_features(path: impl AsRef<Path>) -> Result<Array2<f64>, Error> {
    let path = path.as_ref();
    let records = read_records(path)?;

    let columns = records.first().map_or(0, StringRecord::len);
    let mut values = Vec::with_capacity(records.len() * columns);
    for (row, record) in records.iter().enumerate() {
        for field in record {
            values.push(parse_field::<f64>(path, row, field)?);
        }
    }

    Array2::from_shape_vec((records.len(), columns), values).map_err(|source| Error::Shape {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_labels(path: impl AsRef<Path>) -> Result<Array1<Label>, Error> {
    let path = path.as_ref();
    let records = read_records(path)?;

    let labels = records
        .iter()
        .enumerate()
        .map(|(row, record)| parse_field::<Label>(path, row, record.get(0).unwrap_or_default()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Array1::from(labels))
}

/// Every record after the header; rows of unequal length are rejected by the reader.
fn read_records(path: &Path) -> Result<Vec<StringRecord>, Error> {
    let wrap = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|err| wrap(err.into()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(DELIMITER)
        .from_reader(BufReader::new(file));

    reader.records().collect::<Result<_, _>>().map_err(wrap)
}

fn parse_field<T: FromStr>(path: &Path, row: usize, field: &str) -> Result<T, Error> {
    field.parse().map_err(|_| Error::InvalidValue {
        path: path.to_path_buf(),
        row,
        value: field.to_string(),
    })
}
