use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use ndarray::{Array1, Array2};

use crate::dataset::Label;
use crate::error::Error;

pub const FEATURES_TRAIN_FILE: &str = "X_train.csv";
pub const FEATURES_TEST_FILE: &str = "X_test.csv";
pub const LABELS_TRAIN_FILE: &str = "y_train.csv";
pub const LABELS_TEST_FILE: &str = "y_test.csv";

pub const DELIMITER: u8 = b',';

/// An array that can be written as delimited text, one row per line.
pub trait Table {
    fn columns(&self) -> usize;

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), csv::Error>;
}

impl Table for Array2<f64> {
    fn columns(&self) -> usize {
        self.ncols()
    }

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), csv::Error> {
        for row in self.rows() {
            // `Display` for f64 is the shortest text that parses back to the same bits
            writer.write_record(row.iter().map(f64::to_string))?;
        }
        Ok(())
    }
}

impl Table for Array1<Label> {
    fn columns(&self) -> usize {
        1
    }

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), csv::Error> {
        for label in self {
            writer.write_record([label.to_string()])?;
        }
        Ok(())
    }
}

/// Writes `table` to `path`, creating or truncating the file. The first line
/// holds the column indices `0..columns`.
pub fn persist<T: Table>(table: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let wrap = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(wrap)?;

    write_table(table, &mut writer).map_err(wrap)?;

    tracing::info!(path = %path.display(), columns = table.columns(), "wrote table");
    Ok(())
}

fn write_table<T: Table>(table: &T, writer: &mut Writer<File>) -> Result<(), csv::Error> {
    writer.write_record((0..table.columns()).map(|column| column.to_string()))?;
    table.write_rows(writer)?;
    writer.flush()?;
    Ok(())
}
