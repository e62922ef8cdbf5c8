use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// The input file is missing, malformed, or disagrees with the declared
    /// column schema.
    #[error("failed to parse benchmark table {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
    /// A column requested by name is not part of the loaded table.
    #[error("benchmark table has no column named '{column}'")]
    Lookup { column: String },
}

/// One table row: the field values in file order, before the declared
/// schema is applied.
type Row = Vec<f64>;

/// A benchmark result table, loaded from a semicolon-delimited file against
/// a caller-declared column schema. The files carry no header row; the
/// declared column names apply positionally to every row.
#[derive(Debug)]
pub struct BenchmarkTable {
    columns: BTreeMap<String, Vec<f64>>,
    num_rows: usize,
}

impl BenchmarkTable {
    pub fn load(path: &Path, column_names: &[String]) -> Result<Self, TableError> {
        let parse_error = |reason: String| TableError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_path(path)
            .map_err(|e| parse_error(format!("error opening file (error={e:?})")))?;

        let mut columns: BTreeMap<String, Vec<f64>> = column_names
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        let mut num_rows = 0;
        for (row_idx, record) in reader.deserialize::<Row>().enumerate() {
            let row = record
                .map_err(|e| parse_error(format!("error parsing row {row_idx} (error={e:?})")))?;

            if row.len() != column_names.len() {
                return Err(parse_error(format!(
                    "row {row_idx} has {} fields, expected {}",
                    row.len(),
                    column_names.len()
                )));
            }

            for (name, value) in column_names.iter().zip(row) {
                columns.get_mut(name).unwrap().push(value);
            }
            num_rows += 1;
        }

        Ok(Self { columns, num_rows })
    }

    pub fn column(&self, name: &str) -> Result<&[f64], TableError> {
        self.columns
            .get(name)
            .map(|values| values.as_slice())
            .ok_or_else(|| TableError::Lookup {
                column: name.to_string(),
            })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }
}
