use std::io;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use ndarray::{Array1, Array2};

use super::intercept::add_intercept;
use super::model::{Dataset, LabelColumn};
use crate::error::{Error, Result};

/// Headers starting with this character are feature columns.
pub const FEATURE_PREFIX: char = 'x';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file.
///
/// Every column whose header starts with `x` becomes a feature column (in
/// header order) and the column named `label_col` (`"y"` or `"t"`) becomes the
/// label vector. The feature matrix is always 2D, even for a single feature.
/// With `add_intercept` a column of ones is prepended.
///
/// Header names are matched as written; only whitespace around the whole
/// header line is ignored, so a cell like `" x2"` is not a feature column.
/// Data cells are trimmed before parsing.
///
/// `label_col` is checked before the file is opened.
pub fn load_dataset<P: AsRef<Path>>(
    csv_path: P,
    label_col: &str,
    add_intercept: bool,
) -> Result<Dataset> {
    let label = label_col.parse::<LabelColumn>()?;
    let path = csv_path.as_ref();
    debug!("loading dataset from {}", path.display());

    let reader = reader_builder().from_path(path)?;
    read_dataset(reader, label, add_intercept)
}

/// Same as [`load_dataset`], reading CSV text from any reader.
pub fn load_dataset_from_reader<R: io::Read>(
    rdr: R,
    label_col: &str,
    add_intercept: bool,
) -> Result<Dataset> {
    let label = label_col.parse::<LabelColumn>()?;
    read_dataset(reader_builder().from_reader(rdr), label, add_intercept)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Comma separated, one header row, `#` comment lines, data cells trimmed.
/// Rows must have as many cells as the header.
fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(true)
        .trim(Trim::Fields)
        .comment(Some(b'#'));
    builder
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    features: Vec<usize>,
    names: Vec<String>,
    label: usize,
}

/// Header cells with the whitespace around the whole line stripped.
fn header_names(headers: &StringRecord) -> Vec<&str> {
    let last = headers.len().saturating_sub(1);
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start() } else { h };
            if i == last {
                h.trim_end()
            } else {
                h
            }
        })
        .collect()
}

fn resolve_columns(headers: &StringRecord, label: LabelColumn) -> Result<Columns> {
    let headers = header_names(headers);
    let (features, names): (Vec<usize>, Vec<String>) = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.starts_with(FEATURE_PREFIX))
        .map(|(i, h)| (i, h.to_string()))
        .unzip();

    let label_positions: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| **h == label.as_str())
        .map(|(i, _)| i)
        .collect();

    let label_idx = match label_positions.as_slice() {
        [] => return Err(Error::MissingLabelColumn(label.to_string())),
        [only] => *only,
        [first, ..] => {
            warn!(
                "{} columns named '{label}', using the first (position {first})",
                label_positions.len()
            );
            *first
        }
    };

    debug!("feature columns {names:?} at {features:?}, label '{label}' at {label_idx}");
    Ok(Columns {
        features,
        names,
        label: label_idx,
    })
}

fn read_dataset<R: io::Read>(
    mut reader: Reader<R>,
    label: LabelColumn,
    add_intercept_col: bool,
) -> Result<Dataset> {
    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers, label)?;

    let mut values = Vec::new();
    let mut labels = Vec::new();

    for result in reader.records() {
        let record = result?;
        for &col in &columns.features {
            values.push(parse_cell(&record, &headers, col)?);
        }
        labels.push(parse_cell(&record, &headers, columns.label)?);
    }

    let n_rows = labels.len();
    debug!("parsed {n_rows} rows x {} features", columns.features.len());

    let features = Array2::from_shape_vec((n_rows, columns.features.len()), values)?;
    let mut feature_names = columns.names;

    let features = if add_intercept_col {
        feature_names.insert(0, "x0".to_string());
        add_intercept(&features)
    } else {
        features
    };

    Ok(Dataset {
        features,
        labels: Array1::from(labels),
        feature_names,
    })
}

fn parse_cell(record: &StringRecord, headers: &StringRecord, col: usize) -> Result<f64> {
    // Non-flexible readers reject short rows, so the cell is always present.
    let raw = record.get(col).unwrap_or("");
    raw.parse::<f64>().map_err(|source| Error::ParseFloat {
        record: record.position().map_or(0, |p| p.record()),
        column: headers.get(col).unwrap_or("").to_string(),
        value: raw.to_string(),
        source,
    })
}
