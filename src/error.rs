use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised by the dataset loader and the plotter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid label column: {0:?} (expected \"y\" or \"t\")")]
    InvalidLabelColumn(String),

    #[error("no column named {0:?} in header")]
    MissingLabelColumn(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("record {record}, column {column:?}: {value:?} is not a number")]
    ParseFloat {
        record: u64,
        column: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("parsing plot config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid plot config: {0}")]
    InvalidConfig(String),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("theta needs at least 3 entries, got {0}")]
    ThetaTooShort(usize),

    #[error("theta[2] is zero, decision boundary is undefined")]
    DegenerateBoundary,

    #[error("plotting needs at least 2 feature columns, got {0}")]
    TooFewColumns(usize),

    #[error("{rows} feature rows but {labels} labels")]
    ShapeMismatch { rows: usize, labels: usize },

    #[error("cannot plot an empty dataset")]
    EmptyDataset,

    #[error("plotted columns contain infinite or NaN values")]
    NonFiniteData,

    #[error("rendering figure: {0}")]
    Render(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
