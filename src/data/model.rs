use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};

use crate::error::Error;

// ---------------------------------------------------------------------------
// LabelColumn – which header names the target column
// ---------------------------------------------------------------------------

/// The accepted label column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelColumn {
    /// Observed labels, header `y`.
    Y,
    /// True labels, header `t`.
    T,
}

impl LabelColumn {
    pub const ALLOWED: [&'static str; 2] = ["y", "t"];

    pub fn as_str(self) -> &'static str {
        match self {
            LabelColumn::Y => "y",
            LabelColumn::T => "t",
        }
    }
}

impl FromStr for LabelColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" => Ok(LabelColumn::Y),
            "t" => Ok(LabelColumn::T),
            other => Err(Error::InvalidLabelColumn(other.to_string())),
        }
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dataset – features and labels of one CSV file
// ---------------------------------------------------------------------------

/// A loaded dataset. `features.nrows() == labels.len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// One row per example; column 0 is the intercept when one was added.
    pub features: Array2<f64>,
    /// One label per example, expected in {0, 1}.
    pub labels: Array1<f64>,
    /// Header name of each feature column (`x0` for the intercept).
    pub feature_names: Vec<String>,
}

impl Dataset {
    /// Number of examples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no examples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Split into `(features, labels)`.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.features, self.labels)
    }
}
