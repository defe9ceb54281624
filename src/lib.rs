//! Helpers for logistic regression coursework: load `x*`/label CSV files into
//! `ndarray` matrices, prepend an intercept column, and plot a binary dataset
//! together with a linear decision boundary.
//!
//! ```no_run
//! use logreg_util::{load_dataset, plot};
//!
//! let ds = load_dataset("ds1_train.csv", "y", true)?;
//! let theta = [-1.0, 0.5, 0.5];
//! plot(&ds.features, &ds.labels, &theta, Some("ds1.png".as_ref()), 1.0)?;
//! # Ok::<(), logreg_util::Error>(())
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod plot;

pub use data::intercept::add_intercept;
pub use data::loader::{load_dataset, load_dataset_from_reader};
pub use data::model::{Dataset, LabelColumn};
pub use error::{Error, Result};
pub use plot::config::PlotConfig;
pub use plot::{plot, plot_with_config, DEFAULT_CORRECTION};
