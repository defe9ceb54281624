//! Scatter plot of a binary dataset with a linear decision boundary.
//!
//! The last two feature columns are the plot axes; label-1 rows are drawn as
//! crosses, label-0 rows as circles, and the line
//! `theta[0] * correction + theta[1] * x1 + theta[2] * x2 = 0` on top.
pub mod boundary;
pub mod config;
mod render;

use std::path::Path;

use log::debug;
use ndarray::{ArrayBase, Data, Ix1, Ix2};

use crate::color::FigureColors;
use crate::error::{Error, Result};

use boundary::{arange, clip_to_band, decision_boundary, partition_by_label, Extent};
use config::PlotConfig;
use render::{render, Figure};

/// Intercept scale used unless the caller knows of an estimator bias.
pub const DEFAULT_CORRECTION: f64 = 1.0;

/// Plot `x`/`y` and the boundary given by `theta` with the default style.
///
/// With `save_path` the figure is written there (format by extension);
/// without it the figure is only rendered in memory.
pub fn plot<S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
    theta: &[f64],
    save_path: Option<&Path>,
    correction: f64,
) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    plot_with_config(&PlotConfig::default(), x, y, theta, save_path, correction)
}

/// Same as [`plot`] with an explicit style.
pub fn plot_with_config<S1, S2>(
    config: &PlotConfig,
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
    theta: &[f64],
    save_path: Option<&Path>,
    correction: f64,
) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    config.validate()?;
    let colors = FigureColors::from_config(config)?;
    let figure = build_figure(config, x, y, theta, correction)?;
    debug!(
        "plotting {} positive / {} negative points, {} boundary samples",
        figure.positives.len(),
        figure.negatives.len(),
        figure.boundary.len()
    );
    render(&figure, config, &colors, save_path)
}

fn build_figure<S1, S2>(
    config: &PlotConfig,
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
    theta: &[f64],
    correction: f64,
) -> Result<Figure>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (rows, cols) = x.dim();
    if cols < 2 {
        return Err(Error::TooFewColumns(cols));
    }
    if rows != y.len() {
        return Err(Error::ShapeMismatch {
            rows,
            labels: y.len(),
        });
    }

    let x1 = Extent::of(x.column(cols - 2)).ok_or(Error::EmptyDataset)?;
    let x2 = Extent::of(x.column(cols - 1)).ok_or(Error::EmptyDataset)?;
    if !(x1.is_finite() && x2.is_finite()) {
        return Err(Error::NonFiniteData);
    }
    let x_range = x1.padded(config.margin_fraction);
    let y_range = x2.padded(config.margin_fraction);

    let samples = arange(x_range.start, x_range.end, config.step);
    let line = decision_boundary(theta, &samples, correction)?;
    let boundary = clip_to_band(&line, y_range.start, y_range.end);

    let (positives, negatives) = partition_by_label(x, y);

    Ok(Figure {
        positives,
        negatives,
        boundary,
        x_range,
        y_range,
    })
}
