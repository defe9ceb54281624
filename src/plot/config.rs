use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Figure style
// ---------------------------------------------------------------------------

/// Appearance and sampling of a decision-boundary figure.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "size": [800, 600], "positive_color": "#1f77b4" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure size in pixels (width, height).
    pub size: (u32, u32),
    /// Colour of label-1 crosses.
    pub positive_color: String,
    /// Colour of label-0 circles.
    pub negative_color: String,
    pub boundary_color: String,
    pub marker_size: u32,
    pub line_width: u32,
    pub x_label: String,
    pub y_label: String,
    /// Distance between sampled boundary points along the x axis.
    pub step: f64,
    /// Axis padding as a fraction of the data range.
    pub margin_fraction: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            size: (640, 480),
            positive_color: "#0000ff".to_string(),
            negative_color: "#008000".to_string(),
            boundary_color: "#ff0000".to_string(),
            marker_size: 4,
            line_width: 2,
            x_label: "x1".to_string(),
            y_label: "x2".to_string(),
            step: 0.01,
            margin_fraction: 0.2,
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: PlotConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if !(self.margin_fraction.is_finite() && self.margin_fraction >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "margin_fraction must be non-negative, got {}",
                self.margin_fraction
            )));
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(Error::InvalidConfig(format!(
                "size must be non-zero, got {:?}",
                self.size
            )));
        }
        Ok(())
    }
}
