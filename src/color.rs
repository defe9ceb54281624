use palette::Srgb;
use plotters::style::RGBColor;

use crate::error::{Error, Result};
use crate::plot::config::PlotConfig;

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` / `#rgb` (leading `#` optional) into a plotting colour.
pub fn parse_hex(s: &str) -> Result<RGBColor> {
    let rgb: Srgb<u8> = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidColor(s.to_string()))?;
    Ok(RGBColor(rgb.red, rgb.green, rgb.blue))
}

/// Resolved colours of one figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureColors {
    /// Label-1 markers.
    pub positive: RGBColor,
    /// Label-0 markers.
    pub negative: RGBColor,
    pub boundary: RGBColor,
}

impl FigureColors {
    pub fn from_config(config: &PlotConfig) -> Result<Self> {
        Ok(FigureColors {
            positive: parse_hex(&config.positive_color)?,
            negative: parse_hex(&config.negative_color)?,
            boundary: parse_hex(&config.boundary_color)?,
        })
    }
}
