use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use image::{ExtendedColorType, ImageFormat};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::color::FigureColors;
use crate::error::{Error, Result};

use super::config::PlotConfig;

/// Everything needed to draw one figure, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Figure {
    pub positives: Vec<(f64, f64)>,
    pub negatives: Vec<(f64, f64)>,
    /// Boundary polyline clipped to the y range.
    pub boundary: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

fn render_err<E>(e: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Render(e.to_string())
}

/// Text is drawn with a bundled font so no system fonts are needed.
const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

fn ensure_font() -> Result<()> {
    let ok = *FONT_REGISTERED
        .get_or_init(|| register_font("sans-serif", FontStyle::Normal, FONT_BYTES).is_ok());
    if ok {
        Ok(())
    } else {
        Err(Error::Render("bundled font could not be loaded".to_string()))
    }
}

/// Draw `figure`, writing it to `save_path` when given.
///
/// `.svg` paths use the SVG backend; anything else is rasterized and encoded
/// by extension, PNG when the path has none. Without a path the figure is
/// rendered to an in-memory SVG.
pub(crate) fn render(
    figure: &Figure,
    config: &PlotConfig,
    colors: &FigureColors,
    save_path: Option<&Path>,
) -> Result<()> {
    ensure_font()?;
    let (width, height) = config.size;

    match save_path {
        Some(path) if is_svg(path) => {
            let root = SVGBackend::new(path, (width, height)).into_drawing_area();
            draw(root, figure, config, colors)?;
            info!("saved figure to {}", path.display());
        }
        Some(path) => {
            let format = raster_format(path)?;
            let buf = rasterize(figure, config, colors)?;
            image::save_buffer_with_format(
                path,
                &buf,
                width,
                height,
                ExtendedColorType::Rgb8,
                format,
            )?;
            info!("saved figure to {} as {format:?}", path.display());
        }
        None => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
                draw(root, figure, config, colors)?;
            }
            debug!("rendered {} bytes of SVG, no save path given", svg.len());
        }
    }
    Ok(())
}

/// Render into a packed RGB8 buffer of `config.size`.
pub(crate) fn rasterize(
    figure: &Figure,
    config: &PlotConfig,
    colors: &FigureColors,
) -> Result<Vec<u8>> {
    ensure_font()?;
    let (width, height) = config.size;
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw(root, figure, config, colors)?;
    }
    Ok(buf)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn raster_format(path: &Path) -> Result<ImageFormat> {
    match path.extension() {
        None => Ok(ImageFormat::Png),
        Some(_) => Ok(ImageFormat::from_path(path)?),
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure,
    config: &PlotConfig,
    colors: &FigureColors,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()
        .map_err(render_err)?;

    let (x, y) = (&figure.x_range, &figure.y_range);
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x.start, y.start), (x.end, y.end)],
            BLACK.stroke_width(1),
        )))
        .map_err(render_err)?;

    let marker = config.marker_size;
    let width = config.line_width;
    chart
        .draw_series(
            figure
                .positives
                .iter()
                .map(|&p| Cross::new(p, marker, colors.positive.stroke_width(width))),
        )
        .map_err(render_err)?;
    chart
        .draw_series(
            figure
                .negatives
                .iter()
                .map(|&p| Circle::new(p, marker, colors.negative.stroke_width(width))),
        )
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(
            figure.boundary.iter().copied(),
            colors.boundary.stroke_width(width),
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
