//! Chart request encoding for plots
//!
//! This module is organized into submodules:
//! - `defaults`: Protocol constants and default option values
//! - `coords`: Pixel to percent/relative coordinate transforms
//! - `escape`: Marker text escaping
//! - `params`: One encoder per query parameter

pub mod coords;
pub mod defaults;
pub mod escape;
pub mod params;

pub use coords::{lerp, pixel_to_percent, pixel_to_relative};
pub use escape::{escape_text, unescape_text};

use crate::errors::PlotError;
use crate::plot::Plot;

/// Build the full request URI for a plot.
///
/// Parameters are emitted in a fixed order: chart type, size, axes, line
/// colors, data, markers, background. Encoding only reads the plot, so the
/// same plot always yields the same URI.
pub fn generate_uri(plot: &Plot) -> Result<String, PlotError> {
    let (shapes, texts) = params::partition(plot.elements());
    crate::log::debug!(
        shapes = shapes.len(),
        texts = texts.len(),
        width = plot.width(),
        height = plot.height(),
        "encoding plot"
    );

    let parts = [
        format!("{}?cht={}", plot.service_url(), defaults::CHART_TYPE),
        params::dimensions(plot.width(), plot.height()),
        params::inhibit_axes(),
        params::line_colors(&shapes)?,
        params::lines(&shapes, plot.width(), plot.height())?,
        params::markers(&shapes, &texts, plot.width(), plot.height())?,
        params::background(plot.fill_color1(), plot.fill_color2(), plot.angle())?,
    ];

    let uri = parts.join("&");
    crate::log::debug!(len = uri.len(), "encoded plot");
    Ok(uri)
}

/// Attributes for an `<img>` tag: `src="..." width="..." height="..."`
pub fn generate_img_uri(plot: &Plot) -> Result<String, PlotError> {
    let uri = generate_uri(plot)?;
    Ok(format!(
        r#"src="{uri}" width="{}" height="{}""#,
        plot.width(),
        plot.height()
    ))
}
