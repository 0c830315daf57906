//! One function per query parameter of the chart request

use crate::elements::{Graphic, GraphicElement, Shape, Text};
use crate::errors::PlotError;
use crate::types::Color;

use super::coords::{pixel_to_percent, pixel_to_relative};
use super::defaults;

/// Split elements into shapes and texts, keeping the relative order of each.
pub fn partition(elements: &[GraphicElement]) -> (Vec<&Shape>, Vec<&Text>) {
    let mut shapes = Vec::new();
    let mut texts = Vec::new();
    for element in elements {
        match element {
            GraphicElement::Shape(s) => shapes.push(s),
            GraphicElement::Text(t) => texts.push(t),
        }
    }
    (shapes, texts)
}

/// `chs`: canvas size
pub fn dimensions(width: u32, height: u32) -> String {
    format!("chs={width}x{height}")
}

/// `chxt` and `chxs`: keep both axes but draw them invisibly
pub fn inhibit_axes() -> String {
    [defaults::AXIS_TYPES, defaults::AXIS_STYLES].join("&")
}

/// `chco`: one outline color per data series
pub fn line_colors(shapes: &[&Shape]) -> Result<String, PlotError> {
    let outlines: Vec<Option<Color>> = shapes.iter().map(|s| s.outline_color()).collect();

    if outlines.iter().all(Option::is_none) {
        crate::log::debug!(shapes = shapes.len(), "no outline colors, using transparent");
        return Ok(format!("chco={}", defaults::TRANSPARENT));
    }

    let missing: Vec<usize> = outlines
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.is_none().then_some(i))
        .collect();
    if !missing.is_empty() {
        crate::log::warn!(?missing, total = shapes.len(), "some shapes lack an outline color");
        return Err(PlotError::InconsistentColorList {
            missing,
            total: shapes.len(),
        });
    }

    let colors: Vec<Color> = outlines.into_iter().flatten().collect();
    let first = colors[0];
    if colors.iter().all(|&c| c == first) {
        return Ok(format!("chco={first}"));
    }

    let joined: Vec<String> = colors.iter().map(Color::to_string).collect();
    Ok(format!("chco={}", joined.join("|")))
}

/// `chd`: text-encoded x and y series, one pair per shape
pub fn lines(shapes: &[&Shape], width: u32, height: u32) -> Result<String, PlotError> {
    if shapes.is_empty() {
        return Ok(format!("chd=t:{}", defaults::EMPTY_GEOMETRY));
    }

    let series = shapes
        .iter()
        .map(|s| shape_series(s, width, height))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("chd=t:{}", series.join("|")))
}

/// `x1,x2,...|y1,y2,...` for one shape, in percent of the canvas
fn shape_series(shape: &Shape, width: u32, height: u32) -> Result<String, PlotError> {
    let mut xs = Vec::with_capacity(shape.points().len());
    let mut ys = Vec::with_capacity(shape.points().len());
    for p in shape.absolute_points() {
        xs.push(pixel_to_percent(p.x, width)?);
        ys.push(pixel_to_percent(p.y, height)?);
    }
    Ok(format!("{}|{}", xs.join(","), ys.join(",")))
}

/// `chm`: fill markers for every shape, then text markers
pub fn markers(shapes: &[&Shape], texts: &[&Text], width: u32, height: u32) -> Result<String, PlotError> {
    let mut entries: Vec<String> = Vec::with_capacity(shapes.len() + texts.len());

    for (index, shape) in shapes.iter().enumerate() {
        entries.push(fill_marker(shape, index));
    }
    for text in texts {
        entries.push(text_marker(text, width, height)?);
    }

    Ok(format!("chm={}", entries.join("|")))
}

/// `B,<color>,<series>,0,0`: fill the area under data series `index`
fn fill_marker(shape: &Shape, index: usize) -> String {
    let color = shape
        .fill_color()
        .map_or_else(|| defaults::TRANSPARENT.to_string(), |c| c.to_string());
    format!("B,{color},{index},0,0")
}

/// `@t<text>,<color>,0,<x>:<y>,<size>,0,<alignment>`: free-standing text at a relative position
fn text_marker(text: &Text, width: u32, height: u32) -> Result<String, PlotError> {
    let origin = text.origin();
    let x = pixel_to_relative(origin.x, width)?;
    let y = pixel_to_relative(origin.y, height)?;
    Ok(format!(
        "@t{},{},0,{x}:{y},{},0,{}",
        super::escape::escape_text(text.text()),
        text.color(),
        text.size(),
        text.alignment()
    ))
}

/// `chf`: solid background, or a linear gradient when a second color differs
pub fn background(fill1: Color, fill2: Option<Color>, angle: f64) -> Result<String, PlotError> {
    match fill2 {
        Some(fill2) if fill2 != fill1 => {
            if !angle.is_finite() {
                return Err(PlotError::NonFinite {
                    what: "gradient angle",
                    value: angle,
                });
            }
            // + 0.0 turns -0.0 into 0.0
            let angle = angle + 0.0;
            Ok(format!("chf=bg,lg,{angle},{fill1},0,{fill2},1"))
        }
        _ => Ok(format!("chf=bg,s,{fill1}")),
    }
}
