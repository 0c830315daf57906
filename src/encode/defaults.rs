//! Protocol constants and default option values

use crate::types::Color;

/// Chart endpoint the URI is built against
pub const SERVICE_URL: &str = "http://chart.apis.google.com/chart";
/// Chart type: line chart with explicit x and y values
pub const CHART_TYPE: &str = "lxy";
/// Axis parameters that show both axes with zero-width, invisible ticks and labels
pub const AXIS_TYPES: &str = "chxt=x,y";
pub const AXIS_STYLES: &str = "chxs=0,000000,0,0,_|1,000000,0,0,_";
/// RGBA white with zero alpha; used wherever a color must be given but nothing should show
pub const TRANSPARENT: &str = "ffffff00";
/// Placeholder data series when the plot has no shapes
pub const EMPTY_GEOMETRY: &str = "0|0";

pub const PLOT_WIDTH: u32 = 300;
pub const PLOT_HEIGHT: u32 = 300;
pub const BACKGROUND: Color = Color::WHITE;
pub const ANGLE: f64 = 0.0;

pub const TEXT_SIZE: u32 = 12;
pub const TEXT_COLOR: Color = Color::BLACK;

/// Upper bound of the `chd` percentage space
pub const PERCENT_MAX: f64 = 100.0;
/// Upper bound of the `chm` relative space
pub const RELATIVE_MAX: f64 = 1.0;
