//! Error types with diagnostics using miette
//!
//! Every failure here is a caller programming error: nothing is retried and
//! nothing is transient.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or encoding a plot
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("invalid {axis}: {value}")]
    #[diagnostic(
        code(chartmark::plot::invalid_dimension),
        help("plot {axis} must be at least 1 pixel")
    )]
    InvalidDimension { axis: &'static str, value: u32 },

    #[error("invalid color {value:?}: {reason}")]
    #[diagnostic(
        code(chartmark::color::invalid),
        help("colors are six hex digits, e.g. \"ff8800\"")
    )]
    InvalidColor { value: String, reason: &'static str },

    #[error("invalid {axis} alignment: {value:?}")]
    #[diagnostic(
        code(chartmark::text::invalid_alignment),
        help("expected one of: {expected}")
    )]
    InvalidAlignment {
        axis: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("inconsistent outline colors: shapes {missing:?} of {total} have no outline color")]
    #[diagnostic(
        code(chartmark::encode::inconsistent_color_list),
        help("give every shape an outline color, or give none of them one")
    )]
    InconsistentColorList { missing: Vec<usize>, total: usize },

    #[error("{what} is not finite: {value}")]
    #[diagnostic(code(chartmark::encode::non_finite))]
    NonFinite { what: &'static str, value: f64 },
}
