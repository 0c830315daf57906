//! Draw simple scenes with the Google Chart API.
//!
//! A [`Plot`] holds closed polygons ([`Shape`]) and labels ([`Text`]) placed in
//! pixel coordinates, and encodes them as the query string of an `lxy` chart
//! request: each polygon becomes a data series filled with a `B` marker and
//! each label becomes an `@t` text marker. Fetching the URI is left to the
//! caller.
//!
//! ```
//! use chartmark::{HAlign, Plot, PlotOptions, Shape, ShapeOptions, Text, TextOptions, VAlign};
//!
//! let mut plot = Plot::new(PlotOptions::default())?;
//! plot.add_element(Shape::new(
//!     [150.0, 150.0],
//!     [[-130.0, -130.0], [130.0, -130.0], [130.0, 130.0], [-130.0, 130.0]],
//!     ShapeOptions::default().with_fill("ccccff".parse()?),
//! ));
//! plot.add_element(Text::new(
//!     [150.0, 150.0],
//!     "hello, world!",
//!     TextOptions::default()
//!         .with_halign(HAlign::Center)
//!         .with_valign(VAlign::Middle),
//! ));
//!
//! let uri = plot.generate_uri()?;
//! assert!(uri.starts_with("http://chart.apis.google.com/chart?cht=lxy&chs=300x300&"));
//! # Ok::<(), chartmark::PlotError>(())
//! ```

pub mod elements;
pub mod encode;
pub mod errors;
pub mod log;
pub mod plot;
pub mod types;

pub use elements::{Graphic, GraphicElement, Shape, ShapeOptions, Text, TextOptions};
pub use encode::{escape_text, pixel_to_percent, pixel_to_relative, unescape_text};
pub use errors::PlotError;
pub use plot::{Plot, PlotOptions};
pub use types::{Color, HAlign, VAlign};
