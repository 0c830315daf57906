//! The plot: canvas settings plus an ordered display list

use crate::elements::GraphicElement;
use crate::encode::{self, defaults};
use crate::errors::PlotError;
use crate::types::Color;

/// Canvas settings for a [`Plot`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Width in pixels, at least 1
    pub width: u32,
    /// Height in pixels, at least 1
    pub height: u32,
    /// Background color, or gradient start color
    pub fill_color1: Color,
    /// Gradient end color. `None` (or equal to `fill_color1`) gives a solid background.
    pub fill_color2: Option<Color>,
    /// Gradient angle in degrees; 0 runs left to right
    pub angle: f64,
    /// Chart endpoint the URI is built against
    pub service_url: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: defaults::PLOT_WIDTH,
            height: defaults::PLOT_HEIGHT,
            fill_color1: defaults::BACKGROUND,
            fill_color2: None,
            angle: defaults::ANGLE,
            service_url: defaults::SERVICE_URL.to_string(),
        }
    }
}

impl PlotOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.fill_color1 = color;
        self
    }

    /// Fade from `fill_color1` to `color` at `angle` degrees
    pub fn with_gradient(mut self, color: Color, angle: f64) -> Self {
        self.fill_color2 = Some(color);
        self.angle = angle;
        self
    }

    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }
}

/// Container that encodes its elements as a chart request
///
/// Elements are drawn in the order they are added, so the last one added is
/// on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    width: u32,
    height: u32,
    fill_color1: Color,
    fill_color2: Option<Color>,
    angle: f64,
    service_url: String,
    elements: Vec<GraphicElement>,
}

impl Default for Plot {
    fn default() -> Self {
        let options = PlotOptions::default();
        Self {
            width: options.width,
            height: options.height,
            fill_color1: options.fill_color1,
            fill_color2: options.fill_color2,
            angle: options.angle,
            service_url: options.service_url,
            elements: Vec::new(),
        }
    }
}

impl Plot {
    /// Create an empty plot. Fails if either dimension is zero.
    pub fn new(options: PlotOptions) -> Result<Self, PlotError> {
        if options.width == 0 {
            return Err(PlotError::InvalidDimension {
                axis: "width",
                value: options.width,
            });
        }
        if options.height == 0 {
            return Err(PlotError::InvalidDimension {
                axis: "height",
                value: options.height,
            });
        }

        Ok(Self {
            width: options.width,
            height: options.height,
            fill_color1: options.fill_color1,
            fill_color2: options.fill_color2,
            angle: options.angle,
            service_url: options.service_url,
            elements: Vec::new(),
        })
    }

    /// Push an element on top of the display list.
    pub fn add_element(&mut self, element: impl Into<GraphicElement>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[GraphicElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill_color1(&self) -> Color {
        self.fill_color1
    }

    pub fn fill_color2(&self) -> Option<Color> {
        self.fill_color2
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Request URI that renders this plot. See [`encode::generate_uri`].
    pub fn generate_uri(&self) -> Result<String, PlotError> {
        encode::generate_uri(self)
    }

    /// `src`/`width`/`height` attributes for embedding in an `<img>` tag
    pub fn generate_img_uri(&self) -> Result<String, PlotError> {
        encode::generate_img_uri(self)
    }
}
