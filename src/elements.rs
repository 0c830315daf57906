//! Graphic elements that can be placed on a plot
//!
//! Each element is an immutable value anchored at an origin in pixel space:
//! - [`Shape`]: a closed polygon with optional outline and fill colors
//! - [`Text`]: a label with size, color and alignment

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::encode::defaults;
use crate::types::{Color, HAlign, VAlign};

/// Common behavior for all graphic elements
#[enum_dispatch]
pub trait Graphic {
    /// Anchor point of the element, in pixels
    fn origin(&self) -> DVec2;
}

/// Anything that can be added to a [`Plot`](crate::Plot)
#[enum_dispatch(Graphic)]
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicElement {
    Shape,
    Text,
}

// ============================================================================
// Shape
// ============================================================================

/// Optional colors for a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeOptions {
    /// Outline color; `None` draws no outline
    pub outline_color: Option<Color>,
    /// Fill color; `None` leaves the shape unfilled
    pub fill_color: Option<Color>,
}

impl ShapeOptions {
    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }
}

/// A closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    origin: DVec2,
    points: Vec<DVec2>,
    outline_color: Option<Color>,
    fill_color: Option<Color>,
}

impl Shape {
    /// Create a polygon at `origin`. Each point is an offset from the origin.
    ///
    /// If the last point differs from the first, the first point is appended
    /// so the polygon is always closed. An empty point list stays empty.
    pub fn new<P>(origin: impl Into<DVec2>, points: impl IntoIterator<Item = P>, options: ShapeOptions) -> Self
    where
        P: Into<DVec2>,
    {
        let mut points: Vec<DVec2> = points.into_iter().map(Into::into).collect();
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }

        Self {
            origin: origin.into(),
            points,
            outline_color: options.outline_color,
            fill_color: options.fill_color,
        }
    }

    /// Point offsets, closed when non-empty
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Points translated by the origin into absolute pixel positions
    pub fn absolute_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(move |&p| self.origin + p)
    }

    pub fn outline_color(&self) -> Option<Color> {
        self.outline_color
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Graphic for Shape {
    fn origin(&self) -> DVec2 {
        self.origin
    }
}

// ============================================================================
// Text
// ============================================================================

/// Styling for a [`Text`] label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// Font size in pixels
    pub size: u32,
    pub color: Color,
    pub halign: HAlign,
    pub valign: VAlign,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: defaults::TEXT_SIZE,
            color: defaults::TEXT_COLOR,
            halign: HAlign::default(),
            valign: VAlign::default(),
        }
    }
}

impl TextOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_halign(mut self, halign: HAlign) -> Self {
        self.halign = halign;
        self
    }

    pub fn with_valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }
}

/// A text label anchored at its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    origin: DVec2,
    text: String,
    size: u32,
    color: Color,
    halign: HAlign,
    valign: VAlign,
}

impl Text {
    pub fn new(origin: impl Into<DVec2>, text: impl Into<String>, options: TextOptions) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            size: options.size,
            color: options.color,
            halign: options.halign,
            valign: options.valign,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn halign(&self) -> HAlign {
        self.halign
    }

    pub fn valign(&self) -> VAlign {
        self.valign
    }

    /// Two-character alignment code: horizontal then vertical, e.g. `"hv"`
    pub fn alignment(&self) -> String {
        [self.halign.code(), self.valign.code()].iter().collect()
    }
}

impl Graphic for Text {
    fn origin(&self) -> DVec2 {
        self.origin
    }
}
