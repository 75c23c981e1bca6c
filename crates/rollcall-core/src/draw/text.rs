//! Text styling for labels, rank numbers and captions.
//!
//! Text is rendered as centered SVG `<text>` elements. There is no font
//! shaping here, widths are estimated from the character count, which is
//! enough to shrink long participant names until they fit inside a slot.

use log::trace;
use svg::node::element as svg_element;

use crate::geometry::Point;

const FONT_FAMILY: &str = "Arial";

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Visual style of a text element.
///
/// # Examples
///
/// ```
/// # use rollcall_core::draw::TextStyle;
/// # use rollcall_core::geometry::Point;
/// let style = TextStyle::new().with_font_size(18).with_bold(true);
/// let text = style.render(Point::new(100.0, 80.0), "3");
/// assert!(text.to_string().contains("font-weight=\"bold\""));
/// ```
#[derive(Debug, Clone)]
pub struct TextStyle {
    font_size: u16,
    bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14,
            bold: false,
        }
    }
}

impl TextStyle {
    /// Creates a text style with the default font (Arial, 14px, regular).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Estimated rendered width of `content` in this style.
    pub fn estimate_width(&self, content: &str) -> f32 {
        content.chars().count() as f32 * f32::from(self.font_size) * GLYPH_WIDTH_RATIO
    }

    /// Returns a copy of this style whose font size is reduced, one pixel at
    /// a time, until `content` fits in `max_width` or `min_size` is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rollcall_core::draw::TextStyle;
    /// let style = TextStyle::new().with_font_size(14);
    ///
    /// assert_eq!(style.fit_to_width("Kim", 62.4, 8).font_size(), 14);
    /// assert_eq!(style.fit_to_width("Bartholomew", 62.4, 8).font_size(), 9);
    /// assert_eq!(style.fit_to_width("A very long participant", 62.4, 8).font_size(), 8);
    /// ```
    pub fn fit_to_width(&self, content: &str, max_width: f32, min_size: u16) -> Self {
        let mut fitted = self.clone();
        while fitted.font_size > min_size && fitted.estimate_width(content) > max_width {
            fitted.font_size -= 1;
        }
        if fitted.estimate_width(content) > max_width {
            trace!(
                content,
                font_size = fitted.font_size,
                max_width;
                "Text overflows at minimum size"
            );
        }
        fitted
    }

    /// Renders `content` centered on `position`.
    pub fn render(&self, position: Point, content: &str) -> svg_element::Text {
        let mut text = svg_element::Text::new(content)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", self.font_size);

        if self.bold {
            text = text.set("font-weight", "bold");
        }

        text
    }
}
