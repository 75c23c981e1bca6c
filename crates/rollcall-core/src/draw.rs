//! Drawing primitives shared by the board, results and calendar renderers.
//!
//! - [`RenderLayer`] and [`LayeredOutput`] order SVG nodes bottom to top.
//! - [`TextStyle`] renders labels and picks a font size that fits a width.

mod layer;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use text::TextStyle;
