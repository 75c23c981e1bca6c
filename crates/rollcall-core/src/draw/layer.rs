//! Layer-based rendering system for SVG output.
//!
//! Renderers add nodes to a [`LayeredOutput`] tagged with a [`RenderLayer`];
//! rendering emits one `<g>` per non-empty layer, bottom layer first. This
//! keeps rank badges above slot circles and text above everything, no matter
//! in which order the slots are visited.
//!
//! # Example
//!
//! ```
//! # use rollcall_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Text};
//!
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("3")));
//! output.add_to_layer(RenderLayer::Shape, Box::new(Circle::new().set("r", 39)));
//!
//! // Shape renders before Text even though it was added later
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page background - renders first
    Background,
    /// Calendar cells, result rows and other structural fills
    Grid,
    /// Slot circles, color swatches and highlights
    Shape,
    /// Rank badges drawn over a slot
    Badge,
    /// Labels, rank numbers and captions
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Shape => "shape",
            Self::Badge => "badge",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes within a layer keep the order they were added in.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of `other` to this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Rectangle};

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Shape, Box::new(Circle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Badge, Box::new(Circle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_groups_same_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Shape, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Shape, Box::new(Circle::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_renders_bottom_first() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Badge, Box::new(Rectangle::new()));

        let document = output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string();

        let background = document.find("data-layer=\"background\"").unwrap();
        let badge = document.find("data-layer=\"badge\"").unwrap();
        let text = document.find("data-layer=\"text\"").unwrap();
        assert!(background < badge);
        assert!(badge < text);
    }

    #[test]
    fn test_render_layer_order() {
        assert!(RenderLayer::Background < RenderLayer::Grid);
        assert!(RenderLayer::Shape < RenderLayer::Badge);
        assert!(RenderLayer::Badge < RenderLayer::Text);
    }
}
