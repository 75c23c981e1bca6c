//! SVG rendering for the results table.

use svg::{Document, node::element as svg_element};

use rollcall_core::{
    draw::{LayeredOutput, RenderLayer, TextStyle},
    geometry::{Point, Size},
};

use super::Svg;
use crate::ranking::RankedEntry;

const WIDTH: f32 = 360.0;
const HEADER_HEIGHT: f32 = 56.0;
const ROW_HEIGHT: f32 = 40.0;
const SWATCH_RADIUS: f32 = 12.0;
const RANK_COLUMN_X: f32 = 40.0;
const SWATCH_COLUMN_X: f32 = 90.0;
const NAME_COLUMN_X: f32 = 220.0;
const STRIPE_FILL: &str = "#F2F2F2";

impl Svg {
    /// One row per entry, in the given order.
    pub fn render_results(&self, results: &[RankedEntry]) -> Document {
        let mut output = LayeredOutput::new();

        let title = TextStyle::new()
            .with_font_size(20)
            .with_bold(true)
            .render(Point::new(WIDTH / 2.0, HEADER_HEIGHT / 2.0), "Results");
        output.add_to_layer(RenderLayer::Text, Box::new(title));

        for (row, entry) in results.iter().enumerate() {
            output.merge(self.render_result_row(row, entry));
        }

        let height = HEADER_HEIGHT + ROW_HEIGHT * results.len() as f32;
        self.document(Size::new(WIDTH, height), output)
    }

    fn render_result_row(&self, row: usize, entry: &RankedEntry) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let top = HEADER_HEIGHT + ROW_HEIGHT * row as f32;
        let center_y = top + ROW_HEIGHT / 2.0;

        if row % 2 == 0 {
            let stripe = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", top)
                .set("width", WIDTH)
                .set("height", ROW_HEIGHT)
                .set("fill", STRIPE_FILL);
            output.add_to_layer(RenderLayer::Grid, Box::new(stripe));
        }

        let swatch = svg_element::Circle::new()
            .set("cx", SWATCH_COLUMN_X)
            .set("cy", center_y)
            .set("r", SWATCH_RADIUS)
            .set("fill", &entry.color());
        output.add_to_layer(RenderLayer::Shape, Box::new(swatch));

        let rank = TextStyle::new()
            .with_font_size(16)
            .with_bold(true)
            .render(Point::new(RANK_COLUMN_X, center_y), &format!("#{}", entry.rank()));
        output.add_to_layer(RenderLayer::Text, Box::new(rank));

        let name = TextStyle::new()
            .with_font_size(16)
            .render(Point::new(NAME_COLUMN_X, center_y), entry.name());
        output.add_to_layer(RenderLayer::Text, Box::new(name));

        output
    }
}
