//! SVG rendering for ranking boards.

use svg::{Document, node::element as svg_element};

use rollcall_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, TextStyle},
};

use super::Svg;
use crate::ranking::{Board, Slot};

const OUTLINE_WIDTH: f32 = 3.0;
const BADGE_RADIUS: f32 = 20.0;
const BADGE_ALPHA: f32 = 0.7;
const RANK_FONT_SIZE: u16 = 18;
const LABEL_FONT_SIZE: u16 = 14;
const LABEL_MIN_FONT_SIZE: u16 = 8;
/// Share of the slot radius a label may span.
const LABEL_WIDTH_RATIO: f32 = 1.6;

impl Svg {
    pub fn render_board(&self, board: &Board) -> Document {
        let mut output = LayeredOutput::new();
        for slot in board.slots() {
            output.merge(self.render_slot(slot));
        }
        self.document(board.size(), output)
    }

    /// Draws the slot circle, then its rank badge once ranked, otherwise its
    /// label.
    pub fn render_slot(&self, slot: &Slot) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let position = slot.position();

        let circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", slot.radius())
            .set("fill", &slot.color())
            .set("stroke", "white")
            .set("stroke-width", OUTLINE_WIDTH)
            .set("data-slot", slot.id().number());
        output.add_to_layer(RenderLayer::Shape, Box::new(circle));

        match (slot.rank(), slot.label()) {
            (Some(rank), _) => {
                let fill = Color::default().with_alpha(BADGE_ALPHA);
                let badge = svg_element::Circle::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("r", BADGE_RADIUS)
                    .set("fill", &fill)
                    .set("fill-opacity", fill.alpha());
                output.add_to_layer(RenderLayer::Badge, Box::new(badge));

                let text = TextStyle::new()
                    .with_font_size(RANK_FONT_SIZE)
                    .with_bold(true)
                    .render(position, &rank.to_string())
                    .set("fill", "white");
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
            (None, Some(label)) => {
                let max_width = slot.radius() * LABEL_WIDTH_RATIO;
                let text = TextStyle::new()
                    .with_font_size(LABEL_FONT_SIZE)
                    .with_bold(true)
                    .fit_to_width(label, max_width, LABEL_MIN_FONT_SIZE)
                    .render(position, label)
                    .set("fill", "white");
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
            (None, None) => {}
        }

        output
    }
}
