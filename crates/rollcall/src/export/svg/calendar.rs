//! SVG rendering for availability calendars.

use chrono::{Datelike, Weekday};
use svg::{Document, node::element as svg_element};

use rollcall_core::{
    draw::{LayeredOutput, RenderLayer, TextStyle},
    geometry::{Point, Size},
};

use super::Svg;
use crate::{
    availability::{AvailabilitySession, DayCell},
    user::Roster,
};

const CELL_WIDTH: f32 = 90.0;
const CELL_HEIGHT: f32 = 70.0;
const TITLE_HEIGHT: f32 = 50.0;
const WEEKDAY_HEIGHT: f32 = 30.0;
const CELL_STROKE: &str = "#CCCCCC";
const HIGHLIGHT_FILL: &str = "#FFEAA7";
const HIGHLIGHT_STROKE: &str = "#F8B739";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl Svg {
    /// Renders the displayed month as a Monday-first grid.
    pub fn render_month(&self, session: &AvailabilitySession) -> Document {
        let month = session.displayed();
        let grid = session.month_grid();
        let offset = month.first_day().weekday().num_days_from_monday() as usize;
        let rows = (offset + grid.len()).div_ceil(7);
        let width = CELL_WIDTH * 7.0;

        let mut output = LayeredOutput::new();

        let title = TextStyle::new()
            .with_font_size(22)
            .with_bold(true)
            .render(Point::new(width / 2.0, TITLE_HEIGHT / 2.0), &month.to_string());
        output.add_to_layer(RenderLayer::Text, Box::new(title));

        for (column, weekday) in WEEKDAYS.iter().enumerate() {
            let center = Point::new(
                CELL_WIDTH * column as f32 + CELL_WIDTH / 2.0,
                TITLE_HEIGHT + WEEKDAY_HEIGHT / 2.0,
            );
            let label = TextStyle::new()
                .with_font_size(13)
                .render(center, &weekday.to_string());
            output.add_to_layer(RenderLayer::Text, Box::new(label));
        }

        for (index, cell) in grid.iter().enumerate() {
            let slot = offset + index;
            let top_left = Point::new(
                CELL_WIDTH * (slot % 7) as f32,
                TITLE_HEIGHT + WEEKDAY_HEIGHT + CELL_HEIGHT * (slot / 7) as f32,
            );
            output.merge(self.render_day(cell, top_left, session.roster()));
        }

        let height = TITLE_HEIGHT + WEEKDAY_HEIGHT + CELL_HEIGHT * rows as f32;
        self.document(Size::new(width, height), output)
    }

    fn render_day(&self, cell: &DayCell, top_left: Point, roster: &Roster) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let frame = svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", CELL_WIDTH)
            .set("height", CELL_HEIGHT)
            .set("fill", "white")
            .set("stroke", CELL_STROKE)
            .set("data-date", cell.date.to_string());
        output.add_to_layer(RenderLayer::Grid, Box::new(frame));

        if cell.highlighted {
            let highlight = svg_element::Rectangle::new()
                .set("x", top_left.x() + 2.0)
                .set("y", top_left.y() + 2.0)
                .set("width", CELL_WIDTH - 4.0)
                .set("height", CELL_HEIGHT - 4.0)
                .set("fill", HIGHLIGHT_FILL)
                .set("stroke", HIGHLIGHT_STROKE)
                .set("stroke-width", 2)
                .set("data-highlight", "true");
            output.add_to_layer(RenderLayer::Shape, Box::new(highlight));
        }

        let day_number = TextStyle::new()
            .with_font_size(12)
            .render(
                top_left.add_point(Point::new(14.0, 12.0)),
                &cell.date.day().to_string(),
            );
        output.add_to_layer(RenderLayer::Text, Box::new(day_number));

        if !cell.attendees.is_empty() {
            let count = TextStyle::new()
                .with_font_size(18)
                .with_bold(true)
                .render(
                    top_left.add_point(Point::new(CELL_WIDTH / 2.0, CELL_HEIGHT / 2.0)),
                    &cell.attendees.len().to_string(),
                );
            output.add_to_layer(RenderLayer::Text, Box::new(count));

            let initials: String = cell
                .attendees
                .iter()
                .filter_map(|id| roster.get(*id).and_then(|user| user.initial()))
                .collect();
            let initials = TextStyle::new()
                .with_font_size(11)
                .fit_to_width(&initials, CELL_WIDTH - 8.0, 6)
                .render(
                    top_left.add_point(Point::new(CELL_WIDTH / 2.0, CELL_HEIGHT - 12.0)),
                    &initials,
                );
            output.add_to_layer(RenderLayer::Text, Box::new(initials));
        }

        output
    }
}
