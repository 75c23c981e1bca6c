//! SVG export backend.

mod board;
mod calendar;
mod results;

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use rollcall_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::Size,
};

use crate::{
    availability::AvailabilitySession,
    config::StyleConfig,
    error::RollcallError,
    export,
    ranking::{Board, RankedEntry},
};

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an unparsable background color.
    pub fn build(self) -> Result<Svg, RollcallError> {
        let background = match self.style {
            Some(style) => style.background_color()?,
            None => None,
        };
        Ok(Svg { background })
    }
}

/// Renders boards, results and calendars to SVG documents.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    background: Option<Color>,
}

impl Svg {
    /// Wraps rendered layers into a document of `size`.
    fn document(&self, size: Size, mut output: LayeredOutput) -> Document {
        if let Some(background) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", background);
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        for node in output.render() {
            doc = doc.add(node);
        }

        debug!(width = size.width(), height = size.height(); "SVG document rendered");
        doc
    }

    /// Writes an SVG document to `path`.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_board(&self, board: &Board, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_board(board);
        self.write_document(&doc, path)
    }

    fn export_results(&self, results: &[RankedEntry], path: &Path) -> Result<(), export::Error> {
        if results.is_empty() {
            return Err(export::Error::Render(
                "there are no results to export".to_string(),
            ));
        }
        let doc = self.render_results(results);
        self.write_document(&doc, path)
    }

    fn export_month(&self, session: &AvailabilitySession, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_month(session);
        self.write_document(&doc, path)
    }
}
