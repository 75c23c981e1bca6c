//! Rollcall - random ranking boards and group availability calendars.
//!
//! Two small engines live here. The [`ranking`] engine places one circle per
//! participant on a bounded board and hands out shuffled ranks as circles
//! are picked. The [`availability`] engine tracks which users can attend on
//! which days and finds the days most of them can make.
//!
//! Both engines are plain values driven through `&mut self` with a
//! caller-supplied random source, so they are deterministic under a seeded
//! [`rand::rngs::StdRng`]. [`Rollcall`] ties them to an [`AppConfig`] and to
//! the SVG exporter.

pub mod availability;
pub mod config;
pub mod export;
pub mod palette;
pub mod placement;
pub mod ranking;
pub mod user;

mod error;

pub use rollcall_core::{color, geometry};

pub use error::{InvalidInput, RollcallError};

use std::path::Path;

use log::{debug, info};
use rand::Rng;

use availability::{AvailabilitySession, YearMonth};
use config::AppConfig;
use export::{Exporter, svg::Svg};
use ranking::{Board, Participants, RankedEntry, RankingSession};

/// Entry point for starting sessions and rendering them.
///
/// # Examples
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use rollcall::{Rollcall, config::AppConfig, ranking::Participants};
///
/// let rollcall = Rollcall::new(AppConfig::default());
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let session = rollcall
///     .start_ranking(&Participants::count(4).unwrap(), &mut rng)
///     .expect("Failed to start ranking");
///
/// let svg = rollcall
///     .render_board_svg(session.board())
///     .expect("Failed to render board");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct Rollcall {
    config: AppConfig,
}

impl Rollcall {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Starts a ranking game with the configured board and palette.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an invalid palette and
    /// [`RollcallError::InvalidInput`] when the board cannot be built.
    pub fn start_ranking<R: Rng + ?Sized>(
        &self,
        participants: &Participants,
        rng: &mut R,
    ) -> Result<RankingSession, RollcallError> {
        let palette = self.config.style().palette()?;
        let session = RankingSession::new(participants, self.config.board(), &palette, rng)?;
        Ok(session)
    }

    /// Starts an availability calendar for the configured roster.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] when configured users share an id.
    pub fn start_calendar(&self, month: YearMonth) -> Result<AvailabilitySession, RollcallError> {
        Ok(AvailabilitySession::new(self.config.roster()?, month))
    }

    /// Renders `board` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an invalid background color.
    pub fn render_board_svg(&self, board: &Board) -> Result<String, RollcallError> {
        let svg = self.svg()?;
        Ok(svg.render_board(board).to_string())
    }

    /// Renders the results table to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an invalid background color.
    pub fn render_results_svg(&self, results: &[RankedEntry]) -> Result<String, RollcallError> {
        let svg = self.svg()?;
        Ok(svg.render_results(results).to_string())
    }

    /// Renders the displayed month of `session` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an invalid background color.
    pub fn render_month_svg(&self, session: &AvailabilitySession) -> Result<String, RollcallError> {
        let svg = self.svg()?;
        Ok(svg.render_month(session).to_string())
    }

    /// Writes `board` as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Export`] if the file cannot be written.
    pub fn export_board(&self, board: &Board, path: impl AsRef<Path>) -> Result<(), RollcallError> {
        self.svg()?.export_board(board, path.as_ref())?;
        info!(slots = board.len(); "Board exported");
        Ok(())
    }

    /// Writes the results table as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Export`] for an empty result list or if the
    /// file cannot be written.
    pub fn export_results(
        &self,
        results: &[RankedEntry],
        path: impl AsRef<Path>,
    ) -> Result<(), RollcallError> {
        self.svg()?.export_results(results, path.as_ref())?;
        info!(rows = results.len(); "Results exported");
        Ok(())
    }

    /// Writes the displayed month of `session` as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Export`] if the file cannot be written.
    pub fn export_month(
        &self,
        session: &AvailabilitySession,
        path: impl AsRef<Path>,
    ) -> Result<(), RollcallError> {
        self.svg()?.export_month(session, path.as_ref())?;
        info!(month:% = session.displayed(); "Calendar exported");
        Ok(())
    }

    fn svg(&self) -> Result<Svg, RollcallError> {
        debug!("Building SVG exporter");
        export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()
    }
}
