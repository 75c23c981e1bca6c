//! Configuration types for Rollcall boards, rendering and users.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`BoardConfig`] - Board size, slot radius and placement policy.
//! - [`StyleConfig`] - Background color and slot palette.
//!
//! # Example
//!
//! ```
//! # use rollcall::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.board().min_distance(), 117.0);
//! assert_eq!(config.roster().unwrap().len(), 4);
//! ```

use serde::Deserialize;

use rollcall_core::{
    color::Color,
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    error::{InvalidInput, RollcallError},
    palette::Palette,
    user::{Roster, User},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Board and placement section.
    #[serde(default)]
    board: BoardConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,

    /// Calendar users. An empty list selects the default roster.
    #[serde(default)]
    users: Vec<User>,
}

impl AppConfig {
    pub fn new(board: BoardConfig, style: StyleConfig, users: Vec<User>) -> Self {
        Self {
            board,
            style,
            users,
        }
    }

    /// Returns the board configuration.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the configured users as a [`Roster`], or the default roster
    /// when none are configured.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] when two configured users share an id.
    pub fn roster(&self) -> Result<Roster, RollcallError> {
        if self.users.is_empty() {
            return Ok(Roster::default());
        }
        Roster::new(self.users.clone())
            .map_err(|err| RollcallError::Config(format!("Invalid users: {err}")))
    }
}

/// Board dimensions and placement policy.
///
/// | Key | Default |
/// |-----|---------|
/// | `width` | `800` |
/// | `height` | `500` |
/// | `radius` | `39` |
/// | `padding` | `30` |
/// | `separation_factor` | `3` |
/// | `max_attempts` | `1000` |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    width: f32,
    height: f32,
    radius: f32,
    padding: f32,
    separation_factor: f32,
    max_attempts: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            radius: 39.0,
            padding: 30.0,
            separation_factor: 3.0,
            max_attempts: 1000,
        }
    }
}

impl BoardConfig {
    /// Creates a board configuration of the given size with default policy.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_separation_factor(mut self, separation_factor: f32) -> Self {
        self.separation_factor = separation_factor;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Minimum distance between two slot centers.
    pub fn min_distance(&self) -> f32 {
        self.radius * self.separation_factor
    }

    /// Distance kept between slot centers and the board edges.
    pub fn margin(&self) -> f32 {
        self.radius + self.padding
    }

    /// Checks that every board dimension is usable for placement.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::BoardConfig`] for a non-finite value, a
    /// non-positive width, height, radius or separation factor, or a
    /// negative padding.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_finite("width", self.width, "positive", self.width > 0.0)?;
        check_finite("height", self.height, "positive", self.height > 0.0)?;
        check_finite("radius", self.radius, "positive", self.radius > 0.0)?;
        check_finite("padding", self.padding, "non-negative", self.padding >= 0.0)?;
        check_finite(
            "separation_factor",
            self.separation_factor,
            "positive",
            self.separation_factor > 0.0,
        )
    }

    /// The area slot centers are sampled from.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::BoardConfig`] for unusable dimensions and
    /// [`InvalidInput::BoardTooSmall`] when the margin leaves no room.
    pub fn placement_area(&self) -> Result<Bounds, InvalidInput> {
        self.validate()?;
        Bounds::new_from_top_left(Point::default(), self.size())
            .shrink(Insets::uniform(self.margin()))
            .ok_or(InvalidInput::BoardTooSmall {
                width: self.width,
                height: self.height,
                margin: self.margin(),
            })
    }
}

fn check_finite(
    field: &'static str,
    value: f32,
    expected: &'static str,
    in_range: bool,
) -> Result<(), InvalidInput> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(InvalidInput::BoardConfig {
            field,
            expected,
            value,
        })
    }
}

/// Visual styling configuration for rendered output.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Slot colors as CSS color strings.
    #[serde(default)]
    palette: Option<Vec<String>>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, palette: Option<Vec<String>>) -> Self {
        Self {
            background_color,
            palette,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, RollcallError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| RollcallError::Config(format!("Invalid background color: {err}")))
    }

    /// Returns the configured [`Palette`], or the default one.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable color or an empty palette.
    pub fn palette(&self) -> Result<Palette, RollcallError> {
        match &self.palette {
            Some(colors) => Palette::parse(colors),
            None => Ok(Palette::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::assert_approx_eq;

    #[test]
    fn test_board_defaults() {
        let board = BoardConfig::default();
        assert_approx_eq!(f32, board.radius(), 39.0);
        assert_approx_eq!(f32, board.min_distance(), 117.0);
        assert_approx_eq!(f32, board.margin(), 69.0);
        assert_eq!(board.max_attempts(), 1000);
    }

    #[test]
    fn test_placement_area() {
        let area = BoardConfig::default().placement_area().unwrap();
        assert_approx_eq!(f32, area.min_x(), 69.0);
        assert_approx_eq!(f32, area.min_y(), 69.0);
        assert_approx_eq!(f32, area.max_x(), 731.0);
        assert_approx_eq!(f32, area.max_y(), 431.0);
    }

    #[test]
    fn test_placement_area_too_small() {
        let err = BoardConfig::new(120.0, 500.0).placement_area().unwrap_err();
        assert!(matches!(err, InvalidInput::BoardTooSmall { .. }));
    }

    #[test]
    fn test_infinite_width_rejected() {
        let config: AppConfig = toml::from_str("[board]\nwidth = inf").unwrap();
        assert_eq!(
            config.board().placement_area(),
            Err(InvalidInput::BoardConfig {
                field: "width",
                expected: "positive",
                value: f32::INFINITY,
            })
        );
    }

    #[test]
    fn test_nan_height_rejected() {
        let err = BoardConfig::new(800.0, f32::NAN).validate().unwrap_err();
        assert!(matches!(
            err,
            InvalidInput::BoardConfig {
                field: "height",
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        for radius in [-60.0, 0.0] {
            let err = BoardConfig::default()
                .with_radius(radius)
                .placement_area()
                .unwrap_err();
            assert!(matches!(
                err,
                InvalidInput::BoardConfig {
                    field: "radius",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_padding_and_separation_rules() {
        assert!(BoardConfig::default().with_padding(0.0).validate().is_ok());
        assert!(matches!(
            BoardConfig::default().with_padding(-1.0).validate(),
            Err(InvalidInput::BoardConfig {
                field: "padding",
                expected: "non-negative",
                ..
            })
        ));
        for factor in [0.0, f32::INFINITY] {
            assert!(matches!(
                BoardConfig::default().with_separation_factor(factor).validate(),
                Err(InvalidInput::BoardConfig {
                    field: "separation_factor",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_style_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color().unwrap(), None);
        assert_eq!(style.palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_style_invalid_background() {
        let style = StyleConfig::new(Some("sparkly".to_string()), None);
        assert!(matches!(
            style.background_color(),
            Err(RollcallError::Config(_))
        ));
    }

    #[test]
    fn test_deserialize_partial_board() {
        let config: AppConfig = serde_json::from_str(
            r#"{"board": {"width": 400, "radius": 20}, "style": {"palette": ["red"]}}"#,
        )
        .unwrap();

        assert_eq!(config.board().size(), Size::new(400.0, 500.0));
        assert_approx_eq!(f32, config.board().min_distance(), 60.0);
        assert_eq!(config.style().palette().unwrap().colors().len(), 1);
    }

    #[test]
    fn test_configured_users_replace_default_roster() {
        let config: AppConfig = serde_json::from_str(
            r#"{"users": [{"id": 10, "display_name": "Ara", "avatar_ref": "ara.png"}]}"#,
        )
        .unwrap();

        let roster = config.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.contains(crate::user::UserId::new(10)));
    }

    #[test]
    fn test_duplicate_user_ids_are_config_errors() {
        let config: AppConfig = serde_json::from_str(
            r#"{"users": [{"id": 4, "display_name": "Ara"}, {"id": 4, "display_name": "Bea"}]}"#,
        )
        .unwrap();

        match config.roster() {
            Err(RollcallError::Config(message)) => {
                assert_eq!(message, "Invalid users: user id 4 appears more than once");
            }
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
