//! Decorative slot colors.

use rand::Rng;

use rollcall_core::color::Color;

use crate::error::{InvalidInput, RollcallError};

/// Colors slots are painted with when no palette is configured.
pub const DEFAULT_PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E2", "#F8B739", "#52B788", "#E76F51", "#F72585", "#7209B7",
];

/// A fixed, non-empty set of colors slots are drawn from uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from already parsed colors.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyPalette`] when `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, InvalidInput> {
        if colors.is_empty() {
            return Err(InvalidInput::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parses a palette from CSS color strings.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Config`] for an unparsable color and
    /// [`RollcallError::InvalidInput`] for an empty list.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, RollcallError> {
        let colors = colors
            .iter()
            .map(|color| Color::new(color.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| RollcallError::Config(format!("Invalid palette color: {err}")))?;

        Ok(Self::new(colors)?)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Picks a color uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.colors[rng.random_range(0..self.colors.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .map(|color| Color::new(color).expect("default palette colors are valid"))
            .collect();
        Self { colors }
    }
}
