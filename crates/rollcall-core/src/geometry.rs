//! Geometric primitives for board placement and rendering.
//!
//! This module provides the small set of geometric types Rollcall needs to
//! place participant slots on a board and to render them.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in board space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular area defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Rollcall uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner of the board, X grows to the right and
//! Y grows downward.

/// A 2D point representing a position in board coordinate space.
///
/// # Examples
///
/// ```
/// # use rollcall_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(a.distance_to(b), 5.0);
/// assert_eq!(b.distance_to(a), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between this point and another point.
    pub fn distance_to(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Returns true if this point lies within `radius` of `center`.
    ///
    /// Points exactly on the circle boundary are considered inside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rollcall_core::geometry::Point;
    /// let center = Point::new(100.0, 100.0);
    ///
    /// assert!(Point::new(130.0, 140.0).is_within(center, 50.0));
    /// assert!(!Point::new(131.0, 140.0).is_within(center, 50.0));
    /// ```
    pub fn is_within(self, center: Point, radius: f32) -> bool {
        self.distance_to(center) <= radius
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular area with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if the point lies inside the bounds, edges included.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Shrinks the bounds by the given insets.
    ///
    /// Returns `None` when the insets consume the whole width or height, so
    /// callers never sample from an inverted range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rollcall_core::geometry::{Bounds, Insets, Point, Size};
    /// let board = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(800.0, 500.0));
    ///
    /// let inner = board.shrink(Insets::uniform(69.0)).unwrap();
    /// assert_eq!(inner.min_x(), 69.0);
    /// assert_eq!(inner.max_y(), 431.0);
    ///
    /// assert!(board.shrink(Insets::uniform(400.0)).is_none());
    /// ```
    pub fn shrink(self, insets: Insets) -> Option<Self> {
        let shrunk = Self {
            min_x: self.min_x + insets.left(),
            min_y: self.min_y + insets.top(),
            max_x: self.max_x - insets.right(),
            max_y: self.max_y - insets.bottom(),
        };

        (shrunk.width() > 0.0 && shrunk.height() > 0.0).then_some(shrunk)
    }
}

/// Represents spacing around an element (padding, margin, etc.)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}
