//! Participant slots and the values they are ranked with.

use std::fmt;

use serde::Serialize;

use rollcall_core::{color::Color, geometry::Point};

use crate::placement::Placement;

/// Zero-based index of a slot on its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SlotId(usize);

impl SlotId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number shown to people.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

/// A rank value in `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rank(u32);

impl Rank {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant token placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    id: SlotId,
    position: Point,
    radius: f32,
    color: Color,
    label: Option<String>,
    placement: Placement,
    rank: Option<Rank>,
}

impl Slot {
    pub(crate) fn new(
        id: SlotId,
        position: Point,
        radius: f32,
        color: Color,
        label: Option<String>,
        placement: Placement,
    ) -> Self {
        Self {
            id,
            position,
            radius,
            color,
            label,
            placement,
            rank: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }

    /// The label, or `Participant N` for unlabeled slots.
    pub fn display_name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Participant {}", self.id.number()))
    }

    /// Returns true if `point` falls on the slot's disk, edge included.
    pub fn contains(&self, point: Point) -> bool {
        point.is_within(self.position, self.radius)
    }

    /// Ranks are write-once; callers check [`Slot::is_ranked`] first.
    pub(crate) fn assign(&mut self, rank: Rank) {
        debug_assert!(self.rank.is_none(), "slot {:?} ranked twice", self.id);
        self.rank = Some(rank);
    }
}
