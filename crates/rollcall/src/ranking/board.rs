//! The board: placed slots and pointer hit-testing.

use log::debug;
use rand::Rng;

use rollcall_core::geometry::{Point, Size};

use crate::{
    config::BoardConfig,
    error::InvalidInput,
    palette::Palette,
    placement::Placer,
    ranking::{Participants, Rank, Slot, SlotId},
};

/// Slots laid out on a bounded board.
#[derive(Debug, Clone)]
pub struct Board {
    size: Size,
    slots: Vec<Slot>,
}

impl Board {
    /// Places one slot per participant.
    ///
    /// Labels are attached in participant order and colors drawn from
    /// `palette`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::BoardConfig`] for unusable board dimensions
    /// and [`InvalidInput::BoardTooSmall`] when the board margin leaves
    /// no room to place slots.
    pub fn generate<R: Rng + ?Sized>(
        participants: &Participants,
        config: &BoardConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<Self, InvalidInput> {
        let placer = Placer::from_config(config)?;
        let points = placer.place(participants.len(), rng);
        let labels = participants.labels();

        let slots = points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                let label = labels.and_then(|labels| labels.get(index)).cloned();
                Slot::new(
                    SlotId::new(index),
                    point.position(),
                    config.radius(),
                    palette.choose(rng),
                    label,
                    point.placement(),
                )
            })
            .collect();

        Ok(Self {
            size: config.size(),
            slots,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots placed without the separation guarantee.
    pub fn degraded_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.placement().is_degraded())
            .count()
    }

    /// First slot, in slot order, whose disk contains `point` and that has
    /// no rank yet.
    pub fn unranked_slot_at(&self, point: Point) -> Option<SlotId> {
        let hit = self
            .slots
            .iter()
            .find(|slot| !slot.is_ranked() && slot.contains(point))
            .map(Slot::id);
        debug!(x = point.x(), y = point.y(), hit:?; "Hit test");
        hit
    }

    pub(crate) fn assign(&mut self, id: SlotId, rank: Rank) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            slot.assign(rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    fn board(participants: &Participants) -> Board {
        let mut rng = StdRng::seed_from_u64(21);
        Board::generate(
            participants,
            &BoardConfig::default(),
            &Palette::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_slot_ids_follow_order() {
        let board = board(&Participants::count(6).unwrap());
        assert_eq!(board.len(), 6);
        for (index, slot) in board.slots().iter().enumerate() {
            assert_eq!(slot.id(), SlotId::new(index));
            assert_eq!(slot.rank(), None);
            assert_eq!(slot.label(), None);
        }
    }

    #[test]
    fn test_generate_attaches_labels_in_order() {
        let board = board(&Participants::named(["Ann", "Bo", "Cy"]).unwrap());
        let labels: Vec<_> = board.slots().iter().map(|s| s.label().unwrap()).collect();
        assert_eq!(labels, ["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn test_generate_uses_palette_colors() {
        let palette = Palette::default();
        let board = board(&Participants::count(30).unwrap());
        for slot in board.slots() {
            assert!(palette.colors().contains(&slot.color()));
        }
    }

    #[test]
    fn test_generate_rejects_tiny_board() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Board::generate(
            &Participants::count(2).unwrap(),
            &BoardConfig::new(100.0, 100.0),
            &Palette::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(InvalidInput::BoardTooSmall { .. })));
    }

    #[test]
    fn test_generate_rejects_negative_radius() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Board::generate(
            &Participants::count(10).unwrap(),
            &BoardConfig::default().with_radius(-60.0),
            &Palette::default(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(InvalidInput::BoardConfig {
                field: "radius",
                ..
            })
        ));
    }

    #[test]
    fn test_hit_test() {
        let mut board = board(&Participants::count(3).unwrap());
        let target = board.slots()[1].clone();

        assert_eq!(board.unranked_slot_at(target.position()), Some(target.id()));

        let edge = target
            .position()
            .add_point(Point::new(target.radius() - 0.5, 0.0));
        assert_eq!(board.unranked_slot_at(edge), Some(target.id()));

        board.assign(target.id(), Rank::new(1));
        assert_eq!(board.unranked_slot_at(target.position()), None);
    }

    #[test]
    fn test_hit_test_misses_empty_space() {
        let board = board(&Participants::count(2).unwrap());
        assert_eq!(board.unranked_slot_at(Point::new(-500.0, -500.0)), None);
    }
}
