//! A single game of the random ranking board.

use std::fmt;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use rollcall_core::{color::Color, geometry::Point};

use crate::{
    config::BoardConfig,
    error::InvalidInput,
    palette::Palette,
    ranking::{Board, Participants, PoolState, Rank, RankPool, SlotId},
};

/// Why a selection did not assign a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Every rank has been handed out.
    Complete,
    /// No slot has this id.
    UnknownSlot,
    /// The slot already holds a rank.
    AlreadyRanked,
    /// No unranked slot lies under the pointer.
    Missed,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Complete => "ranking is complete",
            Self::UnknownSlot => "no such slot",
            Self::AlreadyRanked => "slot is already ranked",
            Self::Missed => "no unranked slot at that position",
        };
        f.write_str(reason)
    }
}

/// Outcome of a selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Assigned { slot: SlotId, rank: Rank },
    Ignored(IgnoreReason),
}

/// How far a session has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub assigned: usize,
    pub total: usize,
    pub remaining: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (remaining {})",
            self.assigned, self.total, self.remaining
        )
    }
}

/// One line of the final results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    rank: Rank,
    slot: SlotId,
    name: String,
    color: Color,
}

impl RankedEntry {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A ranking game: a board of slots plus the pool of ranks left to hand out.
///
/// Sessions are not reset; start a new one for a new game.
#[derive(Debug, Clone)]
pub struct RankingSession {
    board: Board,
    pool: RankPool,
    assignments: Vec<(SlotId, Rank)>,
}

impl RankingSession {
    /// Shuffles the rank pool and places the board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for an unsupported participant count or a
    /// board too small for its margin. Nothing is built in that case.
    pub fn new<R: Rng + ?Sized>(
        participants: &Participants,
        config: &BoardConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<Self, InvalidInput> {
        let pool = RankPool::shuffled(participants.len(), rng)?;
        let board = Board::generate(participants, config, palette, rng)?;

        info!(
            participants = participants.len(),
            degraded = board.degraded_count();
            "Ranking session started"
        );

        Ok(Self {
            board,
            pool,
            assignments: Vec::with_capacity(participants.len()),
        })
    }

    /// Hands the next rank to `slot`.
    ///
    /// Selecting after completion, an unknown slot, or an already ranked slot
    /// changes nothing and reports why.
    pub fn select_slot(&mut self, slot: SlotId) -> Selection {
        if self.pool.is_complete() {
            return Selection::Ignored(IgnoreReason::Complete);
        }

        match self.board.slot(slot) {
            None => return Selection::Ignored(IgnoreReason::UnknownSlot),
            Some(found) if found.is_ranked() => {
                return Selection::Ignored(IgnoreReason::AlreadyRanked);
            }
            Some(_) => {}
        }

        let Some(rank) = self.pool.pop() else {
            return Selection::Ignored(IgnoreReason::Complete);
        };

        self.board.assign(slot, rank);
        self.assignments.push((slot, rank));
        debug!(slot = slot.number(), rank = rank.get(), progress:% = self.progress(); "Rank assigned");

        if self.pool.is_complete() {
            info!(participants = self.pool.total(); "Ranking complete");
        }

        Selection::Assigned { slot, rank }
    }

    /// Hit-tests `point` against the board and selects the slot found.
    pub fn select_at(&mut self, point: Point) -> Selection {
        match self.board.unranked_slot_at(point) {
            Some(slot) => self.select_slot(slot),
            None if self.is_complete() => Selection::Ignored(IgnoreReason::Complete),
            None => Selection::Ignored(IgnoreReason::Missed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> PoolState {
        self.pool.state()
    }

    pub fn is_complete(&self) -> bool {
        self.pool.is_complete()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            assigned: self.pool.assigned(),
            total: self.pool.total(),
            remaining: self.pool.remaining(),
        }
    }

    /// Assignments in the order they were made.
    pub fn assignments(&self) -> &[(SlotId, Rank)] {
        &self.assignments
    }

    /// Results sorted by rank, or `None` while ranks remain.
    pub fn results(&self) -> Option<Vec<RankedEntry>> {
        if !self.is_complete() {
            return None;
        }

        let mut results: Vec<RankedEntry> = self
            .assignments
            .iter()
            .filter_map(|&(slot, rank)| {
                self.board.slot(slot).map(|found| RankedEntry {
                    rank,
                    slot,
                    name: found.display_name(),
                    color: found.color(),
                })
            })
            .collect();
        results.sort_by_key(RankedEntry::rank);

        Some(results)
    }
}
