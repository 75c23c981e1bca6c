//! The consumable pool of rank values.

use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};

use crate::{error::InvalidInput, ranking::Rank};

/// Smallest supported number of participants.
pub const MIN_PARTICIPANTS: usize = 2;

/// Largest supported number of participants.
pub const MAX_PARTICIPANTS: usize = 30;

/// Checks that `count` is a supported number of participants.
///
/// # Errors
///
/// Returns [`InvalidInput::ParticipantCount`] outside
/// `MIN_PARTICIPANTS..=MAX_PARTICIPANTS`.
pub fn validate_count(count: usize) -> Result<(), InvalidInput> {
    if (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
        Ok(())
    } else {
        Err(InvalidInput::ParticipantCount {
            count,
            min: MIN_PARTICIPANTS,
            max: MAX_PARTICIPANTS,
        })
    }
}

/// Lifecycle of a pool. `Active` only ever moves to `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    Active,
    Complete,
}

/// A permutation of `1..=n` consumed from the front.
#[derive(Debug, Clone)]
pub struct RankPool {
    remaining: VecDeque<Rank>,
    total: usize,
}

impl RankPool {
    /// Builds a pool holding a uniform shuffle of `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ParticipantCount`] for an unsupported count.
    pub fn shuffled<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, InvalidInput> {
        validate_count(count)?;

        let mut ranks: Vec<Rank> = (1..=count as u32).map(Rank::new).collect();
        ranks.shuffle(rng);

        Ok(Self {
            remaining: ranks.into(),
            total: count,
        })
    }

    /// Takes the next rank, or `None` once the pool is complete.
    pub fn pop(&mut self) -> Option<Rank> {
        self.remaining.pop_front()
    }

    /// Ranks not handed out yet, in the order they will be handed out.
    pub fn peek_order(&self) -> impl Iterator<Item = Rank> + '_ {
        self.remaining.iter().copied()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn assigned(&self) -> usize {
        self.total - self.remaining.len()
    }

    pub fn state(&self) -> PoolState {
        if self.remaining.is_empty() {
            PoolState::Complete
        } else {
            PoolState::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == PoolState::Complete
    }
}
