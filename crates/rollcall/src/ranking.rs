//! The random ranking game.
//!
//! A [`RankingSession`] owns a [`Board`] of participant slots and a
//! shuffled [`RankPool`]. Every selection of an unranked slot takes the
//! next rank from the pool; once the pool is empty the session is complete
//! and the results can be read in rank order.
//!
//! ```
//! # use rand::{SeedableRng, rngs::StdRng};
//! # use rollcall::{config::BoardConfig, palette::Palette};
//! # use rollcall::ranking::{Participants, RankingSession, SlotId};
//! let mut rng = StdRng::seed_from_u64(1);
//! let participants = Participants::named(["Ann", "Bo", "Cy"]).unwrap();
//! let mut session = RankingSession::new(
//!     &participants,
//!     &BoardConfig::default(),
//!     &Palette::default(),
//!     &mut rng,
//! )
//! .unwrap();
//!
//! for index in [2, 0, 1] {
//!     session.select_slot(SlotId::new(index));
//! }
//!
//! let results = session.results().unwrap();
//! assert_eq!(results.len(), 3);
//! assert_eq!(results[0].rank().get(), 1);
//! ```

mod board;
mod participants;
mod pool;
mod session;
mod slot;

pub use board::Board;
pub use participants::{MAX_NAME_CHARS, Participants};
pub use pool::{MAX_PARTICIPANTS, MIN_PARTICIPANTS, PoolState, RankPool, validate_count};
pub use session::{IgnoreReason, Progress, RankedEntry, RankingSession, Selection};
pub use slot::{Rank, Slot, SlotId};
