//! Game rules as operations on `GameState`.
//!
//! - `movement`: the zone-change queue flush, entering and leaving play
//! - `play`: playing cards, blocking, declaring and withdrawing attackers
//! - `combat`: damage, healing, life gain
//! - `abilities`: activated abilities, targeting and trigger dispatch
//! - `turn`: start of game, per-tick update, turn transitions, intents
//!
//! Illegal requests are not errors. The operation does nothing, logs the
//! reason at debug level and returns `false`.

mod abilities;
mod combat;
mod movement;
mod play;
mod turn;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub use abilities::MAX_TRIGGER_DEPTH;

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players fell to zero life together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Log a rejected request and report it.
pub(crate) fn reject(reason: std::fmt::Arguments<'_>) -> bool {
    log::debug!("rejected: {reason}");
    false
}
