//! Player intents: the high-level requests the presentation layer produces.
//!
//! Input handling (hover, drag thresholds, drop targets) lives outside the
//! engine. By the time something reaches the engine it is one of these
//! intents, naming the objects involved.
//!
//! ```
//! use convergence::core::{Intent, EntityId};
//!
//! let drag = Intent::UseOn { card: EntityId(12), target: EntityId(30) };
//! assert_eq!(drag.card(), Some(EntityId(12)));
//! assert_eq!(Intent::EndTurn.card(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;

/// A request from a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play a card from hand that needs no target.
    Play { card: EntityId },

    /// Play a targeted action card from hand.
    PlayOn { card: EntityId, target: EntityId },

    /// Drag one card onto another: block an attacker or cast onto a target.
    UseOn { card: EntityId, target: EntityId },

    /// Activate the ability at `ability` on `card`.
    Activate {
        card: EntityId,
        ability: usize,
        target: Option<EntityId>,
    },

    /// Move a defender into the attack zone.
    EnterAttack { card: EntityId },

    /// Move an attacker back into the defense zone.
    WithdrawAttack { card: EntityId },

    /// Finish the turn and open the response window.
    EndTurn,
}

impl Intent {
    /// The card this intent acts with, if any.
    #[must_use]
    pub fn card(&self) -> Option<EntityId> {
        match self {
            Intent::Play { card }
            | Intent::PlayOn { card, .. }
            | Intent::UseOn { card, .. }
            | Intent::Activate { card, .. }
            | Intent::EnterAttack { card }
            | Intent::WithdrawAttack { card } => Some(*card),
            Intent::EndTurn => None,
        }
    }
}

/// A recorded intent with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who sent this intent.
    pub player: PlayerId,

    pub intent: Intent,

    /// Turn number when the intent arrived.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, intent: Intent, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            intent,
            turn,
            sequence,
        }
    }
}
