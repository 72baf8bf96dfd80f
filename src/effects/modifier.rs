//! Timed modifiers attached to game objects.
//!
//! Two kinds exist: `ControlEffect` hands an object to another player,
//! `UpgradeEffect` adds power, toughness and keywords. Both carry an
//! `EffectTimer` which decides when they expire.
//!
//! Timers are ticked once per global turn boundary, with the player whose
//! turn is beginning:
//!
//! ```
//! use convergence::core::{EntityId, PlayerId};
//! use convergence::effects::{Duration, EffectTimer};
//!
//! let me = PlayerId::new(0);
//! let mut timer = EffectTimer::new(EntityId(3), me, Duration::YourNextTurn);
//!
//! assert!(!timer.tick(me.opponent(), true));
//! assert!(!timer.tick(me, true));
//! assert!(timer.tick(me.opponent(), true));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Keywords;
use crate::core::{EntityId, PlayerId};

/// How long a modifier stays active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    #[default]
    Permanent,
    /// Until the next turn boundary.
    ThisTurn,
    /// Through the creating player's next turn.
    YourNextTurn,
    /// While the source object stays in play.
    SourceLeavesPlay,
}

/// Expiry bookkeeping shared by every modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTimer {
    /// Object whose ability created the modifier.
    pub source: EntityId,
    /// Player who controlled the source at creation.
    pub creator: PlayerId,
    pub duration: Duration,
    own_turn_seen: bool,
    expired: bool,
}

impl EffectTimer {
    #[must_use]
    pub fn new(source: EntityId, creator: PlayerId, duration: Duration) -> Self {
        Self {
            source,
            creator,
            duration,
            own_turn_seen: false,
            expired: false,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Advance by one turn boundary. Returns true if this tick expired it.
    pub fn tick(&mut self, active: PlayerId, source_in_play: bool) -> bool {
        if self.expired {
            return false;
        }
        self.expired = match self.duration {
            Duration::Permanent => false,
            Duration::ThisTurn => true,
            Duration::YourNextTurn => {
                if active == self.creator {
                    self.own_turn_seen = true;
                    false
                } else {
                    self.own_turn_seen
                }
            }
            Duration::SourceLeavesPlay => !source_in_play,
        };
        self.expired
    }

    /// Expire now if bound to `source` leaving play.
    pub fn source_left_play(&mut self, source: EntityId) -> bool {
        if self.expired || self.duration != Duration::SourceLeavesPlay || self.source != source {
            return false;
        }
        self.expired = true;
        true
    }
}

/// Gives control of the carrying object to `controller`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEffect {
    pub timer: EffectTimer,
    pub controller: PlayerId,
}

impl ControlEffect {
    #[must_use]
    pub fn new(timer: EffectTimer, controller: PlayerId) -> Self {
        Self { timer, controller }
    }
}

/// Stat and keyword bonus on the carrying object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeEffect {
    pub timer: EffectTimer,
    pub power: i32,
    pub toughness: i32,
    pub keywords: Keywords,
}

impl UpgradeEffect {
    #[must_use]
    pub fn new(timer: EffectTimer, power: i32, toughness: i32, keywords: Keywords) -> Self {
        Self {
            timer,
            power,
            toughness,
            keywords,
        }
    }
}
