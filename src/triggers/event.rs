//! Trigger types and the data an event carries.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};

/// The events triggered abilities can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerType {
    /// A card was played from hand. Subject: the card.
    PlayCard,
    /// Damage was dealt. Subject: the source; target: the victim.
    DealDamage,
    /// An object entered play. Subject: the object.
    EnterPlay,
    /// An object is being put into a discard pile. Subject: the object.
    Discarded,
    /// A player gained life. Subject: the source; target: the homebase.
    GainLife,
}

impl TriggerType {
    pub const ALL: [TriggerType; 5] = [
        TriggerType::PlayCard,
        TriggerType::DealDamage,
        TriggerType::EnterPlay,
        TriggerType::Discarded,
        TriggerType::GainLife,
    ];
}

/// What happened, as seen by trigger selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerData {
    /// The player the event is about.
    pub player: Option<PlayerId>,
    pub subject: Option<EntityId>,
    pub target: Option<EntityId>,
    pub amount: i32,
}

impl TriggerData {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player: Some(player),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: EntityId) -> Self {
        self.subject = Some(subject);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: EntityId) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }
}
