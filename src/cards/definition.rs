//! Card specifications: the immutable data behind every card instance.
//!
//! A `CardSpec` is loaded once per card name and shared through an `Arc` by
//! every object created from it. Instance-specific data (damage, zone,
//! modifiers) lives on `GameObject`.
//!
//! ## Example
//!
//! ```
//! use convergence::cards::{CardSpec, CardType, Keyword};
//!
//! let json = r#"{
//!     "art": "raptor",
//!     "cardType": ["Creature"],
//!     "power": 2,
//!     "toughness": 1,
//!     "cost": "1R",
//!     "keywords": ["Haste"]
//! }"#;
//! let raptor: CardSpec = serde_json::from_str(json).unwrap();
//!
//! assert!(raptor.is_type(CardType::Creature));
//! assert!(raptor.keywords.contains(Keyword::Haste));
//! assert_eq!(raptor.cost.unwrap().generic(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ManaAmount, ZoneMask};
use crate::effects::{Command, Selector};
use crate::triggers::TriggerSpec;

use super::attributes::{AltCost, CardType, CardTypes, Keywords};

fn default_active_zones() -> ZoneMask {
    ZoneMask::PLAY
}

/// An ability printed on a card.
///
/// Abilities with a `trigger` fire on their own while the card is in play;
/// the rest are activated by the controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatedAbilitySpec {
    #[serde(default)]
    pub frame: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub mana_cost: Option<ManaAmount>,
    #[serde(default)]
    pub alt_cost: AltCost,

    /// Legal targets; `None` means the ability takes no target.
    #[serde(default)]
    pub target: Option<Selector>,

    #[serde(default)]
    pub effect: Option<Command>,

    /// Used instead of `effect` while the card is attacking.
    #[serde(default)]
    pub attack_effect: Option<Command>,

    /// Zones the card must be in. Defaults to the in-play zones.
    #[serde(default = "default_active_zones")]
    pub active_zones: ZoneMask,

    /// Uses per stay in play; 0 means unlimited.
    #[serde(default)]
    pub uses: u32,

    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
}

impl Default for ActivatedAbilitySpec {
    fn default() -> Self {
        Self {
            frame: None,
            icon: None,
            text: String::new(),
            mana_cost: None,
            alt_cost: AltCost::NONE,
            target: None,
            effect: None,
            attack_effect: None,
            active_zones: default_active_zones(),
            uses: 0,
            trigger: None,
        }
    }
}

impl ActivatedAbilitySpec {
    #[must_use]
    pub fn new(effect: Command) -> Self {
        Self {
            effect: Some(effect),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: ManaAmount) -> Self {
        self.mana_cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_alt_cost(mut self, cost: AltCost) -> Self {
        self.alt_cost = cost;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Selector) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_uses(mut self, uses: u32) -> Self {
        self.uses = uses;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.trigger.is_some()
    }

    /// The command to run, given whether the card is attacking.
    #[must_use]
    pub fn command(&self, attacking: bool) -> Option<&Command> {
        if attacking {
            self.attack_effect.as_ref().or(self.effect.as_ref())
        } else {
            self.effect.as_ref()
        }
    }
}

/// Static card data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    /// Key in the card table; set by the registry.
    #[serde(skip)]
    pub name: String,

    pub art: String,

    pub card_type: CardTypes,

    #[serde(default)]
    pub power: i32,
    #[serde(default)]
    pub toughness: i32,

    /// Resources added to the controller's pool each turn.
    #[serde(default)]
    pub produces: Option<ManaAmount>,

    #[serde(default)]
    pub cost: Option<ManaAmount>,

    #[serde(default)]
    pub keywords: Keywords,

    #[serde(default)]
    pub activated: Vec<ActivatedAbilitySpec>,

    /// Single-shot effect of an action card.
    #[serde(default)]
    pub effect: Option<Command>,

    /// Legal targets of a targeted action card.
    #[serde(default)]
    pub target: Option<Selector>,
}

impl CardSpec {
    /// A blank card of the given types.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: impl Into<CardTypes>) -> Self {
        let name = name.into();
        Self {
            art: name.to_lowercase(),
            name,
            card_type: card_type.into(),
            power: 0,
            toughness: 0,
            produces: None,
            cost: None,
            keywords: Keywords::NONE,
            activated: Vec::new(),
            effect: None,
            target: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, power: i32, toughness: i32) -> Self {
        self.power = power;
        self.toughness = toughness;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: ManaAmount) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_produces(mut self, produces: ManaAmount) -> Self {
        self.produces = Some(produces);
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: ActivatedAbilitySpec) -> Self {
        self.activated.push(ability);
        self
    }

    /// Make this a targeted action: validate with `target`, then run `effect`.
    #[must_use]
    pub fn with_targeted_effect(mut self, target: Selector, effect: Command) -> Self {
        self.target = Some(target);
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Command) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn is_type(&self, card_type: CardType) -> bool {
        self.card_type.contains(card_type)
    }

    /// Whether playing this card needs a target.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.target.is_some()
    }
}
