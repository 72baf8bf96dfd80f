//! Game objects: one per physical card.
//!
//! A `GameObject` keeps its identity across every zone move. The hand card
//! and the permanent it becomes are the same entity; dying flips a flag and
//! sends the object to the discard pile, it is never freed.
//!
//! ## Derived state
//!
//! `power`, `toughness`, `keywords` and `controller` are never patched
//! incrementally. Whenever a modifier list changes they are rebuilt from the
//! spec and the modifiers still active.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EntityId, PlayerId, ZoneKind, ZoneMask, ZoneRef};
use crate::effects::{ControlEffect, UpgradeEffect};

use super::attributes::{AltCost, AltCostKind, CardType, Keyword, Keywords};
use super::definition::{ActivatedAbilitySpec, CardSpec};

/// Per-instance state of one ability on a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivatedAbility {
    pub times_used: u32,
}

impl ActivatedAbility {
    /// In an allowed zone with uses remaining.
    #[must_use]
    pub fn is_active(&self, spec: &ActivatedAbilitySpec, zone: Option<ZoneKind>) -> bool {
        let in_zone = zone.is_some_and(|kind| spec.active_zones.contains(kind));
        in_zone && (spec.uses == 0 || self.times_used < spec.uses)
    }

    pub fn record_use(&mut self) {
        self.times_used += 1;
    }

    pub fn reset(&mut self) {
        self.times_used = 0;
    }
}

/// A card instance in the game.
#[derive(Clone, Debug)]
pub struct GameObject {
    pub id: EntityId,

    pub spec: Arc<CardSpec>,

    /// Fixed at creation.
    pub owner: PlayerId,

    /// Owner unless an active control effect says otherwise.
    pub controller: PlayerId,

    pub power: i32,
    pub toughness: i32,
    pub keywords: Keywords,

    /// `None` until the first zone-change flush places the object.
    pub zone: Option<ZoneRef>,
    pub slot: usize,

    pub tapped: bool,
    pub damage: i32,
    pub destroyed: bool,
    /// Set by the end-of-turn sweep; the move to the discard pile follows.
    pub dead: bool,

    /// One entry per `spec.activated`, same order.
    pub abilities: Vec<ActivatedAbility>,

    pub control_effects: SmallVec<[ControlEffect; 2]>,
    pub upgrade_effects: SmallVec<[UpgradeEffect; 4]>,
}

impl GameObject {
    #[must_use]
    pub fn new(id: EntityId, spec: Arc<CardSpec>, owner: PlayerId) -> Self {
        let abilities = vec![ActivatedAbility::default(); spec.activated.len()];
        Self {
            id,
            owner,
            controller: owner,
            power: spec.power,
            toughness: spec.toughness,
            keywords: spec.keywords,
            zone: None,
            slot: 0,
            tapped: false,
            damage: 0,
            destroyed: false,
            dead: false,
            abilities,
            control_effects: SmallVec::new(),
            upgrade_effects: SmallVec::new(),
            spec,
        }
    }

    #[must_use]
    pub fn is_type(&self, card_type: CardType) -> bool {
        self.spec.is_type(card_type)
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    #[must_use]
    pub fn is_homebase(&self) -> bool {
        self.is_type(CardType::Homebase)
    }

    #[must_use]
    pub fn zone_kind(&self) -> Option<ZoneKind> {
        self.zone.map(|z| z.kind)
    }

    /// Whether the current zone kind is in `mask`.
    #[must_use]
    pub fn in_zones(&self, mask: ZoneMask) -> bool {
        self.zone_kind().is_some_and(|kind| mask.contains(kind))
    }

    #[must_use]
    pub fn is_attacking(&self) -> bool {
        self.zone_kind() == Some(ZoneKind::Attack)
    }

    /// Destroyed, or a creature with lethal damage.
    #[must_use]
    pub fn is_lethally_wounded(&self) -> bool {
        self.destroyed || (self.is_type(CardType::Creature) && self.damage >= self.toughness)
    }

    /// Rebuild stats and keywords from the spec plus active upgrades.
    pub fn recompute_upgrades(&mut self) {
        self.upgrade_effects.retain(|e| !e.timer.is_expired());
        self.power = self.spec.power;
        self.toughness = self.spec.toughness;
        self.keywords = self.spec.keywords;
        for effect in &self.upgrade_effects {
            self.power += effect.power;
            self.toughness += effect.toughness;
            self.keywords |= effect.keywords;
        }
    }

    /// The most recently applied active control effect wins.
    pub fn recompute_controller(&mut self) {
        self.control_effects.retain(|e| !e.timer.is_expired());
        self.controller = self
            .control_effects
            .last()
            .map_or(self.owner, |e| e.controller);
    }

    pub fn add_control_effect(&mut self, effect: ControlEffect) {
        self.control_effects.push(effect);
        self.recompute_controller();
    }

    pub fn add_upgrade_effect(&mut self, effect: UpgradeEffect) {
        self.upgrade_effects.push(effect);
        self.recompute_upgrades();
    }

    /// Advance every modifier by one turn boundary.
    ///
    /// `source_in_play` answers whether a modifier's source is still in
    /// play. Returns true if anything expired.
    pub fn tick_effects(&mut self, active: PlayerId, source_in_play: impl Fn(EntityId) -> bool) -> bool {
        let mut control_expired = false;
        for effect in &mut self.control_effects {
            let in_play = source_in_play(effect.timer.source);
            control_expired |= effect.timer.tick(active, in_play);
        }
        let mut upgrade_expired = false;
        for effect in &mut self.upgrade_effects {
            let in_play = source_in_play(effect.timer.source);
            upgrade_expired |= effect.timer.tick(active, in_play);
        }
        if control_expired {
            self.recompute_controller();
        }
        if upgrade_expired {
            self.recompute_upgrades();
        }
        control_expired || upgrade_expired
    }

    /// Expire modifiers bound to `source` staying in play.
    pub fn source_left_play(&mut self, source: EntityId) -> bool {
        let mut control_expired = false;
        for effect in &mut self.control_effects {
            control_expired |= effect.timer.source_left_play(source);
        }
        let mut upgrade_expired = false;
        for effect in &mut self.upgrade_effects {
            upgrade_expired |= effect.timer.source_left_play(source);
        }
        if control_expired {
            self.recompute_controller();
        }
        if upgrade_expired {
            self.recompute_upgrades();
        }
        control_expired || upgrade_expired
    }

    /// Clear combat state and modifiers on entering a zone outside play.
    pub fn reset_transient(&mut self) {
        self.tapped = false;
        self.damage = 0;
        self.destroyed = false;
        self.dead = false;
        self.control_effects.clear();
        self.upgrade_effects.clear();
        self.recompute_controller();
        self.recompute_upgrades();
    }

    /// Reset use counters; called on entering play.
    pub fn reset_abilities(&mut self) {
        for ability in &mut self.abilities {
            ability.reset();
        }
    }

    #[must_use]
    pub fn can_pay_alt_cost(&self, cost: AltCost) -> bool {
        if cost.contains(AltCostKind::Tap) && self.tapped {
            return false;
        }
        if cost.contains(AltCostKind::Sacrifice) && self.zone.is_none() {
            return false;
        }
        true
    }

    /// Whether ability `index` can be used from the current zone.
    #[must_use]
    pub fn ability_is_active(&self, index: usize) -> bool {
        match (self.spec.activated.get(index), self.abilities.get(index)) {
            (Some(spec), Some(state)) => state.is_active(spec, self.zone_kind()),
            _ => false,
        }
    }
}

impl std::fmt::Display for GameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.spec.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Duration, EffectTimer};

    const ME: PlayerId = PlayerId::new(0);
    const THEM: PlayerId = PlayerId::new(1);

    fn bear() -> GameObject {
        let spec = CardSpec::new("Bear", CardType::Creature).with_stats(2, 2);
        GameObject::new(EntityId(7), Arc::new(spec), ME)
    }

    fn upgrade(duration: Duration, power: i32, toughness: i32) -> UpgradeEffect {
        UpgradeEffect::new(EffectTimer::new(EntityId(1), ME, duration), power, toughness, Keywords::NONE)
    }

    #[test]
    fn test_new_copies_spec() {
        let obj = bear();
        assert_eq!((obj.power, obj.toughness), (2, 2));
        assert_eq!(obj.controller, ME);
        assert!(obj.zone.is_none());
    }

    #[test]
    fn test_upgrade_expiry_returns_to_base() {
        let mut obj = bear();
        obj.add_upgrade_effect(upgrade(Duration::ThisTurn, 2, 2));
        assert_eq!((obj.power, obj.toughness), (4, 4));

        assert!(obj.tick_effects(THEM, |_| true));
        assert_eq!((obj.power, obj.toughness), (2, 2));
        assert!(obj.upgrade_effects.is_empty());
    }

    #[test]
    fn test_upgrades_stack_and_expire_independently() {
        let mut obj = bear();
        obj.add_upgrade_effect(upgrade(Duration::Permanent, 1, 0));
        obj.add_upgrade_effect(upgrade(Duration::ThisTurn, 2, 2));
        let flying = UpgradeEffect::new(
            EffectTimer::new(EntityId(1), ME, Duration::ThisTurn),
            0,
            0,
            Keyword::Flying.into(),
        );
        obj.add_upgrade_effect(flying);
        assert_eq!((obj.power, obj.toughness), (5, 4));
        assert!(obj.has_keyword(Keyword::Flying));

        obj.tick_effects(THEM, |_| true);
        assert_eq!((obj.power, obj.toughness), (3, 2));
        assert!(!obj.has_keyword(Keyword::Flying));
    }

    #[test]
    fn test_latest_control_effect_wins() {
        let mut obj = bear();
        obj.add_control_effect(ControlEffect::new(
            EffectTimer::new(EntityId(1), THEM, Duration::Permanent),
            THEM,
        ));
        obj.add_control_effect(ControlEffect::new(
            EffectTimer::new(EntityId(2), ME, Duration::ThisTurn),
            ME,
        ));
        assert_eq!(obj.controller, ME);

        obj.tick_effects(THEM, |_| true);
        assert_eq!(obj.controller, THEM);
    }

    #[test]
    fn test_source_left_play_restores_owner() {
        let mut obj = bear();
        obj.add_control_effect(ControlEffect::new(
            EffectTimer::new(EntityId(9), THEM, Duration::SourceLeavesPlay),
            THEM,
        ));
        assert_eq!(obj.controller, THEM);

        assert!(!obj.source_left_play(EntityId(8)));
        assert!(obj.source_left_play(EntityId(9)));
        assert_eq!(obj.controller, ME);
    }

    #[test]
    fn test_reset_transient() {
        let mut obj = bear();
        obj.tapped = true;
        obj.damage = 5;
        obj.destroyed = true;
        obj.dead = true;
        obj.add_upgrade_effect(upgrade(Duration::Permanent, 3, 3));

        obj.reset_transient();

        assert!(!obj.tapped && !obj.destroyed && !obj.dead);
        assert_eq!(obj.damage, 0);
        assert_eq!(obj.power, 2);
    }

    #[test]
    fn test_lethal_damage() {
        let mut obj = bear();
        obj.damage = 1;
        assert!(!obj.is_lethally_wounded());
        obj.damage = 2;
        assert!(obj.is_lethally_wounded());
    }

    #[test]
    fn test_alt_cost_tap() {
        let mut obj = bear();
        let tap: AltCost = AltCostKind::Tap.into();
        assert!(obj.can_pay_alt_cost(tap));
        obj.tapped = true;
        assert!(!obj.can_pay_alt_cost(tap));
        assert!(obj.can_pay_alt_cost(AltCost::NONE));
    }

    #[test]
    fn test_ability_uses() {
        let ability_spec = ActivatedAbilitySpec::default().with_uses(1);
        let mut ability = ActivatedAbility::default();

        assert!(ability.is_active(&ability_spec, Some(ZoneKind::Defense)));
        assert!(!ability.is_active(&ability_spec, Some(ZoneKind::Hand)));
        assert!(!ability.is_active(&ability_spec, None));

        ability.record_use();
        assert!(!ability.is_active(&ability_spec, Some(ZoneKind::Defense)));
        ability.reset();
        assert!(ability.is_active(&ability_spec, Some(ZoneKind::Defense)));
    }
}
