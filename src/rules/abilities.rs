//! Activated abilities, targeting and trigger dispatch.
//!
//! ## Activation
//!
//! An ability can be activated when it is active (right zone, uses left),
//! the activating player controls the card, and both its mana cost and its
//! alternative cost can be paid. Mana is paid first, then the alternative
//! cost; each payment is atomic on its own.
//!
//! ## Triggers
//!
//! Events dispatch synchronously to the subscribers of their type, in
//! registration order. An ability fires when its object still holds the
//! subscription, the ability is active, and all four of its selector tests
//! pass. Nested events recurse up to `MAX_TRIGGER_DEPTH`.

use std::sync::Arc;

use log::{debug, warn};

use crate::cards::{AltCost, AltCostKind};
use crate::core::{EntityId, GameState, PlayerId};
use crate::effects::{EffectContext, EffectResolver, Selector};
use crate::triggers::{AbilityRef, TriggerData, TriggerType};

use super::reject;

/// Deepest chain of triggers set off by triggers.
pub const MAX_TRIGGER_DEPTH: u32 = 16;

impl GameState {
    /// Whether `selector` accepts `target` for an ability of `source`.
    #[must_use]
    pub fn can_target(&self, source: EntityId, player: PlayerId, selector: &Selector, target: EntityId) -> bool {
        if self.object(target).is_none() {
            return false;
        }
        let mut ctx = EffectContext::new(source, player).with_target(Some(target));
        selector.test(self, &mut ctx, target)
    }

    /// Whether `player` may activate ability `index` of `card` now.
    #[must_use]
    pub fn can_activate(&self, player: PlayerId, card: EntityId, index: usize) -> bool {
        let Some(obj) = self.object(card) else {
            return false;
        };
        let Some(ability) = obj.spec.activated.get(index) else {
            return false;
        };
        !ability.is_triggered()
            && obj.ability_is_active(index)
            && obj.controller == player
            && self.players[player].resources.can_spend(ability.mana_cost.as_ref())
            && obj.can_pay_alt_cost(ability.alt_cost)
    }

    /// Activate ability `index` of `card`, optionally on `target`.
    pub fn activate(&mut self, player: PlayerId, card: EntityId, index: usize, target: Option<EntityId>) -> bool {
        if !self.can_activate(player, card, index) {
            return reject(format_args!("{player} cannot activate {card}#{index}"));
        }
        let spec = Arc::clone(&self.obj(card).spec);
        let Some(ability) = spec.activated.get(index) else {
            return false;
        };

        let target = match (&ability.target, target) {
            (None, _) => None,
            (Some(_), None) => return reject(format_args!("{card}#{index} needs a target")),
            (Some(selector), Some(target)) => {
                if !self.can_target(card, player, selector, target) {
                    return reject(format_args!("{target} is not a legal target for {card}#{index}"));
                }
                Some(target)
            }
        };

        if !self.players[player].resources.try_spend(ability.mana_cost.as_ref()) {
            return reject(format_args!("{player} cannot pay mana for {card}#{index}"));
        }
        // Mana already spent is not refunded if this fails.
        if !self.pay_alt_cost(card, ability.alt_cost) {
            return reject(format_args!("{card} cannot pay the alternative cost"));
        }

        let obj = self.obj_mut(card);
        obj.abilities[index].record_use();
        let attacking = obj.is_attacking();
        debug!("{player} activates {}#{index}", self.obj(card));

        if let Some(command) = ability.command(attacking) {
            let mut ctx = EffectContext::new(card, player)
                .with_ability(index)
                .with_target(target);
            EffectResolver::run(self, command, &mut ctx);
        }
        true
    }

    fn pay_alt_cost(&mut self, card: EntityId, cost: AltCost) -> bool {
        if !self.obj(card).can_pay_alt_cost(cost) {
            return false;
        }
        if cost.contains(AltCostKind::Tap) {
            self.obj_mut(card).tapped = true;
        }
        if cost.contains(AltCostKind::Sacrifice) {
            self.discard(card);
        }
        true
    }

    /// Dispatch an event to its subscribers.
    pub(crate) fn fire_trigger(&mut self, trigger: TriggerType, data: TriggerData) {
        let subscribers = self.triggers.subscribers(trigger).to_vec();
        if subscribers.is_empty() {
            return;
        }
        if self.trigger_depth >= MAX_TRIGGER_DEPTH {
            warn!("{trigger:?} not dispatched: trigger depth limit {MAX_TRIGGER_DEPTH} reached");
            return;
        }

        self.trigger_depth += 1;
        for ability in subscribers {
            // An earlier subscriber may have taken this one out of play.
            if self.triggers.is_subscribed(trigger, ability) {
                self.resolve_trigger(ability, data);
            }
        }
        self.trigger_depth -= 1;
    }

    fn resolve_trigger(&mut self, ability_ref: AbilityRef, data: TriggerData) {
        let AbilityRef { object, ability: index } = ability_ref;
        let obj = self.obj(object);
        if !obj.ability_is_active(index) {
            return;
        }
        let spec = Arc::clone(&obj.spec);
        let controller = obj.controller;
        let attacking = obj.is_attacking();
        let Some(ability) = spec.activated.get(index) else {
            return;
        };
        let Some(trigger) = &ability.trigger else {
            return;
        };

        let fresh_context = || {
            EffectContext::new(object, controller)
                .with_ability(index)
                .with_trigger(data)
        };
        if !trigger.matches(self, &mut fresh_context(), &data) {
            return;
        }

        debug!("{ability_ref} fires on {:?}", trigger.on);
        self.obj_mut(object).abilities[index].record_use();
        if let Some(command) = ability.command(attacking) {
            EffectResolver::run(self, command, &mut fresh_context());
        }
    }
}
