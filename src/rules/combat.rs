//! Damage, healing and blocking.
//!
//! Damage to a homebase comes off its player's life; damage to anything else
//! accumulates on the object until the end-of-turn sweep checks it against
//! toughness. Deathtouch marks the victim destroyed whatever the amount.

use log::debug;

use crate::cards::{CardType, Keyword};
use crate::core::{EntityId, GameState, PlayerId, ZoneMask};
use crate::triggers::{TriggerData, TriggerType};

use super::reject;

impl GameState {
    /// `source` deals `amount` to `victim`.
    ///
    /// Fires `DealDamage`, then heals the source's controller if the source
    /// has lifelink.
    pub fn deal_damage(&mut self, source: EntityId, victim: EntityId, amount: i32, combat: bool) {
        if amount <= 0 || self.object(victim).is_none() {
            return;
        }
        let Some(src) = self.object(source) else {
            return;
        };
        let controller = src.controller;
        let deathtouch = src.has_keyword(Keyword::Deathtouch);
        let lifelink = src.has_keyword(Keyword::Lifelink);

        self.take_damage(victim, amount, deathtouch);
        debug!(
            "{source} deals {amount} {}damage to {victim}",
            if combat { "combat " } else { "" }
        );

        self.fire_trigger(
            TriggerType::DealDamage,
            TriggerData::new(controller)
                .with_subject(source)
                .with_target(victim)
                .with_amount(amount),
        );

        if lifelink {
            let homebase = self.homebase(controller);
            self.heal(source, homebase, amount);
        }
    }

    fn take_damage(&mut self, victim: EntityId, amount: i32, deathtouch: bool) {
        if let Some(player) = self.represented_player(victim) {
            self.players[player].life -= amount;
            return;
        }
        let obj = self.obj_mut(victim);
        obj.damage += amount;
        if deathtouch {
            obj.destroyed = true;
        }
    }

    /// Remove up to `amount` damage from `target`, or gain life if it is a
    /// homebase.
    pub fn heal(&mut self, source: EntityId, target: EntityId, amount: i32) {
        if amount <= 0 {
            return;
        }
        if let Some(player) = self.represented_player(target) {
            self.gain_life(player, amount, source);
            return;
        }
        if let Some(obj) = self.object_mut(target) {
            obj.damage = (obj.damage - amount).max(0);
        }
    }

    /// Add life and fire `GainLife`.
    pub fn gain_life(&mut self, player: PlayerId, amount: i32, source: EntityId) {
        self.players[player].life += amount;
        debug!("{player} gains {amount} life from {source}");
        let homebase = self.homebase(player);
        self.fire_trigger(
            TriggerType::GainLife,
            TriggerData::new(player)
                .with_subject(source)
                .with_target(homebase)
                .with_amount(amount),
        );
    }

    /// The player whose homebase `id` is.
    fn represented_player(&self, id: EntityId) -> Option<PlayerId> {
        let obj = self.object(id)?;
        (obj.is_homebase() && self.homebase(obj.owner) == id).then_some(obj.owner)
    }

    /// `blocker` blocks `attacker`: both deal damage at once.
    ///
    /// The attacker is tapped unless it has trample, so it no longer deals
    /// its damage at the next turn boundary. The blocker stays untapped.
    pub(crate) fn block(&mut self, blocker: EntityId, attacker: EntityId) -> bool {
        let b = self.obj(blocker);
        let a = self.obj(attacker);

        if b.tapped {
            return reject(format_args!("{blocker} is tapped"));
        }
        let positioned = b.in_zones(ZoneMask::DEFENSE | ZoneMask::ATTACK)
            || (b.has_keyword(Keyword::Vigilance) && b.in_zones(ZoneMask::PLAY));
        if !positioned {
            return reject(format_args!("{blocker} is not in position to block"));
        }
        if a.has_keyword(Keyword::Flying)
            && !(b.has_keyword(Keyword::Flying) || b.has_keyword(Keyword::Reach))
        {
            return reject(format_args!("{blocker} cannot block flying {attacker}"));
        }
        debug_assert!(a.is_type(CardType::Creature) && b.is_type(CardType::Creature));

        let blocker_power = b.power;
        let attacker_power = a.power;
        if !a.has_keyword(Keyword::Trample) {
            self.obj_mut(attacker).tapped = true;
        }

        debug!("{blocker} blocks {attacker}");
        self.deal_damage(blocker, attacker, blocker_power, true);
        self.deal_damage(attacker, blocker, attacker_power, true);
        true
    }
}
