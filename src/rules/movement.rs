//! Zone-change queue flushing.
//!
//! Every move goes through `move_zone`, which only queues it. The flush
//! applies queued moves one at a time, in order, with all of their side
//! effects before the next:
//!
//! 1. the `Discarded` trigger, if heading for a discard pile
//! 2. the zone add (remove from the old zone, append, renumber both)
//! 3. entering or leaving play (in-play list, trigger subscriptions,
//!    ability use counters, expiry of modifiers bound to this source)
//! 4. the `EnterPlay` trigger
//! 5. a presentation notice
//!
//! Moves queued by triggers during a flush are applied by the same flush.

use log::debug;

use crate::core::{EntityId, GameState, ZoneKind, ZoneRef};
use crate::triggers::{AbilityRef, TriggerData, TriggerType};
use crate::zones::{ZoneChange, ZoneNotice};

impl GameState {
    /// Queue a move of `object` into `destination`.
    pub fn move_zone(&mut self, object: EntityId, destination: ZoneRef) {
        if self.object(object).is_some() {
            self.queue.push(object, destination);
        }
    }

    /// Queue a move into the owner's discard pile.
    pub fn discard(&mut self, object: EntityId) {
        if let Some(owner) = self.object(object).map(|obj| obj.owner) {
            self.move_zone(object, ZoneRef::new(owner, ZoneKind::DiscardPile));
        }
    }

    /// Apply every queued move.
    pub fn flush_zone_changes(&mut self) {
        while let Some(change) = self.queue.pop() {
            self.apply_zone_change(change);
        }
    }

    fn apply_zone_change(&mut self, change: ZoneChange) {
        let ZoneChange { object, destination } = change;

        if destination.kind == ZoneKind::DiscardPile {
            let owner = self.obj(object).owner;
            self.fire_trigger(TriggerType::Discarded, TriggerData::new(owner).with_subject(object));
        }

        let was_in_play = self.is_in_play(object);
        self.add_to_zone(object, destination);
        let zone = self.zones.get(destination);
        let (now_in_play, hidden) = (zone.in_play(), zone.is_hidden());

        match (was_in_play, now_in_play) {
            (false, true) => self.enter_play(object),
            (true, false) => self.leave_play(object),
            _ => {}
        }

        self.notices.push(if hidden {
            ZoneNotice::Detach { object, zone: destination }
        } else {
            ZoneNotice::Attach { object, zone: destination }
        });
    }

    /// Detach from the current zone and append to `destination`.
    fn add_to_zone(&mut self, object: EntityId, destination: ZoneRef) {
        let previous = self.obj(object).zone;
        if let Some(previous) = previous {
            self.zones.get_mut(previous).remove(object);
            self.renumber(previous);
        }

        self.zones.get_mut(destination).push(object);
        let in_play = self.zones.get(destination).in_play();
        let obj = self.obj_mut(object);
        obj.zone = Some(destination);
        if !in_play {
            obj.reset_transient();
        }
        self.renumber(destination);

        match previous {
            Some(from) => debug!("{object} moved {from} -> {destination}"),
            None => debug!("{object} placed in {destination}"),
        }
    }

    /// Make every object's `slot` match its index.
    pub(super) fn renumber(&mut self, zone: ZoneRef) {
        let Self { zones, objects, .. } = self;
        for (slot, id) in zones.get(zone).contents().iter().enumerate() {
            objects[id.index()].slot = slot;
        }
    }

    fn enter_play(&mut self, object: EntityId) {
        self.in_play.push(object);

        let Self { objects, triggers, .. } = self;
        let obj = &mut objects[object.index()];
        obj.reset_abilities();
        for (index, ability) in obj.spec.activated.iter().enumerate() {
            if let Some(trigger) = &ability.trigger {
                triggers.add(trigger.on, AbilityRef::new(object, index));
            }
        }

        let controller = self.obj(object).controller;
        self.fire_trigger(TriggerType::EnterPlay, TriggerData::new(controller).with_subject(object));
    }

    fn leave_play(&mut self, object: EntityId) {
        self.in_play.retain(|&id| id != object);

        let Self { objects, triggers, .. } = self;
        for (index, ability) in objects[object.index()].spec.activated.iter().enumerate() {
            if let Some(trigger) = &ability.trigger {
                triggers.remove(trigger.on, AbilityRef::new(object, index));
            }
        }

        let Self { objects, in_play, .. } = self;
        for id in in_play.iter() {
            objects[id.index()].source_left_play(object);
        }
    }
}
