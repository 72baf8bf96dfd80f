//! Trigger registry.
//!
//! One subscriber list per trigger type. Objects subscribe their triggered
//! abilities on entering play and unsubscribe on leaving it; dispatch walks
//! the list for the event's type in registration order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::EntityId;

use super::event::TriggerType;

/// One ability on one object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityRef {
    pub object: EntityId,
    /// Index into the object's `spec.activated`.
    pub ability: usize,
}

impl AbilityRef {
    #[must_use]
    pub const fn new(object: EntityId, ability: usize) -> Self {
        Self { object, ability }
    }
}

impl std::fmt::Display for AbilityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.object, self.ability)
    }
}

/// Subscriber lists keyed by trigger type.
///
/// ```
/// use convergence::core::EntityId;
/// use convergence::triggers::{AbilityRef, TriggerRegistry, TriggerType};
///
/// let mut registry = TriggerRegistry::new();
/// registry.add(TriggerType::GainLife, AbilityRef::new(EntityId(4), 0));
/// registry.add(TriggerType::GainLife, AbilityRef::new(EntityId(2), 1));
///
/// let order: Vec<_> = registry.subscribers(TriggerType::GainLife).iter().map(|r| r.object).collect();
/// assert_eq!(order, vec![EntityId(4), EntityId(2)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry {
    by_type: FxHashMap<TriggerType, Vec<AbilityRef>>,
}

impl TriggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe; a second add of the same ability is ignored.
    pub fn add(&mut self, trigger: TriggerType, ability: AbilityRef) {
        let list = self.by_type.entry(trigger).or_default();
        if !list.contains(&ability) {
            list.push(ability);
        }
    }

    /// Unsubscribe; returns whether it was subscribed.
    pub fn remove(&mut self, trigger: TriggerType, ability: AbilityRef) -> bool {
        let Some(list) = self.by_type.get_mut(&trigger) else {
            return false;
        };
        let before = list.len();
        list.retain(|a| *a != ability);
        list.len() != before
    }

    #[must_use]
    pub fn subscribers(&self, trigger: TriggerType) -> &[AbilityRef] {
        self.by_type.get(&trigger).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_subscribed(&self, trigger: TriggerType, ability: AbilityRef) -> bool {
        self.subscribers(trigger).contains(&ability)
    }

    /// Total subscriptions across all types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
