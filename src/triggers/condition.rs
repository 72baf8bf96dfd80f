//! Trigger conditions.
//!
//! A triggered ability names the event it listens for and up to four
//! selectors. Each present selector must accept its part of the event:
//!
//! - `player`: the homebase of the player the event is about
//! - `subject` / `target`: the event's subject and target objects
//! - `condition`: the ability's own source object
//!
//! A missing selector always passes. A present selector fails when the event
//! has nothing for it to test.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameState};
use crate::effects::{EffectContext, Selector};

use super::event::{TriggerData, TriggerType};

/// The trigger half of an ability spec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub on: TriggerType,
    #[serde(default)]
    pub player: Option<Selector>,
    #[serde(default)]
    pub subject: Option<Selector>,
    #[serde(default)]
    pub target: Option<Selector>,
    #[serde(default)]
    pub condition: Option<Selector>,
}

impl TriggerSpec {
    #[must_use]
    pub fn on(on: TriggerType) -> Self {
        Self {
            on,
            player: None,
            subject: None,
            target: None,
            condition: None,
        }
    }

    #[must_use]
    pub fn with_player(mut self, selector: Selector) -> Self {
        self.player = Some(selector);
        self
    }

    #[must_use]
    pub fn with_subject(mut self, selector: Selector) -> Self {
        self.subject = Some(selector);
        self
    }

    #[must_use]
    pub fn with_target(mut self, selector: Selector) -> Self {
        self.target = Some(selector);
        self
    }

    #[must_use]
    pub fn with_condition(mut self, selector: Selector) -> Self {
        self.condition = Some(selector);
        self
    }

    /// Whether all four tests pass for `data`.
    pub fn matches(&self, state: &GameState, ctx: &mut EffectContext, data: &TriggerData) -> bool {
        let player = data.player.map(|p| state.homebase(p));
        let source = ctx.source;
        check(self.player.as_ref(), state, ctx, player)
            && check(self.subject.as_ref(), state, ctx, data.subject)
            && check(self.target.as_ref(), state, ctx, data.target)
            && check(self.condition.as_ref(), state, ctx, Some(source))
    }
}

fn check(
    selector: Option<&Selector>,
    state: &GameState,
    ctx: &mut EffectContext,
    candidate: Option<EntityId>,
) -> bool {
    match (selector, candidate) {
        (None, _) => true,
        (Some(selector), Some(candidate)) => selector.test(state, ctx, candidate),
        (Some(_), None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let json = r#"{
            "on": "DealDamage",
            "player": { "type": "you" },
            "subject": { "type": "source" },
            "target": { "type": "type", "cardType": ["Homebase"] },
            "condition": { "type": "battlefield" }
        }"#;
        let spec: TriggerSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.on, TriggerType::DealDamage);
        assert_eq!(spec.player, Some(Selector::You));
        assert_eq!(spec.subject, Some(Selector::Source));
        assert!(spec.target.is_some());
        assert!(spec.condition.is_some());
    }

    #[test]
    fn test_parse_minimal() {
        let spec: TriggerSpec = serde_json::from_str(r#"{ "on": "PlayCard" }"#).unwrap();
        assert_eq!(spec, TriggerSpec::on(TriggerType::PlayCard));
    }
}
