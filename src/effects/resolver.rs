//! Effect resolution: running commands against the game state.
//!
//! Resolution is synchronous. A command runs to completion, including any
//! triggers its damage or healing sets off, before `run` returns.

use log::debug;

use crate::core::{EntityId, GameState, PlayerId};
use crate::triggers::TriggerData;

use super::command::Command;
use super::modifier::{ControlEffect, EffectTimer, UpgradeEffect};

/// Bindings visible to selectors and calculations while an ability resolves.
///
/// `subject` is rebound by `compare` selectors as they test candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// The object whose ability or card is resolving.
    pub source: EntityId,
    /// The acting player.
    pub player: PlayerId,
    /// Index of the activated or triggered ability, if any.
    pub ability: Option<usize>,
    pub target: Option<EntityId>,
    pub subject: Option<EntityId>,
    /// Event data when resolving a triggered ability.
    pub trigger: Option<TriggerData>,
}

impl EffectContext {
    #[must_use]
    pub fn new(source: EntityId, player: PlayerId) -> Self {
        Self {
            source,
            player,
            ability: None,
            target: None,
            subject: None,
            trigger: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<EntityId>) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: usize) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Bind event data; its subject and target become the context's.
    #[must_use]
    pub fn with_trigger(mut self, data: TriggerData) -> Self {
        self.subject = data.subject;
        self.target = data.target;
        self.trigger = Some(data);
        self
    }
}

/// Executes commands.
pub struct EffectResolver;

impl EffectResolver {
    /// Run a command. Parts that select nothing are skipped.
    pub fn run(state: &mut GameState, command: &Command, ctx: &mut EffectContext) {
        match command {
            Command::Damage {
                sources,
                victims,
                amount,
            } => {
                let amount = amount.evaluate(state, ctx);
                let sources = match sources {
                    Some(selector) => selector.list(state, ctx),
                    None => vec![ctx.source],
                };
                let victims = victims.list(state, ctx);
                for &source in &sources {
                    for &victim in &victims {
                        state.deal_damage(source, victim, amount, false);
                    }
                }
            }
            Command::Heal { targets, amount } => {
                let amount = amount.evaluate(state, ctx);
                for target in targets.list(state, ctx) {
                    state.heal(ctx.source, target, amount);
                }
            }
            Command::TakeControl { targets, duration } => {
                for target in targets.list(state, ctx) {
                    let timer = EffectTimer::new(ctx.source, ctx.player, *duration);
                    state.add_control_effect(target, ControlEffect::new(timer, ctx.player));
                }
            }
            Command::Untap { targets } => {
                for target in targets.list(state, ctx) {
                    if let Some(obj) = state.object_mut(target) {
                        obj.tapped = false;
                    }
                }
            }
            Command::Upgrade {
                targets,
                power,
                toughness,
                keywords,
                duration,
            } => {
                for target in targets.list(state, ctx) {
                    let timer = EffectTimer::new(ctx.source, ctx.player, *duration);
                    let effect = UpgradeEffect::new(timer, *power, *toughness, *keywords);
                    state.add_upgrade_effect(target, effect);
                }
            }
            Command::Destroy { targets } => {
                for target in targets.list(state, ctx) {
                    if let Some(obj) = state.object_mut(target) {
                        debug!("{} marked destroyed by {}", target, ctx.source);
                        obj.destroyed = true;
                    }
                }
            }
            Command::Sequence { commands } => {
                for command in commands {
                    Self::run(state, command, ctx);
                }
            }
        }
    }
}
