//! Commands: the effect-application half of the ability DSL.
//!
//! Each variant holds only what it needs. Selectors name the objects acted
//! on, calculations the amounts. Running a command is best effort: anything
//! that does not apply is skipped, and a `sequence` never rolls back.

use serde::{Deserialize, Serialize};

use crate::cards::Keywords;

use super::calculation::Calculation;
use super::modifier::Duration;
use super::selector::Selector;

/// Command expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Each source deals `amount` to each victim. `amount` is evaluated once.
    Damage {
        /// Defaults to the resolving object.
        #[serde(default)]
        sources: Option<Selector>,
        victims: Selector,
        amount: Calculation,
    },

    /// Remove damage, or gain life when aimed at a homebase.
    Heal { targets: Selector, amount: Calculation },

    /// The acting player takes control of the targets.
    TakeControl {
        targets: Selector,
        #[serde(default)]
        duration: Duration,
    },

    Untap { targets: Selector },

    Upgrade {
        targets: Selector,
        #[serde(default)]
        power: i32,
        #[serde(default)]
        toughness: i32,
        #[serde(default)]
        keywords: Keywords,
        #[serde(default)]
        duration: Duration,
    },

    /// Marks for death; the end-of-turn sweep moves them.
    Destroy { targets: Selector },

    /// Run each command in order.
    Sequence { commands: Vec<Command> },
}

impl Command {
    /// Command that deals a fixed amount to the selected victims.
    #[must_use]
    pub fn damage(victims: Selector, amount: i32) -> Self {
        Command::Damage {
            sources: None,
            victims,
            amount: Calculation::Constant(amount),
        }
    }

    #[must_use]
    pub fn heal(targets: Selector, amount: i32) -> Self {
        Command::Heal {
            targets,
            amount: Calculation::Constant(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Keyword;

    #[test]
    fn test_damage_defaults() {
        let json = r#"{ "type": "damage", "victims": { "type": "target" }, "amount": 3 }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert_eq!(command, Command::damage(Selector::Target, 3));
    }

    #[test]
    fn test_take_control_defaults_permanent() {
        let json = r#"{ "type": "takeControl", "targets": { "type": "target" } }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert!(matches!(
            command,
            Command::TakeControl { duration: Duration::Permanent, .. }
        ));
    }

    #[test]
    fn test_upgrade_fields() {
        let json = r#"{ "type": "upgrade", "targets": { "type": "source" },
            "power": 2, "toughness": 2, "keywords": ["Flying"], "duration": "ThisTurn" }"#;
        match serde_json::from_str::<Command>(json).unwrap() {
            Command::Upgrade { power, toughness, keywords, duration, .. } => {
                assert_eq!((power, toughness), (2, 2));
                assert!(keywords.contains(Keyword::Flying));
                assert_eq!(duration, Duration::ThisTurn);
            }
            other => panic!("expected upgrade, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_sequence() {
        let json = r#"{ "type": "sequence", "commands": [
            { "type": "untap", "targets": { "type": "source" } },
            { "type": "destroy", "targets": { "type": "target" } }
        ] }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert!(matches!(command, Command::Sequence { ref commands } if commands.len() == 2));
    }

    #[test]
    fn test_unknown_command_rejected() {
        let bad: Result<Command, _> = serde_json::from_str(r#"{ "type": "exile", "targets": { "type": "target" } }"#);
        assert!(bad.is_err());
    }
}
