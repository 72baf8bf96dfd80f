//! Selectors: predicates and enumerators over game objects.
//!
//! A selector answers two questions against an `EffectContext`:
//! - `test`: does this candidate match?
//! - `list`: which objects match?
//!
//! Players take part through their homebase objects, so `you` lists the
//! acting player's homebase and `opponent` the other one.
//!
//! Content writes selectors as tagged objects:
//!
//! ```
//! use convergence::effects::Selector;
//!
//! let json = r#"{ "type": "battlefield", "filters": [
//!     { "type": "type", "cardType": ["Creature"] },
//!     { "type": "control", "selector": { "type": "opponent" } }
//! ] }"#;
//! let selector: Selector = serde_json::from_str(json).unwrap();
//! assert!(matches!(selector, Selector::Battlefield { ref filters } if filters.len() == 2));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardTypes;
use crate::core::{EntityId, GameState};

use super::calculation::Calculation;
use super::resolver::EffectContext;

/// Comparison applied by `Selector::Compare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl CompareOp {
    #[must_use]
    pub fn apply(self, lhs: i32, rhs: i32) -> bool {
        match self {
            CompareOp::Equal => lhs == rhs,
            CompareOp::NotEqual => lhs != rhs,
            CompareOp::Less => lhs < rhs,
            CompareOp::Greater => lhs > rhs,
            CompareOp::LessOrEqual => lhs <= rhs,
            CompareOp::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// Selector expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selector {
    /// The object whose ability is resolving.
    Source,
    /// The acting player's homebase.
    You,
    /// The acting player's opponent's homebase.
    Opponent,
    Target,
    Subject,

    /// Every sub-selector must match. Lists the first one, filtered by the rest.
    AllOf { selectors: Vec<Selector> },

    /// Card type shares any bit with `types`.
    Type {
        #[serde(rename = "cardType")]
        types: CardTypes,
    },

    /// Candidate's controller also controls something `selector` lists.
    Control { selector: Box<Selector> },

    /// Objects in play passing every filter.
    Battlefield {
        #[serde(default)]
        filters: Vec<Selector>,
    },

    /// Binds the candidate as subject, then compares two calculations.
    Compare {
        lhs: Calculation,
        op: CompareOp,
        rhs: Calculation,
    },
}

impl Selector {
    /// Whether `candidate` matches.
    pub fn test(&self, state: &GameState, ctx: &mut EffectContext, candidate: EntityId) -> bool {
        match self {
            Selector::Source => candidate == ctx.source,
            Selector::You => candidate == state.homebase(ctx.player),
            Selector::Opponent => candidate == state.homebase(ctx.player.opponent()),
            Selector::Target => ctx.target == Some(candidate),
            Selector::Subject => ctx.subject == Some(candidate),
            Selector::AllOf { selectors } => selectors.iter().all(|s| s.test(state, ctx, candidate)),
            Selector::Type { types } => state
                .object(candidate)
                .is_some_and(|obj| obj.spec.card_type.intersects(*types)),
            Selector::Control { selector } => {
                let Some(controller) = state.object(candidate).map(|obj| obj.controller) else {
                    return false;
                };
                selector
                    .list(state, ctx)
                    .into_iter()
                    .filter_map(|id| state.object(id))
                    .any(|obj| obj.controller == controller)
            }
            Selector::Battlefield { filters } => {
                state.in_play().contains(&candidate)
                    && filters.iter().all(|f| f.test(state, ctx, candidate))
            }
            Selector::Compare { lhs, op, rhs } => {
                ctx.subject = Some(candidate);
                let left = lhs.evaluate(state, ctx);
                let right = rhs.evaluate(state, ctx);
                op.apply(left, right)
            }
        }
    }

    /// Every matching object.
    pub fn list(&self, state: &GameState, ctx: &mut EffectContext) -> Vec<EntityId> {
        match self {
            Selector::Source => vec![ctx.source],
            Selector::You => vec![state.homebase(ctx.player)],
            Selector::Opponent => vec![state.homebase(ctx.player.opponent())],
            Selector::Target => ctx.target.into_iter().collect(),
            Selector::Subject => ctx.subject.into_iter().collect(),
            Selector::AllOf { selectors } => match selectors.split_first() {
                None => Vec::new(),
                Some((first, rest)) => first
                    .list(state, ctx)
                    .into_iter()
                    .filter(|id| rest.iter().all(|s| s.test(state, ctx, *id)))
                    .collect(),
            },
            Selector::Battlefield { filters } => state
                .in_play()
                .to_vec()
                .into_iter()
                .filter(|id| filters.iter().all(|f| f.test(state, ctx, *id)))
                .collect(),
            Selector::Type { .. } | Selector::Control { .. } | Selector::Compare { .. } => state
                .in_play()
                .to_vec()
                .into_iter()
                .filter(|id| self.test(state, ctx, *id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ops() {
        assert!(CompareOp::Equal.apply(2, 2));
        assert!(CompareOp::NotEqual.apply(2, 3));
        assert!(CompareOp::Less.apply(1, 2));
        assert!(!CompareOp::Greater.apply(2, 2));
        assert!(CompareOp::LessOrEqual.apply(2, 2));
        assert!(CompareOp::GreaterOrEqual.apply(3, 2));
    }

    #[test]
    fn test_unit_selectors_parse() {
        let s: Selector = serde_json::from_str(r#"{ "type": "source" }"#).unwrap();
        assert_eq!(s, Selector::Source);
        let s: Selector = serde_json::from_str(r#"{ "type": "opponent" }"#).unwrap();
        assert_eq!(s, Selector::Opponent);
    }

    #[test]
    fn test_compare_parses_literal_operands() {
        let json = r#"{ "type": "compare",
            "lhs": { "type": "powerOf", "selector": { "type": "subject" } },
            "op": "lessOrEqual",
            "rhs": 2 }"#;
        let s: Selector = serde_json::from_str(json).unwrap();
        match s {
            Selector::Compare { op, rhs, .. } => {
                assert_eq!(op, CompareOp::LessOrEqual);
                assert_eq!(rhs, Calculation::Constant(2));
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let bad: Result<Selector, _> = serde_json::from_str(r#"{ "type": "everything" }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_unknown_card_type_rejected() {
        let bad: Result<Selector, _> =
            serde_json::from_str(r#"{ "type": "type", "cardType": ["Planeswalker"] }"#);
        assert!(bad.is_err());
    }
}
