//! Numeric expressions evaluated against an effect context.
//!
//! Content may write a plain number wherever a calculation is expected, or a
//! tagged object for anything computed:
//!
//! ```
//! use convergence::effects::Calculation;
//!
//! let literal: Calculation = serde_json::from_str("3").unwrap();
//! assert_eq!(literal, Calculation::Constant(3));
//!
//! let power: Calculation =
//!     serde_json::from_str(r#"{ "type": "powerOf", "selector": { "type": "source" } }"#).unwrap();
//! assert!(matches!(power, Calculation::PowerOf(_)));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::GameState;

use super::resolver::EffectContext;
use super::selector::Selector;

/// Calculation expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "CalculationRepr", into = "CalculationRepr")]
pub enum Calculation {
    Constant(i32),
    /// Sum of `power` over the selected objects.
    PowerOf(Box<Selector>),
    /// Number of selected objects.
    Count(Box<Selector>),
}

impl Calculation {
    pub fn evaluate(&self, state: &GameState, ctx: &mut EffectContext) -> i32 {
        match self {
            Calculation::Constant(value) => *value,
            Calculation::PowerOf(selector) => selector
                .list(state, ctx)
                .into_iter()
                .filter_map(|id| state.object(id))
                .map(|obj| obj.power)
                .sum(),
            Calculation::Count(selector) => {
                i32::try_from(selector.list(state, ctx).len()).unwrap_or(i32::MAX)
            }
        }
    }
}

impl From<i32> for Calculation {
    fn from(value: i32) -> Self {
        Calculation::Constant(value)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TaggedCalculation {
    Constant { value: i32 },
    PowerOf { selector: Box<Selector> },
    Count { selector: Box<Selector> },
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CalculationRepr {
    Literal(i32),
    Tagged(TaggedCalculation),
}

impl From<CalculationRepr> for Calculation {
    fn from(repr: CalculationRepr) -> Self {
        match repr {
            CalculationRepr::Literal(value)
            | CalculationRepr::Tagged(TaggedCalculation::Constant { value }) => {
                Calculation::Constant(value)
            }
            CalculationRepr::Tagged(TaggedCalculation::PowerOf { selector }) => {
                Calculation::PowerOf(selector)
            }
            CalculationRepr::Tagged(TaggedCalculation::Count { selector }) => {
                Calculation::Count(selector)
            }
        }
    }
}

impl From<Calculation> for CalculationRepr {
    fn from(calc: Calculation) -> Self {
        match calc {
            Calculation::Constant(value) => CalculationRepr::Literal(value),
            Calculation::PowerOf(selector) => {
                CalculationRepr::Tagged(TaggedCalculation::PowerOf { selector })
            }
            Calculation::Count(selector) => {
                CalculationRepr::Tagged(TaggedCalculation::Count { selector })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_constant() {
        let calc: Calculation = serde_json::from_str(r#"{ "type": "constant", "value": -2 }"#).unwrap();
        assert_eq!(calc, Calculation::Constant(-2));
    }

    #[test]
    fn test_count_parses() {
        let calc: Calculation = serde_json::from_str(
            r#"{ "type": "count", "selector": { "type": "battlefield" } }"#,
        )
        .unwrap();
        assert!(matches!(calc, Calculation::Count(_)));
    }

    #[test]
    fn test_constant_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Calculation::from(4)).unwrap(), "4");
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let bad: Result<Calculation, _> = serde_json::from_str(r#"{ "type": "random" }"#);
        assert!(bad.is_err());
    }
}
