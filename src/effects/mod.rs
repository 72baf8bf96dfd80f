//! Effect system: timed modifiers and the ability DSL.
//!
//! - `Selector`: which objects an ability looks at
//! - `Calculation`: how much
//! - `Command`: what happens
//! - `EffectResolver`: runs commands against a `GameState`
//! - `ControlEffect` / `UpgradeEffect`: modifiers left on objects, expiring
//!   per their `Duration`
//!
//! ## Design Philosophy
//!
//! Content describes abilities as expression trees, loaded once and shared
//! by every instance of a card. The three families are closed enums, so an
//! unknown tag fails at load time and evaluation is an exhaustive match.

mod calculation;
mod command;
mod modifier;
mod resolver;
mod selector;

pub use calculation::Calculation;
pub use command::Command;
pub use modifier::{ControlEffect, Duration, EffectTimer, UpgradeEffect};
pub use resolver::{EffectContext, EffectResolver};
pub use selector::{CompareOp, Selector};
