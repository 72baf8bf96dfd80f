//! Card system: specs, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardTypes`, `Keywords`, `AltCost`: name-loaded bitsets
//! - `CardSpec`: static card data, shared by every instance
//! - `ActivatedAbilitySpec`: an ability printed on a card
//! - `CardRegistry`: spec lookup by card name
//! - `GameObject`: runtime card state (zone, combat flags, modifiers)
//! - `ActivatedAbility`: per-instance ability use counter

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{AltCost, AltCostKind, CardType, CardTypes, Keyword, Keywords};
pub use definition::{ActivatedAbilitySpec, CardSpec};
pub use instance::{ActivatedAbility, GameObject};
pub use registry::CardRegistry;
