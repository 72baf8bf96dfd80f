//! Trigger system for event-driven abilities.
//!
//! Triggers let cards respond to game events. Abilities whose spec carries
//! a `trigger` are subscribed while their object is in play. When the game
//! state raises an event it walks the subscribers for that event's type and
//! runs each ability whose conditions accept the event.
//!
//! ## Key Components
//!
//! - [`TriggerType`]: the five event kinds
//! - [`TriggerData`]: who and what an event is about
//! - [`TriggerSpec`]: event type plus four selector tests
//! - [`TriggerRegistry`]: subscriber lists per type
//!
//! ## Design Philosophy
//!
//! Triggers fire and resolve synchronously, in registration order. There is
//! no stack and no priority. A trigger that causes another event recurses,
//! bounded by the game state's depth limit.
//!
//! ## Example Usage
//!
//! ```
//! use convergence::effects::Selector;
//! use convergence::triggers::{TriggerSpec, TriggerType};
//!
//! // "Whenever you gain life"
//! let spec = TriggerSpec::on(TriggerType::GainLife).with_player(Selector::You);
//! assert_eq!(spec.on, TriggerType::GainLife);
//! ```

mod condition;
mod event;
mod registry;

pub use condition::TriggerSpec;
pub use event::{TriggerData, TriggerType};
pub use registry::{AbilityRef, TriggerRegistry};
