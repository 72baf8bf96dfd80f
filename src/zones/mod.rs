//! Zone system for object locations.
//!
//! Every player has the same seven zones (`ZoneKind`), configured at setup
//! with an `inPlay` and an `isHidden` flag.
//!
//! ## Key Types
//!
//! - `Zone`: ordered ids; index is slot
//! - `ZoneManager`: all zones, addressed by `ZoneRef`
//! - `ZoneChangeQueue`: moves waiting for the next flush

pub mod manager;
pub mod queue;
pub mod zone;

pub use manager::ZoneManager;
pub use queue::{ZoneChange, ZoneChangeQueue, ZoneNotice};
pub use zone::Zone;

// Re-export zone types from core for convenience
pub use crate::core::config::{ZoneConfig, ZoneKind, ZoneMask, ZoneRef};
