//! Zone manager: the seven zones of each player.
//!
//! Zones are created once from the player configuration and live for the
//! whole game. They are addressed by `ZoneRef`.
//!
//! ## Usage
//!
//! ```
//! use convergence::core::{EntityId, PlayerId, ZoneConfig, ZoneKind, ZoneRef};
//! use convergence::zones::ZoneManager;
//!
//! let mut zones = ZoneManager::from_configs(|_, kind| {
//!     ZoneConfig::new(matches!(kind, ZoneKind::Home | ZoneKind::Attack | ZoneKind::Defense), false)
//! });
//!
//! let hand = ZoneRef::new(PlayerId::new(0), ZoneKind::Hand);
//! zones.get_mut(hand).push(EntityId(10));
//! assert_eq!(zones.get(hand).len(), 1);
//! assert!(zones.get(ZoneRef::new(PlayerId::new(1), ZoneKind::Defense)).in_play());
//! ```

use crate::core::{PlayerConfig, PlayerId, PlayerMap, ZoneConfig, ZoneKind, ZoneRef};

use super::zone::Zone;

/// Every zone in the game, per player and kind.
#[derive(Clone, Debug)]
pub struct ZoneManager {
    zones: PlayerMap<Vec<Zone>>,
}

impl ZoneManager {
    /// Build with a configuration lookup for each player and kind.
    pub fn from_configs(config: impl Fn(PlayerId, ZoneKind) -> ZoneConfig) -> Self {
        Self {
            zones: PlayerMap::new(|player| {
                ZoneKind::ALL
                    .into_iter()
                    .map(|kind| Zone::new(player, kind, &config(player, kind)))
                    .collect()
            }),
        }
    }

    /// Build from the two player entries of a validated configuration.
    #[must_use]
    pub fn new(players: &PlayerMap<&PlayerConfig>) -> Self {
        Self::from_configs(|player, kind| players[player].zone(kind).clone())
    }

    #[must_use]
    pub fn get(&self, zone: ZoneRef) -> &Zone {
        &self.zones[zone.player][zone.kind.index()]
    }

    pub fn get_mut(&mut self, zone: ZoneRef) -> &mut Zone {
        &mut self.zones[zone.player][zone.kind.index()]
    }

    /// A player's zones in `ZoneKind::ALL` order.
    #[must_use]
    pub fn zones_of(&self, player: PlayerId) -> &[Zone] {
        &self.zones[player]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().flat_map(|(_, zones)| zones.iter())
    }

    /// Start a new tick for every zone's newly-added list.
    pub fn clear_newly_added(&mut self) {
        for (_, zones) in self.zones.iter_mut() {
            zones.iter_mut().for_each(Zone::clear_newly_added);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_zone_addressable() {
        let zones = ZoneManager::from_configs(|_, kind| ZoneConfig::new(false, kind == ZoneKind::Laboratory));

        for player in PlayerId::all() {
            for kind in ZoneKind::ALL {
                let zone = zones.get(ZoneRef::new(player, kind));
                assert_eq!(zone.owner(), player);
                assert_eq!(zone.kind(), kind);
            }
            assert_eq!(zones.zones_of(player).len(), 7);
        }
        assert_eq!(zones.iter().filter(|z| z.is_hidden()).count(), 2);
    }
}
