//! Card attribute bitsets.
//!
//! Card types, keywords and alternative costs are written in content as
//! arrays of names and combined into bitsets at load time:
//!
//! ```
//! use convergence::cards::{CardType, CardTypes};
//!
//! let types: CardTypes = serde_json::from_str(r#"["Creature", "Resource"]"#).unwrap();
//! assert!(types.contains(CardType::Creature));
//! assert!(types.intersects(CardType::Resource.into()));
//! assert!(!types.contains(CardType::Action));
//! ```
//!
//! An unknown name fails to load.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! name_bitset {
    (
        $(#[$set_meta:meta])*
        $set:ident,
        $(#[$flag_meta:meta])*
        $flag:ident { $($(#[$variant_meta:meta])* $variant:ident = $bit:expr),+ $(,)? }
    ) => {
        $(#[$flag_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $flag {
            $($(#[$variant_meta])* $variant),+
        }

        impl $flag {
            pub const ALL: &'static [$flag] = &[$($flag::$variant),+];

            #[must_use]
            pub const fn bit(self) -> u16 {
                match self {
                    $($flag::$variant => 1 << $bit),+
                }
            }
        }

        $(#[$set_meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $set(u16);

        impl Serialize for $set {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                Vec::<$flag>::from(*self).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $set {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Vec::<$flag>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $set {
            pub const NONE: Self = Self(0);

            #[must_use]
            pub const fn from_bits(bits: u16) -> Self {
                Self(bits)
            }

            #[must_use]
            pub const fn bits(self) -> u16 {
                self.0
            }

            #[must_use]
            pub const fn contains(self, flag: $flag) -> bool {
                self.0 & flag.bit() != 0
            }

            /// Any bit in common.
            #[must_use]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            #[must_use]
            pub const fn with(self, flag: $flag) -> Self {
                Self(self.0 | flag.bit())
            }

            pub fn insert(&mut self, flag: $flag) {
                self.0 |= flag.bit();
            }
        }

        impl From<$flag> for $set {
            fn from(flag: $flag) -> Self {
                Self(flag.bit())
            }
        }

        impl std::ops::BitOr for $set {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $set {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl From<Vec<$flag>> for $set {
            fn from(flags: Vec<$flag>) -> Self {
                flags.into_iter().fold(Self::NONE, |set, f| set.with(f))
            }
        }

        impl From<$set> for Vec<$flag> {
            fn from(set: $set) -> Self {
                $flag::ALL.iter().copied().filter(|f| set.contains(*f)).collect()
            }
        }

        impl FromIterator<$flag> for $set {
            fn from_iter<I: IntoIterator<Item = $flag>>(iter: I) -> Self {
                iter.into_iter().fold(Self::NONE, |set, f| set.with(f))
            }
        }
    };
}

name_bitset! {
    /// Set of card types.
    CardTypes,
    /// A card type name.
    CardType {
        Creature = 0,
        /// Land-like: produces resources, limited by land drops.
        Resource = 1,
        /// Single-shot card that resolves and goes to the discard pile.
        Action = 2,
        /// Non-creature permanent.
        Support = 3,
        /// A player's own permanent.
        Homebase = 4,
    }
}

name_bitset! {
    /// Set of keywords.
    Keywords,
    /// A keyword name.
    Keyword {
        Flying = 0,
        Reach = 1,
        Haste = 2,
        Vigilance = 3,
        Trample = 4,
        Deathtouch = 5,
        Lifelink = 6,
    }
}

name_bitset! {
    /// Non-mana costs of an activated ability.
    AltCost,
    /// A non-mana cost.
    AltCostKind {
        Tap = 0,
        Sacrifice = 1,
    }
}
