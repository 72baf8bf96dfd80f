//! Mana amounts: fixed six-slot resource vectors.
//!
//! Slot 0 is the generic bucket, slots 1..=5 are white, blue, black, red
//! and green. Costs and produced resources are written in a compact
//! grammar:
//!
//! - digits accumulate into the generic slot (`"12"` is twelve generic)
//! - `C` adds one generic
//! - `W`, `U`, `B`, `R`, `G` add one of the matching color
//!
//! ```
//! use convergence::core::{ManaAmount, ManaColor};
//!
//! let cost: ManaAmount = "2WW".parse().unwrap();
//! assert_eq!(cost.generic(), 2);
//! assert_eq!(cost.get(ManaColor::White), 2);
//! ```
//!
//! Generic is a bucket of its own. Colored surplus never pays a generic
//! cost, so `"1"` cannot be paid from a pool of `"WW"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slots in a mana vector.
pub const MANA_SLOTS: usize = 6;

/// A colored mana slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaColor {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl ManaColor {
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Slot index inside a `ManaAmount`.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            ManaColor::White => 1,
            ManaColor::Blue => 2,
            ManaColor::Black => 3,
            ManaColor::Red => 4,
            ManaColor::Green => 5,
        }
    }

    /// Bit used by [`ManaAmount::color_mask`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self.slot() - 1)
    }
}

/// Error for a malformed mana string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManaParseError {
    #[error("invalid mana character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

/// Six-slot mana vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ManaAmount {
    slots: [i32; MANA_SLOTS],
}

impl ManaAmount {
    /// An amount with every slot at zero.
    pub const ZERO: Self = Self { slots: [0; MANA_SLOTS] };

    #[must_use]
    pub const fn from_slots(slots: [i32; MANA_SLOTS]) -> Self {
        Self { slots }
    }

    /// Parse the compact mana grammar.
    pub fn parse(input: &str) -> Result<Self, ManaParseError> {
        let mut slots = [0i32; MANA_SLOTS];
        let mut number: Option<i32> = None;

        for (position, ch) in input.chars().enumerate() {
            if let Some(digit) = ch.to_digit(10) {
                number = Some(number.unwrap_or(0) * 10 + digit as i32);
                continue;
            }
            if let Some(n) = number.take() {
                slots[0] += n;
            }
            let slot = match ch {
                'C' => 0,
                'W' => ManaColor::White.slot(),
                'U' => ManaColor::Blue.slot(),
                'B' => ManaColor::Black.slot(),
                'R' => ManaColor::Red.slot(),
                'G' => ManaColor::Green.slot(),
                _ => return Err(ManaParseError::InvalidCharacter { ch, position }),
            };
            slots[slot] += 1;
        }
        if let Some(n) = number {
            slots[0] += n;
        }

        Ok(Self { slots })
    }

    #[must_use]
    pub fn generic(&self) -> i32 {
        self.slots[0]
    }

    #[must_use]
    pub fn get(&self, color: ManaColor) -> i32 {
        self.slots[color.slot()]
    }

    #[must_use]
    pub fn slots(&self) -> &[i32; MANA_SLOTS] {
        &self.slots
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.slots.iter().all(|&s| s == 0)
    }

    /// Zero all slots.
    pub fn clear(&mut self) {
        self.slots = [0; MANA_SLOTS];
    }

    /// Pointwise add.
    pub fn add(&mut self, other: &ManaAmount) {
        for (have, extra) in self.slots.iter_mut().zip(other.slots.iter()) {
            *have += extra;
        }
    }

    /// Whether every slot covers the matching slot of `cost`.
    ///
    /// A missing cost is always payable.
    #[must_use]
    pub fn can_spend(&self, cost: Option<&ManaAmount>) -> bool {
        match cost {
            None => true,
            Some(cost) => self
                .slots
                .iter()
                .zip(cost.slots.iter())
                .all(|(have, need)| have >= need),
        }
    }

    /// Subtract `cost` if and only if every slot can pay; returns whether it did.
    pub fn try_spend(&mut self, cost: Option<&ManaAmount>) -> bool {
        if !self.can_spend(cost) {
            return false;
        }
        if let Some(cost) = cost {
            for (have, need) in self.slots.iter_mut().zip(cost.slots.iter()) {
                *have -= need;
            }
        }
        true
    }

    /// Bitmask of nonzero color slots (generic excluded).
    #[must_use]
    pub fn color_mask(&self) -> u8 {
        ManaColor::ALL
            .iter()
            .filter(|c| self.get(**c) != 0)
            .fold(0, |mask, c| mask | c.bit())
    }
}

impl std::str::FromStr for ManaAmount {
    type Err = ManaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ManaAmount {
    type Error = ManaParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ManaAmount> for String {
    fn from(amount: ManaAmount) -> Self {
        amount.to_string()
    }
}

impl std::fmt::Display for ManaAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.slots[0] != 0 || self.is_zero() {
            write!(f, "{}", self.slots[0])?;
        }
        for (color, letter) in ManaColor::ALL.iter().zip(['W', 'U', 'B', 'R', 'G']) {
            for _ in 0..self.get(*color).max(0) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
