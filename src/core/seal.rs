//! Wax seal system
//!
//! Seals are colored tokens collected by workers. A location's requirement
//! is a per-color count that a worker's accumulated seals must meet, with
//! temporary knowledge usable as a one-for-one wildcard for any deficit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wax seal colors. `Special` is the purple wildcard-scoring seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SealColor {
    Blue,
    Green,
    Yellow,
    Red,
    Special,
}

impl SealColor {
    /// The four colors dealt into the academy grid (everything but Special).
    pub const BASIC: [SealColor; 4] = [
        SealColor::Blue,
        SealColor::Green,
        SealColor::Yellow,
        SealColor::Red,
    ];

    pub const ALL: [SealColor; 5] = [
        SealColor::Blue,
        SealColor::Green,
        SealColor::Yellow,
        SealColor::Red,
        SealColor::Special,
    ];
}

impl fmt::Display for SealColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SealColor::Blue => write!(f, "blue"),
            SealColor::Green => write!(f, "green"),
            SealColor::Yellow => write!(f, "yellow"),
            SealColor::Red => write!(f, "red"),
            SealColor::Special => write!(f, "special"),
        }
    }
}

/// A per-color seal tally.
///
/// Used both for a worker's accumulated seals and for the shared supply.
/// Copy-eligible: five u8 fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealPool {
    pub blue: u8,
    pub green: u8,
    pub yellow: u8,
    pub red: u8,
    pub special: u8,
}

impl SealPool {
    pub fn new() -> Self {
        SealPool::default()
    }

    pub fn count(&self, color: SealColor) -> u8 {
        match color {
            SealColor::Blue => self.blue,
            SealColor::Green => self.green,
            SealColor::Yellow => self.yellow,
            SealColor::Red => self.red,
            SealColor::Special => self.special,
        }
    }

    pub fn add(&mut self, color: SealColor) {
        self.add_n(color, 1);
    }

    pub fn add_n(&mut self, color: SealColor, n: u8) {
        let slot = self.slot_mut(color);
        *slot = slot.saturating_add(n);
    }

    /// Remove one seal of `color`. Returns false (and leaves the pool
    /// unchanged) if none remain; the supply never goes negative.
    pub fn take(&mut self, color: SealColor) -> bool {
        let slot = self.slot_mut(color);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        u32::from(self.blue)
            + u32::from(self.green)
            + u32::from(self.yellow)
            + u32::from(self.red)
            + u32::from(self.special)
    }

    fn slot_mut(&mut self, color: SealColor) -> &mut u8 {
        match color {
            SealColor::Blue => &mut self.blue,
            SealColor::Green => &mut self.green,
            SealColor::Yellow => &mut self.yellow,
            SealColor::Red => &mut self.red,
            SealColor::Special => &mut self.special,
        }
    }
}

impl fmt::Display for SealPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in SealColor::ALL {
            let n = self.count(color);
            if n > 0 {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{n}x{color}")?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

/// A location's wax-seal requirement: how many seals of each color a
/// worker must hold to be placed there.
///
/// Deserializes from the rule-table map form, e.g. `{"RED": 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SealRequirement {
    pub blue: u8,
    pub green: u8,
    pub yellow: u8,
    pub red: u8,
    pub special: u8,
}

impl SealRequirement {
    pub fn none() -> Self {
        SealRequirement::default()
    }

    pub fn of(color: SealColor, count: u8) -> Self {
        let mut req = SealRequirement::default();
        match color {
            SealColor::Blue => req.blue = count,
            SealColor::Green => req.green = count,
            SealColor::Yellow => req.yellow = count,
            SealColor::Red => req.red = count,
            SealColor::Special => req.special = count,
        }
        req
    }

    pub fn count(&self, color: SealColor) -> u8 {
        match color {
            SealColor::Blue => self.blue,
            SealColor::Green => self.green,
            SealColor::Yellow => self.yellow,
            SealColor::Red => self.red,
            SealColor::Special => self.special,
        }
    }

    pub fn is_empty(&self) -> bool {
        SealColor::ALL.iter().all(|&c| self.count(c) == 0)
    }
}

impl fmt::Display for SealRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in SealColor::ALL {
            let n = self.count(color);
            if n > 0 {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{n}x{color}")?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}
