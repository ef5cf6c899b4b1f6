//! Cost calculation
//!
//! Every placement action's coin cost is the sum of three independent
//! parts: the occupancy penalty, a table-driven base cost, and the
//! escalating cost of the next unfilled slot on the worker's row. The
//! parts are kept separate until the final affordability gate so
//! diagnostics can name each one.

use crate::core::PlacementClass;
use std::fmt;

/// Fixed occupancy penalty for the two-player configuration.
pub const OCCUPANCY_PENALTY: u32 = 3;

/// The additive parts of one action's coin cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Penalty for placing on an already-occupied circular location.
    pub placement_penalty: u32,
    /// Base cost looked up from the relevant rule table (e.g. scroll row).
    pub base_cost: u32,
    /// Cost of the next unfilled slot on the worker's row ladder.
    pub slot_cost: u32,
}

impl CostBreakdown {
    pub fn total(&self) -> u32 {
        self.placement_penalty + self.base_cost + self.slot_cost
    }

    /// Total after applying discounts from persistent player effects.
    ///
    /// `Discounts::default()` is the identity; no current handler feeds
    /// anything else in yet, but the seam is where objective-slot effects
    /// (penalty waivers, flat reductions) will plug in.
    pub fn total_with(&self, discounts: &Discounts) -> u32 {
        let mut total = self.base_cost + self.slot_cost;
        if !discounts.waive_placement_penalty {
            total += self.placement_penalty;
        }
        total.saturating_sub(discounts.coin_reduction)
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (penalty {} + base {} + slot {})",
            self.total(),
            self.placement_penalty,
            self.base_cost,
            self.slot_cost
        )
    }
}

/// Adjustments from persistent player effects. Identity by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discounts {
    pub waive_placement_penalty: bool,
    pub coin_reduction: u32,
}

/// Occupancy penalty for placing at a location.
///
/// Applies only to the circular placement class, and only when at least
/// one worker (from any player) already occupies the location. Square
/// locations never incur it, regardless of occupancy.
pub fn placement_penalty(class: PlacementClass, occupied: bool) -> u32 {
    match class {
        PlacementClass::Circular if occupied => OCCUPANCY_PENALTY,
        _ => 0,
    }
}
