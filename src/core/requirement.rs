//! Requirement resolution
//!
//! Pure functions deciding whether a worker's accumulated seals satisfy a
//! location's requirement map. Temporary knowledge substitutes for any
//! deficit one-for-one, summed across all required colors; there is no
//! partial substitution and no per-requirement exchange rate. Nothing here
//! consumes anything - the mutation phase debits the substitute, and only
//! if the caller authorized spending it.

use crate::core::{SealColor, SealPool, SealRequirement};

/// Outcome of checking a requirement against a worker's seals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementCheck {
    /// Whether the requirement can be met, possibly by spending knowledge.
    pub satisfiable: bool,
    /// Total knowledge that would be consumed to cover the deficit.
    /// Reported even when unsatisfiable, for diagnostics.
    pub knowledge_needed: u32,
}

impl RequirementCheck {
    /// The requirement is met by seals alone.
    pub fn met_directly(&self) -> bool {
        self.satisfiable && self.knowledge_needed == 0
    }
}

/// Check a seal requirement, allowing knowledge as a wildcard.
///
/// For each color, `deficit = max(0, needed - held)`; the requirement is
/// satisfiable iff the summed deficit does not exceed
/// `knowledge_available`.
pub fn check_seal_requirement(
    seals: &SealPool,
    requirement: &SealRequirement,
    knowledge_available: u32,
) -> RequirementCheck {
    let mut knowledge_needed: u32 = 0;

    for color in SealColor::ALL {
        let needed = u32::from(requirement.count(color));
        let held = u32::from(seals.count(color));
        knowledge_needed += needed.saturating_sub(held);
    }

    RequirementCheck {
        satisfiable: knowledge_needed <= knowledge_available,
        knowledge_needed,
    }
}
