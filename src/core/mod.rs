//! Core game types: seals, players, requirement and cost math

pub mod cost;
pub mod player;
pub mod requirement;
pub mod seal;
pub mod types;

pub use cost::{placement_penalty, CostBreakdown, Discounts, OCCUPANCY_PENALTY};
pub use player::{PlayerState, WorkerId, WorkerState};
pub use requirement::{check_seal_requirement, RequirementCheck};
pub use seal::{SealColor, SealPool, SealRequirement};
pub use types::{
    ActionKind, DiaryClass, Distinction, GamePhase, LocationId, ObjectiveClass, PlacementClass,
    PlayerColor, SpecimenKind, TrackKind,
};
