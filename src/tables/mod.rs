//! Static rule tables
//!
//! All immutable game data lives here, loaded once and shared by reference.
//! Lookups that run after validation use the `Result` accessors, which
//! classify a miss as a data-integrity fault rather than a player error.

pub mod defs;
pub mod loader;

pub use defs::{
    AcademyScroll, BeagleGoal, BoardLocation, Campsite, CorrespondenceTile, CrewCard,
    DistinctionBonus, DistinctionBonuses, EffectSpec, ObjectiveRequirement, ObjectiveSlot,
    ObjectiveTile, PersonalBoard, ReserveSlot, ScoringCondition, SealSlot, SpecialActionTile,
    Species, StampSlot, TentSlot, TentSlotCost, TheorySpace, TrackSpace, WorkerRow,
};

use crate::core::LocationId;
use crate::{EngineError, Result};
use rustc_hash::FxHashMap;

/// The complete set of static tables for one game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTables {
    pub locations: FxHashMap<LocationId, BoardLocation>,
    pub scrolls: FxHashMap<u8, AcademyScroll>,
    pub personal_board: PersonalBoard,
    pub objectives: FxHashMap<u32, ObjectiveTile>,
    pub correspondence_tiles: FxHashMap<u32, CorrespondenceTile>,
    pub beagle_goals: FxHashMap<u32, BeagleGoal>,
    pub crew_cards: FxHashMap<u32, CrewCard>,
    pub special_tiles: FxHashMap<u32, SpecialActionTile>,
    pub species: FxHashMap<String, Species>,
    pub campsites: FxHashMap<String, Campsite>,
    pub ocean_track: FxHashMap<String, TrackSpace>,
    pub island_a_track: FxHashMap<String, TrackSpace>,
    pub island_b_track: FxHashMap<String, TrackSpace>,
    pub island_c_track: FxHashMap<String, TrackSpace>,
    pub theory_track: FxHashMap<u8, TheorySpace>,
}

impl RuleTables {
    /// Load the bundled standard-game tables.
    pub fn standard() -> Result<RuleTables> {
        loader::load_standard()
    }

    /// Look up a location by id. `None` means the id is unknown, which a
    /// validator reports as a player error.
    pub fn get_location(&self, id: &LocationId) -> Option<&BoardLocation> {
        self.locations.get(id)
    }

    /// Look up a location that validation has already confirmed exists.
    pub fn location(&self, id: &LocationId) -> Result<&BoardLocation> {
        self.locations
            .get(id)
            .ok_or_else(|| EngineError::DataIntegrity(format!("No board location {id} in tables")))
    }

    pub fn scroll(&self, row: u8) -> Result<&AcademyScroll> {
        self.scrolls
            .get(&row)
            .ok_or_else(|| EngineError::DataIntegrity(format!("No academy scroll for row {row}")))
    }

    pub fn worker_row(&self, row_index: u8) -> Result<&WorkerRow> {
        self.personal_board
            .worker_row(row_index)
            .ok_or_else(|| {
                EngineError::DataIntegrity(format!("No personal board row {row_index}"))
            })
    }

    /// Track spaces flagged as specimen spawn points, in a stable order.
    pub fn specimen_spaces(&self) -> Vec<String> {
        let mut spaces: Vec<String> = [
            &self.island_a_track,
            &self.island_b_track,
            &self.island_c_track,
            &self.ocean_track,
        ]
        .iter()
        .flat_map(|track| track.values().filter(|s| s.has_specimen).map(|s| s.id.clone()))
        .collect();
        spaces.sort();
        spaces
    }
}
