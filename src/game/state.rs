//! Main game state structure
//!
//! The central structure holding all mutable game information. It is
//! cheaply clonable and comparable with `==`, so a caller can snapshot a
//! state, attempt an action, and verify that a rejected action left
//! nothing behind. Static data stays in
//! [`RuleTables`](crate::tables::RuleTables); the state refers to tiles and
//! tracks by id only.

use crate::core::{GamePhase, LocationId, PlayerState, SealColor, SealPool, WorkerId};
use crate::{EngineError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// The 4x3 grid of face-up seals on the academy scrolls.
///
/// Row 0 is scroll row 1. A taken seal leaves a hole that is not refilled
/// until round cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcademyGrid {
    cells: [[Option<SealColor>; 3]; 4],
}

impl AcademyGrid {
    pub fn new() -> Self {
        AcademyGrid::default()
    }

    /// Seal at 0-based (row, col), if the cell holds one.
    pub fn seal_at(&self, row: usize, col: usize) -> Option<SealColor> {
        *self.cells.get(row)?.get(col)?
    }

    pub fn place(&mut self, row: usize, col: usize, color: SealColor) {
        self.cells[row][col] = Some(color);
    }

    /// Remove and return the seal at (row, col). Leaves the cell empty.
    pub fn take(&mut self, row: usize, col: usize) -> Option<SealColor> {
        self.cells.get_mut(row)?.get_mut(col)?.take()
    }

    pub fn remaining(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

/// Complete game state for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    pub current_round: u8,
    pub current_phase: GamePhase,
    pub current_player_index: usize,
    pub turn_order: Vec<usize>,

    /// Workers on main-board locations, in placement order.
    pub main_board_workers: FxHashMap<LocationId, SmallVec<[(usize, WorkerId); 4]>>,
    /// The shared seal supply.
    pub available_seals: SealPool,
    pub academy_seals: AcademyGrid,

    /// Museum grid cells occupied by leftover specimen tokens at setup,
    /// keyed by (row 'A'-'D', col 1-4).
    pub museum_state: FxHashMap<(char, u8), String>,
    pub museum_coins_taken: FxHashSet<char>,

    /// Specimen tokens on track spaces. `None` marks a space whose token
    /// has been researched away.
    pub placed_specimens: FxHashMap<String, Option<String>>,

    /// Track space id the HMS Beagle currently occupies.
    pub hms_beagle_position: String,

    // Objective decks and the face-up display, by tile id.
    pub objective_deck_silver: Vec<u32>,
    pub objective_deck_gold: Vec<u32>,
    pub objective_display_silver: Vec<u32>,
    pub objective_display_gold: Vec<u32>,

    /// Correspondence tile ids drawn for this game.
    pub correspondence_tiles_in_play: Vec<u32>,
    /// Stamps per in-play tile, indexed in parallel with
    /// `correspondence_tiles_in_play`: player index -> stamp count.
    pub correspondence_stamps: Vec<FxHashMap<usize, u8>>,
    /// Stamps each player has spent overall.
    pub used_stamps: FxHashMap<usize, u8>,

    pub beagle_goals_in_play: Vec<u32>,
    pub beagle_goals_completed: Vec<bool>,

    /// Special-action tile ids dealt onto locked locations at setup.
    pub special_action_tiles: FxHashMap<LocationId, u32>,
    /// Locations whose lock has been opened (by neutral or player lenses).
    pub unlocked_locations: FxHashSet<LocationId>,

    pub first_player_marker_index: usize,
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            players: Vec::new(),
            current_round: 1,
            current_phase: GamePhase::RoundAction,
            current_player_index: 0,
            turn_order: Vec::new(),
            main_board_workers: FxHashMap::default(),
            available_seals: SealPool::new(),
            academy_seals: AcademyGrid::new(),
            museum_state: FxHashMap::default(),
            museum_coins_taken: FxHashSet::default(),
            placed_specimens: FxHashMap::default(),
            hms_beagle_position: "O0".to_string(),
            objective_deck_silver: Vec::new(),
            objective_deck_gold: Vec::new(),
            objective_display_silver: Vec::new(),
            objective_display_gold: Vec::new(),
            correspondence_tiles_in_play: Vec::new(),
            correspondence_stamps: Vec::new(),
            used_stamps: FxHashMap::default(),
            beagle_goals_in_play: Vec::new(),
            beagle_goals_completed: Vec::new(),
            special_action_tiles: FxHashMap::default(),
            unlocked_locations: FxHashSet::default(),
            first_player_marker_index: 0,
            game_over: false,
        }
    }

    pub fn player(&self, index: usize) -> Result<&PlayerState> {
        self.players
            .get(index)
            .ok_or_else(|| EngineError::InvalidAction(format!("No player with index {index}")))
    }

    pub fn player_mut(&mut self, index: usize) -> Result<&mut PlayerState> {
        self.players
            .get_mut(index)
            .ok_or_else(|| EngineError::InvalidAction(format!("No player with index {index}")))
    }

    /// Workers currently on a location, in placement order. Empty slice if
    /// nobody is there.
    pub fn occupancy(&self, location: &LocationId) -> &[(usize, WorkerId)] {
        self.main_board_workers
            .get(location)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn place_worker(&mut self, location: LocationId, player_index: usize, worker: WorkerId) {
        self.main_board_workers
            .entry(location)
            .or_default()
            .push((player_index, worker));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academy_grid_take_leaves_hole() {
        let mut grid = AcademyGrid::new();
        grid.place(0, 0, SealColor::Red);
        grid.place(0, 1, SealColor::Blue);
        assert_eq!(grid.remaining(), 2);

        assert_eq!(grid.take(0, 0), Some(SealColor::Red));
        assert_eq!(grid.take(0, 0), None);
        assert_eq!(grid.seal_at(0, 1), Some(SealColor::Blue));
        assert_eq!(grid.remaining(), 1);

        // Out of bounds is just empty
        assert_eq!(grid.seal_at(5, 0), None);
    }

    #[test]
    fn test_occupancy_tracks_placement_order() {
        let mut state = GameState::new();
        let loc = LocationId::from("ACADEMY_MAIN");
        assert!(state.occupancy(&loc).is_empty());

        state.place_worker(loc.clone(), 0, WorkerId::new(1));
        state.place_worker(loc.clone(), 1, WorkerId::new(0));

        let on_loc = state.occupancy(&loc);
        assert_eq!(on_loc.len(), 2);
        assert_eq!(on_loc[0], (0, WorkerId::new(1)));
        assert_eq!(on_loc[1], (1, WorkerId::new(0)));
    }
}
