//! Player and worker state
//!
//! A `PlayerState` holds everything one player owns; its four workers are
//! fixed at setup and live for the whole game. Coins and temporary
//! knowledge are debited through checked helpers so the non-negativity
//! invariants hold after every mutation.

use crate::core::{PlayerColor, SealColor, SealPool};
use crate::{EngineError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Identity of a worker within its owning player. Stable for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerId(u8);

impl WorkerId {
    pub fn new(id: u8) -> Self {
        WorkerId(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single worker belonging to a player.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerState {
    pub id: WorkerId,

    /// Fixed link to a personal-board row definition (1-4).
    pub row_index: u8,

    /// Seals collected on this worker's row.
    pub seals: SealPool,

    /// How many physical slots on the row are covered by seals.
    /// Each increment corresponds to exactly one seal added to `seals`.
    pub seal_slots_filled: u8,

    /// Flipped false -> true on placement; reset only by round cleanup.
    pub is_placed: bool,

    /// Crew card achieved by this worker, if any.
    pub crew_card: Option<u32>,
}

impl WorkerState {
    pub fn new(id: WorkerId, row_index: u8) -> Self {
        WorkerState {
            id,
            row_index,
            seals: SealPool::new(),
            seal_slots_filled: 0,
            is_placed: false,
            crew_card: None,
        }
    }

    /// Credit one seal: the color tally and the slot counter move together.
    pub fn add_seal(&mut self, color: SealColor) {
        self.seals.add(color);
        self.seal_slots_filled += 1;
    }
}

/// The entire dynamic state for a single player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub index: usize,
    pub color: PlayerColor,

    // Core resources (invariant: never negative, enforced by checked debits)
    pub coins: u32,
    pub temporary_knowledge: u32,
    pub vp_marker: u32,

    /// Fixed at setup: one worker per personal-board row, never resized.
    pub workers: Vec<WorkerState>,

    /// Ship marker position (track space id).
    pub ship_position: String,
    /// Marker on the theory track (0-36).
    pub evolution_marker: u8,

    pub explorers_available: u8,
    /// Island id ('A'/'B'/'C') -> current space id of the explorer there.
    pub explorers_placed: FxHashMap<char, String>,

    pub tents_available: u8,
    pub tents_placed: FxHashSet<String>,

    /// Remaining stamps per personal-board stamp stack.
    pub stamps_available: [u8; 3],

    /// Specimen token ids this player has researched.
    pub researched_specimens: FxHashSet<String>,

    /// Objective tile ids held but not yet placed (max 2, enforced at
    /// acquisition).
    pub objectives_in_reserve: Vec<u32>,
    /// Personal-board objective slot id -> placed objective tile id.
    pub objective_slots_filled: FxHashMap<String, u32>,

    /// Crew card ids dealt at setup.
    pub crew_cards_assigned: Vec<u32>,

    pub lenses_available: u8,
    pub lenses_placed: FxHashSet<String>,

    // Persistent objective effects, set when the matching slot is filled.
    // These feed the cost calculator's discount seam.
    pub academy_penalty_waiver: bool,
    pub extra_book_multiplier: u8,
    pub diary_penalty_reduction: u8,
    pub max_lag_penalty: Option<u8>,
}

impl PlayerState {
    pub fn new(index: usize, color: PlayerColor) -> Self {
        PlayerState {
            index,
            color,
            coins: 0,
            temporary_knowledge: 0,
            vp_marker: 0,
            workers: Vec::new(),
            ship_position: "O0".to_string(),
            evolution_marker: 0,
            explorers_available: 3,
            explorers_placed: FxHashMap::default(),
            tents_available: 5,
            tents_placed: FxHashSet::default(),
            stamps_available: [0; 3],
            researched_specimens: FxHashSet::default(),
            objectives_in_reserve: Vec::new(),
            objective_slots_filled: FxHashMap::default(),
            crew_cards_assigned: Vec::new(),
            lenses_available: 6,
            lenses_placed: FxHashSet::default(),
            academy_penalty_waiver: false,
            extra_book_multiplier: 0,
            diary_penalty_reduction: 0,
            max_lag_penalty: None,
        }
    }

    pub fn worker(&self, id: WorkerId) -> Option<&WorkerState> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn worker_mut(&mut self, id: WorkerId) -> Option<&mut WorkerState> {
        self.workers.iter_mut().find(|w| w.id == id)
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.coins >= cost
    }

    /// Debit coins. Affordability must have been confirmed during
    /// validation; failing here is a data-integrity defect, not a player
    /// error.
    pub fn spend_coins(&mut self, cost: u32) -> Result<()> {
        if self.coins < cost {
            return Err(EngineError::DataIntegrity(format!(
                "Player {} coin debit of {} exceeds balance {} after validation",
                self.index, cost, self.coins
            )));
        }
        self.coins -= cost;
        Ok(())
    }

    pub fn gain_coins(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Debit temporary knowledge, with the same contract as `spend_coins`.
    pub fn spend_knowledge(&mut self, amount: u32) -> Result<()> {
        if self.temporary_knowledge < amount {
            return Err(EngineError::DataIntegrity(format!(
                "Player {} knowledge debit of {} exceeds balance {} after validation",
                self.index, amount, self.temporary_knowledge
            )));
        }
        self.temporary_knowledge -= amount;
        Ok(())
    }

    pub fn gain_knowledge(&mut self, amount: u32) {
        self.temporary_knowledge += amount;
    }

    pub fn gain_vp(&mut self, amount: u32) {
        self.vp_marker += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_lookup() {
        let mut player = PlayerState::new(0, PlayerColor::Blue);
        player.workers = (0..4)
            .map(|i| WorkerState::new(WorkerId::new(i), i + 1))
            .collect();

        assert!(player.worker(WorkerId::new(2)).is_some());
        assert!(player.worker(WorkerId::new(9)).is_none());
    }

    #[test]
    fn test_checked_spend() {
        let mut player = PlayerState::new(0, PlayerColor::Green);
        player.coins = 5;
        player.temporary_knowledge = 1;

        player.spend_coins(3).unwrap();
        assert_eq!(player.coins, 2);

        // Overdraft is a data-integrity fault, and the balance is untouched
        let err = player.spend_coins(10).unwrap_err();
        assert!(!err.is_rejection());
        assert_eq!(player.coins, 2);

        player.spend_knowledge(1).unwrap();
        assert_eq!(player.temporary_knowledge, 0);
        assert!(player.spend_knowledge(1).is_err());
    }

    #[test]
    fn test_add_seal_moves_both_counters() {
        let mut worker = WorkerState::new(WorkerId::new(0), 1);
        worker.add_seal(SealColor::Red);
        worker.add_seal(SealColor::Red);

        assert_eq!(worker.seals.count(SealColor::Red), 2);
        assert_eq!(worker.seal_slots_filled, 2);
    }
}
