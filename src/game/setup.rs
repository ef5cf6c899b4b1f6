//! New-game setup
//!
//! Builds the initial two-player state from the rule tables and a seed.
//! All shuffles draw from one seeded RNG over pre-sorted id lists, so equal
//! seeds produce identical states.

use crate::core::{PlayerColor, PlayerState, SealColor, WorkerId, WorkerState};
use crate::game::state::GameState;
use crate::tables::RuleTables;
use crate::Result;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rustc_hash::FxHashMap;

const PLAYER_COUNT: usize = 2;
const STARTING_COINS: u32 = 4;
const STARTING_KNOWLEDGE: u32 = 1;
const INITIAL_STAMP_COUNT: u8 = 4;
const SEALS_PER_COLOR: u8 = 12;
const ACADEMY_GRID_SEALS: usize = 12;

const SPECIAL_ACTION_LOCATIONS: [&str; 6] = [
    "SPECIAL_ACTION_TL",
    "SPECIAL_ACTION_ML",
    "SPECIAL_ACTION_BL",
    "SPECIAL_ACTION_TR",
    "SPECIAL_ACTION_MR",
    "SPECIAL_ACTION_BR",
];

/// Initialize a fresh two-player game.
pub fn setup_game(tables: &RuleTables, seed: u64) -> Result<GameState> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let mut state = GameState::new();

    // Players, workers, and starting resources
    let player_colors = [PlayerColor::Blue, PlayerColor::Green];
    let mut row_indices: Vec<u8> = tables
        .personal_board
        .worker_rows
        .iter()
        .map(|r| r.row_index)
        .collect();
    row_indices.sort_unstable();

    for (index, color) in player_colors.iter().enumerate().take(PLAYER_COUNT) {
        let mut player = PlayerState::new(index, *color);
        player.coins = STARTING_COINS;
        player.temporary_knowledge = STARTING_KNOWLEDGE;
        player.workers = row_indices
            .iter()
            .enumerate()
            .map(|(id, &row)| WorkerState::new(WorkerId::new(id as u8), row))
            .collect();
        player.stamps_available = [INITIAL_STAMP_COUNT; 3];
        state.players.push(player);
    }

    state.turn_order = (0..PLAYER_COUNT).collect();
    state.first_player_marker_index = 0;
    state.current_player_index = state.turn_order[0];

    // Special action tiles onto the six locked locations; neutral lenses
    // open the top row
    let mut special_ids: Vec<u32> = tables.special_tiles.keys().copied().collect();
    special_ids.sort_unstable();
    special_ids.shuffle(&mut rng);
    for (loc, tile_id) in SPECIAL_ACTION_LOCATIONS.iter().zip(special_ids) {
        state.special_action_tiles.insert((*loc).into(), tile_id);
    }
    state.unlocked_locations.insert("SPECIAL_ACTION_TL".into());
    state.unlocked_locations.insert("SPECIAL_ACTION_TR".into());

    // Correspondence tiles
    let mut correspondence_ids: Vec<u32> = tables.correspondence_tiles.keys().copied().collect();
    correspondence_ids.sort_unstable();
    correspondence_ids.shuffle(&mut rng);
    state.correspondence_tiles_in_play = correspondence_ids.into_iter().take(3).collect();
    state.correspondence_stamps = vec![FxHashMap::default(); 3];

    // Seal supply, then the academy grid dealt out of it
    for color in SealColor::ALL {
        state.available_seals.add_n(color, SEALS_PER_COLOR);
    }
    let mut academy_pool: Vec<SealColor> = SealColor::BASIC
        .iter()
        .flat_map(|&c| std::iter::repeat(c).take(usize::from(SEALS_PER_COLOR)))
        .collect();
    academy_pool.shuffle(&mut rng);
    for i in 0..ACADEMY_GRID_SEALS {
        let seal = academy_pool[i];
        state.academy_seals.place(i / 3, i % 3, seal);
        state.available_seals.take(seal);
    }

    // Objectives: starting tiles dealt to players, the rest form the decks
    let mut objective_ids: Vec<u32> = tables.objectives.keys().copied().collect();
    objective_ids.sort_unstable();
    objective_ids.shuffle(&mut rng);

    let mut starting_silver = Vec::new();
    let mut starting_gold = Vec::new();
    for id in objective_ids {
        let tile = &tables.objectives[&id];
        match (tile.starting, tile.class) {
            (true, crate::core::ObjectiveClass::Silver) => starting_silver.push(id),
            (true, crate::core::ObjectiveClass::Gold) => starting_gold.push(id),
            (false, crate::core::ObjectiveClass::Silver) => state.objective_deck_silver.push(id),
            (false, crate::core::ObjectiveClass::Gold) => state.objective_deck_gold.push(id),
        }
    }

    for (index, player) in state.players.iter_mut().enumerate() {
        if let Some(id) = starting_silver.get(index) {
            player.objectives_in_reserve.push(*id);
        }
        if let Some(id) = starting_gold.get(index) {
            player.objectives_in_reserve.push(*id);
        }
    }

    for _ in 0..2 {
        if !state.objective_deck_silver.is_empty() {
            state
                .objective_display_silver
                .push(state.objective_deck_silver.remove(0));
        }
        if !state.objective_deck_gold.is_empty() {
            state
                .objective_display_gold
                .push(state.objective_deck_gold.remove(0));
        }
    }

    // Beagle goals for the five rounds
    let mut goal_ids: Vec<u32> = tables.beagle_goals.keys().copied().collect();
    goal_ids.sort_unstable();
    goal_ids.shuffle(&mut rng);
    state.beagle_goals_in_play = goal_ids.into_iter().take(5).collect();
    state.beagle_goals_completed = vec![false; state.beagle_goals_in_play.len()];

    // Specimens: ten onto the flagged track spaces, leftovers into the
    // museum grid
    let specimen_spaces = tables.specimen_spaces();
    let mut token_ids: Vec<String> = tables.species.keys().cloned().collect();
    token_ids.sort();
    token_ids.shuffle(&mut rng);

    for (space, token) in specimen_spaces.iter().zip(token_ids.iter()) {
        state
            .placed_specimens
            .insert(space.clone(), Some(token.clone()));
    }
    for token in token_ids.iter().skip(specimen_spaces.len()) {
        let species = &tables.species[token];
        state
            .museum_state
            .insert((species.museum_row, species.museum_col), token.clone());
    }

    Ok(state)
}
