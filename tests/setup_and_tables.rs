//! Setup determinism and consistency between the dealt state and the rule
//! tables it was dealt from.

use expedition_engine::game::setup_game;
use expedition_engine::tables::RuleTables;
use similar_asserts::assert_eq as assert_deep_eq;

#[test]
fn test_equal_seeds_produce_identical_games() {
    let tables = RuleTables::standard().unwrap();
    for seed in [0, 1, 42, u64::MAX] {
        let a = setup_game(&tables, seed).unwrap();
        let b = setup_game(&tables, seed).unwrap();
        assert_deep_eq!(a, b);
    }
}

#[test]
fn test_different_seeds_shuffle_the_board() {
    let tables = RuleTables::standard().unwrap();
    let a = setup_game(&tables, 1).unwrap();
    let b = setup_game(&tables, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_dealt_ids_come_from_the_tables() {
    let tables = RuleTables::standard().unwrap();
    let state = setup_game(&tables, 17).unwrap();

    for id in &state.correspondence_tiles_in_play {
        assert!(tables.correspondence_tiles.contains_key(id));
    }
    for id in &state.beagle_goals_in_play {
        assert!(tables.beagle_goals.contains_key(id));
    }
    for (location, tile_id) in &state.special_action_tiles {
        assert!(tables.get_location(location).is_some());
        assert!(tables.special_tiles.contains_key(tile_id));
    }
    for (space, token) in &state.placed_specimens {
        assert!(tables.specimen_spaces().contains(space));
        if let Some(token) = token {
            assert!(tables.species.contains_key(token));
        }
    }
}

#[test]
fn test_objective_deal_partitions_the_tiles() {
    let tables = RuleTables::standard().unwrap();
    let state = setup_game(&tables, 17).unwrap();

    let mut dealt: Vec<u32> = Vec::new();
    for player in &state.players {
        dealt.extend(&player.objectives_in_reserve);
    }
    dealt.extend(&state.objective_display_silver);
    dealt.extend(&state.objective_display_gold);
    dealt.extend(&state.objective_deck_silver);
    dealt.extend(&state.objective_deck_gold);
    dealt.sort_unstable();

    let mut all: Vec<u32> = tables.objectives.keys().copied().collect();
    all.sort_unstable();

    // Every tile is dealt somewhere, none twice
    assert_eq!(dealt, all);
}

#[test]
fn test_museum_holds_the_leftover_species() {
    let tables = RuleTables::standard().unwrap();
    let state = setup_game(&tables, 17).unwrap();

    for ((row, col), token) in &state.museum_state {
        let species = &tables.species[token];
        assert_eq!(species.museum_row, *row);
        assert_eq!(species.museum_col, *col);
        // A species in the museum was not also placed on a track
        assert!(!state
            .placed_specimens
            .values()
            .any(|t| t.as_deref() == Some(token.as_str())));
    }
}
