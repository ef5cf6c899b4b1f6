//! End-to-end tests for the academy action: validation order, requirement
//! resolution, cost composition, and atomic application.

use expedition_engine::core::{SealColor, WorkerId};
use expedition_engine::game::{resolve_action, setup_game, ActionRequest, GameLogger, GameState};
use expedition_engine::tables::RuleTables;
use similar_asserts::assert_eq as assert_deep_eq;

fn fixture() -> (GameState, RuleTables, GameLogger) {
    let tables = RuleTables::standard().unwrap();
    let state = setup_game(&tables, 11).unwrap();
    let mut logger = GameLogger::new();
    logger.enable_capture();
    (state, tables, logger)
}

fn academy_request(
    player_index: usize,
    worker: u8,
    location: &str,
    scroll_row: u8,
    seal_index: usize,
    use_knowledge: bool,
) -> ActionRequest {
    ActionRequest::Academy {
        player_index,
        worker: WorkerId::new(worker),
        location: location.into(),
        scroll_row,
        seal_index,
        use_knowledge,
    }
}

#[test]
fn test_successful_academy_action() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;
    let seal_color = state.academy_seals.seal_at(0, 1).unwrap();

    resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 1, false),
    )
    .unwrap();

    // Unoccupied circular location: penalty 0 + scroll 2 + first slot 1
    let player = &state.players[0];
    assert_eq!(player.coins, 7);
    assert_eq!(player.temporary_knowledge, 1);

    let worker = player.worker(WorkerId::new(0)).unwrap();
    assert!(worker.is_placed);
    assert_eq!(worker.seals.count(seal_color), 1);
    assert_eq!(worker.seal_slots_filled, 1);

    assert_eq!(
        state.occupancy(&"ACADEMY_MAIN".into()),
        &[(0, WorkerId::new(0))]
    );
    assert_eq!(state.academy_seals.seal_at(0, 1), None);
}

#[test]
fn test_academy_with_knowledge_substitution() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;

    // ACADEMY_BOTTOM wants one red seal; the worker has none, so the
    // single knowledge point covers the deficit
    resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_BOTTOM", 1, 0, true),
    )
    .unwrap();

    let player = &state.players[0];
    assert_eq!(player.temporary_knowledge, 0);
    assert_eq!(player.coins, 7);
    // Side effect of the bottom location
    assert_eq!(player.vp_marker, 2);
    assert!(player.worker(WorkerId::new(0)).unwrap().is_placed);
}

#[test]
fn test_unauthorized_knowledge_spend_is_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;
    let before = state.clone();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_BOTTOM", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.is_insufficient_resources());
    assert!(err.to_string().contains("not authorized"));
    assert_deep_eq!(before, state);
}

#[test]
fn test_unsatisfiable_requirement_is_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;
    state.players[0].temporary_knowledge = 0;
    let before = state.clone();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_BOTTOM", 1, 0, true),
    )
    .unwrap_err();

    assert!(err.is_rejection());
    assert!(!err.is_insufficient_resources());
    assert!(err.to_string().contains("does not meet requirements"));
    assert_deep_eq!(before, state);
}

#[test]
fn test_insufficient_coins_is_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 2; // Total cost is 3
    let before = state.clone();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.is_insufficient_resources());
    assert!(err.to_string().contains("cannot afford cost 3"));
    assert_deep_eq!(before, state);
}

#[test]
fn test_occupied_circular_location_penalty() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;

    // Opponent's worker is already on the spot
    state.players[1].workers[0].is_placed = true;
    state.place_worker("ACADEMY_MAIN".into(), 1, WorkerId::new(0));

    resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap();

    // Penalty 3 + scroll 2 + slot 1
    assert_eq!(state.players[0].coins, 4);
    assert_eq!(state.occupancy(&"ACADEMY_MAIN".into()).len(), 2);
}

#[test]
fn test_own_worker_also_triggers_penalty() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;

    // Occupancy counts any worker, including the acting player's own
    state.players[0].workers[1].is_placed = true;
    state.place_worker("ACADEMY_MAIN".into(), 0, WorkerId::new(1));

    resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap();

    assert_eq!(state.players[0].coins, 4);
}

#[test]
fn test_wrong_turn_rejected_before_everything_else() {
    let (mut state, tables, logger) = fixture();
    let before = state.clone();

    // Everything else about this request is bogus too; the turn check
    // must fire first
    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(1, 9, "NOWHERE", 7, 9, false),
    )
    .unwrap_err();

    assert!(err.is_rejection());
    assert!(err.to_string().contains("It is not Player 1's turn"));
    assert_deep_eq!(before, state);
}

#[test]
fn test_unknown_worker_rejected() {
    let (mut state, tables, logger) = fixture();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 9, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.is_rejection());
    assert!(err.to_string().contains("Worker 9 not found"));
}

#[test]
fn test_already_placed_worker_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].workers[0].is_placed = true;

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.to_string().contains("already been placed"));
}

#[test]
fn test_unknown_location_rejected() {
    let (mut state, tables, logger) = fixture();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "BOGUS", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.is_rejection());
    assert!(err.to_string().contains("Unknown location BOGUS"));
}

#[test]
fn test_non_academy_location_rejected() {
    let (mut state, tables, logger) = fixture();

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "RESERVE_TURN_ORDER", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.to_string().contains("not an academy location"));
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    let (mut state, tables, logger) = fixture();

    for (row, index, needle) in [
        (0u8, 0usize, "Invalid scroll row 0"),
        (5, 0, "Invalid scroll row 5"),
        (1, 3, "Invalid seal index 3"),
    ] {
        let err = resolve_action(
            &mut state,
            &tables,
            &logger,
            &academy_request(0, 0, "ACADEMY_MAIN", row, index, false),
        )
        .unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains(needle), "missing: {needle}");
    }
}

#[test]
fn test_empty_grid_cell_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 10;
    state.academy_seals.take(0, 0);

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.to_string().contains("No seal available at row 1"));
}

#[test]
fn test_full_worker_row_rejected() {
    let (mut state, tables, logger) = fixture();
    state.players[0].coins = 20;

    // Row 1 holds at most 3 seals
    let worker = state.players[0].worker_mut(WorkerId::new(0)).unwrap();
    worker.add_seal(SealColor::Red);
    worker.add_seal(SealColor::Blue);
    worker.add_seal(SealColor::Green);

    let err = resolve_action(
        &mut state,
        &tables,
        &logger,
        &academy_request(0, 0, "ACADEMY_MAIN", 1, 0, false),
    )
    .unwrap_err();

    assert!(err.is_rejection());
    assert!(err.to_string().contains("cannot hold more seals"));
}

#[test]
fn test_slot_cost_escalates_with_filled_slots() {
    let (mut state, tables, _logger) = fixture();
    state.players[0].coins = 20;
    state.players[0]
        .worker_mut(WorkerId::new(0))
        .unwrap()
        .add_seal(SealColor::Yellow);

    let plan = expedition_engine::game::plan_academy(
        &state,
        &tables,
        0,
        WorkerId::new(0),
        &"ACADEMY_MAIN".into(),
        1,
        0,
        false,
    )
    .unwrap();

    // Second slot on row 1 costs 2 instead of 1
    assert_eq!(plan.cost.slot_cost, 2);
    assert_eq!(plan.cost.total(), 4);
}
