//! Action handlers
//!
//! Each handler follows the same protocol: validate the request in a fixed
//! order, resolve requirements, compute the cost, check affordability, and
//! only then emit a plan. The first failing check decides the error; later
//! checks never run. `resolve_action` chains planning and application.

use crate::core::{
    check_seal_requirement, placement_penalty, ActionKind, CostBreakdown, Discounts, LocationId,
    WorkerId,
};
use crate::game::logger::GameLogger;
use crate::game::plan::{apply_plan, ActionPlan, PlannedEffect};
use crate::game::state::GameState;
use crate::tables::{EffectSpec, RuleTables};
use crate::{EngineError, Result};

/// A player's request to perform one action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    /// Place a worker at an academy location and take a seal from the grid.
    Academy {
        player_index: usize,
        worker: WorkerId,
        location: LocationId,
        /// 1-based scroll row on the academy board.
        scroll_row: u8,
        /// 0-based column within the chosen row.
        seal_index: usize,
        /// Whether temporary knowledge may be spent to cover seal deficits.
        use_knowledge: bool,
    },
    /// Place a worker on the turn-order reserve location.
    ReserveTurnOrder {
        player_index: usize,
        worker: WorkerId,
    },
}

/// Validate, cost, and apply a request in one step.
pub fn resolve_action(
    state: &mut GameState,
    tables: &RuleTables,
    logger: &GameLogger,
    request: &ActionRequest,
) -> Result<()> {
    let plan = match request {
        ActionRequest::Academy {
            player_index,
            worker,
            location,
            scroll_row,
            seal_index,
            use_knowledge,
        } => plan_academy(
            state,
            tables,
            *player_index,
            *worker,
            location,
            *scroll_row,
            *seal_index,
            *use_knowledge,
        )?,
        ActionRequest::ReserveTurnOrder {
            player_index,
            worker,
        } => plan_reserve_turn_order(state, tables, *player_index, *worker)?,
    };
    apply_plan(state, &plan, logger)
}

/// Plan an academy action: place a worker, take a wax seal, pay the costs.
#[allow(clippy::too_many_arguments)]
pub fn plan_academy(
    state: &GameState,
    tables: &RuleTables,
    player_index: usize,
    worker_id: WorkerId,
    location_id: &LocationId,
    scroll_row: u8,
    seal_index: usize,
    use_knowledge: bool,
) -> Result<ActionPlan> {
    if state.current_player_index != player_index {
        return Err(EngineError::InvalidAction(format!(
            "It is not Player {player_index}'s turn"
        )));
    }

    let player = state.player(player_index)?;
    let worker = player.worker(worker_id).ok_or_else(|| {
        EngineError::InvalidAction(format!(
            "Worker {worker_id} not found for Player {player_index}"
        ))
    })?;
    if worker.is_placed {
        return Err(EngineError::InvalidAction(format!(
            "Worker {worker_id} has already been placed"
        )));
    }

    let location = tables
        .get_location(location_id)
        .ok_or_else(|| EngineError::InvalidAction(format!("Unknown location {location_id}")))?;
    if location.action_type != ActionKind::Academy {
        return Err(EngineError::InvalidAction(format!(
            "Location {location_id} is not an academy location"
        )));
    }
    if location.locked && !state.unlocked_locations.contains(location_id) {
        return Err(EngineError::InvalidAction(format!(
            "Location {location_id} is locked"
        )));
    }

    if !(1..=4).contains(&scroll_row) {
        return Err(EngineError::InvalidAction(format!(
            "Invalid scroll row {scroll_row}, must be between 1 and 4"
        )));
    }
    if seal_index > 2 {
        return Err(EngineError::InvalidAction(format!(
            "Invalid seal index {seal_index}, must be between 0 and 2"
        )));
    }

    let grid_row = usize::from(scroll_row - 1);
    let seal_to_take = state
        .academy_seals
        .seal_at(grid_row, seal_index)
        .ok_or_else(|| {
            EngineError::InvalidAction(format!(
                "No seal available at row {scroll_row}, index {seal_index}"
            ))
        })?;

    // Wax seal requirement, with knowledge as authorized wildcard
    let mut knowledge_spent = 0;
    if !location.wax_seal_requirements.is_empty() {
        let check = check_seal_requirement(
            &worker.seals,
            &location.wax_seal_requirements,
            player.temporary_knowledge,
        );
        if !check.satisfiable {
            return Err(EngineError::InvalidAction(format!(
                "Worker {worker_id} does not meet requirements ({}), needs {} knowledge, has {}",
                location.wax_seal_requirements, check.knowledge_needed, player.temporary_knowledge
            )));
        }
        if check.knowledge_needed > 0 {
            if !use_knowledge {
                return Err(EngineError::InsufficientResources(format!(
                    "Requirement needs {} knowledge, but spending it was not authorized",
                    check.knowledge_needed
                )));
            }
            knowledge_spent = check.knowledge_needed;
        }
    }

    // Cost parts
    let occupied = !state.occupancy(location_id).is_empty();
    let discounts = Discounts {
        waive_placement_penalty: player.academy_penalty_waiver,
        ..Discounts::default()
    };
    let penalty = if discounts.waive_placement_penalty {
        0
    } else {
        placement_penalty(location.placement_type, occupied)
    };
    let scroll = tables.scroll(scroll_row)?;

    let row = tables.worker_row(worker.row_index)?;
    if worker.seal_slots_filled >= row.max_seals {
        return Err(EngineError::InvalidAction(format!(
            "Worker {worker_id} cannot hold more seals (has {}/{})",
            worker.seal_slots_filled, row.max_seals
        )));
    }
    let slot_cost = row.next_slot_cost(worker.seal_slots_filled).ok_or_else(|| {
        EngineError::DataIntegrity(format!(
            "No slot cost for row {} slot {}",
            worker.row_index, worker.seal_slots_filled
        ))
    })?;

    let cost = CostBreakdown {
        placement_penalty: penalty,
        base_cost: scroll.cost,
        slot_cost,
    };

    // Affordability gates, checked last
    let total = cost.total();
    if !player.can_afford(total) {
        return Err(EngineError::InsufficientResources(format!(
            "Player {player_index} cannot afford cost {total} coins (has {})",
            player.coins
        )));
    }
    if player.temporary_knowledge < knowledge_spent {
        return Err(EngineError::InsufficientResources(format!(
            "Player {player_index} needs {knowledge_spent} knowledge, has {}",
            player.temporary_knowledge
        )));
    }

    let mut effects = vec![PlannedEffect::TakeAcademySeal {
        row: grid_row,
        col: seal_index,
        color: seal_to_take,
    }];
    effects.extend(planned_side_effects(&location.base_actions));

    Ok(ActionPlan {
        player_index,
        worker: worker_id,
        location: location_id.clone(),
        cost,
        knowledge_spent,
        effects,
    })
}

/// Plan the turn-order reserve action. No cost; grants the location's base
/// effects (3 coins in the two-player setup).
pub fn plan_reserve_turn_order(
    state: &GameState,
    tables: &RuleTables,
    player_index: usize,
    worker_id: WorkerId,
) -> Result<ActionPlan> {
    if state.current_player_index != player_index {
        return Err(EngineError::InvalidAction(format!(
            "It is not Player {player_index}'s turn"
        )));
    }

    let player = state.player(player_index)?;
    let worker = player.worker(worker_id).ok_or_else(|| {
        EngineError::InvalidAction(format!(
            "Worker {worker_id} not found for Player {player_index}"
        ))
    })?;
    if worker.is_placed {
        return Err(EngineError::InvalidAction(format!(
            "Worker {worker_id} has already been placed"
        )));
    }

    let location_id = LocationId::from("RESERVE_TURN_ORDER");
    let location = tables.location(&location_id)?;

    Ok(ActionPlan {
        player_index,
        worker: worker_id,
        location: location_id,
        cost: CostBreakdown::default(),
        knowledge_spent: 0,
        effects: planned_side_effects(&location.base_actions),
    })
}

/// Translate a location's simple base effects into planned changes.
/// Effects that start their own resolution (the academy itself, explore,
/// navigate) are handled by their dedicated planners and skipped here.
fn planned_side_effects(specs: &[EffectSpec]) -> Vec<PlannedEffect> {
    specs
        .iter()
        .filter_map(|spec| match *spec {
            EffectSpec::GainCoins { value } => Some(PlannedEffect::GainCoins(value)),
            EffectSpec::GainVp { value } => Some(PlannedEffect::GainVp(value)),
            EffectSpec::GainTempKnowledge { value } => Some(PlannedEffect::GainKnowledge(value)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::setup::setup_game;

    fn fixture() -> (GameState, RuleTables) {
        let tables = RuleTables::standard().unwrap();
        let state = setup_game(&tables, 99).unwrap();
        (state, tables)
    }

    #[test]
    fn test_academy_plan_cost_parts() {
        let (state, tables) = fixture();
        let plan = plan_academy(
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

        // Unoccupied location: scroll row 1 costs 2, first slot costs 1
        assert_eq!(plan.cost.placement_penalty, 0);
        assert_eq!(plan.cost.base_cost, 2);
        assert_eq!(plan.cost.slot_cost, 1);
        assert_eq!(plan.knowledge_spent, 0);
    }

    #[test]
    fn test_wrong_turn_is_first_check() {
        let (state, tables) = fixture();
        // Player 1 acting out of turn, with an otherwise-bogus request:
        // the turn violation must win
        let err = plan_academy(
            &state,
            &tables,
            1,
            WorkerId::new(9),
            &"NOWHERE".into(),
            7,
            9,
            false,
        )
        .unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("turn"));
    }

    #[test]
    fn test_reserve_plan_grants_coins() {
        let (state, tables) = fixture();
        let plan = plan_reserve_turn_order(&state, &tables, 0, WorkerId::new(2)).unwrap();
        assert_eq!(plan.cost.total(), 0);
        assert_eq!(plan.effects, vec![PlannedEffect::GainCoins(3)]);
    }
}
