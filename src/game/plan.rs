//! Action plans
//!
//! Planning and mutation are split: a `plan_*` function validates a request
//! against an immutable state and returns an [`ActionPlan`] describing every
//! change, and [`apply_plan`] executes that description. A request that
//! fails validation never produces a plan, so nothing it touched can leak
//! into the state. Failures inside `apply_plan` itself are data-integrity
//! faults: validation already vouched for everything the plan does.

use crate::core::{CostBreakdown, LocationId, SealColor, WorkerId};
use crate::game::logger::GameLogger;
use crate::game::state::GameState;
use crate::{EngineError, Result};

/// One concrete state change a plan commits to.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedEffect {
    GainCoins(u32),
    GainVp(u32),
    GainKnowledge(u32),
    /// Move the seal at academy grid (row, col) onto the placed worker.
    /// The color is pinned at planning time and re-checked on apply.
    TakeAcademySeal {
        row: usize,
        col: usize,
        color: SealColor,
    },
}

/// A fully validated, costed action, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPlan {
    pub player_index: usize,
    pub worker: WorkerId,
    pub location: LocationId,
    pub cost: CostBreakdown,
    pub knowledge_spent: u32,
    pub effects: Vec<PlannedEffect>,
}

/// Execute a plan against the state.
///
/// Order matters: debits first, then worker placement, then effects in plan
/// order.
pub fn apply_plan(state: &mut GameState, plan: &ActionPlan, logger: &GameLogger) -> Result<()> {
    let player = state.player_mut(plan.player_index)?;

    if plan.knowledge_spent > 0 {
        player.spend_knowledge(plan.knowledge_spent)?;
        logger.normal(&format!(
            "Player {} spent {} temporary knowledge",
            plan.player_index, plan.knowledge_spent
        ));
    }

    let total_cost = plan.cost.total();
    if total_cost > 0 {
        player.spend_coins(total_cost)?;
        logger.normal(&format!(
            "Player {} paid {}",
            plan.player_index, plan.cost
        ));
    }

    let worker = player.worker_mut(plan.worker).ok_or_else(|| {
        EngineError::DataIntegrity(format!(
            "Planned worker {} missing for player {}",
            plan.worker, plan.player_index
        ))
    })?;
    if worker.is_placed {
        return Err(EngineError::DataIntegrity(format!(
            "Planned worker {} already placed",
            plan.worker
        )));
    }
    worker.is_placed = true;
    state.place_worker(plan.location.clone(), plan.player_index, plan.worker);
    logger.normal(&format!(
        "Player {} placed worker {} at {}",
        plan.player_index, plan.worker, plan.location
    ));

    for effect in &plan.effects {
        apply_effect(state, plan, effect, logger)?;
    }

    Ok(())
}

fn apply_effect(
    state: &mut GameState,
    plan: &ActionPlan,
    effect: &PlannedEffect,
    logger: &GameLogger,
) -> Result<()> {
    match *effect {
        PlannedEffect::GainCoins(amount) => {
            state.player_mut(plan.player_index)?.gain_coins(amount);
            logger.normal(&format!("Player {} gained {amount} coins", plan.player_index));
        }
        PlannedEffect::GainVp(amount) => {
            state.player_mut(plan.player_index)?.gain_vp(amount);
            logger.normal(&format!("Player {} gained {amount} VP", plan.player_index));
        }
        PlannedEffect::GainKnowledge(amount) => {
            state.player_mut(plan.player_index)?.gain_knowledge(amount);
            logger.normal(&format!(
                "Player {} gained {amount} temporary knowledge",
                plan.player_index
            ));
        }
        PlannedEffect::TakeAcademySeal { row, col, color } => {
            let taken = state.academy_seals.take(row, col);
            if taken != Some(color) {
                return Err(EngineError::DataIntegrity(format!(
                    "Academy grid ({row}, {col}) held {taken:?}, plan expected {color}"
                )));
            }
            let player = state.player_mut(plan.player_index)?;
            let worker = player.worker_mut(plan.worker).ok_or_else(|| {
                EngineError::DataIntegrity(format!(
                    "Planned worker {} missing for player {}",
                    plan.worker, plan.player_index
                ))
            })?;
            worker.add_seal(color);
            logger.normal(&format!(
                "Worker {} took a {color} seal ({} slots filled)",
                plan.worker, worker.seal_slots_filled
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerColor, PlayerState, WorkerState};

    fn state_with_player(coins: u32) -> GameState {
        let mut state = GameState::new();
        let mut player = PlayerState::new(0, PlayerColor::Blue);
        player.coins = coins;
        player.workers = vec![WorkerState::new(WorkerId::new(0), 1)];
        state.players.push(player);
        state
    }

    #[test]
    fn test_apply_debits_and_places() {
        let mut state = state_with_player(10);
        let logger = GameLogger::new();
        let plan = ActionPlan {
            player_index: 0,
            worker: WorkerId::new(0),
            location: "RESERVE_TURN_ORDER".into(),
            cost: CostBreakdown::default(),
            knowledge_spent: 0,
            effects: vec![PlannedEffect::GainCoins(3)],
        };

        apply_plan(&mut state, &plan, &logger).unwrap();

        assert_eq!(state.players[0].coins, 13);
        assert!(state.players[0].workers[0].is_placed);
        assert_eq!(state.occupancy(&"RESERVE_TURN_ORDER".into()).len(), 1);
    }

    #[test]
    fn test_apply_rejects_double_placement() {
        let mut state = state_with_player(10);
        state.players[0].workers[0].is_placed = true;
        let logger = GameLogger::new();
        let plan = ActionPlan {
            player_index: 0,
            worker: WorkerId::new(0),
            location: "RESERVE_TURN_ORDER".into(),
            cost: CostBreakdown::default(),
            knowledge_spent: 0,
            effects: vec![],
        };

        let err = apply_plan(&mut state, &plan, &logger).unwrap_err();
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_seal_effect_checks_grid_color() {
        let mut state = state_with_player(0);
        state.academy_seals.place(0, 0, SealColor::Blue);
        let logger = GameLogger::new();
        let plan = ActionPlan {
            player_index: 0,
            worker: WorkerId::new(0),
            location: "ACADEMY_MAIN".into(),
            cost: CostBreakdown::default(),
            knowledge_spent: 0,
            effects: vec![PlannedEffect::TakeAcademySeal {
                row: 0,
                col: 0,
                color: SealColor::Red,
            }],
        };

        // Grid holds blue, plan says red: integrity fault
        let err = apply_plan(&mut state, &plan, &logger).unwrap_err();
        assert!(!err.is_rejection());
    }
}
