//! Game state, setup, and the action resolution pipeline

pub mod actions;
pub mod logger;
pub mod plan;
pub mod setup;
pub mod state;

pub use actions::{plan_academy, plan_reserve_turn_order, resolve_action, ActionRequest};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use plan::{apply_plan, ActionPlan, PlannedEffect};
pub use setup::setup_game;
pub use state::{AcademyGrid, GameState};
