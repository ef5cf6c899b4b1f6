//! Expedition Engine - rules engine for a two-player worker-placement game
//!
//! A deterministic action-resolution engine: every action follows the same
//! validate -> resolve requirements -> compute cost -> check affordability ->
//! mutate-atomically protocol. A rejected action leaves the game state
//! untouched; all mutation happens in a single apply step after every check
//! has passed.

pub mod core;
pub mod tables;
pub mod game;
pub mod error;

pub use error::{EngineError, Result};
