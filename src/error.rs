//! Error types for the expedition engine
//!
//! Three tiers, matching how callers need to react:
//! - `DataIntegrity`: a rule-table entry that must exist is missing, or an
//!   invariant that validation guaranteed is violated at mutation time.
//!   Not player-caused; a defect to report, not something to recover from.
//! - `InvalidAction`: a player request failed a precondition.
//! - `InsufficientResources`: a specialization of `InvalidAction` raised
//!   when affordability (coins or knowledge) is the failing check.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Data integrity fault: {0}")]
    DataIntegrity(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Insufficient resources: {0}")]
    InsufficientResources(String),
}

impl EngineError {
    /// True for both player-facing rejection tiers.
    ///
    /// A rejected action is guaranteed to have left the game state
    /// untouched; a data-integrity fault makes no such promise and should
    /// be treated as a bug.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidAction(_) | EngineError::InsufficientResources(_)
        )
    }

    /// True specifically for the affordability rejection tier.
    pub fn is_insufficient_resources(&self) -> bool {
        matches!(self, EngineError::InsufficientResources(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
