//! Shared vocabulary types for game concepts
//!
//! Closed enums instead of bare strings: the rule tables and the action
//! handlers both speak these, and exhaustiveness checking catches any
//! variant a handler forgets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a main-board action location (e.g. "ACADEMY_MAIN").
///
/// Location ids come from the rule tables and are stable for the life of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(s: impl Into<String>) -> Self {
        LocationId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        LocationId(s.to_string())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        LocationId(s)
    }
}

/// Colors identifying players (distinct from seal colors on purpose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerColor {
    Blue,
    Green,
    Yellow,
    Red,
}

/// Kinds of specimen tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecimenKind {
    Reptile,
    Plant,
    Bird,
    Fossil,
}

/// The distinct phases of the game, aligned with round structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Initial setup before rounds begin
    Setup,
    /// Players alternate placing workers and performing actions
    RoundAction,
    /// Determine turn order for the next round
    RoundTurnOrder,
    /// Award beagle goal and correspondence rewards
    RoundReward,
    /// Recall workers and prepare the next round
    RoundCleanup,
    /// Final scoring after the last round's cleanup
    GameEndScoring,
    GameOver,
}

/// Every distinct kind of action in the game.
///
/// Board locations are tagged with the kind they perform, and each kind's
/// handler instantiates the same validate/cost/apply protocol. The enum is
/// closed so an unhandled kind is a compile-time hole, not a runtime
/// surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    // Core main-board actions
    Explore,
    Navigate,
    Academy,
    Correspondence,
    UnlockLens,
    DeliverSpecimen,
    ResearchMuseum,
    ReserveTurnOrder,
    GainObjective,

    // Resource gains/losses
    GainCoins,
    GainVp,
    GainTempKnowledge,
    AdvanceTheory,

    // Objective related
    AutoFulfillObjective,
    ReactivateTent,
    ResearchAnySpecimen,

    // Seal related
    GainSealAnyFree,
    GainSealSpecial,

    // Movement/placement
    PlaceExplorer,
    EstablishCampsite,
    MoveToBeagle,
    ResearchSpecimen,

    // Special actions / crew
    Choice,
    RepeatDelivery,
    EndOfIslandBonus,
    CopyCrewCard,
    PerformLockedAction,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Placement classes for board locations.
///
/// Only `Circular` locations incur the occupancy penalty when a worker is
/// placed on an already-occupied spot; `Square` locations never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementClass {
    #[serde(rename = "CIRCULAR_MAGNIFYING_GLASS")]
    Circular,
    #[serde(rename = "SQUARE_MAGNIFYING_GLASS")]
    Square,
}

/// Diary classes for board locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiaryClass {
    Main,
    Small,
    Other,
    Special,
}

/// Objective tile classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveClass {
    Silver,
    Gold,
}

/// Worker distinction tiers reached on the personal-board seal ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Distinction {
    Silver,
    Golden,
}

/// The board tracks a ship or explorer can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackKind {
    Ocean,
    IslandA,
    IslandB,
    IslandC,
    Theory,
}
