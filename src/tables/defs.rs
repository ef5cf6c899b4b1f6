//! Static rule-table record types
//!
//! These structs mirror the bundled JSON data files one-to-one. Everything
//! here is immutable reference data; nothing in the game state points back
//! into it except by id.

use crate::core::{
    ActionKind, DiaryClass, Distinction, LocationId, ObjectiveClass, PlacementClass, SealColor,
    SealRequirement, SpecimenKind, TrackKind,
};
use serde::{Deserialize, Serialize};

/// A concrete effect granted by a location, tile, or slot.
///
/// The tag corresponds to an [`ActionKind`]; the payload carries only the
/// fields that kind needs, so malformed table data fails at load time
/// instead of deep inside a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectSpec {
    GainCoins { value: u32 },
    GainVp { value: u32 },
    GainTempKnowledge { value: u32 },
    AdvanceTheory { value: u32 },
    GainSealAnyFree,
    GainSealSpecial,
    Explore { value: u32 },
    Navigate { value: u32 },
    Academy,
    Correspondence,
    UnlockLens,
    DeliverSpecimen,
    ResearchMuseum,
    ReserveTurnOrder,
    GainObjective,
    AutoFulfillObjective,
    ReactivateTent,
    ResearchAnySpecimen,
    PlaceExplorer { value: u32 },
    EstablishCampsite,
    MoveToBeagle,
    ResearchSpecimen,
    Choice { options: Vec<EffectSpec> },
    RepeatDelivery,
    EndOfIslandBonus,
    CopyCrewCard,
    PerformLockedAction,
}

impl EffectSpec {
    /// The action kind this effect performs when triggered.
    pub fn kind(&self) -> ActionKind {
        match self {
            EffectSpec::GainCoins { .. } => ActionKind::GainCoins,
            EffectSpec::GainVp { .. } => ActionKind::GainVp,
            EffectSpec::GainTempKnowledge { .. } => ActionKind::GainTempKnowledge,
            EffectSpec::AdvanceTheory { .. } => ActionKind::AdvanceTheory,
            EffectSpec::GainSealAnyFree => ActionKind::GainSealAnyFree,
            EffectSpec::GainSealSpecial => ActionKind::GainSealSpecial,
            EffectSpec::Explore { .. } => ActionKind::Explore,
            EffectSpec::Navigate { .. } => ActionKind::Navigate,
            EffectSpec::Academy => ActionKind::Academy,
            EffectSpec::Correspondence => ActionKind::Correspondence,
            EffectSpec::UnlockLens => ActionKind::UnlockLens,
            EffectSpec::DeliverSpecimen => ActionKind::DeliverSpecimen,
            EffectSpec::ResearchMuseum => ActionKind::ResearchMuseum,
            EffectSpec::ReserveTurnOrder => ActionKind::ReserveTurnOrder,
            EffectSpec::GainObjective => ActionKind::GainObjective,
            EffectSpec::AutoFulfillObjective => ActionKind::AutoFulfillObjective,
            EffectSpec::ReactivateTent => ActionKind::ReactivateTent,
            EffectSpec::ResearchAnySpecimen => ActionKind::ResearchAnySpecimen,
            EffectSpec::PlaceExplorer { .. } => ActionKind::PlaceExplorer,
            EffectSpec::EstablishCampsite => ActionKind::EstablishCampsite,
            EffectSpec::MoveToBeagle => ActionKind::MoveToBeagle,
            EffectSpec::ResearchSpecimen => ActionKind::ResearchSpecimen,
            EffectSpec::Choice { .. } => ActionKind::Choice,
            EffectSpec::RepeatDelivery => ActionKind::RepeatDelivery,
            EffectSpec::EndOfIslandBonus => ActionKind::EndOfIslandBonus,
            EffectSpec::CopyCrewCard => ActionKind::CopyCrewCard,
            EffectSpec::PerformLockedAction => ActionKind::PerformLockedAction,
        }
    }
}

/// A bonus granted when a worker with a distinction performs the location's
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistinctionBonus {
    BonusExplore { value: u32 },
    BonusNavigate { value: u32 },
    BonusCoins { value: u32 },
    BonusVp { value: u32 },
    BonusMovementStop,
    WaivePlacementPenalty,
}

/// Distinction bonuses for a location, keyed by tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistinctionBonuses {
    pub silver: Vec<DistinctionBonus>,
    pub golden: Vec<DistinctionBonus>,
}

/// One worker-placement location on the main board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLocation {
    pub location_id: LocationId,
    pub action_type: ActionKind,
    pub diary_type: DiaryClass,
    pub placement_type: PlacementClass,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub unlock_cost: Option<u32>,
    #[serde(default)]
    pub wax_seal_requirements: SealRequirement,
    #[serde(default)]
    pub base_actions: Vec<EffectSpec>,
    #[serde(default)]
    pub distinction_bonuses: DistinctionBonuses,
}

/// One scroll row in the academy: its coin cost and how many grid columns
/// it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademyScroll {
    pub scroll_row: u8,
    pub cost: u32,
    pub slots: u8,
}

/// One seal slot on a personal-board worker row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealSlot {
    pub slot_index: u8,
    pub placement_cost: u32,
    #[serde(default)]
    pub distinction_trigger: Option<Distinction>,
    #[serde(default)]
    pub reward_action: Option<EffectSpec>,
}

/// A worker's row on the personal board: the seal ladder it climbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRow {
    pub row_index: u8,
    pub max_seals: u8,
    #[serde(default)]
    pub has_starting_special_seal: bool,
    pub seal_slots: Vec<SealSlot>,
}

impl WorkerRow {
    /// Cost of the next unfilled slot. `None` when the row is full.
    pub fn next_slot_cost(&self, slots_filled: u8) -> Option<u32> {
        if slots_filled >= self.max_seals {
            return None;
        }
        self.seal_slots
            .iter()
            .find(|s| s.slot_index == slots_filled)
            .map(|s| s.placement_cost)
    }
}

/// A personal-board slot for placing a completed objective tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSlot {
    pub slot_id: String,
    #[serde(rename = "type")]
    pub tier: Distinction,
    pub position: u8,
    #[serde(default)]
    pub placement_cost: u32,
    #[serde(default)]
    pub reward_actions: Vec<EffectSpec>,
}

/// A personal-board slot for holding an objective tile in reserve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveSlot {
    pub slot_id: String,
    pub position: u8,
}

/// A slot uncovered by placing a tent on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentSlot {
    pub slot_index: u8,
    #[serde(default)]
    pub revealed_action: Option<EffectSpec>,
}

/// A slot uncovered by emptying one of the stamp stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampSlot {
    pub slot_index: u8,
    #[serde(default)]
    pub revealed_action: Option<EffectSpec>,
}

/// One cell of the personal-board specimen research grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenSlot {
    pub specimen_token_id: String,
}

/// The full static layout of a player's personal board. All players share
/// the same definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalBoard {
    pub board_id: String,
    pub worker_rows: Vec<WorkerRow>,
    pub objective_slots: Vec<ObjectiveSlot>,
    pub reserve_objective_slots: Vec<ReserveSlot>,
    pub tent_slots: Vec<TentSlot>,
    pub stamp_slots: Vec<StampSlot>,
    pub specimen_grid_slots: Vec<SpecimenSlot>,
    #[serde(default)]
    pub objective_pair_bonus: Option<EffectSpec>,
}

impl PersonalBoard {
    pub fn worker_row(&self, row_index: u8) -> Option<&WorkerRow> {
        self.worker_rows.iter().find(|r| r.row_index == row_index)
    }
}

/// A single condition an objective tile demands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveRequirement {
    HaveSeals { color: SealColor, count: u8 },
    HaveSpecimenResearched { kind: SpecimenKind, count: u8 },
    ShipAtBeagleOrAhead,
    HaveTempKnowledge { value: u32 },
    HaveVp { value: u32 },
    EmptyStampStacks { count: u8 },
    HaveLensTokensPlaced { count: u8 },
    HaveTentsPlaced { count: u8 },
    HaveCoins { value: u32 },
    TheoryTrackAtLeastAtPosition { value: u8 },
    ShipAtLeastAtPosition { space: String },
}

/// An objective tile. Starting tiles are flagged and dealt at setup instead
/// of entering the draw decks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveTile {
    pub objective_id: u32,
    #[serde(rename = "type")]
    pub class: ObjectiveClass,
    #[serde(default)]
    pub starting: bool,
    pub requirements: Vec<ObjectiveRequirement>,
}

/// A correspondence tile and its placement rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrespondenceTile {
    pub tile_id: u32,
    pub first_place_rewards: Vec<EffectSpec>,
    pub second_place_rewards: Vec<EffectSpec>,
}

/// How a beagle goal tile scores at game end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringCondition {
    PerSeal { points_per: u32, color: SealColor },
    PerSpecimenResearched { points_per: u32, kind: SpecimenKind },
    PerTentPlaced { points_per: u32 },
    PerLensPlaced { points_per: u32 },
    PerObjectiveCompleted { points_per: u32 },
    PerCrewCardAchieved { points_per: u32 },
}

/// A beagle goal tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeagleGoal {
    pub goal_id: u32,
    pub description: String,
    pub scoring_condition: ScoringCondition,
}

/// A crew card dealt to a worker at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCard {
    pub card_id: u32,
    pub starting_seal_color: SealColor,
    pub activation_requirement: SealRequirement,
    pub achieved_actions: Vec<EffectSpec>,
}

/// A tile placed on a locked special-action location at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialActionTile {
    pub tile_id: u32,
    pub actions: Vec<EffectSpec>,
}

/// One space on the ocean or an island track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpace {
    pub id: String,
    #[serde(default)]
    pub silver_banner: bool,
    #[serde(default)]
    pub beagle_goal: bool,
    #[serde(default)]
    pub actions: Vec<EffectSpec>,
    #[serde(default)]
    pub has_specimen: bool,
    #[serde(default)]
    pub next: Vec<String>,
    #[serde(default)]
    pub spawns_explorer_on_island: Option<char>,
    #[serde(default)]
    pub campsite_area_id: Option<String>,
    #[serde(default)]
    pub golden_ribbon_vp: Option<u32>,
}

/// Cost for one tent slot at a campsite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TentSlotCost {
    pub slot_index: u8,
    pub placement_cost: u32,
}

/// A campsite area reachable from an island track space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campsite {
    pub campsite_area_id: String,
    pub originating_track_space_id: String,
    pub track_type: TrackKind,
    pub tent_slots: Vec<TentSlotCost>,
    #[serde(default)]
    pub actions_on_placement: Vec<EffectSpec>,
}

/// A specimen token and its museum grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub token_id: String,
    pub museum_row: char,
    pub museum_col: u8,
    pub kind: SpecimenKind,
    pub colour: SealColor,
}

/// One space on the theory of evolution track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheorySpace {
    pub space_id: u8,
    pub book_multiplier: u8,
}
