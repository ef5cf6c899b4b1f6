//! Parses the bundled JSON table files into [`RuleTables`].
//!
//! The standard data set is compiled into the binary; a malformed file is a
//! build artifact problem and surfaces as a data-integrity error.

use crate::core::LocationId;
use crate::tables::defs::{
    AcademyScroll, BeagleGoal, BoardLocation, Campsite, CorrespondenceTile, CrewCard,
    ObjectiveTile, PersonalBoard, SpecialActionTile, Species, TheorySpace, TrackSpace,
};
use crate::tables::RuleTables;
use crate::{EngineError, Result};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

const MAIN_BOARD_ACTIONS: &str = include_str!("data/main_board_actions.json");
const ACADEMY_SCROLLS: &str = include_str!("data/academy_scrolls.json");
const PERSONAL_BOARD: &str = include_str!("data/personal_board.json");
const OBJECTIVE_TILES: &str = include_str!("data/objective_tiles.json");
const CORRESPONDENCE_TILES: &str = include_str!("data/correspondence_tiles.json");
const BEAGLE_GOALS: &str = include_str!("data/beagle_goals.json");
const CREW_CARDS: &str = include_str!("data/crew_cards.json");
const SPECIAL_ACTION_TILES: &str = include_str!("data/special_action_tiles.json");
const SPECIES: &str = include_str!("data/species.json");
const CAMPSITES: &str = include_str!("data/campsites.json");
const OCEAN_TRACK: &str = include_str!("data/ocean_track.json");
const ISLAND_A_TRACK: &str = include_str!("data/island_a_track.json");
const ISLAND_B_TRACK: &str = include_str!("data/island_b_track.json");
const ISLAND_C_TRACK: &str = include_str!("data/island_c_track.json");
const THEORY_TRACK: &str = include_str!("data/theory_track.json");

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| EngineError::DataIntegrity(format!("Failed to parse {name}: {e}")))
}

fn keyed<T, K, F>(items: Vec<T>, key: F) -> FxHashMap<K, T>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}

fn parse_track(name: &str, raw: &str) -> Result<FxHashMap<String, TrackSpace>> {
    let spaces: Vec<TrackSpace> = parse(name, raw)?;
    Ok(keyed(spaces, |s| s.id.clone()))
}

pub fn load_standard() -> Result<RuleTables> {
    let locations: Vec<BoardLocation> = parse("main_board_actions.json", MAIN_BOARD_ACTIONS)?;
    let scrolls: Vec<AcademyScroll> = parse("academy_scrolls.json", ACADEMY_SCROLLS)?;
    let personal_board: PersonalBoard = parse("personal_board.json", PERSONAL_BOARD)?;
    let objectives: Vec<ObjectiveTile> = parse("objective_tiles.json", OBJECTIVE_TILES)?;
    let correspondence: Vec<CorrespondenceTile> =
        parse("correspondence_tiles.json", CORRESPONDENCE_TILES)?;
    let beagle_goals: Vec<BeagleGoal> = parse("beagle_goals.json", BEAGLE_GOALS)?;
    let crew_cards: Vec<CrewCard> = parse("crew_cards.json", CREW_CARDS)?;
    let special_tiles: Vec<SpecialActionTile> =
        parse("special_action_tiles.json", SPECIAL_ACTION_TILES)?;
    let species: Vec<Species> = parse("species.json", SPECIES)?;
    let campsites: Vec<Campsite> = parse("campsites.json", CAMPSITES)?;
    let theory: Vec<TheorySpace> = parse("theory_track.json", THEORY_TRACK)?;

    Ok(RuleTables {
        locations: keyed(locations, |l| l.location_id.clone()),
        scrolls: keyed(scrolls, |s| s.scroll_row),
        personal_board,
        objectives: keyed(objectives, |o| o.objective_id),
        correspondence_tiles: keyed(correspondence, |t| t.tile_id),
        beagle_goals: keyed(beagle_goals, |g| g.goal_id),
        crew_cards: keyed(crew_cards, |c| c.card_id),
        special_tiles: keyed(special_tiles, |t| t.tile_id),
        species: keyed(species, |s| s.token_id.clone()),
        campsites: keyed(campsites, |c| c.campsite_area_id.clone()),
        ocean_track: parse_track("ocean_track.json", OCEAN_TRACK)?,
        island_a_track: parse_track("island_a_track.json", ISLAND_A_TRACK)?,
        island_b_track: parse_track("island_b_track.json", ISLAND_B_TRACK)?,
        island_c_track: parse_track("island_c_track.json", ISLAND_C_TRACK)?,
        theory_track: keyed(theory, |t| t.space_id),
    })
}
