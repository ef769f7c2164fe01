//! Content compiled into the binary, used when no data directory is given.

use duel_core::DuelConfig;

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};
use crate::roster::Roster;

const ROSTER_RON: &str = include_str!("../data/roster.ron");
const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// The default fighters: "Orange" and "Bluji The Weak".
pub fn roster() -> LoadResult<Roster> {
    RosterLoader::parse(ROSTER_RON)
}

/// The default pacing: 20 rounds with short pauses for readability.
pub fn config() -> LoadResult<DuelConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}
