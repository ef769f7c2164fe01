//! Fighter roster loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::roster::Roster;

/// Loader for fighter rosters from RON files.
///
/// RON format: `(fighters: [FighterTemplate, ...])`. Skill lists may be
/// omitted for fighters without skills. The roster is validated after
/// parsing.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        roster.validate()?;
        Ok(roster)
    }
}
