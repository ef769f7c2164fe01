//! Fighter catalog.

use std::collections::HashSet;

use anyhow::{Context, anyhow, ensure};
use serde::{Deserialize, Serialize};

use crate::templates::FighterTemplate;

/// Ordered list of fighters available for a duel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub fighters: Vec<FighterTemplate>,
}

impl Roster {
    pub fn new(fighters: Vec<FighterTemplate>) -> Self {
        Self { fighters }
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FighterTemplate> {
        self.fighters.iter()
    }

    /// Looks up a fighter by exact name.
    pub fn get(&self, name: &str) -> Option<&FighterTemplate> {
        self.fighters.iter().find(|fighter| fighter.name == name)
    }

    /// Picks the two duelists.
    ///
    /// An unset name falls back to the roster position of its seat: the first
    /// entry for seat one, the second for seat two.
    pub fn pair(
        &self,
        one: Option<&str>,
        two: Option<&str>,
    ) -> anyhow::Result<(&FighterTemplate, &FighterTemplate)> {
        Ok((self.pick(one, 0)?, self.pick(two, 1)?))
    }

    fn pick(&self, name: Option<&str>, fallback: usize) -> anyhow::Result<&FighterTemplate> {
        match name {
            Some(name) => self.get(name).ok_or_else(|| anyhow!("unknown fighter '{}'", name)),
            None => self
                .fighters
                .get(fallback)
                .with_context(|| format!("roster has no fighter at position {}", fallback + 1)),
        }
    }

    /// Requires at least two fighters with unique names and sane stat ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.fighters.len() >= 2,
            "roster needs at least two fighters, found {}",
            self.fighters.len()
        );

        let mut seen = HashSet::new();
        for fighter in &self.fighters {
            fighter.validate()?;
            ensure!(
                seen.insert(fighter.name.as_str()),
                "duplicate fighter name '{}'",
                fighter.name
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{StatRange, StatRanges};

    fn template(name: &str) -> FighterTemplate {
        let fixed = StatRange::fixed(1.0);
        FighterTemplate {
            name: name.into(),
            stats: StatRanges {
                health: fixed,
                strength: fixed,
                defence: fixed,
                speed: fixed,
                luck: StatRange::fixed(0.0),
            },
            offensive_skills: Vec::new(),
            defensive_skills: Vec::new(),
        }
    }

    #[test]
    fn pair_defaults_to_first_two_entries() {
        let roster = Roster::new(vec![template("A"), template("B"), template("C")]);
        let (one, two) = roster.pair(None, None).unwrap();
        assert_eq!((one.name.as_str(), two.name.as_str()), ("A", "B"));
    }

    #[test]
    fn pair_resolves_names() {
        let roster = Roster::new(vec![template("A"), template("B"), template("C")]);
        let (one, two) = roster.pair(Some("C"), Some("A")).unwrap();
        assert_eq!((one.name.as_str(), two.name.as_str()), ("C", "A"));

        let err = roster.pair(Some("Z"), None).unwrap_err().to_string();
        assert!(err.contains("unknown fighter 'Z'"));
    }

    #[test]
    fn validate_requires_two_fighters() {
        assert!(Roster::new(vec![template("A")]).validate().is_err());
        let pair = Roster::new(vec![template("A"), template("B")]);
        assert!(pair.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let err = Roster::new(vec![template("A"), template("A")])
            .validate()
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate"));
    }
}
