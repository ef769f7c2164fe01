//! Data-driven fighter definitions.
//!
//! A [`FighterTemplate`] describes a fighter as stat *ranges* plus skill
//! specs. Spawning a template rolls concrete [`PlayerStats`] and compiles the
//! skills into a fresh [`Player`], so every spawn gets its own skill state.

use anyhow::ensure;
use duel_core::{
    CriticalStrike, Luck, Player, PlayerSkills, PlayerStats, RandomSource, Resilience, Skill,
};
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive stat range `[min, max)`; `min == max` pins the stat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn roll(&self, rng: &mut dyn RandomSource) -> f64 {
        rng.range(self.min, self.max)
    }
}

/// Ranges for every stat of a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRanges {
    pub health: StatRange,
    pub strength: StatRange,
    pub defence: StatRange,
    pub speed: StatRange,
    pub luck: StatRange,
}

impl StatRanges {
    /// Rolls every stat, in declaration order.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> PlayerStats {
        PlayerStats {
            health: self.health.roll(rng),
            strength: self.strength.roll(rng),
            defence: self.defence.roll(rng),
            speed: self.speed.roll(rng),
            luck: self.luck.roll(rng),
        }
    }

    fn named(&self) -> [(&'static str, StatRange); 5] {
        [
            ("health", self.health),
            ("strength", self.strength),
            ("defence", self.defence),
            ("speed", self.speed),
            ("luck", self.luck),
        ]
    }
}

/// Serialized form of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SkillSpec {
    CriticalStrike {
        double_strike_chance: f64,
        triple_strike_chance: f64,
    },
    Resilience {
        chance: f64,
        damage_reduction: f64,
    },
    Luck {
        chance: f64,
    },
}

impl SkillSpec {
    pub fn build(&self) -> Box<dyn Skill> {
        match *self {
            Self::CriticalStrike {
                double_strike_chance,
                triple_strike_chance,
            } => Box::new(CriticalStrike::new(double_strike_chance, triple_strike_chance)),
            Self::Resilience {
                chance,
                damage_reduction,
            } => Box::new(Resilience::new(chance, damage_reduction)),
            Self::Luck { chance } => Box::new(Luck::new(chance)),
        }
    }
}

/// A fighter as described by content files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterTemplate {
    pub name: String,
    pub stats: StatRanges,
    #[serde(default)]
    pub offensive_skills: Vec<SkillSpec>,
    #[serde(default)]
    pub defensive_skills: Vec<SkillSpec>,
}

impl FighterTemplate {
    /// Rolls stats and builds a ready-to-fight player.
    pub fn spawn(&self, rng: &mut dyn RandomSource) -> Player {
        let stats = self.stats.roll(rng);
        let skills = PlayerSkills {
            offensive: self.offensive_skills.iter().map(SkillSpec::build).collect(),
            defensive: self.defensive_skills.iter().map(SkillSpec::build).collect(),
        };
        Player::new(self.name.clone(), stats, skills)
    }

    /// Rejects empty names and inverted stat ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.name.trim().is_empty(),
            "fighter name must not be empty"
        );
        for (stat, range) in self.stats.named() {
            ensure!(
                range.min <= range.max,
                "fighter '{}': {} range is inverted ({} > {})",
                self.name,
                stat,
                range.min,
                range.max
            );
        }
        Ok(())
    }
}
