//! Skills and the attack-modifier pipeline.
//!
//! A [`Skill`] is a player's configured ability. It never touches an attack
//! directly: instead it compiles into an [`AttackModifier`], a stateful stage
//! that receives an owned [`Attack`], transforms it in place and hands it back.
//! Modifiers are bound once per player and chained with [`pipe`].
//!
//! # Architecture
//!
//! - [`Skill`]: description + factory producing a modifier
//! - [`AttackModifier`]: one pipeline stage (closures qualify)
//! - [`ModifierContext`]: the owning player's live stats and the random source
//! - [`Pipeline`]: ordered stages applied strictly left to right

pub mod critical_strike;
pub mod luck;
pub mod pipeline;
pub mod resilience;

pub use critical_strike::CriticalStrike;
pub use luck::Luck;
pub use pipeline::{Pipeline, pipe, pipe_skills};
pub use resilience::Resilience;

use core::fmt;

use crate::attack::Attack;
use crate::player::PlayerStats;
use crate::rng::RandomSource;

/// A player's ability that can alter attacks.
pub trait Skill: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Long, human-readable description including the skill's odds.
    fn description(&self) -> String;

    /// Compiles the skill into a fresh modifier bound to one player.
    ///
    /// `stats` are the owner's stats at bind time. Modifiers that need the
    /// owner's stats at attack time read them from [`ModifierContext::stats`].
    fn modifier(&self, stats: &PlayerStats) -> Box<dyn AttackModifier>;
}

/// One stage of an attack pipeline.
pub trait AttackModifier: Send {
    /// Transforms `attack` in place and returns it.
    fn apply(&mut self, attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack;
}

/// Closures are modifiers, so ad-hoc skills need no dedicated type.
impl<F> AttackModifier for F
where
    F: FnMut(Attack, &mut ModifierContext<'_>) -> Attack + Send,
{
    #[inline]
    fn apply(&mut self, attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack {
        self(attack, ctx)
    }
}

/// Everything a modifier may consult while it runs.
pub struct ModifierContext<'a> {
    stats: &'a PlayerStats,
    rng: &'a mut dyn RandomSource,
}

impl<'a> ModifierContext<'a> {
    pub fn new(stats: &'a PlayerStats, rng: &'a mut dyn RandomSource) -> Self {
        Self { stats, rng }
    }

    /// Live stats of the player that owns the pipeline.
    pub fn stats(&self) -> &PlayerStats {
        self.stats
    }

    /// Draws a unit sample in `[0, 1)` for a probability check.
    pub fn roll(&mut self) -> f64 {
        self.rng.next_unit()
    }
}

impl fmt::Debug for ModifierContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierContext")
            .field("stats", self.stats)
            .finish_non_exhaustive()
    }
}

/// Formats a probability as a percentage with two decimals (`0.6` → `60.00%`).
pub(crate) fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}
