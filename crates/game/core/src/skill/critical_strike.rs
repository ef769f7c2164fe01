//! Critical Strike: a chance to land the attack two or three times.

use crate::attack::{Attack, Hit};
use crate::player::PlayerStats;

use super::{AttackModifier, ModifierContext, Skill, percent};

/// Offensive skill that may repeat the base hit.
///
/// # Semantics
///
/// - Roll once: if `u <= double_strike_chance`, add one hit at the owner's
///   current strength.
/// - Only then roll again: if `u <= triple_strike_chance`, add a third hit.
/// - One label (`2x` or `3x`) is recorded per firing. A failed first roll
///   records nothing and skips the second roll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalStrike {
    pub double_strike_chance: f64,
    pub triple_strike_chance: f64,
}

impl CriticalStrike {
    pub const NAME: &'static str = "CriticalStrike";

    pub fn new(double_strike_chance: f64, triple_strike_chance: f64) -> Self {
        Self {
            double_strike_chance,
            triple_strike_chance,
        }
    }

    /// Short in-battle label, e.g. `CriticalStrike(3x)`.
    pub fn battle_label(multiplier: u8) -> String {
        format!("{}({multiplier}x)", Self::NAME)
    }
}

impl Skill for CriticalStrike {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> String {
        format!(
            "Critical Strike ({} chance for 2x; {} chance for 3x)",
            percent(self.double_strike_chance),
            percent(self.triple_strike_chance)
        )
    }

    fn modifier(&self, _stats: &PlayerStats) -> Box<dyn AttackModifier> {
        Box::new(CriticalStrikeModifier { skill: *self })
    }
}

struct CriticalStrikeModifier {
    skill: CriticalStrike,
}

impl AttackModifier for CriticalStrikeModifier {
    fn apply(&mut self, mut attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack {
        if ctx.roll() > self.skill.double_strike_chance {
            return attack;
        }

        // Extra hits use strength at attack time, not at bind time.
        let strength = ctx.stats().strength;
        attack.hits.push(Hit::new(strength));

        let mut multiplier = 2;
        if ctx.roll() <= self.skill.triple_strike_chance {
            multiplier = 3;
            attack.hits.push(Hit::new(strength));
        }

        tracing::trace!(skill = CriticalStrike::NAME, multiplier, "skill fired");
        attack.record_offensive(CriticalStrike::battle_label(multiplier));
        attack
    }
}
