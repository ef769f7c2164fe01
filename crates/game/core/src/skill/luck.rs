//! Luck: a per-hit chance to evade.

use crate::attack::Attack;
use crate::player::PlayerStats;

use super::{AttackModifier, ModifierContext, Skill, percent};

/// Defensive skill rolled independently for every hit.
///
/// Every player carries one implicitly, built from their `luck` stat, as the
/// first stage of the defensive pipeline. A roll strictly below `chance`
/// zeroes the hit and tags that hit (not the attack) with the evasion label.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Luck {
    pub chance: f64,
}

impl Luck {
    pub const NAME: &'static str = "Luck";
    pub const BATTLE_LABEL: &'static str = "Got Lucky (you missed)";

    pub fn new(chance: f64) -> Self {
        Self { chance }
    }
}

impl Skill for Luck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> String {
        format!("Luck ({} chance to evade hits)", percent(self.chance))
    }

    fn modifier(&self, _stats: &PlayerStats) -> Box<dyn AttackModifier> {
        Box::new(LuckModifier { skill: *self })
    }
}

struct LuckModifier {
    skill: Luck,
}

impl AttackModifier for LuckModifier {
    fn apply(&mut self, mut attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack {
        for hit in &mut attack.hits {
            if ctx.roll() < self.skill.chance {
                tracing::trace!(skill = Luck::NAME, "hit evaded");
                hit.potential_damage = 0.0;
                hit.used_defensive_skills.push(Luck::BATTLE_LABEL.to_string());
            }
        }

        attack
    }
}
