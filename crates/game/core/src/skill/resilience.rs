//! Resilience: a chance to soften every hit, at most every other attack.

use crate::attack::Attack;
use crate::player::PlayerStats;

use super::{AttackModifier, ModifierContext, Skill, percent};

/// Defensive skill that reduces the damage of every hit in an attack.
///
/// # Semantics
///
/// After firing, the next invocation is a guaranteed no-op (no roll is
/// drawn). Otherwise a roll `u <= chance` fires the skill and scales every
/// hit by `1 - damage_reduction`. The cooldown lives in the bound modifier,
/// so each player gets an independent one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resilience {
    pub chance: f64,
    pub damage_reduction: f64,
}

impl Resilience {
    pub const NAME: &'static str = "Resilience";

    pub fn new(chance: f64, damage_reduction: f64) -> Self {
        Self {
            chance,
            damage_reduction,
        }
    }

    /// Short in-battle label, e.g. `Resilience(blocked 50.00% damage)`.
    pub fn battle_label(&self) -> String {
        format!(
            "{}(blocked {} damage)",
            Self::NAME,
            percent(self.damage_reduction)
        )
    }
}

impl Skill for Resilience {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> String {
        format!(
            "Resilience ({} chance to block {} damage)",
            percent(self.chance),
            percent(self.damage_reduction)
        )
    }

    fn modifier(&self, _stats: &PlayerStats) -> Box<dyn AttackModifier> {
        Box::new(ResilienceModifier {
            skill: *self,
            fired_last_time: false,
        })
    }
}

struct ResilienceModifier {
    skill: Resilience,
    fired_last_time: bool,
}

impl AttackModifier for ResilienceModifier {
    fn apply(&mut self, mut attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack {
        if self.fired_last_time {
            self.fired_last_time = false;
            return attack;
        }

        if ctx.roll() <= self.skill.chance {
            self.fired_last_time = true;
            tracing::trace!(
                skill = Resilience::NAME,
                reduction = self.skill.damage_reduction,
                "skill fired"
            );
            attack.record_defensive(self.skill.battle_label());
            for hit in &mut attack.hits {
                hit.potential_damage -= self.skill.damage_reduction * hit.potential_damage;
            }
        }

        attack
    }
}
