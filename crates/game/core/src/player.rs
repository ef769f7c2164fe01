//! Duel fighters: stats, skills, and their compiled attack pipelines.

use crate::attack::Attack;
use crate::rng::RandomSource;
use crate::skill::{AttackModifier, Luck, ModifierContext, Pipeline, Skill, pipe_skills};

/// Raw combat stats of a fighter.
///
/// `luck` is a probability in `[0, 1]`: the innate chance to evade each hit,
/// and the tie-break when both fighters share the same speed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub health: f64,
    pub strength: f64,
    pub defence: f64,
    pub speed: f64,
    pub luck: f64,
}

/// Ordered skill lists of a fighter.
#[derive(Debug, Default)]
pub struct PlayerSkills {
    pub offensive: Vec<Box<dyn Skill>>,
    pub defensive: Vec<Box<dyn Skill>>,
}

impl PlayerSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an offensive skill (builder pattern).
    #[must_use]
    pub fn with_offensive(mut self, skill: impl Skill + 'static) -> Self {
        self.offensive.push(Box::new(skill));
        self
    }

    /// Appends a defensive skill (builder pattern).
    #[must_use]
    pub fn with_defensive(mut self, skill: impl Skill + 'static) -> Self {
        self.defensive.push(Box::new(skill));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.offensive.is_empty() && self.defensive.is_empty()
    }
}

/// A duel fighter.
///
/// Both pipelines are compiled once here and kept for the player's lifetime,
/// so stateful skills (Resilience's cooldown) carry over between turns. The
/// defensive pipeline always starts with an innate [`Luck`] whose chance is
/// frozen from `stats.luck` at construction.
///
/// `health` is the only stat that changes during a duel, and never drops
/// below zero.
#[derive(Debug)]
pub struct Player {
    name: String,
    stats: PlayerStats,
    skills: PlayerSkills,
    offensive: Pipeline,
    defensive: Pipeline,
}

impl Player {
    pub fn new(name: impl Into<String>, stats: PlayerStats, skills: PlayerSkills) -> Self {
        let offensive = pipe_skills(&stats, &skills.offensive);
        let innate: Vec<Box<dyn Skill>> = vec![Box::new(Luck::new(stats.luck))];
        let configured = pipe_skills(&stats, &skills.defensive);
        let defensive = pipe_skills(&stats, &innate).chain(configured);

        Self {
            name: name.into(),
            stats,
            skills,
            offensive,
            defensive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn health(&self) -> f64 {
        self.stats.health
    }

    pub fn skills(&self) -> &PlayerSkills {
        &self.skills
    }

    pub fn is_dead(&self) -> bool {
        self.stats.health <= 0.0
    }

    /// Builds a single-hit attack at current strength and runs it through the
    /// offensive pipeline.
    pub fn generate_attack(&mut self, rng: &mut dyn RandomSource) -> Attack {
        let base = Attack::new(self.stats.strength);
        let mut ctx = ModifierContext::new(&self.stats, rng);
        self.offensive.apply(base, &mut ctx)
    }

    /// Runs `attack` through the defensive pipeline, then applies its hits in
    /// order until they run out or this player dies.
    ///
    /// Each hit deals `max(0, potential_damage - defence)`. A dead player
    /// does not defend: the attack is returned untouched.
    ///
    /// Returns the defended attack so it can be reported.
    pub fn defend_attack(&mut self, attack: Attack, rng: &mut dyn RandomSource) -> Attack {
        if self.is_dead() {
            return attack;
        }

        let mut ctx = ModifierContext::new(&self.stats, rng);
        let attack = self.defensive.apply(attack, &mut ctx);

        for hit in &attack.hits {
            if self.is_dead() {
                break;
            }

            let damage = (hit.potential_damage - self.stats.defence).max(0.0);
            self.stats.health = (self.stats.health - damage).max(0.0);
        }

        attack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::Hit;
    use crate::rng::ScriptedRandom;
    use crate::skill::{CriticalStrike, Resilience};

    fn stats(health: f64, strength: f64, defence: f64) -> PlayerStats {
        PlayerStats {
            health,
            strength,
            defence,
            speed: 0.0,
            luck: 0.0,
        }
    }

    #[test]
    fn plain_attack_is_one_hit_at_strength() {
        let mut player = Player::new("Creep", stats(10.0, 42.0, 0.0), PlayerSkills::new());
        let mut rng = ScriptedRandom::constant(0.5);

        assert_eq!(player.generate_attack(&mut rng), Attack::new(42.0));
    }

    #[test]
    fn offensive_skills_shape_generated_attack() {
        let frenzy = CriticalStrike::new(1.0, 1.0);
        let skills = PlayerSkills::new().with_offensive(frenzy);
        let mut player = Player::new("Frenzy", stats(10.0, 30.0, 0.0), skills);
        let mut rng = ScriptedRandom::constant(0.5);

        let attack = player.generate_attack(&mut rng);
        assert_eq!(attack.hits, vec![Hit::new(30.0); 3]);
        assert_eq!(attack.used_offensive_skills, vec!["CriticalStrike(3x)"]);
    }

    #[test]
    fn defence_is_subtracted_per_hit() {
        let mut player = Player::new("Tank", stats(100.0, 0.0, 15.0), PlayerSkills::new());
        let mut rng = ScriptedRandom::constant(0.5);

        let attack = Attack::from_hits(vec![Hit::new(20.0), Hit::new(10.0), Hit::new(40.0)]);
        player.defend_attack(attack, &mut rng);

        assert_eq!(player.health(), 100.0 - 5.0 - 0.0 - 25.0);
    }

    #[test]
    fn health_never_goes_negative() {
        let mut player = Player::new("Glass", stats(5.0, 0.0, 0.0), PlayerSkills::new());
        let mut rng = ScriptedRandom::constant(0.5);

        player.defend_attack(Attack::new(1_000.0), &mut rng);
        assert_eq!(player.health(), 0.0);
        assert!(player.is_dead());
    }

    #[test]
    fn death_stops_remaining_hits() {
        // second hit is lethal
        let mut player = Player::new("Mid", stats(30.0, 0.0, 0.0), PlayerSkills::new());
        let mut rng = ScriptedRandom::constant(0.5);

        let attack = Attack::from_hits(vec![Hit::new(10.0), Hit::new(25.0), Hit::new(50.0)]);
        player.defend_attack(attack, &mut rng);
        assert_eq!(player.health(), 0.0);
    }

    #[test]
    fn dead_player_ignores_attacks() {
        let shield = Resilience::new(1.0, 0.5);
        let skills = PlayerSkills::new().with_defensive(shield);
        let mut player = Player::new("Ghost", stats(0.0, 0.0, 0.0), skills);
        let mut rng = ScriptedRandom::constant(0.5);

        let returned = player.defend_attack(Attack::new(10.0), &mut rng);
        assert_eq!(returned, Attack::new(10.0));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn innate_luck_runs_before_configured_defence() {
        let base = PlayerStats {
            luck: 0.5,
            ..stats(100.0, 0.0, 0.0)
        };
        let shield = Resilience::new(1.0, 0.5);
        let skills = PlayerSkills::new().with_defensive(shield);
        let mut player = Player::new("Lucky", base, skills);
        // luck roll 0.1 evades, resilience roll 0.1 fires
        let mut rng = ScriptedRandom::constant(0.1);

        let attack = player.defend_attack(Attack::new(40.0), &mut rng);

        let evaded = &attack.hits[0];
        assert_eq!(evaded.potential_damage, 0.0);
        assert_eq!(evaded.used_defensive_skills, vec![Luck::BATTLE_LABEL]);
        assert_eq!(
            attack.used_defensive_skills,
            vec!["Resilience(blocked 50.00% damage)"]
        );
        assert_eq!(player.health(), 100.0);
    }

    #[test]
    fn defensive_skill_state_persists_across_attacks() {
        let shield = Resilience::new(1.0, 0.5);
        let skills = PlayerSkills::new().with_defensive(shield);
        let mut player = Player::new("Stoic", stats(100.0, 0.0, 0.0), skills);
        let mut rng = ScriptedRandom::constant(0.9);

        player.defend_attack(Attack::new(20.0), &mut rng);
        assert_eq!(player.health(), 90.0);
        player.defend_attack(Attack::new(20.0), &mut rng);
        assert_eq!(player.health(), 70.0);
        player.defend_attack(Attack::new(20.0), &mut rng);
        assert_eq!(player.health(), 60.0);
    }

    #[test]
    fn health_is_monotonic_under_random_attacks() {
        let shield = Resilience::new(0.5, 0.3);
        let skills = PlayerSkills::new().with_defensive(shield);
        let strike = CriticalStrike::new(0.5, 0.5);
        let mut defender = Player::new(
            "Target",
            PlayerStats {
                luck: 0.2,
                ..stats(500.0, 0.0, 12.0)
            },
            skills,
        );
        let mut attacker = Player::new(
            "Source",
            stats(1.0, 25.0, 0.0),
            PlayerSkills::new().with_offensive(strike),
        );
        let mut rng = crate::rng::SeededRandom::new(7);

        for _ in 0..200 {
            let before = defender.health();
            let attack = attacker.generate_attack(&mut rng);
            defender.defend_attack(attack, &mut rng);
            assert!(defender.health() >= 0.0);
            assert!(defender.health() <= before);
        }
    }
}
