//! Sequential composition of attack modifiers.

use core::fmt;

use crate::attack::Attack;
use crate::player::PlayerStats;

use super::{AttackModifier, ModifierContext, Skill};

/// Applies its stages in order, threading one owned attack through them.
///
/// # Semantics
///
/// `attack = stages[0](attack); attack = stages[1](attack); ...`
///
/// Every stage sees the cumulative result of the stages before it. An empty
/// pipeline returns the attack unchanged.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn AttackModifier>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn AttackModifier>>) -> Self {
        Self { stages }
    }

    /// Runs `next` after every stage of `self`.
    pub fn chain(mut self, next: Pipeline) -> Self {
        self.stages.extend(next.stages);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl AttackModifier for Pipeline {
    fn apply(&mut self, attack: Attack, ctx: &mut ModifierContext<'_>) -> Attack {
        self.stages
            .iter_mut()
            .fold(attack, |attack, stage| stage.apply(attack, ctx))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Chains modifiers into a single left-to-right pipeline.
pub fn pipe(modifiers: Vec<Box<dyn AttackModifier>>) -> Pipeline {
    Pipeline::new(modifiers)
}

/// Binds every skill to a player and pipes the resulting modifiers in order.
pub fn pipe_skills(stats: &PlayerStats, skills: &[Box<dyn Skill>]) -> Pipeline {
    pipe(skills.iter().map(|skill| skill.modifier(stats)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::Hit;
    use crate::rng::ScriptedRandom;

    fn add_hit(damage: f64) -> Box<dyn AttackModifier> {
        Box::new(move |mut attack: Attack, _ctx: &mut ModifierContext<'_>| {
            attack.hits.push(Hit::new(damage));
            attack
        })
    }

    fn halve() -> Box<dyn AttackModifier> {
        Box::new(|mut attack: Attack, _ctx: &mut ModifierContext<'_>| {
            for hit in &mut attack.hits {
                hit.potential_damage /= 2.0;
            }
            attack
        })
    }

    fn run(pipeline: &mut Pipeline, attack: Attack) -> Attack {
        let stats = PlayerStats::default();
        let mut rng = ScriptedRandom::constant(0.5);
        let mut ctx = ModifierContext::new(&stats, &mut rng);
        pipeline.apply(attack, &mut ctx)
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let mut pipeline = pipe(Vec::new());
        assert!(pipeline.is_empty());
        assert_eq!(run(&mut pipeline, Attack::new(7.0)), Attack::new(7.0));
    }

    #[test]
    fn stages_apply_left_to_right() {
        // add then halve: both hits are halved
        let mut add_first = pipe(vec![add_hit(10.0), halve()]);
        let attack = run(&mut add_first, Attack::new(10.0));
        let damages: Vec<f64> = attack.hits.iter().map(|h| h.potential_damage).collect();
        assert_eq!(damages, vec![5.0, 5.0]);

        // halve then add: only the original hit is halved
        let mut halve_first = pipe(vec![halve(), add_hit(10.0)]);
        let attack = run(&mut halve_first, Attack::new(10.0));
        let damages: Vec<f64> = attack.hits.iter().map(|h| h.potential_damage).collect();
        assert_eq!(damages, vec![5.0, 10.0]);
    }

    #[test]
    fn chain_runs_second_pipeline_last() {
        let mut pipeline = pipe(vec![halve()]).chain(pipe(vec![add_hit(3.0)]));
        assert_eq!(pipeline.len(), 2);

        let attack = run(&mut pipeline, Attack::new(8.0));
        let damages: Vec<f64> = attack.hits.iter().map(|h| h.potential_damage).collect();
        assert_eq!(damages, vec![4.0, 3.0]);
    }

    #[test]
    fn stages_keep_state_between_invocations() {
        let mut calls = 0u32;
        let counter: Box<dyn AttackModifier> =
            Box::new(move |mut attack: Attack, _ctx: &mut ModifierContext<'_>| {
                calls += 1;
                attack.record_offensive(format!("call {calls}"));
                attack
            });
        let mut pipeline = pipe(vec![counter]);

        run(&mut pipeline, Attack::new(1.0));
        let second = run(&mut pipeline, Attack::new(1.0));
        assert_eq!(second.used_offensive_skills, vec!["call 2"]);
    }

    #[test]
    fn pipe_skills_binds_each_skill_in_order() {
        let skills: Vec<Box<dyn Skill>> = vec![
            Box::new(crate::skill::CriticalStrike::new(1.0, 0.0)),
            Box::new(crate::skill::CriticalStrike::new(1.0, 1.0)),
        ];
        let stats = PlayerStats {
            strength: 5.0,
            ..PlayerStats::default()
        };
        let mut pipeline = pipe_skills(&stats, &skills);
        assert_eq!(pipeline.len(), 2);

        let mut rng = ScriptedRandom::constant(0.5);
        let mut ctx = ModifierContext::new(&stats, &mut rng);
        let attack = pipeline.apply(Attack::new(5.0), &mut ctx);

        // 2x adds one hit, 3x adds two
        assert_eq!(attack.hit_count(), 4);
        assert_eq!(
            attack.used_offensive_skills,
            vec!["CriticalStrike(2x)", "CriticalStrike(3x)"]
        );
    }
}
