//! Deterministic duel rules shared by the content loaders and the client.
//!
//! `duel-core` defines the attack model, the skill pipeline that transforms
//! attacks, the players that own those pipelines, and the [`duel::DuelMaster`]
//! loop that resolves a two-player duel. Presentation is delegated to a
//! [`duel::Commentator`], which only observes already-resolved state.
pub mod attack;
pub mod config;
pub mod duel;
pub mod error;
pub mod player;
pub mod rng;
pub mod skill;

pub use attack::{Attack, Hit};
pub use config::DuelConfig;
pub use duel::{
    Commentator, DuelMaster, DuelMasterBuilder, DuelOutcome, DuelPhase, Seat, SilentCommentator,
};
pub use error::DuelSetupError;
pub use player::{Player, PlayerSkills, PlayerStats};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use skill::{
    AttackModifier, CriticalStrike, Luck, ModifierContext, Pipeline, Resilience, Skill, pipe,
    pipe_skills,
};
