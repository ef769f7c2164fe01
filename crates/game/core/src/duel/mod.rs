//! Duel resolution loop.
//!
//! [`DuelMaster`] owns both players and the random source for the lifetime of
//! one duel. It fixes the turn order once, then plays rounds until a knockout
//! or until the configured number of rounds is exhausted.
//!
//! # State machine
//!
//! ```text
//! NotStarted ──run()──> InProgress { round } ──> Finished(Knockout | Tie)
//!                         ^            │
//!                         └── next ────┘
//! ```
//!
//! Within a round the first striker attacks and the second defends; if the
//! second survives they trade places. A death ends the duel immediately.

mod builder;
mod commentator;
mod order;

pub use builder::DuelMasterBuilder;
pub use commentator::{Commentator, SilentCommentator};
pub use order::turn_order;

use core::fmt;
use std::time::Duration;

use crate::config::DuelConfig;
use crate::player::Player;
use crate::rng::{RandomSource, SeededRandom, ThreadRandom};

/// One of the two positions in a duel, in configuration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Seat {
    PlayerOne,
    PlayerTwo,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }
}

/// How a duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelOutcome {
    /// `loser` died in `round`.
    Knockout { round: u32, winner: Seat, loser: Seat },
    /// No knockout happened; `round` is the last round played.
    Tie { round: u32 },
}

impl DuelOutcome {
    pub fn round(&self) -> u32 {
        match self {
            Self::Knockout { round, .. } | Self::Tie { round } => *round,
        }
    }

    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Knockout { winner, .. } => Some(*winner),
            Self::Tie { .. } => None,
        }
    }

    pub fn is_knockout(&self) -> bool {
        matches!(self, Self::Knockout { .. })
    }
}

/// Progress of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelPhase {
    NotStarted,
    InProgress { round: u32 },
    Finished(DuelOutcome),
}

/// Runs a duel between two players.
pub struct DuelMaster {
    config: DuelConfig,
    player_one: Player,
    player_two: Player,
    rng: Box<dyn RandomSource + Send>,
    phase: DuelPhase,
}

impl DuelMaster {
    /// Creates a duel drawing randomness from `config.seed` when set, or from
    /// the thread generator otherwise.
    pub fn new(config: DuelConfig, player_one: Player, player_two: Player) -> Self {
        let rng = default_rng(&config);
        Self {
            config,
            player_one,
            player_two,
            rng,
            phase: DuelPhase::NotStarted,
        }
    }

    pub fn builder() -> DuelMasterBuilder {
        DuelMasterBuilder::new()
    }

    /// Replaces the random source (builder pattern).
    #[must_use]
    pub fn with_rng(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn phase(&self) -> DuelPhase {
        self.phase
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::PlayerOne => &self.player_one,
            Seat::PlayerTwo => &self.player_two,
        }
    }

    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Seats in striking order. Fixed for the whole duel.
    pub fn turn_order(&self) -> (Seat, Seat) {
        turn_order(self.player_one.stats(), self.player_two.stats())
    }

    /// Plays the duel to a knockout or to round exhaustion.
    ///
    /// Running a finished duel again returns the recorded outcome without
    /// notifying `commentator`.
    pub fn run(&mut self, commentator: &mut dyn Commentator) -> DuelOutcome {
        if let DuelPhase::Finished(outcome) = self.phase {
            return outcome;
        }

        let (first, second) = self.turn_order();
        tracing::debug!(
            first = %self.player(first).name(),
            second = %self.player(second).name(),
            rounds = self.config.rounds,
            "duel starting"
        );

        commentator.start();
        commentator.present_players(self.player(first), self.player(second));

        let outcome = self.play_rounds(first, second, commentator);
        self.phase = DuelPhase::Finished(outcome);

        tracing::debug!(?outcome, "duel finished");
        outcome
    }

    fn play_rounds(
        &mut self,
        first: Seat,
        second: Seat,
        commentator: &mut dyn Commentator,
    ) -> DuelOutcome {
        let mut round = 0;

        for current in 1..=self.config.rounds {
            pause(self.config.rounds_delay());

            round = current;
            self.phase = DuelPhase::InProgress { round };
            commentator.present_round(round);

            if let Some(outcome) = self.exchange(first, round, commentator) {
                return outcome;
            }

            pause(self.config.attack_delay());

            if let Some(outcome) = self.exchange(second, round, commentator) {
                return outcome;
            }
        }

        commentator.end_duel_tie(round, self.player(first), self.player(second));
        DuelOutcome::Tie { round }
    }

    /// `attacker` strikes its opponent once. Returns the outcome on knockout.
    fn exchange(
        &mut self,
        attacker: Seat,
        round: u32,
        commentator: &mut dyn Commentator,
    ) -> Option<DuelOutcome> {
        let (striker, target) = match attacker {
            Seat::PlayerOne => (&mut self.player_one, &mut self.player_two),
            Seat::PlayerTwo => (&mut self.player_two, &mut self.player_one),
        };

        let attack = striker.generate_attack(self.rng.as_mut());
        let attack = target.defend_attack(attack, self.rng.as_mut());

        tracing::debug!(
            round,
            attacker = %striker.name(),
            defender = %target.name(),
            hits = attack.hit_count(),
            health = target.health(),
            "attack resolved"
        );
        commentator.present_attack(&attack, striker, target);

        if !target.is_dead() {
            return None;
        }

        commentator.end_duel_knockout(round, striker, target);
        Some(DuelOutcome::Knockout {
            round,
            winner: attacker,
            loser: attacker.opponent(),
        })
    }
}

impl fmt::Debug for DuelMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuelMaster")
            .field("config", &self.config)
            .field("player_one", &self.player_one)
            .field("player_two", &self.player_two)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

pub(crate) fn default_rng(config: &DuelConfig) -> Box<dyn RandomSource + Send> {
    match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

/// Presentation pacing only; a zero delay skips the sleep.
fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerSkills, PlayerStats};
    use crate::rng::ScriptedRandom;

    fn fighter(name: &str, health: f64, strength: f64, defence: f64, speed: f64) -> Player {
        Player::new(
            name,
            PlayerStats {
                health,
                strength,
                defence,
                speed,
                luck: 0.0,
            },
            PlayerSkills::new(),
        )
    }

    #[test]
    fn seat_display_is_snake_case() {
        assert_eq!(Seat::PlayerOne.to_string(), "player_one");
        assert_eq!("PLAYER_TWO".parse::<Seat>(), Ok(Seat::PlayerTwo));
        assert_eq!(Seat::PlayerTwo.opponent(), Seat::PlayerOne);
    }

    #[test]
    fn phase_moves_from_not_started_to_finished() {
        let mut duel = DuelMaster::new(
            DuelConfig::with_rounds(3),
            fighter("A", 10.0, 1.0, 1.0, 2.0),
            fighter("B", 10.0, 1.0, 1.0, 1.0),
        )
        .with_rng(ScriptedRandom::constant(0.5));
        assert_eq!(duel.phase(), DuelPhase::NotStarted);

        let outcome = duel.run(&mut SilentCommentator);
        assert_eq!(outcome, DuelOutcome::Tie { round: 3 });
        assert_eq!(duel.phase(), DuelPhase::Finished(outcome));
    }

    #[test]
    fn zero_rounds_is_an_immediate_tie() {
        let mut duel = DuelMaster::new(
            DuelConfig::with_rounds(0),
            fighter("A", 10.0, 100.0, 0.0, 2.0),
            fighter("B", 10.0, 100.0, 0.0, 1.0),
        );

        let outcome = duel.run(&mut SilentCommentator);
        assert_eq!(outcome, DuelOutcome::Tie { round: 0 });
        assert_eq!(duel.player_two().health(), 10.0);
    }

    #[test]
    fn second_run_returns_recorded_outcome() {
        let mut duel = DuelMaster::new(
            DuelConfig::with_rounds(5),
            fighter("A", 10.0, 100.0, 0.0, 2.0),
            fighter("B", 10.0, 100.0, 0.0, 1.0),
        );

        let first = duel.run(&mut SilentCommentator);
        let second = duel.run(&mut SilentCommentator);
        assert_eq!(first, second);
        assert_eq!(first.winner(), Some(Seat::PlayerOne));
        assert_eq!(first.round(), 1);
    }

    #[test]
    fn outcome_helpers() {
        let knockout = DuelOutcome::Knockout {
            round: 4,
            winner: Seat::PlayerTwo,
            loser: Seat::PlayerOne,
        };
        assert!(knockout.is_knockout());
        assert_eq!(knockout.round(), 4);
        assert_eq!(knockout.winner(), Some(Seat::PlayerTwo));

        let tie = DuelOutcome::Tie { round: 20 };
        assert!(!tie.is_knockout());
        assert_eq!(tie.winner(), None);
    }
}
