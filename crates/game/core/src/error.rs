//! Errors raised while assembling a duel.
//!
//! Resolving a duel is infallible: out-of-range probabilities simply always or
//! never trigger, and damage/health clamping is enforced where they mutate.
//! The only failures are structural ones caught before the first round.

/// Errors that can occur while building a [`crate::DuelMaster`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelSetupError {
    #[error("player one is required; use .player_one() to set it")]
    MissingPlayerOne,

    #[error("player two is required; use .player_two() to set it")]
    MissingPlayerTwo,
}
