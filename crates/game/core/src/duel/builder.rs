//! Duel builder with fail-fast validation.

use std::time::Duration;

use crate::config::DuelConfig;
use crate::error::DuelSetupError;
use crate::player::Player;
use crate::rng::RandomSource;

use super::{DuelMaster, DuelPhase, default_rng};

/// Builder for constructing a [`DuelMaster`].
///
/// Both players are required. Configuration defaults to [`DuelConfig::new`];
/// the random source defaults to one derived from the configured seed.
#[derive(Default)]
pub struct DuelMasterBuilder {
    config: DuelConfig,
    player_one: Option<Player>,
    player_two: Option<Player>,
    rng: Option<Box<dyn RandomSource + Send>>,
}

impl DuelMasterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: DuelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.config.rounds = rounds;
        self
    }

    pub fn rounds_delay(mut self, delay: Duration) -> Self {
        self.config.rounds_delay_ms = saturating_millis(delay);
        self
    }

    pub fn attack_delay(mut self, delay: Duration) -> Self {
        self.config.attack_delay_ms = saturating_millis(delay);
        self
    }

    /// Seeds the default random source. Ignored if [`Self::rng`] is set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the first configured player (required).
    pub fn player_one(mut self, player: Player) -> Self {
        self.player_one = Some(player);
        self
    }

    /// Set the second configured player (required).
    pub fn player_two(mut self, player: Player) -> Self {
        self.player_two = Some(player);
        self
    }

    /// Overrides the random source.
    pub fn rng(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the duel.
    ///
    /// # Errors
    ///
    /// Returns an error if either player is not set.
    pub fn build(self) -> Result<DuelMaster, DuelSetupError> {
        let player_one = self.player_one.ok_or(DuelSetupError::MissingPlayerOne)?;
        let player_two = self.player_two.ok_or(DuelSetupError::MissingPlayerTwo)?;
        let rng = self.rng.unwrap_or_else(|| default_rng(&self.config));

        Ok(DuelMaster {
            config: self.config,
            player_one,
            player_two,
            rng,
            phase: DuelPhase::NotStarted,
        })
    }
}

fn saturating_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
