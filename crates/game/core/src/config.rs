use std::time::Duration;

/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Number of rounds played before the duel is declared a tie.
    pub rounds: u32,

    /// Pause before every round, for presentation pacing only.
    pub rounds_delay_ms: u64,

    /// Pause between the two attacks of a round, for presentation pacing only.
    pub attack_delay_ms: u64,

    /// Seed for reproducible duels. `None` draws from the thread generator.
    pub seed: Option<u64>,
}

impl DuelConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUNDS: u32 = 20;
    pub const DEFAULT_ROUNDS_DELAY_MS: u64 = 0;
    pub const DEFAULT_ATTACK_DELAY_MS: u64 = 0;

    pub fn new() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            rounds_delay_ms: Self::DEFAULT_ROUNDS_DELAY_MS,
            attack_delay_ms: Self::DEFAULT_ATTACK_DELAY_MS,
            seed: None,
        }
    }

    pub fn with_rounds(rounds: u32) -> Self {
        Self {
            rounds,
            ..Self::new()
        }
    }

    pub fn rounds_delay(&self) -> Duration {
        Duration::from_millis(self.rounds_delay_ms)
    }

    pub fn attack_delay(&self) -> Duration {
        Duration::from_millis(self.attack_delay_ms)
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
