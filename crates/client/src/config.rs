//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use duel_core::DuelConfig;

/// Everything the `duel` binary needs besides content files.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub data_dir: Option<PathBuf>,
    pub overrides: DuelOverrides,
    pub fighter_one: Option<String>,
    pub fighter_two: Option<String>,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Content directory (default: built-in content)
    /// - `DUEL_ROUNDS` - Number of rounds
    /// - `DUEL_ROUNDS_DELAY_MS` - Pause before each round
    /// - `DUEL_ATTACK_DELAY_MS` - Pause after each attack
    /// - `DUEL_SEED` - Seed for a reproducible duel
    /// - `DUEL_FIGHTER_ONE` / `DUEL_FIGHTER_TWO` - Roster names (default: first two entries)
    /// - `DUEL_SESSION_ID` - Log session name (default: timestamp)
    /// - `DUEL_LOG_FILE` - Also write logs to a file: `1`, `true`, `yes`, `on` or empty
    /// - `DUEL_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let overrides = DuelOverrides {
            rounds: parse(read("DUEL_ROUNDS")),
            rounds_delay_ms: parse(read("DUEL_ROUNDS_DELAY_MS")),
            attack_delay_ms: parse(read("DUEL_ATTACK_DELAY_MS")),
            seed: parse(read("DUEL_SEED")),
        };

        // A bare `DUEL_LOG_FILE=` still counts as enabled.
        let log_to_file = lookup("DUEL_LOG_FILE").is_some_and(|value| parse_flag(&value));

        Self {
            data_dir: read("DUEL_DATA_DIR").map(PathBuf::from),
            overrides,
            fighter_one: read("DUEL_FIGHTER_ONE"),
            fighter_two: read("DUEL_FIGHTER_TWO"),
            logging: LoggingConfig {
                session_id: read("DUEL_SESSION_ID"),
                log_to_file,
                log_dir: read("DUEL_LOG_DIR").map(PathBuf::from),
            },
        }
    }
}

/// Optional replacements for values loaded from content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DuelOverrides {
    pub rounds: Option<u32>,
    pub rounds_delay_ms: Option<u64>,
    pub attack_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl DuelOverrides {
    pub fn apply(&self, config: &mut DuelConfig) {
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(delay) = self.rounds_delay_ms {
            config.rounds_delay_ms = delay;
        }
        if let Some(delay) = self.attack_delay_ms {
            config.attack_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub session_id: Option<String>,
    pub log_to_file: bool,
    pub log_dir: Option<PathBuf>,
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value?.trim().parse().ok()
}

/// Truthy: empty, `1`, `true`, `yes`, `on` (any case). Anything else is off.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}
