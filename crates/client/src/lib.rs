//! Duel client: composition root for the `duel` binary.
//!
//! [`Arena`] wires content, configuration and randomness into a ready
//! [`DuelMaster`]. Presentation is left to whichever [`Commentator`] the
//! caller passes to [`Arena::run`].
pub mod commentary;
pub mod config;
pub mod logging;

use anyhow::{Context, Result};
use duel_content::{ContentFactory, builtin};
use duel_core::{Commentator, DuelMaster, DuelOutcome, RandomSource, SeededRandom, ThreadRandom};

pub use commentary::TracingCommentator;
pub use config::{ClientConfig, DuelOverrides, LoggingConfig};

/// A fully assembled duel, ready to run.
#[derive(Debug)]
pub struct Arena {
    duel: DuelMaster,
}

impl Arena {
    /// Loads content, applies overrides, rolls both fighters and builds the duel.
    ///
    /// When a seed is configured the same stream rolls the fighters' stats and
    /// drives every skill, so the whole duel is reproducible.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let (mut duel_config, roster) = match &config.data_dir {
            Some(dir) => {
                tracing::debug!("Loading content from {}", dir.display());
                let factory = ContentFactory::new(dir);
                (factory.load_config()?, factory.load_roster()?)
            }
            None => {
                tracing::debug!("Using built-in content");
                (builtin::config()?, builtin::roster()?)
            }
        };
        config.overrides.apply(&mut duel_config);

        let (one, two) = roster
            .pair(config.fighter_one.as_deref(), config.fighter_two.as_deref())
            .context("failed to pick duelists")?;

        let mut rng: Box<dyn RandomSource + Send> = match duel_config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        let player_one = one.spawn(&mut rng);
        let player_two = two.spawn(&mut rng);

        tracing::info!(
            rounds = duel_config.rounds,
            seed = ?duel_config.seed,
            "{} vs {}",
            player_one.name(),
            player_two.name()
        );

        let duel = DuelMaster::builder()
            .config(duel_config)
            .player_one(player_one)
            .player_two(player_two)
            .rng(rng)
            .build()?;

        Ok(Self { duel })
    }

    pub fn duel(&self) -> &DuelMaster {
        &self.duel
    }

    pub fn run(&mut self, commentator: &mut dyn Commentator) -> DuelOutcome {
        self.duel.run(commentator)
    }
}
