//! `duel` binary: runs one duel and narrates it through `tracing`.
use anyhow::Result;
use duel_client::{Arena, ClientConfig, TracingCommentator, logging};
use duel_core::DuelOutcome;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.logging)?;

    tracing::info!("Starting duel");
    let mut arena = Arena::from_config(&config)?;
    let outcome = arena.run(&mut TracingCommentator::new());

    match outcome {
        DuelOutcome::Knockout { round, winner, .. } => {
            let winner = arena.duel().player(winner).name();
            tracing::info!(round, %winner, "Duel ended by knockout");
        }
        DuelOutcome::Tie { round } => {
            tracing::info!(round, "Duel ended in a tie");
        }
    }

    Ok(())
}
