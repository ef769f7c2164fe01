//! Duel configuration loader.

use std::path::Path;

use anyhow::Context;
use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for duel configuration from TOML files.
///
/// Missing keys keep their [`DuelConfig`] defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
