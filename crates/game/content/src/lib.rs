//! Data-driven duel content and loaders.
//!
//! This crate turns RON/TOML data into inputs for `duel-core`:
//! - Fighter templates: stat ranges plus skill specs (RON)
//! - Duel configuration: rounds and pacing (TOML)
//! - Built-in content used when no data directory is configured
//!
//! Content is consumed when a duel is assembled and never appears in duel
//! state.

pub mod roster;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::Roster;
pub use templates::{FighterTemplate, SkillSpec, StatRange, StatRanges};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
