//! # Generation Module
//!
//! Randomized selection of classes, slots and weapons over a catalog snapshot.
//!
//! This module provides the selection engine of the randomizer. It includes
//! the [`Generator`] itself, reskin collapsing, full-loadout rolls, and the
//! runtime configuration used to build a generator.

pub mod generator;
pub mod loadout;
pub mod reskins;

pub use generator::*;
pub use loadout::*;
pub use reskins::*;

use crate::{LoadoutResult, WeaponId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration for a generator.
///
/// Controls the random seed, the default selection flags, and which weapons
/// start out disabled. Listing a weapon as disabled more than once is
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random seed for reproducible rolls, OS entropy when absent
    pub seed: Option<u64>,
    /// Collapse every reskin group to a single candidate
    pub treat_reskins_as_one: bool,
    /// Allow the sapper slot when rolling a random slot with default flags
    pub allow_sapper: bool,
    /// Weapons removed from the pool when the generator is built
    pub disabled: Vec<WeaponId>,
}

impl GeneratorConfig {
    /// Creates a default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use loadout_randomizer::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::new();
    /// assert!(config.seed.is_none());
    /// assert!(!config.treat_reskins_as_one);
    /// assert!(config.disabled.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a seeded configuration for reproducible tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LoadoutResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Utility functions for generation.
pub mod utils {
    use super::*;

    /// Creates the random number generator described by the config.
    pub fn create_rng(config: &GeneratorConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
