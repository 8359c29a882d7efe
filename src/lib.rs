//! # Loadout Randomizer
//!
//! Random loadout generation for Team Fortress 2: pick a class, a slot, and a
//! weapon the class can actually equip in that slot.
//!
//! ## Architecture Overview
//!
//! The crate is split into two layers that are loaded in dependency order:
//!
//! - **Catalog**: immutable reference data. Classes, slots, the valid
//!   class/slot combinations, reskin groups and weapons. Catalogs are produced
//!   by a [`CatalogLoader`], either from a JSON document or from the dataset
//!   bundled with the crate.
//! - **Generation**: the [`Generator`] takes a catalog snapshot and exposes
//!   randomization and query operations over it, together with a per-instance
//!   enable/disable mask.
//!
//! ## Example
//!
//! ```
//! use loadout_randomizer::{Catalog, Class, Generator, Slot};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut generator = Generator::with_seed(catalog, 7);
//!
//! let weapon = generator.randomize_weapon(Class::Scout, Slot::Primary, false).unwrap();
//! assert!(weapon.is_eligible_for_pair(Class::Scout, Slot::Primary));
//! ```

pub mod catalog;
pub mod generation;

// Core module re-exports
pub use catalog::*;
pub use generation::*;

/// Core error type for the loadout randomizer.
#[derive(thiserror::Error, Debug)]
pub enum LoadoutError {
    /// The class/slot pair is not one of the valid combinations
    #[error("Invalid combination: {class} cannot equip a {slot} weapon")]
    InvalidCombination { class: Class, slot: Slot },

    /// No enabled weapon is eligible for the requested combination
    #[error("Empty pool: no enabled weapon for {class}, {slot}")]
    EmptyPool { class: Class, slot: Slot },

    /// A weapon id does not exist in the catalog
    #[error("Unknown weapon id: {0}")]
    UnknownItem(WeaponId),

    /// Catalog data is not internally consistent
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the loadout randomizer.
pub type LoadoutResult<T> = Result<T, LoadoutError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate-wide constants.
pub mod config {
    /// Prefix prepended to a weapon's image name
    pub const IMAGE_PATH_PREFIX: &str = "imgs/weapons/";

    /// Suffix appended to a weapon's image name
    pub const IMAGE_PATH_SUFFIX: &str = ".png";

    /// Name of the dataset compiled into the crate
    pub const BUNDLED_CATALOG_NAME: &str = "tf2_weapons.json";

    /// Number of rolls the command line tool performs by default
    pub const DEFAULT_ROLL_COUNT: u32 = 1;
}
