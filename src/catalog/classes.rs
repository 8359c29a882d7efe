//! # Classes and Slots
//!
//! The fixed set of playable classes, loadout slots, and the class/slot pairs
//! that form valid equip positions.

use crate::{LoadoutError, LoadoutResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A playable class.
///
/// Order follows the in-game class selection screen.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Class {
    Scout,
    Soldier,
    Pyro,
    Demoman,
    /// The Heavy Weapons Guy
    Heavy,
    Engineer,
    Medic,
    Sniper,
    /// The only class with a sapper slot
    Spy,
}

impl Class {
    /// Every class, in selection screen order.
    pub const ALL: [Class; 9] = [
        Class::Scout,
        Class::Soldier,
        Class::Pyro,
        Class::Demoman,
        Class::Heavy,
        Class::Engineer,
        Class::Medic,
        Class::Sniper,
        Class::Spy,
    ];

    /// Returns every class, in selection screen order.
    pub fn all() -> &'static [Class] {
        &Self::ALL
    }

    /// Whether this class can equip sappers.
    pub fn uses_sapper(self) -> bool {
        self == Class::Spy
    }

    /// Picks one class uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Class {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A loadout slot.
///
/// Spy invisibility watches count as [`Slot::Secondary`] and Spy knives as
/// [`Slot::Melee`]. Engineer PDAs are not part of the weapon pool.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    /// Upper-most slot on the loadout screen
    Primary,
    /// Middle slot on the loadout screen
    Secondary,
    /// Third slot on the loadout screen
    Melee,
    /// Spy-only fourth slot
    Sapper,
}

impl Slot {
    /// Every slot, in loadout screen order.
    pub const ALL: [Slot; 4] = [Slot::Primary, Slot::Secondary, Slot::Melee, Slot::Sapper];

    /// Returns every slot, in loadout screen order.
    pub fn all() -> &'static [Slot] {
        &Self::ALL
    }

    /// Slots shared by every class.
    pub fn common() -> &'static [Slot] {
        &Self::ALL[..3]
    }

    /// Picks one slot uniformly at random.
    ///
    /// [`Slot::Sapper`] is only a possible outcome when `allow_sapper` is set.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, allow_sapper: bool) -> Slot {
        let outcomes = if allow_sapper {
            Self::all()
        } else {
            Self::common()
        };
        outcomes[rng.gen_range(0..outcomes.len())]
    }
}

/// A class/slot pair describing where a weapon can be equipped.
///
/// Equality is defined by class and slot only.
///
/// # Examples
///
/// ```
/// use loadout_randomizer::{Class, LoadoutCombination, Slot};
///
/// assert!(LoadoutCombination::new(Class::Spy, Slot::Sapper).is_ok());
/// assert!(LoadoutCombination::new(Class::Scout, Slot::Sapper).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoadoutCombination {
    pub class: Class,
    pub slot: Slot,
}

impl LoadoutCombination {
    /// Creates a combination, rejecting sappers for every class but Spy.
    pub fn new(class: Class, slot: Slot) -> LoadoutResult<Self> {
        if slot == Slot::Sapper && !class.uses_sapper() {
            return Err(LoadoutError::InvalidCombination { class, slot });
        }
        Ok(Self { class, slot })
    }

    /// Whether the pair respects the sapper rule.
    pub fn is_well_formed(&self) -> bool {
        self.slot != Slot::Sapper || self.class.uses_sapper()
    }

    /// Every pair that respects the sapper rule, class-major.
    pub fn all_well_formed() -> Vec<LoadoutCombination> {
        Class::ALL
            .iter()
            .flat_map(|&class| Slot::ALL.iter().map(move |&slot| Self { class, slot }))
            .filter(LoadoutCombination::is_well_formed)
            .collect()
    }
}

impl std::fmt::Display for LoadoutCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.class, self.slot)
    }
}
