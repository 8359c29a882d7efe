//! # Full Loadouts
//!
//! Rolls one weapon for every slot a class can fill.

use crate::{Class, Generator, LoadoutResult, Slot, Weapon};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weapon chosen for one slot of a loadout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSlot {
    pub slot: Slot,
    pub weapon: Weapon,
}

/// A complete randomized loadout for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub class: Class,
    /// One entry per valid slot, in loadout screen order
    pub slots: Vec<LoadoutSlot>,
}

impl Loadout {
    /// The weapon rolled for `slot`, if the class has that slot.
    pub fn weapon(&self, slot: Slot) -> Option<&Weapon> {
        self.slots
            .iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| &entry.weapon)
    }
}

impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.class)?;
        for entry in &self.slots {
            write!(f, " [{}] {}", entry.slot, entry.weapon.name)?;
        }
        Ok(())
    }
}

impl<R: Rng> Generator<R> {
    /// Rolls a weapon for every slot `class` can use.
    ///
    /// Slots that are not valid combinations for the class in this catalog
    /// are skipped. Fails with the first [`LoadoutError::EmptyPool`] hit.
    ///
    /// [`LoadoutError::EmptyPool`]: crate::LoadoutError::EmptyPool
    pub fn randomize_loadout(
        &mut self,
        class: Class,
        treat_reskins_as_one: bool,
    ) -> LoadoutResult<Loadout> {
        let slots: Vec<Slot> = Slot::ALL
            .iter()
            .copied()
            .filter(|&slot| self.catalog().contains_combination(class, slot))
            .collect();

        let mut loadout = Loadout {
            class,
            slots: Vec::with_capacity(slots.len()),
        };
        for slot in slots {
            let weapon = self
                .randomize_weapon(class, slot, treat_reskins_as_one)?
                .clone();
            loadout.slots.push(LoadoutSlot { slot, weapon });
        }
        Ok(loadout)
    }

    /// [`Generator::randomize_loadout`] using the generator's reskin flag.
    pub fn roll_loadout(&mut self, class: Class) -> LoadoutResult<Loadout> {
        let treat_reskins_as_one = self.treat_reskins_as_one();
        self.randomize_loadout(class, treat_reskins_as_one)
    }
}
