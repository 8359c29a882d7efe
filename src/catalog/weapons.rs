//! # Weapons and Reskin Groups
//!
//! Catalog entries for individual weapons and the groups that tie together
//! cosmetically different but mechanically identical weapons.

use crate::config::{IMAGE_PATH_PREFIX, IMAGE_PATH_SUFFIX};
use crate::{Class, LoadoutCombination, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a weapon within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(pub u32);

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Unique identifier of a reskin group within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReskinGroupId(pub u32);

impl fmt::Display for ReskinGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named set of weapons that share the exact same mechanics.
///
/// For example, the stock Pistol and the Lugermorph belong to the same group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReskinGroup {
    pub id: ReskinGroupId,
    pub name: String,
}

impl ReskinGroup {
    pub fn new(id: ReskinGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single weapon.
///
/// Reskin membership and eligible combinations are fixed once the weapon is
/// part of a catalog. Whether a weapon is enabled is tracked by each
/// [`Generator`](crate::Generator), not by the weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique identifier
    pub id: WeaponId,
    /// Display name, without a leading "The"
    pub name: String,
    /// Short image name, see [`Weapon::image_path`]
    #[serde(default)]
    pub image: String,
    /// Whether this is the default weapon for its slot
    #[serde(default)]
    pub stock: bool,
    /// Group of mechanically identical weapons, `None` if the weapon is unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reskin_group: Option<ReskinGroupId>,
    /// Class/slot pairs this weapon can be equipped in
    pub combinations: Vec<LoadoutCombination>,
}

impl Weapon {
    /// Creates a non-stock weapon with no reskin group.
    ///
    /// # Examples
    ///
    /// ```
    /// use loadout_randomizer::{Class, LoadoutCombination, Slot, Weapon, WeaponId};
    ///
    /// let combo = LoadoutCombination::new(Class::Soldier, Slot::Primary).unwrap();
    /// let weapon = Weapon::new(WeaponId(1), "Black Box", vec![combo]).with_image("black_box");
    /// assert_eq!(weapon.image_path(), "imgs/weapons/black_box.png");
    /// ```
    pub fn new(
        id: WeaponId,
        name: impl Into<String>,
        combinations: Vec<LoadoutCombination>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            stock: false,
            reskin_group: None,
            combinations,
        }
    }

    /// Marks the weapon as the stock choice for its slot.
    pub fn as_stock(mut self) -> Self {
        self.stock = true;
        self
    }

    /// Places the weapon in a reskin group.
    pub fn in_group(mut self, group: ReskinGroupId) -> Self {
        self.reskin_group = Some(group);
        self
    }

    /// Sets the short image name.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Path of the weapon's display image.
    pub fn image_path(&self) -> String {
        format!("{}{}{}", IMAGE_PATH_PREFIX, self.image, IMAGE_PATH_SUFFIX)
    }

    /// Whether the weapon has cosmetic variants.
    pub fn is_reskin(&self) -> bool {
        self.reskin_group.is_some()
    }

    /// Whether the weapon can be equipped in the given combination.
    pub fn is_eligible_for(&self, combination: &LoadoutCombination) -> bool {
        self.combinations.contains(combination)
    }

    /// Whether the weapon can be equipped by `class` in `slot`.
    pub fn is_eligible_for_pair(&self, class: Class, slot: Slot) -> bool {
        self.combinations
            .iter()
            .any(|combo| combo.class == class && combo.slot == slot)
    }

    /// Whether any combination of the weapon belongs to `class`.
    pub fn usable_by(&self, class: Class) -> bool {
        self.combinations.iter().any(|combo| combo.class == class)
    }

    /// Whether any combination of the weapon uses `slot`.
    pub fn fits_slot(&self, slot: Slot) -> bool {
        self.combinations.iter().any(|combo| combo.slot == slot)
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Weapon: {}, {}}}", self.id, self.name)
    }
}
