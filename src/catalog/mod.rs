//! # Catalog Module
//!
//! Immutable reference data consumed by the generator.
//!
//! This module contains the data model of the randomizer:
//! - Classes, slots and the class/slot pairs that make up valid equip positions
//! - Weapons and the reskin groups tying mechanically identical weapons together
//! - Loaders producing complete catalogs from JSON or from the bundled dataset

pub mod classes;
pub mod loader;
pub mod weapons;

pub use classes::*;
pub use loader::*;
pub use weapons::*;

use crate::{LoadoutError, LoadoutResult};
use std::collections::{HashMap, HashSet};

/// A complete, internally consistent snapshot of the reference data.
///
/// Referential integrity is checked once by [`Catalog::new`]. Anything
/// holding a `Catalog` can rely on every weapon combination and reskin group
/// reference resolving to an entry of the same catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Groups of mechanically identical weapons
    reskin_groups: Vec<ReskinGroup>,
    /// Valid class/slot pairs
    combinations: Vec<LoadoutCombination>,
    /// Every weapon, in insertion order
    weapons: Vec<Weapon>,
    /// Index from weapon id to position in `weapons`
    weapon_index: HashMap<WeaponId, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every cross reference.
    ///
    /// # Errors
    ///
    /// Returns [`LoadoutError::InvalidCatalog`] when ids are duplicated, a
    /// weapon has no combination, a weapon references a combination or reskin
    /// group that is not part of the catalog, or a combination breaks the
    /// sapper rule.
    pub fn new(
        combinations: Vec<LoadoutCombination>,
        reskin_groups: Vec<ReskinGroup>,
        weapons: Vec<Weapon>,
    ) -> LoadoutResult<Self> {
        let mut valid_combinations = HashSet::new();
        for combo in &combinations {
            if !combo.is_well_formed() {
                return Err(LoadoutError::InvalidCatalog(format!(
                    "combination {} is not allowed: only spy uses the sapper slot",
                    combo
                )));
            }
            if !valid_combinations.insert(*combo) {
                return Err(LoadoutError::InvalidCatalog(format!(
                    "duplicate combination {}",
                    combo
                )));
            }
        }

        let mut group_ids = HashSet::new();
        for group in &reskin_groups {
            if !group_ids.insert(group.id) {
                return Err(LoadoutError::InvalidCatalog(format!(
                    "duplicate reskin group id {}",
                    group.id
                )));
            }
        }

        let mut weapon_index = HashMap::with_capacity(weapons.len());
        for (position, weapon) in weapons.iter().enumerate() {
            if weapon_index.insert(weapon.id, position).is_some() {
                return Err(LoadoutError::InvalidCatalog(format!(
                    "duplicate weapon id {}",
                    weapon.id
                )));
            }
            validate_weapon(weapon, &valid_combinations, &group_ids)?;
        }

        Ok(Self {
            reskin_groups,
            combinations,
            weapons,
            weapon_index,
        })
    }

    /// Loads the Team Fortress 2 dataset compiled into the crate.
    pub fn bundled() -> LoadoutResult<Self> {
        BundledCatalogLoader.load()
    }

    /// Every class.
    pub fn classes(&self) -> &'static [Class] {
        Class::all()
    }

    /// Every slot.
    pub fn slots(&self) -> &'static [Slot] {
        Slot::all()
    }

    /// Every valid class/slot pair.
    pub fn combinations(&self) -> &[LoadoutCombination] {
        &self.combinations
    }

    /// Looks up the valid combination for `class` and `slot`.
    pub fn combination(&self, class: Class, slot: Slot) -> Option<&LoadoutCombination> {
        self.combinations
            .iter()
            .find(|combo| combo.class == class && combo.slot == slot)
    }

    /// Whether `class` and `slot` form a valid combination.
    pub fn contains_combination(&self, class: Class, slot: Slot) -> bool {
        self.combination(class, slot).is_some()
    }

    /// Every reskin group.
    pub fn reskin_groups(&self) -> &[ReskinGroup] {
        &self.reskin_groups
    }

    /// Looks up a reskin group by id.
    pub fn reskin_group(&self, id: ReskinGroupId) -> Option<&ReskinGroup> {
        self.reskin_groups.iter().find(|group| group.id == id)
    }

    /// Weapons belonging to a reskin group, in catalog order.
    pub fn reskins_of(&self, id: ReskinGroupId) -> Vec<&Weapon> {
        self.weapons
            .iter()
            .filter(|weapon| weapon.reskin_group == Some(id))
            .collect()
    }

    /// Every weapon, in catalog order.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Looks up a weapon by id.
    pub fn weapon(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapon_index.get(&id).map(|&position| &self.weapons[position])
    }

    /// Looks up a weapon by name, ignoring case.
    pub fn weapon_by_name(&self, name: &str) -> Option<&Weapon> {
        self.weapons
            .iter()
            .find(|weapon| weapon.name.eq_ignore_ascii_case(name))
    }

    /// Whether the catalog contains a weapon with this id.
    pub fn contains_weapon(&self, id: WeaponId) -> bool {
        self.weapon_index.contains_key(&id)
    }

    /// Number of weapons in the catalog.
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Whether the catalog has no weapons.
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

fn validate_weapon(
    weapon: &Weapon,
    valid_combinations: &HashSet<LoadoutCombination>,
    group_ids: &HashSet<ReskinGroupId>,
) -> LoadoutResult<()> {
    if weapon.combinations.is_empty() {
        return Err(LoadoutError::InvalidCatalog(format!(
            "{} is not eligible for any combination",
            weapon
        )));
    }

    if let Some(combo) = weapon
        .combinations
        .iter()
        .find(|combo| !valid_combinations.contains(*combo))
    {
        return Err(LoadoutError::InvalidCatalog(format!(
            "{} references unknown combination {}",
            weapon, combo
        )));
    }

    if let Some(group) = weapon.reskin_group {
        if !group_ids.contains(&group) {
            return Err(LoadoutError::InvalidCatalog(format!(
                "{} references unknown reskin group {}",
                weapon, group
            )));
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_catalog_lookups() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.combinations().len(), 4);
        assert_eq!(catalog.weapon(WeaponId(4)).unwrap().name, "Frying Pan");
        assert!(catalog.weapon(WeaponId(99)).is_none());
        assert!(catalog.contains_weapon(WeaponId(5)));
        assert!(!catalog.contains_weapon(WeaponId(99)));
        assert_eq!(
            catalog.weapon_by_name("festive scattergun").unwrap().id,
            WeaponId(3)
        );
        assert!(catalog.contains_combination(Class::Spy, Slot::Sapper));
        assert!(!catalog.contains_combination(Class::Scout, Slot::Secondary));
        assert_eq!(catalog.reskins_of(ReskinGroupId(1)).len(), 2);
        assert_eq!(
            catalog.reskin_group(ReskinGroupId(1)).unwrap().name,
            "ScattergunReskins"
        );
    }

    #[test]
    fn test_classes_and_slots_are_fixed() {
        let catalog = small_catalog();
        assert_eq!(catalog.classes(), &Class::ALL[..]);
        assert_eq!(catalog.classes().len(), 9);
        assert_eq!(catalog.slots(), &Slot::ALL[..]);
        assert_eq!(catalog.slots().len(), 4);
    }

    #[test]
    fn test_rejects_duplicate_weapon_ids() {
        let primary = combo(Class::Scout, Slot::Primary);
        let result = Catalog::new(
            vec![primary],
            vec![],
            vec![
                Weapon::new(WeaponId(1), "A", vec![primary]),
                Weapon::new(WeaponId(1), "B", vec![primary]),
            ],
        );
        assert!(matches!(result, Err(LoadoutError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_weapon_without_combinations() {
        let result = Catalog::new(
            vec![combo(Class::Scout, Slot::Primary)],
            vec![],
            vec![Weapon::new(WeaponId(1), "Orphan", vec![])],
        );
        assert!(matches!(result, Err(LoadoutError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_unknown_references() {
        let primary = combo(Class::Scout, Slot::Primary);
        let melee = combo(Class::Scout, Slot::Melee);

        let unknown_combo = Catalog::new(
            vec![primary],
            vec![],
            vec![Weapon::new(WeaponId(1), "Bat", vec![melee])],
        );
        assert!(matches!(unknown_combo, Err(LoadoutError::InvalidCatalog(_))));

        let unknown_group = Catalog::new(
            vec![primary],
            vec![],
            vec![Weapon::new(WeaponId(1), "Scattergun", vec![primary]).in_group(ReskinGroupId(9))],
        );
        assert!(matches!(unknown_group, Err(LoadoutError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_sapper_for_non_spy() {
        let bogus = LoadoutCombination {
            class: Class::Engineer,
            slot: Slot::Sapper,
        };
        let result = Catalog::new(vec![bogus], vec![], vec![]);
        assert!(matches!(result, Err(LoadoutError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_combinations() {
        let primary = combo(Class::Medic, Slot::Primary);
        let result = Catalog::new(vec![primary, primary], vec![], vec![]);
        assert!(matches!(result, Err(LoadoutError::InvalidCatalog(_))));
    }
}
