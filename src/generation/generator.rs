//! # Weapon Generator
//!
//! The selection engine. A [`Generator`] owns a catalog snapshot, a mask of
//! enabled weapons and a random number generator.

use crate::{
    collapse_reskins, utils, Catalog, Class, GeneratorConfig, LoadoutCombination, LoadoutError,
    LoadoutResult, Slot, Weapon, WeaponId,
};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Randomizes classes, slots and weapons over a catalog snapshot.
///
/// Every generator starts with all weapons enabled. Enabling and disabling
/// weapons only affects this instance; the catalog is never modified.
///
/// The generator also remembers default selection flags, used by
/// [`Generator::roll_weapon`], [`Generator::roll_slot`] and
/// [`Generator::roll_loadout`]. Both default to off and are taken from
/// [`GeneratorConfig`] by [`Generator::from_config`].
///
/// # Examples
///
/// ```
/// use loadout_randomizer::{Catalog, Class, Generator, Slot};
///
/// let catalog = Catalog::bundled().unwrap();
/// let mut generator = Generator::with_seed(catalog, 42);
///
/// let pistol = generator.catalog().weapon_by_name("Pistol").unwrap().id;
/// generator.disable_weapons(&[pistol]).unwrap();
///
/// for _ in 0..20 {
///     let weapon = generator.randomize_weapon(Class::Engineer, Slot::Secondary, true).unwrap();
///     assert_ne!(weapon.id, pistol);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    catalog: Catalog,
    enabled: HashMap<WeaponId, bool>,
    rng: R,
    treat_reskins_as_one: bool,
    allow_sapper: bool,
}

impl Generator<StdRng> {
    /// Creates a generator seeded from OS entropy.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Creates a generator with a reproducible sequence of rolls.
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator from a runtime configuration.
    ///
    /// Weapons listed in `config.disabled` are disabled as one batch, and the
    /// config's selection flags become the generator's defaults.
    pub fn from_config(catalog: Catalog, config: &GeneratorConfig) -> LoadoutResult<Self> {
        let mut generator = Self::with_rng(catalog, utils::create_rng(config));
        generator.disable_weapons(&config.disabled)?;
        generator.treat_reskins_as_one = config.treat_reskins_as_one;
        generator.allow_sapper = config.allow_sapper;
        Ok(generator)
    }
}

impl<R> Generator<R> {
    /// Creates a generator drawing randomness from `rng`.
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        let enabled = catalog
            .weapons()
            .iter()
            .map(|weapon| (weapon.id, true))
            .collect();
        debug!(
            "Generator created over {} weapons and {} combinations",
            catalog.len(),
            catalog.combinations().len()
        );
        Self {
            catalog,
            enabled,
            rng,
            treat_reskins_as_one: false,
            allow_sapper: false,
        }
    }

    /// The catalog snapshot owned by this generator.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether default rolls collapse reskin groups.
    pub fn treat_reskins_as_one(&self) -> bool {
        self.treat_reskins_as_one
    }

    /// Whether default slot rolls may produce [`Slot::Sapper`].
    pub fn allow_sapper(&self) -> bool {
        self.allow_sapper
    }

    pub fn set_treat_reskins_as_one(&mut self, treat_reskins_as_one: bool) {
        self.treat_reskins_as_one = treat_reskins_as_one;
    }

    pub fn set_allow_sapper(&mut self, allow_sapper: bool) {
        self.allow_sapper = allow_sapper;
    }

    /// Enables every listed weapon.
    ///
    /// All ids are checked before any flag changes, so a batch containing an
    /// unknown id leaves the generator untouched.
    pub fn enable_weapons(&mut self, ids: &[WeaponId]) -> LoadoutResult<()> {
        self.set_enabled(ids, true)
    }

    /// Disables every listed weapon.
    ///
    /// All ids are checked before any flag changes, so a batch containing an
    /// unknown id leaves the generator untouched.
    pub fn disable_weapons(&mut self, ids: &[WeaponId]) -> LoadoutResult<()> {
        self.set_enabled(ids, false)
    }

    /// Re-enables every weapon.
    pub fn enable_all(&mut self) {
        self.enabled.values_mut().for_each(|flag| *flag = true);
    }

    fn set_enabled(&mut self, ids: &[WeaponId], enabled: bool) -> LoadoutResult<()> {
        if let Some(&unknown) = ids.iter().find(|id| !self.enabled.contains_key(*id)) {
            return Err(LoadoutError::UnknownItem(unknown));
        }

        let mut changed = 0;
        for id in ids {
            if let Some(flag) = self.enabled.get_mut(id) {
                if *flag != enabled {
                    *flag = enabled;
                    changed += 1;
                }
            }
        }

        debug!(
            "{} {} of {} requested weapons",
            if enabled { "Enabled" } else { "Disabled" },
            changed,
            ids.len()
        );
        Ok(())
    }

    /// Whether a weapon is currently enabled.
    pub fn is_enabled(&self, id: WeaponId) -> LoadoutResult<bool> {
        self.enabled
            .get(&id)
            .copied()
            .ok_or(LoadoutError::UnknownItem(id))
    }

    /// Every weapon regardless of enabled state, in catalog order.
    pub fn all_weapons(&self) -> Vec<&Weapon> {
        self.catalog.weapons().iter().collect()
    }

    /// Every enabled weapon.
    pub fn enabled_weapons(&self) -> Vec<&Weapon> {
        self.weapons_where(true, |_| true)
    }

    /// Every disabled weapon.
    pub fn disabled_weapons(&self) -> Vec<&Weapon> {
        self.weapons_where(false, |_| true)
    }

    /// Enabled weapons usable by `class` in any slot.
    pub fn enabled_weapons_for_class(&self, class: Class) -> Vec<&Weapon> {
        self.weapons_where(true, |weapon| weapon.usable_by(class))
    }

    /// Disabled weapons usable by `class` in any slot.
    pub fn disabled_weapons_for_class(&self, class: Class) -> Vec<&Weapon> {
        self.weapons_where(false, |weapon| weapon.usable_by(class))
    }

    /// Enabled weapons that fit `slot` for any class.
    pub fn enabled_weapons_for_slot(&self, slot: Slot) -> Vec<&Weapon> {
        self.weapons_where(true, |weapon| weapon.fits_slot(slot))
    }

    /// Disabled weapons that fit `slot` for any class.
    pub fn disabled_weapons_for_slot(&self, slot: Slot) -> Vec<&Weapon> {
        self.weapons_where(false, |weapon| weapon.fits_slot(slot))
    }

    /// Enabled weapons for one class/slot combination.
    ///
    /// Fails with [`LoadoutError::InvalidCombination`] when the pair is not a
    /// valid combination.
    pub fn enabled_weapons_for(&self, class: Class, slot: Slot) -> LoadoutResult<Vec<&Weapon>> {
        let combination = self.valid_combination(class, slot)?;
        Ok(self.weapons_where(true, |weapon| weapon.is_eligible_for(&combination)))
    }

    /// Disabled weapons for one class/slot combination.
    ///
    /// Fails with [`LoadoutError::InvalidCombination`] when the pair is not a
    /// valid combination.
    pub fn disabled_weapons_for(&self, class: Class, slot: Slot) -> LoadoutResult<Vec<&Weapon>> {
        let combination = self.valid_combination(class, slot)?;
        Ok(self.weapons_where(false, |weapon| weapon.is_eligible_for(&combination)))
    }

    fn weapons_where(&self, enabled: bool, filter: impl Fn(&Weapon) -> bool) -> Vec<&Weapon> {
        self.catalog
            .weapons()
            .iter()
            .filter(|weapon| self.enabled.get(&weapon.id).copied() == Some(enabled))
            .filter(|weapon| filter(*weapon))
            .collect()
    }

    fn valid_combination(&self, class: Class, slot: Slot) -> LoadoutResult<LoadoutCombination> {
        self.catalog
            .combination(class, slot)
            .copied()
            .ok_or(LoadoutError::InvalidCombination { class, slot })
    }
}

impl<R: Rng> Generator<R> {
    /// Picks a random enabled weapon for `class` in `slot`.
    ///
    /// With `treat_reskins_as_one`, each reskin group puts a single member
    /// into the pool, which raises the odds of rolling a mechanically unique
    /// weapon.
    ///
    /// # Errors
    ///
    /// - [`LoadoutError::InvalidCombination`] if the class cannot use the slot,
    ///   such as any class but Spy with [`Slot::Sapper`]
    /// - [`LoadoutError::EmptyPool`] if every eligible weapon is disabled
    pub fn randomize_weapon(
        &mut self,
        class: Class,
        slot: Slot,
        treat_reskins_as_one: bool,
    ) -> LoadoutResult<&Weapon> {
        let combination = self.valid_combination(class, slot)?;

        let candidates: Vec<&Weapon> = self
            .catalog
            .weapons()
            .iter()
            .filter(|weapon| weapon.is_eligible_for(&combination))
            .filter(|weapon| self.enabled.get(&weapon.id).copied().unwrap_or(false))
            .collect();
        if candidates.is_empty() {
            return Err(LoadoutError::EmptyPool { class, slot });
        }

        let pool = if treat_reskins_as_one {
            collapse_reskins(&candidates, &mut self.rng)
        } else {
            candidates
        };
        trace!("Rolling {} from a pool of {} weapons", combination, pool.len());

        pool.choose(&mut self.rng)
            .copied()
            .ok_or(LoadoutError::EmptyPool { class, slot })
    }

    /// Picks a random class.
    pub fn randomize_class(&mut self) -> Class {
        Class::random(&mut self.rng)
    }

    /// Picks a random slot, including [`Slot::Sapper`] only when `allow_sapper` is set.
    ///
    /// A random slot combined with a random class may not form a valid
    /// combination.
    pub fn randomize_slot(&mut self, allow_sapper: bool) -> Slot {
        Slot::random(&mut self.rng, allow_sapper)
    }

    /// [`Generator::randomize_weapon`] using the generator's reskin flag.
    pub fn roll_weapon(&mut self, class: Class, slot: Slot) -> LoadoutResult<&Weapon> {
        let treat_reskins_as_one = self.treat_reskins_as_one;
        self.randomize_weapon(class, slot, treat_reskins_as_one)
    }

    /// [`Generator::randomize_slot`] using the generator's sapper flag.
    pub fn roll_slot(&mut self) -> Slot {
        let allow_sapper = self.allow_sapper;
        self.randomize_slot(allow_sapper)
    }
}
