//! Distribution tests for reskin collapsing.

use loadout_randomizer::{
    Catalog, Class, Generator, LoadoutCombination, LoadoutResult, ReskinGroup, ReskinGroupId, Slot,
    Weapon, WeaponId,
};
use std::collections::HashMap;

const ROLLS: usize = 6000;

/// Soldier primary holds A (unique) plus B and C from the same reskin group.
fn grouped_catalog() -> LoadoutResult<Catalog> {
    let primary = LoadoutCombination::new(Class::Soldier, Slot::Primary)?;
    let melee = LoadoutCombination::new(Class::Soldier, Slot::Melee)?;
    let group = ReskinGroupId(1);

    Catalog::new(
        vec![primary, melee],
        vec![ReskinGroup::new(group, "LauncherReskins")],
        vec![
            Weapon::new(WeaponId(1), "A", vec![primary]),
            Weapon::new(WeaponId(2), "B", vec![primary])
                .as_stock()
                .in_group(group),
            Weapon::new(WeaponId(3), "C", vec![primary]).in_group(group),
            Weapon::new(WeaponId(4), "Shovel", vec![melee]).as_stock(),
        ],
    )
}

fn roll_counts(
    generator: &mut Generator,
    treat_reskins_as_one: bool,
) -> LoadoutResult<HashMap<u32, usize>> {
    let mut counts = HashMap::new();
    for _ in 0..ROLLS {
        let weapon =
            generator.randomize_weapon(Class::Soldier, Slot::Primary, treat_reskins_as_one)?;
        *counts.entry(weapon.id.0).or_insert(0) += 1;
    }
    Ok(counts)
}

fn share(counts: &HashMap<u32, usize>, id: u32) -> f64 {
    counts.get(&id).copied().unwrap_or(0) as f64 / ROLLS as f64
}

#[test]
fn test_collapsed_group_counts_once() -> LoadoutResult<()> {
    let mut generator = Generator::with_seed(grouped_catalog()?, 42);
    let counts = roll_counts(&mut generator, true)?;

    let unique = share(&counts, 1);
    let group = share(&counts, 2) + share(&counts, 3);
    assert!((unique - 0.5).abs() < 0.05, "unique share was {}", unique);
    assert!((group - 0.5).abs() < 0.05, "group share was {}", group);

    // Both members still show up as the group's representative
    assert!(share(&counts, 2) > 0.15);
    assert!(share(&counts, 3) > 0.15);
    Ok(())
}

#[test]
fn test_uncollapsed_pool_is_uniform() -> LoadoutResult<()> {
    let mut generator = Generator::with_seed(grouped_catalog()?, 42);
    let counts = roll_counts(&mut generator, false)?;

    for id in 1..=3 {
        let observed = share(&counts, id);
        assert!(
            (observed - 1.0 / 3.0).abs() < 0.05,
            "weapon {} share was {}",
            id,
            observed
        );
    }
    Ok(())
}

#[test]
fn test_disabled_group_member_is_never_representative() -> LoadoutResult<()> {
    let mut generator = Generator::with_seed(grouped_catalog()?, 7);
    generator.disable_weapons(&[WeaponId(3)])?;

    let counts = roll_counts(&mut generator, true)?;
    assert_eq!(counts.get(&3), None);
    assert!((share(&counts, 1) - 0.5).abs() < 0.05);
    assert!((share(&counts, 2) - 0.5).abs() < 0.05);
    Ok(())
}

#[test]
fn test_single_weapon_pool_is_deterministic() -> LoadoutResult<()> {
    let mut generator = Generator::with_seed(grouped_catalog()?, 99);

    for treat_reskins_as_one in [false, true] {
        for _ in 0..50 {
            let weapon =
                generator.randomize_weapon(Class::Soldier, Slot::Melee, treat_reskins_as_one)?;
            assert_eq!(weapon.name, "Shovel");
        }
    }
    Ok(())
}

#[test]
fn test_same_seed_same_rolls() -> LoadoutResult<()> {
    let mut first = Generator::with_seed(Catalog::bundled()?, 2024);
    let mut second = Generator::with_seed(Catalog::bundled()?, 2024);

    for _ in 0..100 {
        let class = first.randomize_class();
        assert_eq!(class, second.randomize_class());
        let slot = first.randomize_slot(true);
        assert_eq!(slot, second.randomize_slot(true));
        if !class.uses_sapper() && slot == Slot::Sapper {
            continue;
        }
        let a = first.randomize_weapon(class, slot, true)?.id;
        let b = second.randomize_weapon(class, slot, true)?.id;
        assert_eq!(a, b);
    }
    Ok(())
}
