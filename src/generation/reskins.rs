//! # Reskin Collapsing
//!
//! Reduces a candidate pool so every reskin group contributes a single
//! weapon. Weapons without a group are always kept.

use crate::{ReskinGroupId, Weapon};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

enum PoolEntry<'a> {
    Unique(&'a Weapon),
    Group(Vec<&'a Weapon>),
}

/// Collapses each reskin group in `candidates` to one randomly chosen member.
///
/// The representative is drawn only from the group members present in
/// `candidates`. Groups keep the position of their first member, so the
/// reduced pool follows the candidate order.
pub fn collapse_reskins<'a, R: Rng + ?Sized>(
    candidates: &[&'a Weapon],
    rng: &mut R,
) -> Vec<&'a Weapon> {
    let mut entries: Vec<PoolEntry<'a>> = Vec::with_capacity(candidates.len());
    let mut group_positions: HashMap<ReskinGroupId, usize> = HashMap::new();

    for &weapon in candidates {
        match weapon.reskin_group {
            None => entries.push(PoolEntry::Unique(weapon)),
            Some(group) => match group_positions.get(&group) {
                Some(&position) => {
                    if let PoolEntry::Group(members) = &mut entries[position] {
                        members.push(weapon);
                    }
                }
                None => {
                    group_positions.insert(group, entries.len());
                    entries.push(PoolEntry::Group(vec![weapon]));
                }
            },
        }
    }

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            PoolEntry::Unique(weapon) => Some(weapon),
            PoolEntry::Group(members) => members.choose(&mut *rng).copied(),
        })
        .collect()
}
