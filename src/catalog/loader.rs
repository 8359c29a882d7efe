//! # Catalog Loading
//!
//! Loaders that produce a complete [`Catalog`] from a JSON document or from
//! the dataset compiled into the crate.

use crate::config::BUNDLED_CATALOG_NAME;
use crate::{Catalog, LoadoutCombination, LoadoutResult, ReskinGroup, Weapon};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_CATALOG: &str = include_str!("../../data/tf2_weapons.json");

/// On-disk layout of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub reskin_groups: Vec<ReskinGroup>,
    pub combinations: Vec<LoadoutCombination>,
    pub weapons: Vec<Weapon>,
}

impl CatalogFile {
    /// Parses a catalog document.
    pub fn from_json(json: &str) -> LoadoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the document and turns it into a [`Catalog`].
    pub fn into_catalog(self) -> LoadoutResult<Catalog> {
        Catalog::new(self.combinations, self.reskin_groups, self.weapons)
    }
}

/// Source of catalog data.
///
/// Loading happens once, before a [`Generator`](crate::Generator) is built.
pub trait CatalogLoader {
    /// Produces a complete, validated catalog.
    fn load(&self) -> LoadoutResult<Catalog>;

    /// Gets the loader type name for logging and debugging.
    fn loader_type(&self) -> &'static str;
}

/// Loads the Team Fortress 2 dataset bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalogLoader;

impl CatalogLoader for BundledCatalogLoader {
    fn load(&self) -> LoadoutResult<Catalog> {
        let catalog = CatalogFile::from_json(BUNDLED_CATALOG)?.into_catalog()?;
        info!(
            "Loaded bundled catalog {} with {} weapons",
            BUNDLED_CATALOG_NAME,
            catalog.len()
        );
        Ok(catalog)
    }

    fn loader_type(&self) -> &'static str {
        "BundledCatalogLoader"
    }
}

/// Loads a catalog from a JSON document.
#[derive(Debug, Clone)]
pub enum JsonCatalogLoader {
    /// Document stored on disk
    File(PathBuf),
    /// Document already held in memory
    Inline(String),
}

impl JsonCatalogLoader {
    /// Reads the catalog from `path` when loaded.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Parses the catalog from `json` when loaded.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }
}

impl CatalogLoader for JsonCatalogLoader {
    fn load(&self) -> LoadoutResult<Catalog> {
        let catalog = match self {
            Self::File(path) => {
                let json = fs::read_to_string(path)?;
                let catalog = CatalogFile::from_json(&json)?.into_catalog()?;
                info!(
                    "Loaded catalog {} with {} weapons",
                    path.display(),
                    catalog.len()
                );
                catalog
            }
            Self::Inline(json) => CatalogFile::from_json(json)?.into_catalog()?,
        };
        Ok(catalog)
    }

    fn loader_type(&self) -> &'static str {
        "JsonCatalogLoader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, LoadoutError, ReskinGroupId, Slot, WeaponId};
    use std::io::Write;

    const SMALL_CATALOG: &str = r#"{
        "reskin_groups": [{ "id": 1, "name": "StockPistolReskins" }],
        "combinations": [
            { "class": "scout", "slot": "secondary" },
            { "class": "engineer", "slot": "secondary" }
        ],
        "weapons": [
            {
                "id": 1,
                "name": "Pistol",
                "image": "pistol",
                "stock": true,
                "reskin_group": 1,
                "combinations": [
                    { "class": "scout", "slot": "secondary" },
                    { "class": "engineer", "slot": "secondary" }
                ]
            },
            {
                "id": 2,
                "name": "Winger",
                "combinations": [{ "class": "scout", "slot": "secondary" }]
            }
        ]
    }"#;

    #[test]
    fn test_inline_json_loading() {
        let catalog = JsonCatalogLoader::from_json(SMALL_CATALOG).load().unwrap();
        assert_eq!(catalog.len(), 2);

        let pistol = catalog.weapon(WeaponId(1)).unwrap();
        assert!(pistol.stock);
        assert_eq!(pistol.reskin_group, Some(ReskinGroupId(1)));
        assert!(pistol.is_eligible_for_pair(Class::Engineer, Slot::Secondary));
    }

    #[test]
    fn test_file_loading() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();

        let loader = JsonCatalogLoader::from_path(file.path());
        let catalog = loader.load().unwrap();
        assert_eq!(catalog.weapon_by_name("winger").unwrap().id, WeaponId(2));
        assert_eq!(loader.loader_type(), "JsonCatalogLoader");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonCatalogLoader::from_path(dir.path().join("missing.json"));
        assert!(matches!(loader.load(), Err(LoadoutError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        let loader = JsonCatalogLoader::from_json("{ \"weapons\": [");
        assert!(matches!(loader.load(), Err(LoadoutError::Serde(_))));
    }

    #[test]
    fn test_unknown_class_name_is_rejected() {
        let json = r#"{
            "combinations": [{ "class": "civilian", "slot": "melee" }],
            "weapons": []
        }"#;
        assert!(matches!(
            JsonCatalogLoader::from_json(json).load(),
            Err(LoadoutError::Serde(_))
        ));
    }

    #[test]
    fn test_sapper_for_non_spy_is_rejected() {
        let json = r#"{
            "combinations": [{ "class": "pyro", "slot": "sapper" }],
            "weapons": []
        }"#;
        assert!(matches!(
            JsonCatalogLoader::from_json(json).load(),
            Err(LoadoutError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_bundled_catalog_shape() {
        let catalog = BundledCatalogLoader.load().unwrap();
        assert_eq!(catalog.len(), 200);
        assert_eq!(catalog.combinations().len(), 28);
        assert_eq!(catalog.reskin_groups().len(), 28);
        assert_eq!(
            catalog.combinations(),
            LoadoutCombination::all_well_formed().as_slice()
        );
    }
}
