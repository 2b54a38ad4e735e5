use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::consts::SELL_PRICE_TIERS;

/// Listing-page stub for a weapon, pending detail extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStub {
    pub name: String,
    pub page_url: String,
    pub image_url: String,
    pub image_file_name: String,
}

/// Listing-page stub for a loot item. The loot listing already carries the
/// category and rarity columns, so they ride along with the stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootStub {
    pub name: String,
    pub page_url: String,
    pub category: String,
    pub rarity: String,
}

/// Raw weapon infobox fields, as text. Absent rows leave their field empty;
/// the normalizer owns all further coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeaponDetail {
    pub ammo: String,
    pub weapon_type: String,
    pub rarity: String,
    pub weight: f64,
    pub damage: String,
    pub fire_rate: String,
    pub headshot_multiplier: String,
    pub range: String,
    pub stability: String,
    pub agility: String,
    pub stealth: String,
    pub arc_armor_pen: String,
    pub special_trait: String,
    pub magazine_size: String,
    pub firing_mode: String,
    pub sell_prices: [u32; SELL_PRICE_TIERS],
}

/// Raw loot infobox fields. Fields the infobox omits keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLootDetail {
    pub weight: f64,
    pub stack_size: u32,
    pub value: u32,
    pub can_be_found_in: Vec<String>,
    pub compatible_with: Vec<String>,
    pub mod_icon_url: Option<String>,
    pub image_url: String,
    pub description: String,
}

impl Default for RawLootDetail {
    fn default() -> Self {
        Self {
            weight: 0.5,
            stack_size: 1,
            value: 0,
            can_be_found_in: Vec::new(),
            compatible_with: Vec::new(),
            mod_icon_url: None,
            image_url: String::new(),
            description: String::new(),
        }
    }
}

/// Dataset bucket a loot item lands in. Unrecognized source categories fall
/// back to `Consumables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Consumables,
    CraftingMaterials,
    Gear,
    Ammo,
    Mods,
}

impl ItemType {
    /// Emission order of the dataset buckets.
    pub const ALL: [ItemType; 5] = [
        ItemType::Consumables,
        ItemType::CraftingMaterials,
        ItemType::Gear,
        ItemType::Ammo,
        ItemType::Mods,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Consumables => "Consumables",
            ItemType::CraftingMaterials => "Crafting Materials",
            ItemType::Gear => "Gear",
            ItemType::Ammo => "Ammo",
            ItemType::Mods => "Mods",
        }
    }

    /// Variable name of the exported array literal for this bucket.
    pub fn var_name(&self) -> &'static str {
        match self {
            ItemType::Consumables => "consumables",
            ItemType::CraftingMaterials => "crafting_materials",
            ItemType::Gear => "gear",
            ItemType::Ammo => "ammo",
            ItemType::Mods => "mods",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized weapon record, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub class: String,
    pub rarity: String,
    /// Sell price per upgrade tier, zero-padded to exactly four entries.
    pub value: [u32; SELL_PRICE_TIERS],
    pub weight: f64,
    pub damage: f64,
    pub fire_rate: f64,
    pub firing_mode: String,
    pub range: Option<String>,
    pub magazine: u32,
    pub ammo: String,
    pub dps: u32,
    pub image_url: String,
    pub description: String,
}

/// Normalized loot record, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootItem {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    pub category: String,
    pub mod_category: Option<String>,
    pub rarity: Rarity,
    pub weight: f64,
    pub stack_size: u32,
    pub value: u32,
    pub can_be_found_in: Vec<String>,
    pub compatible_with: Option<Vec<String>>,
    pub image_url: String,
    pub page_url: String,
    pub description: String,
}

/// End-of-run tallies, computed from the accumulated records only after the
/// whole batch has been processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub attempted: usize,
    pub scraped: usize,
    pub failed: usize,
    /// Ids produced by more than one record. A collision is a data-quality
    /// defect in the source data; colliding records are all kept.
    pub duplicate_ids: Vec<String>,
    pub by_type: BTreeMap<String, usize>,
    pub by_rarity: BTreeMap<String, usize>,
    pub by_mod_category: BTreeMap<String, usize>,
}
