//! Raw record → typed dataset record mapping.
//!
//! Pure functions over the extractor output. All coercion is best-effort:
//! unparseable numbers fall back to defaults, unrecognized categories land
//! in a catch-all bucket. Nothing in here touches the network or mutates
//! its inputs.

use crate::text::{file_name, first_decimal, first_uint, slugify};
use crate::types::{ItemType, LootItem, LootStub, Rarity, RawLootDetail, RawWeaponDetail, Weapon, WeaponStub};

/// Source category → dataset bucket. Categories outside the table fall back
/// to `Consumables`.
pub const CATEGORY_TYPES: &[(&str, ItemType)] = &[
    ("Quick Use", ItemType::Consumables),
    ("Nature", ItemType::CraftingMaterials),
    ("Basic Material", ItemType::CraftingMaterials),
    ("Topside Material", ItemType::CraftingMaterials),
    ("Refined Material", ItemType::CraftingMaterials),
    ("Recyclable", ItemType::CraftingMaterials),
    ("Trinket", ItemType::Gear),
    ("Key", ItemType::Gear),
    ("Mods", ItemType::Mods),
    ("Augment", ItemType::Gear),
    ("Shield", ItemType::Gear),
    ("Ammunition", ItemType::Ammo),
    ("Misc", ItemType::Consumables),
];

/// Mod icon filename → mod sub-category. Ordered; the first filename
/// substring match wins.
pub const MOD_ICON_CATEGORIES: &[(&str, &str)] = &[
    ("Mods_Muzzle.png", "Muzzle"),
    ("Mods_Shotgun-Muzzle.png", "Shotgun Muzzle"),
    ("Mods_Tech-Mod.png", "Tech Mod"),
    ("Mods_Light-Mag.png", "Light Magazine"),
    ("Mods_Medium-Mag.png", "Medium Magazine"),
    ("Mods_Shotgun-Mag.png", "Shotgun Magazine"),
    ("Mods_Underbarrel.png", "Underbarrel"),
    ("Mods_Stock.png", "Stock"),
    ("Mods_Barrel.png", "Barrel"),
];

pub fn item_type_for(category: &str) -> ItemType {
    CATEGORY_TYPES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, ty)| *ty)
        .unwrap_or(ItemType::Consumables)
}

pub fn rarity_for(text: &str) -> Rarity {
    match text {
        "Uncommon" => Rarity::Uncommon,
        "Rare" => Rarity::Rare,
        "Epic" => Rarity::Epic,
        "Legendary" => Rarity::Legendary,
        _ => Rarity::Common,
    }
}

/// Resolve a mod sub-category from its icon URL; `None` when the icon is
/// unrecognized.
pub fn mod_category_for_icon(icon_url: &str) -> Option<String> {
    let icon_file = file_name(icon_url);
    MOD_ICON_CATEGORIES
        .iter()
        .find(|(key, _)| icon_file.contains(key.trim_end_matches(".png")))
        .map(|(_, category)| category.to_string())
}

/// Build the final weapon record from its stub and raw infobox fields.
pub fn weapon(stub: &WeaponStub, raw: &RawWeaponDetail) -> Weapon {
    let damage = first_decimal(&raw.damage).unwrap_or(0.0);
    let fire_rate = first_decimal(&raw.fire_rate).unwrap_or(0.0);
    let dps = (damage * fire_rate).round() as u32;
    let magazine = first_uint(&raw.magazine_size).unwrap_or(0);

    let description = if raw.special_trait.is_empty() {
        format!("{} • Uses {}", raw.weapon_type, raw.ammo)
    } else {
        format!("{} • {}", raw.weapon_type, raw.special_trait)
    };

    Weapon {
        id: format!("weapon_{}", slugify(&stub.name)),
        name: stub.name.clone(),
        class: raw.weapon_type.clone(),
        rarity: raw.rarity.clone(),
        value: raw.sell_prices,
        weight: raw.weight,
        damage,
        fire_rate,
        firing_mode: raw.firing_mode.clone(),
        range: (!raw.range.is_empty()).then(|| raw.range.clone()),
        magazine,
        ammo: raw.ammo.clone(),
        dps,
        image_url: stub.image_url.clone(),
        description,
    }
}

/// Build the final loot record from its stub and raw infobox fields.
pub fn loot(stub: &LootStub, raw: &RawLootDetail) -> LootItem {
    let item_type = item_type_for(&stub.category);

    let mod_category = if item_type == ItemType::Mods {
        raw.mod_icon_url.as_deref().and_then(mod_category_for_icon)
    } else {
        None
    };

    LootItem {
        id: format!("item_{}", slugify(&stub.name)),
        name: stub.name.clone(),
        item_type,
        category: stub.category.clone(),
        mod_category,
        rarity: rarity_for(&stub.rarity),
        weight: raw.weight,
        stack_size: raw.stack_size,
        value: raw.value,
        can_be_found_in: raw.can_be_found_in.clone(),
        compatible_with: (!raw.compatible_with.is_empty()).then(|| raw.compatible_with.clone()),
        image_url: raw.image_url.clone(),
        page_url: stub.page_url.clone(),
        description: raw.description.clone(),
    }
}
