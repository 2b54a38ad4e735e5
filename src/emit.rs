//! Dataset emission.
//!
//! The scrape results replace hand-authored TypeScript datasets, so the
//! emitters build the same array literals those files carried: fixed field
//! order, optional fields omitted rather than set to null (except `range`,
//! which the weapons dataset has always carried as nullable). Output is
//! deterministic string building; the file is overwritten wholesale.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::types::{ItemType, LootItem, Weapon};

/// Escape a string for a double-quoted TS literal; newlines flatten to
/// spaces.
fn esc(s: &str) -> String {
    s.replace('"', "\\\"").replace('\n', " ")
}

fn banner(title: &str) -> String {
    format!(
        "// ============================================================================\n\
         // {title}\n\
         // ============================================================================\n\n"
    )
}

/// Render the weapons dataset: a single exported array literal.
pub fn weapons_source(weapons: &[Weapon]) -> String {
    let mut out = banner("WEAPONS DATA - ARC Raiders Wiki");
    out.push_str("export const weapons = [\n");

    for (idx, w) in weapons.iter().enumerate() {
        let comma = if idx + 1 < weapons.len() { "," } else { "" };
        let prices = w
            .value
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let range = match &w.range {
            Some(r) => format!("\"{}\"", esc(r)),
            None => "null".to_string(),
        };

        out.push_str("  {\n");
        let _ = writeln!(out, "    id: \"{}\",", esc(&w.id));
        let _ = writeln!(out, "    name: \"{}\",", esc(&w.name));
        let _ = writeln!(out, "    type: \"Weapons\",");
        let _ = writeln!(out, "    class: \"{}\",", esc(&w.class));
        let _ = writeln!(out, "    rarity: \"{}\",", esc(&w.rarity));
        let _ = writeln!(out, "    value: [{prices}],");
        let _ = writeln!(out, "    weight: {},", w.weight);
        let _ = writeln!(out, "    damage: {},", w.damage);
        let _ = writeln!(out, "    fireRate: {},", w.fire_rate);
        let _ = writeln!(out, "    firingMode: \"{}\",", esc(&w.firing_mode));
        let _ = writeln!(out, "    range: {range},");
        let _ = writeln!(out, "    magazine: {},", w.magazine);
        let _ = writeln!(out, "    ammo: \"{}\",", esc(&w.ammo));
        let _ = writeln!(out, "    dps: {},", w.dps);
        let _ = writeln!(out, "    mods: \"Unknown\",");
        let _ = writeln!(out, "    imageUrl: \"{}\",", esc(&w.image_url));
        let _ = writeln!(out, "    description: \"{}\"", esc(&w.description));
        let _ = writeln!(out, "  }}{comma}");
    }

    out.push_str("];\n");
    out
}

/// Render the items dataset: one exported array per non-empty bucket, in
/// fixed bucket order.
pub fn loot_source(items: &[LootItem]) -> String {
    let mut out = banner("ITEMS DATA - ARC Raiders Wiki");

    for bucket in ItemType::ALL {
        let bucket_items: Vec<&LootItem> =
            items.iter().filter(|i| i.item_type == bucket).collect();
        if bucket_items.is_empty() {
            continue;
        }

        let _ = writeln!(
            out,
            "// {} ({} items)",
            bucket.label().to_uppercase(),
            bucket_items.len()
        );
        let _ = writeln!(out, "export const {} = [", bucket.var_name());

        for (idx, item) in bucket_items.iter().enumerate() {
            let comma = if idx + 1 < bucket_items.len() { "," } else { "" };

            out.push_str("  {\n");
            let _ = writeln!(out, "    id: \"{}\",", esc(&item.id));
            let _ = writeln!(out, "    name: \"{}\",", esc(&item.name));
            let _ = writeln!(out, "    type: \"{}\",", item.item_type.label());
            if let Some(mod_category) = &item.mod_category {
                let _ = writeln!(out, "    modCategory: \"{}\",", esc(mod_category));
            }
            let _ = writeln!(out, "    rarity: \"{}\",", item.rarity.label());
            let _ = writeln!(out, "    value: {},", item.value);
            let _ = writeln!(out, "    weight: {},", item.weight);
            let _ = writeln!(out, "    stackSize: {},", item.stack_size);
            if let Some(compatible) = &item.compatible_with {
                if !compatible.is_empty() {
                    let list = compatible
                        .iter()
                        .map(|w| format!("\"{}\"", esc(w)))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let _ = writeln!(out, "    compatibleWith: [{list}],");
                }
            }
            if !item.can_be_found_in.is_empty() {
                let list = item
                    .can_be_found_in
                    .iter()
                    .map(|l| format!("\"{}\"", esc(l)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "    canBeFoundIn: [{list}],");
            }
            let _ = writeln!(out, "    imageUrl: \"{}\",", esc(&item.image_url));
            let _ = writeln!(out, "    description: \"{}\"", esc(&item.description));
            let _ = writeln!(out, "  }}{comma}");
        }

        out.push_str("];\n\n");
    }

    out
}

/// Write a generated dataset, replacing any previous file at `path`.
pub fn write_dataset(path: &Path, source: &str) -> Result<()> {
    fs::write(path, source).map_err(|e| ScrapeError::WriteDataset {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    fn ferro() -> Weapon {
        Weapon {
            id: "weapon_ferro".to_string(),
            name: "Ferro".to_string(),
            class: "Assault Rifle".to_string(),
            rarity: "Uncommon".to_string(),
            value: [1000, 2500, 0, 0],
            weight: 3.2,
            damage: 45.5,
            fire_rate: 6.2,
            firing_mode: "Full-Auto".to_string(),
            range: None,
            magazine: 30,
            ammo: "Medium Ammo".to_string(),
            dps: 282,
            image_url: "https://arcraiders.wiki/images/Ferro.png".to_string(),
            description: "Assault Rifle • Uses Medium Ammo".to_string(),
        }
    }

    fn wires() -> LootItem {
        LootItem {
            id: "item_wires".to_string(),
            name: "Wires".to_string(),
            item_type: ItemType::CraftingMaterials,
            category: "Basic Material".to_string(),
            mod_category: None,
            rarity: Rarity::Common,
            weight: 0.5,
            stack_size: 10,
            value: 40,
            can_be_found_in: vec!["Industrial Containers".to_string()],
            compatible_with: None,
            image_url: "https://arcraiders.wiki/images/Wires.png".to_string(),
            page_url: "https://arcraiders.wiki/wiki/Wires".to_string(),
            description: "A bundle of \"scavenged\" wires.".to_string(),
        }
    }

    fn compensator() -> LootItem {
        LootItem {
            id: "item_compensator".to_string(),
            name: "Compensator".to_string(),
            item_type: ItemType::Mods,
            category: "Mods".to_string(),
            mod_category: Some("Muzzle".to_string()),
            rarity: Rarity::Rare,
            weight: 0.8,
            stack_size: 1,
            value: 1250,
            can_be_found_in: Vec::new(),
            compatible_with: Some(vec!["Ferro".to_string(), "Anvil".to_string()]),
            image_url: String::new(),
            page_url: "https://arcraiders.wiki/wiki/Compensator".to_string(),
            description: "Reduces recoil.".to_string(),
        }
    }

    #[test]
    fn weapons_emit_one_exported_array() {
        let src = weapons_source(&[ferro()]);
        assert!(src.starts_with("// ="));
        assert!(src.contains("export const weapons = [\n"));
        assert!(src.trim_end().ends_with("];"));
    }

    #[test]
    fn weapon_fields_emit_in_fixed_order() {
        let src = weapons_source(&[ferro()]);
        let fields = [
            "id:", "name:", "type:", "class:", "rarity:", "value:", "weight:", "damage:",
            "fireRate:", "firingMode:", "range:", "magazine:", "ammo:", "dps:", "mods:",
            "imageUrl:", "description:",
        ];
        let mut last = 0;
        for field in fields {
            let pos = src[last..].find(field).map(|p| p + last);
            let pos = pos.unwrap_or_else(|| panic!("missing field {field}"));
            assert!(pos >= last, "field {field} out of order");
            last = pos;
        }
        assert!(src.contains("value: [1000, 2500, 0, 0],"));
        assert!(src.contains("range: null,"));
        assert!(src.contains("dps: 282,"));
        assert!(src.contains("mods: \"Unknown\","));
    }

    #[test]
    fn weapon_entries_are_comma_separated() {
        let mut second = ferro();
        second.id = "weapon_anvil".to_string();
        second.name = "Anvil".to_string();
        second.range = Some("Short".to_string());
        let src = weapons_source(&[ferro(), second]);

        assert!(src.contains("  },\n"));
        assert!(src.contains("range: \"Short\","));
        // Last entry carries no trailing comma.
        assert!(src.contains("  }\n];"));
    }

    #[test]
    fn loot_groups_into_named_buckets() {
        let src = loot_source(&[wires(), compensator()]);
        assert!(src.contains("// CRAFTING MATERIALS (1 items)"));
        assert!(src.contains("export const crafting_materials = ["));
        assert!(src.contains("// MODS (1 items)"));
        assert!(src.contains("export const mods = ["));
        // No items in these buckets, so no arrays for them.
        assert!(!src.contains("export const consumables"));
        assert!(!src.contains("export const gear"));
        assert!(!src.contains("export const ammo"));
    }

    #[test]
    fn optional_loot_fields_are_omitted_when_absent() {
        let src = loot_source(&[wires()]);
        assert!(!src.contains("modCategory:"));
        assert!(!src.contains("compatibleWith:"));
        assert!(src.contains("canBeFoundIn: [\"Industrial Containers\"],"));
    }

    #[test]
    fn optional_loot_fields_emit_when_present() {
        let src = loot_source(&[compensator()]);
        assert!(src.contains("modCategory: \"Muzzle\","));
        assert!(src.contains("compatibleWith: [\"Ferro\", \"Anvil\"],"));
        assert!(!src.contains("canBeFoundIn:"));
    }

    #[test]
    fn quotes_are_escaped_in_string_fields() {
        let src = loot_source(&[wires()]);
        assert!(src.contains(r#"description: "A bundle of \"scavenged\" wires.""#));
    }

    #[test]
    fn emission_is_deterministic() {
        let items = [wires(), compensator()];
        assert_eq!(loot_source(&items), loot_source(&items));
    }
}
