//! Batch driver.
//!
//! Sequences listing extraction, then one detail navigation + normalization
//! per stub, strictly in listing order with a fixed pause after every item.
//! A failing item is logged and skipped; only a failure before the batch
//! starts (listing fetch/extract) or a failure to write the dataset aborts
//! the run. Summary tallies are computed from the accumulated records once
//! the whole batch is done.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::consts::{DETAIL_TIMEOUT_MS, ITEM_DELAY_MS, LOOT_LIST_URL, WEAPONS_LIST_URL};
use crate::emit;
use crate::error::Result;
use crate::extract;
use crate::fetch::{Fetcher, Navigator};
use crate::log::{log_error, log_info};
use crate::normalize;
use crate::selectors::{INFOBOX_CSS, LOOT_TABLE_CSS, WEAPON_TABLE_CSS};
use crate::types::{LootItem, LootStub, RunSummary, Weapon, WeaponStub};

pub struct RunConfig {
    /// Path of the generated dataset.
    pub out: PathBuf,
    /// Pause after every item page, regardless of outcome.
    pub delay: Duration,
    /// Process only the first N stubs.
    pub limit: Option<usize>,
    /// Also write the normalized records as JSON next to the dataset.
    pub json: bool,
}

impl RunConfig {
    pub fn new(out: PathBuf) -> Self {
        Self {
            out,
            delay: Duration::from_millis(ITEM_DELAY_MS),
            limit: None,
            json: false,
        }
    }
}

/// Scrape the weapon listing and every weapon detail page, then emit the
/// weapons dataset.
pub fn run_weapons(fetcher: &dyn Fetcher, cfg: &RunConfig) -> Result<RunSummary> {
    let nav = Navigator::new(fetcher);
    log_info(None, "weapons_run", Some("started"));

    println!("📄 Fetching the weapon listing...");
    let listing = nav.goto(WEAPONS_LIST_URL, WEAPON_TABLE_CSS, None)?;
    let mut stubs = extract::weapons::stubs(&listing);
    if let Some(limit) = cfg.limit {
        stubs.truncate(limit);
    }
    println!("✅ {} weapons found\n", stubs.len());

    let total = stubs.len();
    let mut weapons: Vec<Weapon> = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (i, stub) in stubs.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, total, stub.name);

        match scrape_weapon(&nav, stub) {
            Ok(weapon) => {
                let prices = weapon
                    .value
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "  ✅ {} | Weight: {}kg | Prices: [{}]",
                    weapon.rarity, weapon.weight, prices
                );
                weapons.push(weapon);
            }
            Err(e) => {
                failed += 1;
                eprintln!("  ❌ {e}");
                log_error(Some(&stub.name), "weapon_detail", Some(&e.to_string()));
            }
        }

        thread::sleep(cfg.delay);
    }

    let mut summary = RunSummary {
        attempted: total,
        scraped: weapons.len(),
        failed,
        duplicate_ids: duplicate_ids(weapons.iter().map(|w| w.id.as_str())),
        ..Default::default()
    };
    for w in &weapons {
        *summary.by_type.entry(w.class.clone()).or_default() += 1;
        *summary.by_rarity.entry(w.rarity.clone()).or_default() += 1;
    }

    emit::write_dataset(&cfg.out, &emit::weapons_source(&weapons))?;
    if cfg.json {
        let json_path = cfg.out.with_extension("json");
        emit::write_dataset(&json_path, &serde_json::to_string_pretty(&weapons)?)?;
    }

    println!("\n✅ {} weapons saved to {}", weapons.len(), cfg.out.display());
    log_info(
        None,
        "weapons_run",
        Some(&format!("{} scraped, {} failed", weapons.len(), failed)),
    );
    Ok(summary)
}

fn scrape_weapon(nav: &Navigator<'_>, stub: &WeaponStub) -> Result<Weapon> {
    let doc = nav.goto(
        &stub.page_url,
        INFOBOX_CSS,
        Some(Duration::from_millis(DETAIL_TIMEOUT_MS)),
    )?;
    let raw = extract::weapons::detail(&stub.page_url, &doc)?;
    Ok(normalize::weapon(stub, &raw))
}

/// Scrape the loot listing and every item detail page, then emit the items
/// dataset.
pub fn run_loot(fetcher: &dyn Fetcher, cfg: &RunConfig) -> Result<RunSummary> {
    let nav = Navigator::new(fetcher);
    log_info(None, "loot_run", Some("started"));

    println!("📄 Fetching the loot listing...");
    let listing = nav.goto(LOOT_LIST_URL, LOOT_TABLE_CSS, None)?;
    let mut stubs = extract::loot::stubs(&listing);
    if let Some(limit) = cfg.limit {
        stubs.truncate(limit);
    }
    println!("✅ {} items found\n", stubs.len());

    let total = stubs.len();
    let mut items: Vec<LootItem> = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (i, stub) in stubs.iter().enumerate() {
        println!(
            "[{}/{}] {} ({}) - {}",
            i + 1,
            total,
            stub.name,
            stub.category,
            stub.rarity
        );

        match scrape_loot_item(&nav, stub) {
            Ok(item) => {
                let mut line = format!(
                    "  ✅ {} | {}kg | {}¢",
                    item.rarity, item.weight, item.value
                );
                if let Some(mod_category) = &item.mod_category {
                    line.push_str(&format!(" | {mod_category}"));
                }
                if let Some(compatible) = &item.compatible_with {
                    line.push_str(&format!(" | Compatible: {} weapons", compatible.len()));
                }
                println!("{line}");
                items.push(item);
            }
            Err(e) => {
                failed += 1;
                eprintln!("  ❌ {e}");
                log_error(Some(&stub.name), "loot_detail", Some(&e.to_string()));
            }
        }

        thread::sleep(cfg.delay);
    }

    let mut summary = RunSummary {
        attempted: total,
        scraped: items.len(),
        failed,
        duplicate_ids: duplicate_ids(items.iter().map(|i| i.id.as_str())),
        ..Default::default()
    };
    for item in &items {
        *summary
            .by_type
            .entry(item.item_type.label().to_string())
            .or_default() += 1;
        *summary
            .by_rarity
            .entry(item.rarity.label().to_string())
            .or_default() += 1;
        if item.item_type == crate::types::ItemType::Mods {
            let category = item.mod_category.clone().unwrap_or_else(|| "Unknown".to_string());
            *summary.by_mod_category.entry(category).or_default() += 1;
        }
    }

    emit::write_dataset(&cfg.out, &emit::loot_source(&items))?;
    if cfg.json {
        let json_path = cfg.out.with_extension("json");
        emit::write_dataset(&json_path, &serde_json::to_string_pretty(&items)?)?;
    }

    println!("\n✅ {} items saved to {}", items.len(), cfg.out.display());
    log_info(
        None,
        "loot_run",
        Some(&format!("{} scraped, {} failed", items.len(), failed)),
    );
    Ok(summary)
}

fn scrape_loot_item(nav: &Navigator<'_>, stub: &LootStub) -> Result<LootItem> {
    let doc = nav.goto(
        &stub.page_url,
        INFOBOX_CSS,
        Some(Duration::from_millis(DETAIL_TIMEOUT_MS)),
    )?;
    let raw = extract::loot::detail(&stub.page_url, &doc)?;
    Ok(normalize::loot(stub, &raw))
}

/// Ids produced by more than one record. Collisions are a data-quality
/// defect in the source; the records themselves are all kept.
fn duplicate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Print the end-of-run tallies.
pub fn print_summary(summary: &RunSummary) {
    println!("\n📊 Total: {} scraped, {} failed", summary.scraped, summary.failed);

    if !summary.by_type.is_empty() {
        println!("\n📊 By type:");
        for (ty, count) in &summary.by_type {
            println!("  - {ty}: {count}");
        }
    }

    if !summary.by_rarity.is_empty() {
        println!("\n💎 By rarity:");
        for (rarity, count) in &summary.by_rarity {
            println!("  - {rarity}: {count}");
        }
    }

    if !summary.by_mod_category.is_empty() {
        println!("\n🔧 Mods by category:");
        for (category, count) in &summary.by_mod_category {
            println!("  - {category}: {count}");
        }
    }

    if !summary.duplicate_ids.is_empty() {
        println!("\n⚠️  Duplicate ids (data-quality defect in the source):");
        for id in &summary.duplicate_ids {
            println!("  - {id}");
        }
    }
}
