//! Loot listing + infobox extraction.

use scraper::Html;

use crate::consts::DESCRIPTION_MAX_CHARS;
use crate::error::{Result, ScrapeError};
use crate::extract::{element_text, link_name};
use crate::selectors::*;
use crate::text::{absolute, collapse_ws, first_decimal, first_uint, srcset_2x, truncate_chars};
use crate::types::{LootStub, RawLootDetail};

/// Walk every loot table on the listing page. The loot listing addresses its
/// cells by field class and already carries category and rarity columns;
/// both ride along with the stub. Rows without an item/category cell or a
/// resolvable anchor are skipped silently.
pub fn stubs(doc: &Html) -> Vec<LootStub> {
    let mut out = Vec::new();

    for table in doc.select(&LOOT_TABLE) {
        for row in table.select(&TABLE_ROW) {
            let Some(item_td) = row.select(&ITEM_CELL).next() else {
                continue;
            };
            let Some(category_td) = row.select(&CATEGORY_CELL).next() else {
                continue;
            };

            let Some(link) = item_td.select(&ANCHOR).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let name = link_name(&link);
            if href.is_empty() || name.is_empty() {
                continue;
            }

            let category = {
                let text = element_text(&category_td);
                if text.is_empty() {
                    "Unknown".to_string()
                } else {
                    text
                }
            };
            let rarity = row
                .select(&RARITY_CELL)
                .next()
                .map(|td| element_text(&td))
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Common".to_string());

            out.push(LootStub {
                name,
                page_url: absolute(href),
                category,
                rarity,
            });
        }
    }

    out
}

/// Extract the raw record from a loot detail page. Fields the infobox does
/// not carry keep their defaults (weight 0.5, stack size 1, value 0).
pub fn detail(url: &str, doc: &Html) -> Result<RawLootDetail> {
    let infobox = doc
        .select(&INFOBOX)
        .next()
        .ok_or_else(|| ScrapeError::MissingMarker {
            url: url.to_string(),
            selector: INFOBOX_CSS.to_string(),
        })?;

    let mut raw = RawLootDetail::default();

    // Main image; the 2x srcset candidate beats the plain src.
    if let Some(image_row) = infobox.select(&IMAGE_ROW).next() {
        if let Some(img) = image_row.select(&PICTURE_IMG).next() {
            let mut src = img.value().attr("src").unwrap_or("").to_string();
            if let Some(srcset) = img.value().attr("srcset") {
                if let Some(better) = srcset_2x(srcset) {
                    src = better.to_string();
                }
            }
            if !src.is_empty() {
                raw.image_url = absolute(&src);
            }
        }
    }

    // Mod icon; which icon it is determines the mod sub-category later.
    if let Some(icon_row) = infobox.select(&ICON_ROW).next() {
        raw.mod_icon_url = icon_row
            .select(&PICTURE_IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string);
    }

    // Warning rows carry weapon compatibility for mods.
    for row in infobox.select(&WARNING_ROW) {
        let Some(td) = row.select(&CELL).next() else {
            continue;
        };
        if !element_text(&td).contains("Compatible with:") {
            continue;
        }
        raw.compatible_with = td
            .select(&ANCHOR)
            .map(|a| link_name(&a))
            .filter(|name| !name.is_empty())
            .collect();
    }

    // Labeled rows.
    for row in infobox.select(&ROW) {
        let Some(th) = row.select(&ROW_LABEL).next() else {
            continue;
        };
        let Some(td) = row.select(&CELL).next() else {
            continue;
        };
        let label = element_text(&th);
        let value = element_text(&td);

        match label.as_str() {
            "Can Be Found In" => {
                raw.can_be_found_in = td
                    .select(&LIST_ITEM)
                    .map(|li| collapse_ws(&element_text(&li)))
                    .collect();
            }
            "Weight" => {
                if let Some(weight) = first_decimal(&value) {
                    raw.weight = weight;
                }
            }
            "Stack Size" => {
                if let Some(stack) = first_uint(&value) {
                    raw.stack_size = stack;
                }
            }
            "Sell Price" => {
                if let Some(price) = first_uint(&value) {
                    raw.value = price;
                }
            }
            _ => {}
        }
    }

    // Description: first paragraph of the page, not the infobox.
    if let Some(p) = doc.select(&PARAGRAPH).next() {
        raw.description = truncate_chars(&element_text(&p), DESCRIPTION_MAX_CHARS);
    }

    Ok(raw)
}
