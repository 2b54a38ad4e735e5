//! Weapon listing + infobox extraction.

use scraper::Html;

use crate::consts::{SELL_PRICE_TIERS, TAG_ROW_AMMO, TAG_ROW_CLASS, TAG_ROW_RARITY};
use crate::error::{Result, ScrapeError};
use crate::extract::{element_text, link_name};
use crate::selectors::*;
use crate::text::{absolute, collapse_ws, file_name, first_decimal, first_uint};
use crate::types::{RawWeaponDetail, WeaponStub};

/// Walk every weapon table on the listing page and produce one stub per
/// resolvable data row. Rows without a name/link pair are structural
/// (headers, separators) and are skipped without comment.
pub fn stubs(doc: &Html) -> Vec<WeaponStub> {
    let mut out = Vec::new();

    for table in doc.select(&WEAPON_TABLE) {
        for row in table.select(&TABLE_ROW) {
            let Some(first_td) = row.select(&CELL).next() else {
                continue;
            };

            // The wiki wraps the name cell in an inline-link template; prefer
            // its anchor, fall back to any titled anchor in the cell.
            let ilink = first_td.select(&ILINK).next();
            let link = match ilink {
                Some(span) => span
                    .select(&TITLED_LINK)
                    .next()
                    .or_else(|| first_td.select(&TITLED_LINK).next()),
                None => first_td.select(&TITLED_LINK).next(),
            };
            let Some(link) = link else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let name = link_name(&link);
            if href.is_empty() || name.is_empty() {
                continue;
            }

            let image_url = ilink
                .and_then(|span| span.select(&PICTURE_IMG).next())
                .and_then(|img| img.value().attr("src"))
                .filter(|src| !src.is_empty())
                .map(absolute)
                .unwrap_or_default();
            let image_file_name = if image_url.is_empty() {
                String::new()
            } else {
                file_name(&image_url)
            };

            out.push(WeaponStub {
                name,
                page_url: absolute(href),
                image_url,
                image_file_name,
            });
        }
    }

    out
}

/// Extract the raw stat record from a weapon detail page.
///
/// Ammo, class and rarity come from the infobox's unlabeled tag rows by
/// fixed position (see the `TAG_ROW_*` constants); the rest are labeled
/// rows matched against the known stat names. Unrecognized labels are
/// ignored.
pub fn detail(url: &str, doc: &Html) -> Result<RawWeaponDetail> {
    let infobox = doc
        .select(&INFOBOX)
        .next()
        .ok_or_else(|| ScrapeError::MissingMarker {
            url: url.to_string(),
            selector: INFOBOX_CSS.to_string(),
        })?;

    let mut raw = RawWeaponDetail::default();

    let tag_rows: Vec<_> = infobox.select(&TAG_ROW).collect();
    if let Some(row) = tag_rows.get(TAG_ROW_AMMO) {
        if let Some(td) = row.select(&CELL).next() {
            raw.ammo = collapse_ws(&element_text(&td));
        }
    }
    if let Some(row) = tag_rows.get(TAG_ROW_CLASS) {
        if let Some(a) = row.select(&ANCHOR).next() {
            raw.weapon_type = element_text(&a);
        }
    }
    if let Some(row) = tag_rows.get(TAG_ROW_RARITY) {
        if let Some(a) = row.select(&ANCHOR).next() {
            // The rarity link reads e.g. "Uncommon Weapons".
            raw.rarity = element_text(&a).replace("Weapons", "").trim().to_string();
        }
    }

    for row in infobox.select(&STAT_ROW) {
        let Some(th) = row.select(&ROW_LABEL).next() else {
            continue;
        };
        let Some(td) = row.select(&CELL).next() else {
            continue;
        };
        let label = element_text(&th);
        let value = element_text(&td);

        match label.as_str() {
            "Weight" => {
                // Compound control; the numeric value is the last span.
                if let Some(div) = td.select(&WEIGHT_DIV).next() {
                    let spans: Vec<_> = div.select(&SPAN).collect();
                    if let Some(last) = spans.last() {
                        raw.weight = first_decimal(&element_text(last)).unwrap_or(0.0);
                    }
                }
            }
            "Ammo" => raw.ammo = collapse_ws(&value),
            "Magazine Size" => raw.magazine_size = value,
            "Firing Mode" => raw.firing_mode = value,
            "ARC Armor Penetration" => raw.arc_armor_pen = value,
            "Special Trait" => raw.special_trait = value,
            "Damage" => raw.damage = value,
            "Fire Rate" => raw.fire_rate = value,
            "Headshot Multiplier" => raw.headshot_multiplier = value,
            "Range" => raw.range = value,
            "Stability" => raw.stability = value,
            "Agility" => raw.agility = value,
            "Stealth" => raw.stealth = value,
            "Sell Price" => raw.sell_prices = sell_prices(&td),
            _ => {}
        }
    }

    Ok(raw)
}

/// One price span per upgrade tier. Non-numeric tiers ("-") are dropped and
/// the result is zero-padded on the right to exactly four entries.
fn sell_prices(td: &scraper::ElementRef<'_>) -> [u32; SELL_PRICE_TIERS] {
    let mut prices = [0u32; SELL_PRICE_TIERS];
    let parsed: Vec<u32> = td
        .select(&PRICE_SPAN)
        .filter_map(|span| first_uint(&element_text(&span)))
        .collect();
    for (slot, value) in prices.iter_mut().zip(parsed) {
        *slot = value;
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<html><body>
      <table class="wikitable sortable">
        <tbody>
          <tr><th>Weapon</th><th>Class</th></tr>
          <tr>
            <td>
              <span class="template-ilink">
                <picture><img src="/images/thumb/Ferro.png?v=2"></picture>
                <a href="/wiki/Ferro" title="Ferro">Ferro</a>
              </span>
            </td>
            <td>Assault Rifle</td>
          </tr>
          <tr>
            <td><a href="/wiki/Anvil" title="Anvil">Anvil</a></td>
            <td>Shotgun</td>
          </tr>
          <tr><td>No link here</td><td>-</td></tr>
        </tbody>
      </table>
    </body></html>"#;

    const DETAIL: &str = r#"<html><body>
      <table class="infobox floatright"><tbody>
        <tr class="data-tag"><td>Medium  Ammo</td></tr>
        <tr class="data-tag"><td><a href="/wiki/AR">Assault Rifle</a></td></tr>
        <tr class="data-tag"><td><a href="/wiki/R">Uncommon Weapons</a></td></tr>
        <tr class="infobox-data">
          <th scope="row">Weight</th>
          <td><div class="template-weight"><span>icon</span><span>3.2</span></div></td>
        </tr>
        <tr class="infobox-data"><th scope="row">Damage</th><td>45.5</td></tr>
        <tr class="infobox-data"><th scope="row">Fire Rate</th><td>6.2</td></tr>
        <tr class="infobox-data"><th scope="row">Magazine Size</th><td>30 rounds</td></tr>
        <tr class="infobox-data"><th scope="row">Firing Mode</th><td>Full-Auto</td></tr>
        <tr class="infobox-data"><th scope="row">Special Trait</th><td>High recoil</td></tr>
        <tr class="infobox-data"><th scope="row">Obscure Stat</th><td>ignored</td></tr>
        <tr class="infobox-data">
          <th scope="row">Sell Price</th>
          <td>
            <span class="template-price">1,000</span>
            <span class="template-price">2,500</span>
            <span class="template-price">-</span>
            <span class="template-price">-</span>
          </td>
        </tr>
      </tbody></table>
    </body></html>"#;

    #[test]
    fn stubs_resolve_links_and_thumbnails() {
        let doc = Html::parse_document(LISTING);
        let stubs = stubs(&doc);

        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].name, "Ferro");
        assert_eq!(stubs[0].page_url, "https://arcraiders.wiki/wiki/Ferro");
        assert_eq!(
            stubs[0].image_url,
            "https://arcraiders.wiki/images/thumb/Ferro.png?v=2"
        );
        assert_eq!(stubs[0].image_file_name, "Ferro.png");

        // No ilink wrapper: the titled anchor in the first cell still counts.
        assert_eq!(stubs[1].name, "Anvil");
        assert_eq!(stubs[1].image_url, "");
    }

    #[test]
    fn rows_without_links_produce_no_stubs() {
        let doc = Html::parse_document(
            r#"<table class="wikitable sortable"><tbody>
               <tr><td>plain text</td></tr>
               <tr><td><span class="template-ilink">no anchor</span></td></tr>
               </tbody></table>"#,
        );
        assert!(stubs(&doc).is_empty());
    }

    #[test]
    fn detail_reads_tag_rows_by_position() {
        let doc = Html::parse_document(DETAIL);
        let raw = detail("https://arcraiders.wiki/wiki/Ferro", &doc).expect("infobox present");

        assert_eq!(raw.ammo, "Medium Ammo");
        assert_eq!(raw.weapon_type, "Assault Rifle");
        assert_eq!(raw.rarity, "Uncommon");
    }

    #[test]
    fn detail_reads_labeled_stats() {
        let doc = Html::parse_document(DETAIL);
        let raw = detail("https://arcraiders.wiki/wiki/Ferro", &doc).unwrap();

        assert_eq!(raw.weight, 3.2);
        assert_eq!(raw.damage, "45.5");
        assert_eq!(raw.fire_rate, "6.2");
        assert_eq!(raw.magazine_size, "30 rounds");
        assert_eq!(raw.firing_mode, "Full-Auto");
        assert_eq!(raw.special_trait, "High recoil");
    }

    #[test]
    fn sell_prices_zero_pad_to_four_tiers() {
        let doc = Html::parse_document(DETAIL);
        let raw = detail("https://arcraiders.wiki/wiki/Ferro", &doc).unwrap();
        assert_eq!(raw.sell_prices, [1000, 2500, 0, 0]);
    }

    #[test]
    fn detail_without_infobox_is_not_found() {
        let doc = Html::parse_document("<html><body><p>stub page</p></body></html>");
        let err = detail("https://arcraiders.wiki/wiki/Ghost", &doc).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingMarker { .. }));
    }
}
