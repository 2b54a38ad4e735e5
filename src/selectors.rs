//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Readiness marker CSS for the weapon listing page.
pub const WEAPON_TABLE_CSS: &str = "table.wikitable.sortable";
/// Readiness marker CSS for the loot listing page.
pub const LOOT_TABLE_CSS: &str = "table.wikitable.noMerge.sortable";
/// Readiness marker CSS for detail-page info panels.
pub const INFOBOX_CSS: &str = "table.infobox.floatright";

/// Selector for weapon listing tables.
pub static WEAPON_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(WEAPON_TABLE_CSS).expect("valid weapon table selector"));

/// Selector for loot listing tables.
pub static LOOT_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(LOOT_TABLE_CSS).expect("valid loot table selector"));

/// Selector for detail-page info panels.
pub static INFOBOX: Lazy<Selector> =
    Lazy::new(|| Selector::parse(INFOBOX_CSS).expect("valid infobox selector"));

pub static TABLE_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody tr").expect("valid row selector"));

pub static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid tr selector"));

pub static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid cell selector"));

/// Inline-link wrapper the wiki uses around item names in listing tables.
pub static ILINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.template-ilink").expect("valid ilink selector"));

pub static TITLED_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[title]").expect("valid titled link selector"));

pub static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));

pub static PICTURE_IMG: Lazy<Selector> =
    Lazy::new(|| Selector::parse("picture img").expect("valid picture img selector"));

/// Unlabeled tag rows of the weapon infobox (ammo / class / rarity).
pub static TAG_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.data-tag").expect("valid tag row selector"));

/// Labeled stat rows of the weapon infobox.
pub static STAT_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.infobox-data").expect("valid stat row selector"));

pub static ROW_LABEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"th[scope="row"]"#).expect("valid row label selector"));

/// Compound weight control; only its last `<span>` holds the numeric value.
pub static WEIGHT_DIV: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.template-weight").expect("valid weight selector"));

pub static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("valid span selector"));

/// One span per sell-price tier.
pub static PRICE_SPAN: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.template-price").expect("valid price selector"));

pub static LIST_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li").expect("valid list item selector"));

/// Main image row of the loot infobox.
pub static IMAGE_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.infobox-image").expect("valid image row selector"));

/// Mod icon row of the loot infobox.
pub static ICON_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.data-tag.icon").expect("valid icon row selector"));

/// Warning rows carry mod/weapon compatibility notes.
pub static WARNING_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.data-warning").expect("valid warning row selector"));

pub static PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid paragraph selector"));

/// Cells of the loot listing, addressed by the wiki's field classes.
pub static ITEM_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.field_Item").expect("valid item cell selector"));
pub static CATEGORY_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.field_Category").expect("valid category cell selector"));
pub static RARITY_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.field_Rarity").expect("valid rarity cell selector"));
