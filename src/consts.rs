//! Site constants

pub const BASE_URL: &str = "https://arcraiders.wiki";
pub const WEAPONS_LIST_URL: &str = "https://arcraiders.wiki/wiki/Weapons";
pub const LOOT_LIST_URL: &str = "https://arcraiders.wiki/wiki/Loot";

/// Per-navigation timeout for detail pages, in milliseconds.
pub const DETAIL_TIMEOUT_MS: u64 = 10_000;

/// Pause between item pages, applied after every item regardless of outcome.
pub const ITEM_DELAY_MS: u64 = 1_500;

/// Sell prices always carry one value per upgrade tier.
pub const SELL_PRICE_TIERS: usize = 4;

/// Item descriptions are truncated to this many characters.
pub const DESCRIPTION_MAX_CHARS: usize = 150;

// The weapon infobox marks ammo/class/rarity up as unlabeled tag rows. Their
// order is a source-format assumption: the wiki exposes no labels for these
// rows, so they are addressed by position.
pub const TAG_ROW_AMMO: usize = 0;
pub const TAG_ROW_CLASS: usize = 1;
pub const TAG_ROW_RARITY: usize = 2;
