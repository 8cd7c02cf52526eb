//! The item shop.

use super::{
    Asset, CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit, CosmeticTrack,
    NewDisplayAsset,
};
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::Construct;
use fortnite_api_core::enums::{BannerIntensity, TileSize};
use fortnite_api_core::{impl_identity, time, LazyList, ResponseFlags};
use serde::{Deserialize, Serialize};

/// The current item shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Hash of the shop contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// When the shop rotated.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// The V-Bucks icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbuck_icon: Option<Asset>,
    /// Offers in the shop.
    #[serde(default)]
    pub entries: LazyList<ShopEntry>,
}

impl Shop {
    /// Entry with the given offer id, building entries up to it.
    pub fn find_offer(&self, offer_id: &str) -> Option<fortnite_api_core::Result<&ShopEntry>> {
        self.entries.iter().find(|entry| {
            entry
                .as_ref()
                .map_or(true, |entry| entry.offer_id.as_deref() == Some(offer_id))
        })
    }
}

impl Construct for Shop {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        self.entries.bind_flags(flags);
    }
}

/// Bundle details of an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryBundle {
    /// Bundle name.
    #[serde(default)]
    pub name: String,
    /// Short info line, e.g. "2 items".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Bundle image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
}

/// Banner shown on an offer tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryBanner {
    /// Localized banner text.
    #[serde(default)]
    pub value: String,
    /// Emphasis.
    #[serde(default)]
    pub intensity: BannerIntensity,
    /// Internal banner name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_value: Option<String>,
}

/// Tag attached to an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryOfferTag {
    /// Tag id.
    #[serde(default)]
    pub id: String,
    /// Localized tag text.
    #[serde(default)]
    pub text: String,
}

/// Section of the shop an offer is placed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryLayout {
    /// Layout id.
    pub id: String,
    /// Section name.
    #[serde(default)]
    pub name: String,
    /// Section category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Position of the section.
    #[serde(default)]
    pub index: i32,
    /// Rank of the section.
    #[serde(default)]
    pub rank: i32,
    /// When offers the player cannot buy are shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_ineligible_offers: Option<String>,
    /// Section background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Asset>,
    /// Whether tiles use the wide preview.
    #[serde(default)]
    pub use_wide_preview: bool,
    /// How tiles are displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

impl Construct for ShopEntryLayout {}

/// Colors of an offer tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryColors {
    /// First gradient color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<String>,
    /// Second gradient color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<String>,
    /// Third gradient color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color3: Option<String>,
    /// Background color of the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_background_color: Option<String>,
}

/// One offer in the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntry {
    /// Price before discounts, in V-Bucks.
    #[serde(default)]
    pub regular_price: i32,
    /// Price actually charged, in V-Bucks.
    #[serde(default)]
    pub final_price: i32,
    /// Internal offer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_name: Option<String>,
    /// Offer id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// When the offer entered the shop.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub in_date: Option<DateTime<Utc>>,
    /// When the offer leaves the shop.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub out_date: Option<DateTime<Utc>>,
    /// Bundle details, for bundles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<ShopEntryBundle>,
    /// Tile banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<ShopEntryBanner>,
    /// Offer tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_tag: Option<ShopEntryOfferTag>,
    /// Whether the offer can be gifted.
    #[serde(default)]
    pub giftable: bool,
    /// Whether the offer can be refunded.
    #[serde(default)]
    pub refundable: bool,
    /// Sort priority within the section.
    #[serde(default)]
    pub sort_priority: i32,
    /// Id of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_id: Option<String>,
    /// Section the offer is placed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ShopEntryLayout>,
    /// Tile colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ShopEntryColors>,
    /// Material of the tile background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_background_material: Option<String>,
    /// Width of the tile.
    #[serde(default)]
    pub tile_size: TileSize,
    /// Display asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_asset_path: Option<String>,
    /// New display asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_display_asset_path: Option<String>,
    /// Display asset rendering the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_display_asset: Option<NewDisplayAsset>,
    /// Battle Royale items in the offer.
    #[serde(default)]
    pub br_items: LazyList<CosmeticBr>,
    /// Jam tracks in the offer.
    #[serde(default)]
    pub tracks: LazyList<CosmeticTrack>,
    /// Instruments in the offer.
    #[serde(default)]
    pub instruments: LazyList<CosmeticInstrument>,
    /// Cars in the offer.
    #[serde(default)]
    pub cars: LazyList<CosmeticCar>,
    /// LEGO kits in the offer.
    #[serde(default)]
    pub lego_kits: LazyList<CosmeticLegoKit>,
}

impl ShopEntry {
    /// Discount in V-Bucks.
    #[must_use]
    pub const fn discount(&self) -> i32 {
        self.regular_price - self.final_price
    }

    /// Number of items of every kind in the offer.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.br_items.len()
            + self.tracks.len()
            + self.instruments.len()
            + self.cars.len()
            + self.lego_kits.len()
    }
}

impl Construct for ShopEntry {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.display_asset_path);
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.new_display_asset_path);
        self.br_items.bind_flags(flags);
        self.tracks.bind_flags(flags);
        self.instruments.bind_flags(flags);
        self.cars.bind_flags(flags);
        self.lego_kits.bind_flags(flags);
    }
}

impl_identity!(ShopEntryLayout);
