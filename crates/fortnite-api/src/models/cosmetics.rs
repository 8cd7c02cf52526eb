//! Cosmetic items of every game mode.

use super::Asset;
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::enums::{
    CosmeticRarity, CosmeticType, CustomGender, GameLanguage, MatchMethod,
};
use fortnite_api_core::query::QueryParams;
use fortnite_api_core::{impl_identity, time, LazyList, ResponseFlags};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Type of a cosmetic as sent by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTypeInfo {
    /// Parsed type.
    #[serde(default)]
    pub value: CosmeticType,
    /// Localized display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    /// Internal name, e.g. `AthenaCharacter`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_value: Option<String>,
}

/// Rarity of a cosmetic as sent by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticRarityInfo {
    /// Parsed rarity.
    #[serde(default)]
    pub value: CosmeticRarity,
    /// Localized display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    /// Internal name, e.g. `EFortRarity::Legendary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_value: Option<String>,
}

/// Series a cosmetic belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSeriesInfo {
    /// Display name of the series.
    #[serde(default)]
    pub value: String,
    /// Background image of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// Hex colors of the series.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub colors: Vec<String>,
    /// Internal name of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_value: Option<String>,
}

/// Set a cosmetic belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSet {
    /// Display name of the set.
    #[serde(default)]
    pub value: String,
    /// Localized description, e.g. "Part of the Storm Scavenger set."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Internal name of the set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_value: Option<String>,
}

/// When a cosmetic was introduced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticIntroduction {
    /// Chapter number.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub chapter: Option<u32>,
    /// Season number within the chapter.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub season: Option<u32>,
    /// Localized text, e.g. "Introduced in Chapter 1, Season 1."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Absolute season number.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub backend_value: Option<u32>,
}

// Chapter and season arrive as strings ("1") on some routes and numbers on others.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Images of a cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticImages {
    /// Small icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<Asset>,
    /// Main icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Asset>,
    /// Featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Asset>,
    /// LEGO style render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lego: Option<Asset>,
    /// Fall Guys bean render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bean: Option<Asset>,
    /// Small image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<Asset>,
    /// Large image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<Asset>,
    /// Wide image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wide: Option<Asset>,
    /// Additional images keyed by kind.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub other: HashMap<String, Asset>,
}

impl CosmeticImages {
    /// Background image, if any.
    #[must_use]
    pub fn background(&self) -> Option<&Asset> {
        self.other.get("background")
    }

    /// Cover art, if any.
    #[must_use]
    pub fn coverart(&self) -> Option<&Asset> {
        self.other.get("coverart")
    }

    /// Decal image, if any.
    #[must_use]
    pub fn decal(&self) -> Option<&Asset> {
        self.other.get("decal")
    }
}

/// A style channel of a Battle Royale cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticVariant {
    /// Channel name, e.g. `Material`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Localized channel type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Selectable options.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<CosmeticVariantOption>,
}

/// One selectable style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticVariantOption {
    /// Internal tag of the option.
    #[serde(default)]
    pub tag: String,
    /// Localized name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// How the option is unlocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_requirements: Option<String>,
}

fn showcase_url(video_id: Option<&str>) -> Option<String> {
    video_id.map(|id| format!("https://youtube.com/watch?v={id}"))
}

/// A Battle Royale cosmetic: outfits, emotes, pickaxes and the like.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticBr {
    /// Cosmetic id, e.g. `CID_028_Athena_Commando_F`.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Description shown for exclusive items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_description: Option<String>,
    /// How the item is unlocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_requirements: Option<String>,
    /// Callout shown for exclusive items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_exclusive_callout: Option<String>,
    /// Type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CosmeticTypeInfo>,
    /// Rarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<CosmeticRarityInfo>,
    /// Series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<CosmeticSeriesInfo>,
    /// Set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<CosmeticSet>,
    /// Introduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<CosmeticIntroduction>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Style channels.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub variants: Vec<CosmeticVariant>,
    /// Ids of emotes that come with this item.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub built_in_emote_ids: Vec<String>,
    /// Search tags.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub search_tags: Vec<String>,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Meta tags.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub meta_tags: Vec<String>,
    /// YouTube id of the showcase video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showcase_video: Option<String>,
    /// Id of the dynamic pak holding the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_pak_id: Option<String>,
    /// Path of the hero previewing the item; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_preview_hero_path: Option<String>,
    /// Path of the display asset; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_asset_path: Option<String>,
    /// Path of the item definition; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_path: Option<String>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// When the item was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    /// Dates the item was in the shop; requires [`ResponseFlags::INCLUDE_SHOP_HISTORY`].
    #[serde(default, with = "time::utc_vec", skip_serializing_if = "Vec::is_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl CosmeticBr {
    /// Link to the showcase video.
    #[must_use]
    pub fn showcase_video_url(&self) -> Option<String> {
        showcase_url(self.showcase_video.as_deref())
    }
}

impl Construct for CosmeticBr {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.definition_path);
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.display_asset_path);
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.item_preview_hero_path);
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut self.shop_history);
    }
}

/// Difficulty ratings of a jam track, per part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTrackDifficulty {
    /// Vocals.
    #[serde(default)]
    pub vocals: i32,
    /// Lead.
    #[serde(default)]
    pub guitar: i32,
    /// Bass.
    #[serde(default)]
    pub bass: i32,
    /// Pro bass.
    #[serde(default)]
    pub plastic_bass: i32,
    /// Drums.
    #[serde(default)]
    pub drums: i32,
    /// Pro drums.
    #[serde(default)]
    pub plastic_drums: i32,
}

/// A Festival jam track.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTrack {
    /// Track id.
    pub id: String,
    /// Internal name.
    #[serde(default)]
    pub dev_name: String,
    /// Song title.
    #[serde(default)]
    pub title: String,
    /// Artist.
    #[serde(default)]
    pub artist: String,
    /// Album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Release year.
    #[serde(default)]
    pub release_year: i32,
    /// Beats per minute.
    #[serde(default)]
    pub bpm: i32,
    /// Length in seconds.
    #[serde(default)]
    pub duration: i32,
    /// Difficulty ratings.
    #[serde(default)]
    pub difficulty: CosmeticTrackDifficulty,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Genres.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub genres: Vec<String>,
    /// Album art.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art: Option<Asset>,
    /// When the track was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    /// Dates the track was in the shop; requires [`ResponseFlags::INCLUDE_SHOP_HISTORY`].
    #[serde(default, with = "time::utc_vec", skip_serializing_if = "Vec::is_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl Construct for CosmeticTrack {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut self.shop_history);
    }
}

/// A Festival instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticInstrument {
    /// Instrument id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CosmeticTypeInfo>,
    /// Rarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<CosmeticRarityInfo>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<CosmeticSeriesInfo>,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// YouTube id of the showcase video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showcase_video: Option<String>,
    /// When the instrument was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    /// Dates the instrument was in the shop; requires [`ResponseFlags::INCLUDE_SHOP_HISTORY`].
    #[serde(default, with = "time::utc_vec", skip_serializing_if = "Vec::is_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl CosmeticInstrument {
    /// Link to the showcase video.
    #[must_use]
    pub fn showcase_video_url(&self) -> Option<String> {
        showcase_url(self.showcase_video.as_deref())
    }
}

impl Construct for CosmeticInstrument {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut self.shop_history);
    }
}

/// A Rocket Racing car cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticCar {
    /// Cosmetic id.
    pub id: String,
    /// Id of the vehicle the cosmetic applies to.
    #[serde(default)]
    pub vehicle_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CosmeticTypeInfo>,
    /// Rarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<CosmeticRarityInfo>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<CosmeticSeriesInfo>,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// YouTube id of the showcase video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showcase_video: Option<String>,
    /// When the car was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    /// Dates the car was in the shop; requires [`ResponseFlags::INCLUDE_SHOP_HISTORY`].
    #[serde(default, with = "time::utc_vec", skip_serializing_if = "Vec::is_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl CosmeticCar {
    /// Link to the showcase video.
    #[must_use]
    pub fn showcase_video_url(&self) -> Option<String> {
        showcase_url(self.showcase_video.as_deref())
    }
}

impl Construct for CosmeticCar {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut self.shop_history);
    }
}

/// A LEGO build or decor bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticLegoKit {
    /// Kit id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CosmeticTypeInfo>,
    /// Series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<CosmeticSeriesInfo>,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// When the kit was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    /// Dates the kit was in the shop; requires [`ResponseFlags::INCLUDE_SHOP_HISTORY`].
    #[serde(default, with = "time::utc_vec", skip_serializing_if = "Vec::is_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl Construct for CosmeticLegoKit {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut self.shop_history);
    }
}

/// The LEGO Fortnite style of a Battle Royale cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantLego {
    /// Variant id.
    pub id: String,
    /// Id of the Battle Royale cosmetic this variant belongs to.
    #[serde(default)]
    pub cosmetic_id: String,
    /// Sound library tags.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sound_library_tags: Vec<String>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// When the variant was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

impl Construct for VariantLego {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
    }
}

/// The Fall Guys bean style of a Battle Royale cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantBean {
    /// Variant id.
    pub id: String,
    /// Id of the Battle Royale cosmetic this bean is based on, if any.
    #[serde(
        default,
        alias = "cosmetic_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub cosmetic_id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Body type.
    #[serde(default)]
    pub gender: CustomGender,
    /// Gameplay tags; requires [`ResponseFlags::INCLUDE_GAMEPLAY_TAGS`].
    #[serde(
        default,
        alias = "gameplay_tags",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<CosmeticImages>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// When the bean was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

impl Construct for VariantBean {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
        flags.clear_unless(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, &mut self.gameplay_tags);
    }
}

impl_identity!(
    CosmeticBr,
    CosmeticTrack,
    CosmeticInstrument,
    CosmeticCar,
    CosmeticLegoKit,
    VariantLego,
    VariantBean,
);

/// Every cosmetic, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticsAll {
    /// Battle Royale cosmetics.
    #[serde(default)]
    pub br: LazyList<CosmeticBr>,
    /// Jam tracks.
    #[serde(default)]
    pub tracks: LazyList<CosmeticTrack>,
    /// Instruments.
    #[serde(default)]
    pub instruments: LazyList<CosmeticInstrument>,
    /// Cars.
    #[serde(default)]
    pub cars: LazyList<CosmeticCar>,
    /// LEGO variants.
    #[serde(default)]
    pub lego: LazyList<VariantLego>,
    /// LEGO kits.
    #[serde(default)]
    pub lego_kits: LazyList<CosmeticLegoKit>,
    /// Bean variants.
    #[serde(default)]
    pub beans: LazyList<VariantBean>,
}

impl CosmeticsAll {
    /// Number of cosmetics across every category. Builds nothing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.br.len()
            + self.tracks.len()
            + self.instruments.len()
            + self.cars.len()
            + self.lego.len()
            + self.lego_kits.len()
            + self.beans.len()
    }

    /// True if every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Construct for CosmeticsAll {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        self.br.bind_flags(flags);
        self.tracks.bind_flags(flags);
        self.instruments.bind_flags(flags);
        self.cars.bind_flags(flags);
        self.lego.bind_flags(flags);
        self.lego_kits.bind_flags(flags);
        self.beans.bind_flags(flags);
    }
}

/// Filters for the Battle Royale cosmetic search endpoints.
#[derive(Debug, Default, Clone)]
pub struct CosmeticSearchParams {
    /// Language of the returned data; the client default when unset.
    pub language: Option<GameLanguage>,
    /// Language the `name` and `description` filters are written in.
    pub search_language: Option<GameLanguage>,
    /// How text filters are matched.
    pub match_method: Option<MatchMethod>,
    /// Filter by id.
    pub id: Option<String>,
    /// Filter by name.
    pub name: Option<String>,
    /// Filter by description.
    pub description: Option<String>,
    /// Filter by type, e.g. `outfit`.
    pub kind: Option<CosmeticType>,
    /// Filter by rarity.
    pub rarity: Option<CosmeticRarity>,
    /// Filter by series name.
    pub series: Option<String>,
    /// Filter by set name.
    pub set: Option<String>,
    /// Only items with (or without) styles.
    pub has_variants: Option<bool>,
    /// Only items with (or without) gameplay tags.
    pub has_gameplay_tags: Option<bool>,
    /// Filter by gameplay tag.
    pub gameplay_tag: Option<String>,
    /// Only items with (or without) a featured image.
    pub has_featured_image: Option<bool>,
    /// Filter by internal type name.
    pub backend_type: Option<String>,
    /// Filter by internal rarity name.
    pub backend_rarity: Option<String>,
}

impl CosmeticSearchParams {
    /// Search by display name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Convert the parameters into URL query pairs, with `language` resolved
    /// to `default_language` when unset.
    #[must_use]
    pub fn to_query(&self, default_language: GameLanguage) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_language(self.language.unwrap_or(default_language));
        params.push_opt("searchLanguage", self.search_language);
        params.push_opt("matchMethod", self.match_method);
        params.push_opt("id", self.id.as_deref());
        params.push_opt("name", self.name.as_deref());
        params.push_opt("description", self.description.as_deref());
        params.push_opt("type", self.kind.as_ref());
        params.push_opt("rarity", self.rarity.as_ref());
        params.push_opt("series", self.series.as_deref());
        params.push_opt("set", self.set.as_deref());
        params.push_opt("hasVariants", self.has_variants);
        params.push_opt("hasGameplayTags", self.has_gameplay_tags);
        params.push_opt("gameplayTag", self.gameplay_tag.as_deref());
        params.push_opt("hasFeaturedImage", self.has_featured_image);
        params.push_opt("backendType", self.backend_type.as_deref());
        params.push_opt("backendRarity", self.backend_rarity.as_deref());
        params
    }
}
