//! Typed models of the Fortnite-API responses.
//!
//! Every top-level response model implements
//! [`Construct`](fortnite_api_core::Construct) and, through the blanket impl,
//! [`Reconstruct`](fortnite_api_core::Reconstruct). Nested lists that can get
//! long are [`LazyList`](fortnite_api_core::LazyList)s.

mod account;
mod aes;
mod asset;
mod banner;
mod cosmetics;
mod creator_code;
mod display;
mod map;
mod new;
mod news;
mod playlist;
mod shop;
mod stats;

pub use account::Account;
pub use aes::{Aes, DynamicKey, Version};
pub use asset::Asset;
pub use banner::{Banner, BannerColor};
pub use cosmetics::{
    CosmeticBr, CosmeticCar, CosmeticImages, CosmeticInstrument, CosmeticIntroduction,
    CosmeticLegoKit, CosmeticRarityInfo, CosmeticSearchParams, CosmeticSeriesInfo, CosmeticSet,
    CosmeticTrack, CosmeticTrackDifficulty, CosmeticTypeInfo, CosmeticVariant,
    CosmeticVariantOption, CosmeticsAll, VariantBean, VariantLego,
};
pub use creator_code::CreatorCode;
pub use display::{MaterialInstance, NewDisplayAsset, RenderImage};
pub use map::{Map, MapImages, Poi, PoiLocation};
pub use new::{
    NewCosmetic, NewCosmetics, NewCosmeticsHashes, NewCosmeticsItems, NewCosmeticsLastAdditions,
};
pub use news::{GameModeNews, News, NewsMessage, NewsMotd};
pub use playlist::{Playlist, PlaylistImages};
pub use shop::{
    Shop, ShopEntry, ShopEntryBanner, ShopEntryBundle, ShopEntryColors, ShopEntryLayout,
    ShopEntryOfferTag,
};
pub use stats::{BrBattlePass, BrGameModeStats, BrInputStats, BrInputs, BrPlayerStats};
