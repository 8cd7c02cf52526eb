//! Route table shared by the asynchronous and the blocking client.
//!
//! Each function describes one operation as an [`Endpoint`]: the path, the
//! query parameters and the constructor of the response model. Callers pass
//! an already resolved language; the clients substitute their default for a
//! `None` language before getting here.

use crate::models::{
    Aes, Banner, BannerColor, BrPlayerStats, CosmeticBr, CosmeticCar, CosmeticInstrument,
    CosmeticLegoKit, CosmeticSearchParams, CosmeticTrack, CosmeticsAll, CreatorCode,
    GameModeNews, Map, MaterialInstance, NewCosmetics, NewDisplayAsset, News, Playlist, Shop,
    VariantBean, VariantLego,
};
use fortnite_api_core::enums::{AccountType, GameLanguage, KeyFormat, StatsImageType, TimeWindow};
use fortnite_api_core::http::{path_segment, Access, Endpoint};
use fortnite_api_core::query::QueryParams;
use fortnite_api_core::{Construct, LazyList, ResponseFlags};

fn localized(language: GameLanguage) -> QueryParams {
    let mut query = QueryParams::new();
    query.push_language(language);
    query
}

fn localized_with_flags(language: GameLanguage, flags: ResponseFlags) -> QueryParams {
    let mut query = localized(language);
    query.push_flags(flags);
    query
}

fn cosmetic_list<T: Construct + 'static>(
    path: &str,
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<T>> {
    Endpoint::new(path, LazyList::<T>::from_payload)
        .with_query(localized_with_flags(language, flags))
}

/// `GET /v2/cosmetics`
#[must_use]
pub fn cosmetics_all(language: GameLanguage, flags: ResponseFlags) -> Endpoint<CosmeticsAll> {
    Endpoint::new("v2/cosmetics", CosmeticsAll::construct)
        .with_query(localized_with_flags(language, flags))
}

/// `GET /v2/cosmetics/br`
#[must_use]
pub fn cosmetics_br(language: GameLanguage, flags: ResponseFlags) -> Endpoint<LazyList<CosmeticBr>> {
    cosmetic_list("v2/cosmetics/br", language, flags)
}

/// `GET /v2/cosmetics/tracks`
#[must_use]
pub fn cosmetics_tracks(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<CosmeticTrack>> {
    cosmetic_list("v2/cosmetics/tracks", language, flags)
}

/// `GET /v2/cosmetics/instruments`
#[must_use]
pub fn cosmetics_instruments(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<CosmeticInstrument>> {
    cosmetic_list("v2/cosmetics/instruments", language, flags)
}

/// `GET /v2/cosmetics/cars`
#[must_use]
pub fn cosmetics_cars(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<CosmeticCar>> {
    cosmetic_list("v2/cosmetics/cars", language, flags)
}

/// `GET /v2/cosmetics/lego`
#[must_use]
pub fn variants_lego(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<VariantLego>> {
    cosmetic_list("v2/cosmetics/lego", language, flags)
}

/// `GET /v2/cosmetics/lego/kits`
#[must_use]
pub fn cosmetics_lego_kits(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<CosmeticLegoKit>> {
    cosmetic_list("v2/cosmetics/lego/kits", language, flags)
}

/// `GET /v2/cosmetics/beans`
#[must_use]
pub fn variants_beans(
    language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<VariantBean>> {
    cosmetic_list("v2/cosmetics/beans", language, flags)
}

/// `GET /v2/cosmetics/br/{id}`
#[must_use]
pub fn cosmetic_br(id: &str, language: GameLanguage, flags: ResponseFlags) -> Endpoint<CosmeticBr> {
    Endpoint::new(format!("v2/cosmetics/br/{}", path_segment(id)), CosmeticBr::construct)
        .with_query(localized_with_flags(language, flags))
}

/// `GET /v2/cosmetics/br/search`
#[must_use]
pub fn search_br_cosmetics(
    params: &CosmeticSearchParams,
    default_language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<CosmeticBr> {
    let mut query = params.to_query(default_language);
    query.push_flags(flags);
    Endpoint::new("v2/cosmetics/br/search", CosmeticBr::construct).with_query(query)
}

/// `GET /v2/cosmetics/br/search/all`
#[must_use]
pub fn search_br_cosmetics_all(
    params: &CosmeticSearchParams,
    default_language: GameLanguage,
    flags: ResponseFlags,
) -> Endpoint<LazyList<CosmeticBr>> {
    let mut query = params.to_query(default_language);
    query.push_flags(flags);
    Endpoint::new("v2/cosmetics/br/search/all", LazyList::<CosmeticBr>::from_payload)
        .with_query(query)
}

/// `GET /v2/cosmetics/new`
#[must_use]
pub fn cosmetics_new(language: GameLanguage, flags: ResponseFlags) -> Endpoint<NewCosmetics> {
    Endpoint::new("v2/cosmetics/new", NewCosmetics::construct)
        .with_query(localized_with_flags(language, flags))
}

/// `GET /v2/shop`
#[must_use]
pub fn shop(language: GameLanguage, flags: ResponseFlags) -> Endpoint<Shop> {
    Endpoint::new("v2/shop", Shop::construct).with_query(localized_with_flags(language, flags))
}

/// `GET /v2/aes`
#[must_use]
pub fn aes(key_format: KeyFormat) -> Endpoint<Aes> {
    Endpoint::new("v2/aes", Aes::construct).with_query(QueryParams::new().with("keyFormat", key_format))
}

/// `GET /v2/news`
#[must_use]
pub fn news(language: GameLanguage) -> Endpoint<News> {
    Endpoint::new("v2/news", News::construct).with_query(localized(language))
}

/// `GET /v2/news/br`
#[must_use]
pub fn news_br(language: GameLanguage) -> Endpoint<GameModeNews> {
    Endpoint::new("v2/news/br", GameModeNews::construct).with_query(localized(language))
}

/// `GET /v2/news/stw`
#[must_use]
pub fn news_stw(language: GameLanguage) -> Endpoint<GameModeNews> {
    Endpoint::new("v2/news/stw", GameModeNews::construct).with_query(localized(language))
}

/// `GET /v2/creatorcode`
#[must_use]
pub fn creator_code(name: &str) -> Endpoint<CreatorCode> {
    Endpoint::new("v2/creatorcode", CreatorCode::construct)
        .with_query(QueryParams::new().with("name", name))
}

/// `GET /v2/stats/br/v2`; requires an API key.
#[must_use]
pub fn br_stats(
    name: &str,
    account_type: Option<AccountType>,
    time_window: Option<TimeWindow>,
    image: Option<StatsImageType>,
) -> Endpoint<BrPlayerStats> {
    let mut query = QueryParams::new().with("name", name);
    query.push_opt("accountType", account_type);
    query.push_opt("timeWindow", time_window);
    query.push_opt("image", image);
    Endpoint::new("v2/stats/br/v2", BrPlayerStats::construct)
        .with_query(query)
        .with_access(Access::ApiKey)
}

/// `GET /v2/stats/br/v2/{id}`; requires an API key.
#[must_use]
pub fn br_stats_by_id(
    account_id: &str,
    time_window: Option<TimeWindow>,
    image: Option<StatsImageType>,
) -> Endpoint<BrPlayerStats> {
    let mut query = QueryParams::new();
    query.push_opt("timeWindow", time_window);
    query.push_opt("image", image);
    let path = format!("v2/stats/br/v2/{}", path_segment(account_id));
    Endpoint::new(path, BrPlayerStats::construct)
        .with_query(query)
        .with_access(Access::ApiKey)
}

/// `GET /v1/banners`
#[must_use]
pub fn banners(language: GameLanguage) -> Endpoint<LazyList<Banner>> {
    Endpoint::new("v1/banners", LazyList::<Banner>::from_payload).with_query(localized(language))
}

/// `GET /v1/banners/colors`
#[must_use]
pub fn banner_colors() -> Endpoint<LazyList<BannerColor>> {
    Endpoint::new("v1/banners/colors", LazyList::<BannerColor>::from_payload)
}

/// `GET /v1/playlists`
#[must_use]
pub fn playlists(language: GameLanguage) -> Endpoint<LazyList<Playlist>> {
    Endpoint::new("v1/playlists", LazyList::<Playlist>::from_payload)
        .with_query(localized(language))
}

/// `GET /v1/playlists/{id}`
#[must_use]
pub fn playlist(id: &str, language: GameLanguage) -> Endpoint<Playlist> {
    Endpoint::new(format!("v1/playlists/{}", path_segment(id)), Playlist::construct)
        .with_query(localized(language))
}

/// `GET /v1/map`
#[must_use]
pub fn map(language: GameLanguage) -> Endpoint<Map> {
    Endpoint::new("v1/map", Map::construct).with_query(localized(language))
}

/// `GET /beta/newdisplayassets`; requires beta access.
#[must_use]
pub fn beta_new_display_assets() -> Endpoint<LazyList<NewDisplayAsset>> {
    Endpoint::new("beta/newdisplayassets", LazyList::<NewDisplayAsset>::from_payload)
        .with_access(Access::Beta)
}

/// `GET /beta/materialinstances`; requires beta access.
#[must_use]
pub fn beta_material_instances() -> Endpoint<LazyList<MaterialInstance>> {
    Endpoint::new("beta/materialinstances", LazyList::<MaterialInstance>::from_payload)
        .with_access(Access::Beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortnite_api_core::Error;

    #[test]
    fn cosmetic_routes_send_language_and_flags() {
        let endpoint = cosmetics_br(GameLanguage::German, ResponseFlags::INCLUDE_ALL);
        assert_eq!(endpoint.path(), "v2/cosmetics/br");
        assert_eq!(endpoint.query().get("language"), Some("de"));
        assert_eq!(endpoint.query().get("responseFlags"), Some("7"));
        assert_eq!(endpoint.access(), Access::Public);

        let endpoint = cosmetics_lego_kits(GameLanguage::English, ResponseFlags::INCLUDE_NOTHING);
        assert_eq!(endpoint.path(), "v2/cosmetics/lego/kits");
        assert_eq!(endpoint.query().get("responseFlags"), None);
    }

    #[test]
    fn news_routes_skip_flags() {
        let endpoint = news_br(GameLanguage::Japanese);
        assert_eq!(endpoint.path(), "v2/news/br");
        assert_eq!(endpoint.query().pairs(), &[("language", "ja".to_string())]);
    }

    #[test]
    fn stats_require_api_key() {
        let endpoint = br_stats("Ninja", Some(AccountType::Epic), Some(TimeWindow::Season), None);
        assert_eq!(endpoint.access(), Access::ApiKey);
        assert_eq!(endpoint.query().get("name"), Some("Ninja"));
        assert_eq!(endpoint.query().get("accountType"), Some("epic"));
        assert_eq!(endpoint.query().get("timeWindow"), Some("season"));
        assert_eq!(endpoint.query().get("image"), None);

        let err = endpoint.check_access(false, true).unwrap_err();
        assert!(err.is_unauthorized());
        assert!(endpoint.check_access(true, false).is_ok());

        let by_id = br_stats_by_id("4735ce9132924caf8a5b17789b40f79c", None, Some(StatsImageType::All));
        assert_eq!(by_id.path(), "v2/stats/br/v2/4735ce9132924caf8a5b17789b40f79c");
        assert_eq!(by_id.query().get("image"), Some("all"));
    }

    #[test]
    fn ids_stay_inside_their_segment() {
        let endpoint = playlist("a?b#c", GameLanguage::English);
        assert_eq!(endpoint.path(), "v1/playlists/a%3Fb%23c");

        let endpoint = cosmetic_br("../../v1/map", GameLanguage::English, ResponseFlags::INCLUDE_NOTHING);
        assert_eq!(endpoint.path(), "v2/cosmetics/br/..%2F..%2Fv1%2Fmap");

        let endpoint = br_stats_by_id("id/with space", None, None);
        assert_eq!(endpoint.path(), "v2/stats/br/v2/id%2Fwith%20space");
    }

    #[test]
    fn beta_routes_are_gated() {
        let endpoint = beta_material_instances();
        assert!(matches!(
            endpoint.check_access(true, false),
            Err(Error::BetaAccessNotEnabled(_))
        ));
        assert!(endpoint.check_access(false, true).is_ok());
    }

    #[test]
    fn search_uses_default_language() {
        let params = CosmeticSearchParams::by_name("Renegade Raider");
        let endpoint = search_br_cosmetics(&params, GameLanguage::Spanish, ResponseFlags::INCLUDE_PATHS);
        assert_eq!(endpoint.path(), "v2/cosmetics/br/search");
        assert_eq!(endpoint.query().get("language"), Some("es"));
        assert_eq!(endpoint.query().get("name"), Some("Renegade Raider"));
        assert_eq!(endpoint.query().get("responseFlags"), Some("1"));
    }

    #[test]
    fn aes_sends_key_format() {
        let endpoint = aes(KeyFormat::Base64);
        assert_eq!(endpoint.query().get("keyFormat"), Some("base64"));
    }

    #[test]
    fn list_endpoint_constructs_lazily() {
        let endpoint = playlists(GameLanguage::English);
        let body = br#"{"status": 200, "data": [{"id": "Playlist_DefaultSolo"}, {"id": "Playlist_DefaultDuo"}]}"#;
        let list = endpoint.construct(body, ResponseFlags::INCLUDE_NOTHING).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.built_count(), 0);
    }
}
