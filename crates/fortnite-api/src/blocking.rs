//! Blocking Fortnite-API client.
//!
//! Same operations, models and errors as [`crate::FortniteClient`], without
//! an async runtime. Retries sleep the calling thread.
//!
//! Do not use this client from inside an async runtime; `reqwest` panics
//! when a blocking client is driven from a runtime thread.

use crate::client::{log_retry, rate_limit_reset, transport_build_error, Settings, USER_AGENT};
use crate::endpoints;
use crate::models::{
    Aes, Asset, Banner, BannerColor, BrPlayerStats, CosmeticBr, CosmeticCar, CosmeticInstrument,
    CosmeticLegoKit, CosmeticSearchParams, CosmeticTrack, CosmeticsAll, CreatorCode,
    GameModeNews, Map, MaterialInstance, NewCosmetics, NewDisplayAsset, News, Playlist, Shop,
    VariantBean, VariantLego,
};
use crate::Result;
use chrono::Utc;
use fortnite_api_core::enums::{AccountType, GameLanguage, KeyFormat, StatsImageType, TimeWindow};
use fortnite_api_core::http::{Disposition, Endpoint, RawResponse};
use fortnite_api_core::{Error, FortniteApiConfig, LazyList, ResponseFlags};
use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::ExposeSecret;
use std::fmt;
use std::thread;
use tracing::{debug, info};
use url::Url;

/// Builder for the blocking [`FortniteClient`].
pub type FortniteClientBuilder = crate::client::FortniteClientBuilder<Client>;

impl crate::client::FortniteClientBuilder<Client> {
    /// Build the blocking client.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigError`] if the configuration does not validate or the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<FortniteClient> {
        let (settings, http_config, http) = self.into_parts()?;

        let owns_transport = http.is_none();
        let http = match http {
            Some(http) => http,
            None => {
                let mut builder = ClientBuilder::new()
                    .timeout(http_config.timeout)
                    .user_agent(USER_AGENT)
                    .pool_idle_timeout(http_config.pool_idle_timeout)
                    .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
                    .connect_timeout(http_config.connect_timeout);

                if !http_config.enable_compression {
                    builder = builder.no_gzip();
                }

                builder.build().map_err(transport_build_error)?
            }
        };

        Ok(FortniteClient {
            http,
            owns_transport,
            settings,
        })
    }
}

/// Blocking Fortnite-API client.
#[derive(Clone)]
pub struct FortniteClient {
    http: Client,
    owns_transport: bool,
    settings: Settings,
}

impl fmt::Debug for FortniteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.settings.fmt_as("blocking::FortniteClient", f)
    }
}

impl FortniteClient {
    /// Client for the public service with default settings.
    ///
    /// # Errors
    ///
    /// Same as building through [`builder`](Self::builder).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client.
    #[must_use]
    pub fn builder() -> FortniteClientBuilder {
        FortniteClientBuilder::new()
    }

    /// Client built from `config`.
    ///
    /// # Errors
    ///
    /// Same as building through [`builder`](Self::builder).
    pub fn from_config(config: FortniteApiConfig) -> Result<Self> {
        FortniteClientBuilder::from_config(config).build()
    }

    /// Access the underlying base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.settings.base_url
    }

    /// Language used when a call passes `None`.
    #[must_use]
    pub const fn default_language(&self) -> GameLanguage {
        self.settings.default_language
    }

    /// Flags applied to every response.
    #[must_use]
    pub const fn response_flags(&self) -> ResponseFlags {
        self.settings.response_flags
    }

    /// Whether beta endpoints may be called.
    #[must_use]
    pub const fn beta(&self) -> bool {
        self.settings.beta
    }

    /// Release the connection pool.
    pub fn close(self) {
        debug!(owned = self.owns_transport, "Closing blocking Fortnite-API client");
    }

    /// Every cosmetic of every category.
    pub fn fetch_cosmetics_all(&self, language: Option<GameLanguage>) -> Result<CosmeticsAll> {
        self.request(endpoints::cosmetics_all(self.language(language), self.settings.response_flags))
    }

    /// Every Battle Royale cosmetic.
    pub fn fetch_cosmetics_br(&self, language: Option<GameLanguage>) -> Result<LazyList<CosmeticBr>> {
        self.request(endpoints::cosmetics_br(self.language(language), self.settings.response_flags))
    }

    /// Every jam track.
    pub fn fetch_cosmetics_tracks(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticTrack>> {
        self.request(endpoints::cosmetics_tracks(self.language(language), self.settings.response_flags))
    }

    /// Every instrument.
    pub fn fetch_cosmetics_instruments(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticInstrument>> {
        self.request(endpoints::cosmetics_instruments(
            self.language(language),
            self.settings.response_flags,
        ))
    }

    /// Every car cosmetic.
    pub fn fetch_cosmetics_cars(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticCar>> {
        self.request(endpoints::cosmetics_cars(self.language(language), self.settings.response_flags))
    }

    /// Every LEGO variant.
    pub fn fetch_variants_lego(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<VariantLego>> {
        self.request(endpoints::variants_lego(self.language(language), self.settings.response_flags))
    }

    /// Every LEGO kit.
    pub fn fetch_cosmetics_lego_kits(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticLegoKit>> {
        self.request(endpoints::cosmetics_lego_kits(
            self.language(language),
            self.settings.response_flags,
        ))
    }

    /// Every bean variant.
    pub fn fetch_variants_beans(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<VariantBean>> {
        self.request(endpoints::variants_beans(self.language(language), self.settings.response_flags))
    }

    /// One Battle Royale cosmetic by id.
    pub fn fetch_cosmetic_br(&self, id: &str, language: Option<GameLanguage>) -> Result<CosmeticBr> {
        self.request(endpoints::cosmetic_br(id, self.language(language), self.settings.response_flags))
    }

    /// First Battle Royale cosmetic matching `params`.
    pub fn search_br_cosmetics(&self, params: &CosmeticSearchParams) -> Result<CosmeticBr> {
        self.request(endpoints::search_br_cosmetics(
            params,
            self.settings.default_language,
            self.settings.response_flags,
        ))
    }

    /// Every Battle Royale cosmetic matching `params`.
    pub fn search_br_cosmetics_all(
        &self,
        params: &CosmeticSearchParams,
    ) -> Result<LazyList<CosmeticBr>> {
        self.request(endpoints::search_br_cosmetics_all(
            params,
            self.settings.default_language,
            self.settings.response_flags,
        ))
    }

    /// Cosmetics added in the latest update.
    pub fn fetch_cosmetics_new(&self, language: Option<GameLanguage>) -> Result<NewCosmetics> {
        self.request(endpoints::cosmetics_new(self.language(language), self.settings.response_flags))
    }

    /// The current item shop.
    pub fn fetch_shop(&self, language: Option<GameLanguage>) -> Result<Shop> {
        self.request(endpoints::shop(self.language(language), self.settings.response_flags))
    }

    /// AES keys of the current build.
    pub fn fetch_aes(&self, key_format: KeyFormat) -> Result<Aes> {
        self.request(endpoints::aes(key_format))
    }

    /// News of every game mode.
    pub fn fetch_news(&self, language: Option<GameLanguage>) -> Result<News> {
        self.request(endpoints::news(self.language(language)))
    }

    /// Battle Royale news.
    pub fn fetch_news_br(&self, language: Option<GameLanguage>) -> Result<GameModeNews> {
        self.request(endpoints::news_br(self.language(language)))
    }

    /// Save the World news.
    pub fn fetch_news_stw(&self, language: Option<GameLanguage>) -> Result<GameModeNews> {
        self.request(endpoints::news_stw(self.language(language)))
    }

    /// A creator code; [`Error::NotFound`] if it does not exist.
    pub fn fetch_creator_code(&self, name: &str) -> Result<CreatorCode> {
        self.request(endpoints::creator_code(name))
    }

    /// Battle Royale statistics of the player named `name`. Requires an API key.
    pub fn fetch_br_stats(
        &self,
        name: &str,
        account_type: Option<AccountType>,
        time_window: Option<TimeWindow>,
        image: Option<StatsImageType>,
    ) -> Result<BrPlayerStats> {
        self.request(endpoints::br_stats(name, account_type, time_window, image))
    }

    /// Battle Royale statistics of an account id. Requires an API key.
    pub fn fetch_br_stats_by_id(
        &self,
        account_id: &str,
        time_window: Option<TimeWindow>,
        image: Option<StatsImageType>,
    ) -> Result<BrPlayerStats> {
        self.request(endpoints::br_stats_by_id(account_id, time_window, image))
    }

    /// Every banner.
    pub fn fetch_banners(&self, language: Option<GameLanguage>) -> Result<LazyList<Banner>> {
        self.request(endpoints::banners(self.language(language)))
    }

    /// Every banner color.
    pub fn fetch_banner_colors(&self) -> Result<LazyList<BannerColor>> {
        self.request(endpoints::banner_colors())
    }

    /// Every playlist.
    pub fn fetch_playlists(&self, language: Option<GameLanguage>) -> Result<LazyList<Playlist>> {
        self.request(endpoints::playlists(self.language(language)))
    }

    /// One playlist by id.
    pub fn fetch_playlist(&self, id: &str, language: Option<GameLanguage>) -> Result<Playlist> {
        self.request(endpoints::playlist(id, self.language(language)))
    }

    /// The current map.
    pub fn fetch_map(&self, language: Option<GameLanguage>) -> Result<Map> {
        self.request(endpoints::map(self.language(language)))
    }

    /// Display assets of the shop. Requires beta access.
    pub fn beta_fetch_new_display_assets(&self) -> Result<LazyList<NewDisplayAsset>> {
        self.request(endpoints::beta_new_display_assets())
    }

    /// Material instances of the shop. Requires beta access.
    pub fn beta_fetch_material_instances(&self) -> Result<LazyList<MaterialInstance>> {
        self.request(endpoints::beta_material_instances())
    }

    /// Download the bytes of `asset`.
    pub fn read_asset(&self, asset: &Asset) -> Result<Vec<u8>> {
        let url = Url::parse(&asset.url())?;
        self.execute(url, &[])
    }

    fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        self.settings.language(language)
    }

    fn request<T>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let url = self.settings.url_for(&endpoint)?;
        let body = self
            .execute(url, endpoint.query().pairs())
            .map_err(|err| endpoint.map_error(err))?;
        endpoint.construct(&body, self.settings.response_flags)
    }

    fn execute(&self, url: Url, params: &[(&'static str, String)]) -> Result<Vec<u8>> {
        let path = url.path().to_string();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut request = self
                .http
                .get(url.clone())
                .query(params)
                .header(ACCEPT, "application/json");
            if let Some(key) = &self.settings.api_key {
                request = request.header(AUTHORIZATION, key.expose_secret());
            }

            info!(path = %path, attempt, "Fortnite-API request");

            let response = read_response(request.send()?)?;
            match self.settings.classifier.classify(attempt, response, Utc::now()) {
                Disposition::Done(body) => return Ok(body),
                Disposition::Retry { delay, reason } => {
                    log_retry(&path, attempt, delay, reason);
                    thread::sleep(delay);
                }
                Disposition::Fail(err) => return Err(err),
            }
        }
    }
}

fn read_response(response: Response) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let reset = rate_limit_reset(response.headers());
    let body = response.bytes()?;

    let raw = RawResponse::new(status, body.to_vec());
    Ok(match reset {
        Some(reset) => raw.with_rate_limit_reset(reset),
        None => raw,
    })
}
