//! Asynchronous Fortnite-API client.

use crate::endpoints;
use crate::models::{
    Aes, Asset, Banner, BannerColor, BrPlayerStats, CosmeticBr, CosmeticCar, CosmeticInstrument,
    CosmeticLegoKit, CosmeticSearchParams, CosmeticTrack, CosmeticsAll, CreatorCode,
    GameModeNews, Map, MaterialInstance, NewCosmetics, NewDisplayAsset, News, Playlist, Shop,
    VariantBean, VariantLego,
};
use crate::Result;
use chrono::Utc;
use fortnite_api_core::client::{ClientConfig, RetryPolicy};
use fortnite_api_core::enums::{AccountType, GameLanguage, KeyFormat, StatsImageType, TimeWindow};
use fortnite_api_core::http::{
    Disposition, Endpoint, RawResponse, ResponseClassifier, RetryReason, RATE_LIMIT_RESET_HEADER,
};
use fortnite_api_core::{Error, FortniteApiConfig, LazyList, ResponseFlags};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;
use validator::Validate;

/// User agent sent by both clients.
pub const USER_AGENT: &str = concat!("fortnite-api-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for [`FortniteClient`] and [`blocking::FortniteClient`].
///
/// `H` is the `reqwest` client requests go through. `reqwest::Client` builds
/// the asynchronous client and `reqwest::blocking::Client` the blocking one.
///
/// [`blocking::FortniteClient`]: crate::blocking::FortniteClient
#[derive(Debug, Clone)]
pub struct FortniteClientBuilder<H = Client> {
    config: FortniteApiConfig,
    http_config: Option<ClientConfig>,
    retry_policy: Option<RetryPolicy>,
    http: Option<H>,
}

impl<H> Default for FortniteClientBuilder<H> {
    fn default() -> Self {
        Self {
            config: FortniteApiConfig::default(),
            http_config: None,
            retry_policy: None,
            http: None,
        }
    }
}

impl<H> FortniteClientBuilder<H> {
    /// Builder pointing at the public service with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder starting from an existing configuration.
    #[must_use]
    pub fn from_config(config: FortniteApiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Override the service base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the API key used by the stats endpoints.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(api_key);
        self
    }

    /// Language used when a call passes `None`.
    #[must_use]
    pub fn with_language(mut self, language: GameLanguage) -> Self {
        self.config = self.config.with_language(language);
        self
    }

    /// Allow calls to beta endpoints.
    #[must_use]
    pub fn with_beta(mut self, beta: bool) -> Self {
        self.config = self.config.with_beta(beta);
        self
    }

    /// Optional fields to request and keep.
    #[must_use]
    pub fn with_response_flags(mut self, flags: ResponseFlags) -> Self {
        self.config = self.config.with_response_flags(flags);
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = Some(retry_policy);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    /// Send requests through a caller-owned `reqwest` client.
    ///
    /// Timeout, pool and compression settings of this builder are ignored;
    /// they are the caller's to configure.
    #[must_use]
    pub fn with_http_client(mut self, http: H) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the configuration and resolve everything but the transport.
    pub(crate) fn into_parts(self) -> Result<(Settings, ClientConfig, Option<H>)> {
        self.config
            .validate()
            .map_err(|err| Error::ConfigError(format!("Invalid configuration: {err}")))?;
        let base_url = with_trailing_slash(self.config.parse_base_url()?);

        let http_config = self
            .http_config
            .unwrap_or_else(|| self.config.client_config());
        let retry_policy = self.retry_policy.unwrap_or(http_config.retry_policy);

        let settings = Settings {
            base_url,
            api_key: self.config.api_key,
            default_language: self.config.default_language,
            beta: self.config.beta,
            response_flags: self.config.response_flags,
            classifier: ResponseClassifier::new(retry_policy),
        };
        Ok((settings, http_config, self.http))
    }
}

impl FortniteClientBuilder<Client> {
    /// Build the asynchronous client.
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

/// Everything a client needs besides its transport.
#[derive(Clone)]
pub(crate) struct Settings {
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<SecretString>,
    pub(crate) default_language: GameLanguage,
    pub(crate) beta: bool,
    pub(crate) response_flags: ResponseFlags,
    pub(crate) classifier: ResponseClassifier,
}

impl Settings {
    pub(crate) fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        language.unwrap_or(self.default_language)
    }

    /// Local access checks, then the absolute URL of `endpoint`.
    pub(crate) fn url_for<T>(&self, endpoint: &Endpoint<T>) -> Result<Url> {
        endpoint.check_access(self.api_key.is_some(), self.beta)?;
        build_url(&self.base_url, endpoint.path())
    }

    pub(crate) fn fmt_as(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(name)
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .field("default_language", &self.default_language)
            .field("beta", &self.beta)
            .field("response_flags", &self.response_flags)
            .finish_non_exhaustive()
    }
}

/// Asynchronous Fortnite-API client.
///
/// The connection pool lives as long as the client; dropping it (or calling
/// [`close`](Self::close)) releases the pool unless it was supplied through
/// [`FortniteClientBuilder::with_http_client`].
#[derive(Clone)]
pub struct FortniteClient {
    http: Client,
    owns_transport: bool,
    settings: Settings,
}

impl fmt::Debug for FortniteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.settings.fmt_as("FortniteClient", f)
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
    pub fn builder() -> FortniteClientBuilder<Client> {
        FortniteClientBuilder::new()
    }

    /// Client built from `config`.
    ///
    /// # Errors
    ///
    /// Same as building through [`builder`](Self::builder).
    pub fn from_config(config: FortniteApiConfig) -> Result<Self> {
        FortniteClientBuilder::<Client>::from_config(config).build()
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
        debug!(owned = self.owns_transport, "Closing Fortnite-API client");
    }

    /// Every cosmetic of every category.
    pub async fn fetch_cosmetics_all(&self, language: Option<GameLanguage>) -> Result<CosmeticsAll> {
        self.request(endpoints::cosmetics_all(self.language(language), self.settings.response_flags))
            .await
    }

    /// Every Battle Royale cosmetic.
    pub async fn fetch_cosmetics_br(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticBr>> {
        self.request(endpoints::cosmetics_br(self.language(language), self.settings.response_flags))
            .await
    }

    /// Every jam track.
    pub async fn fetch_cosmetics_tracks(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticTrack>> {
        self.request(endpoints::cosmetics_tracks(self.language(language), self.settings.response_flags))
            .await
    }

    /// Every instrument.
    pub async fn fetch_cosmetics_instruments(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticInstrument>> {
        self.request(endpoints::cosmetics_instruments(
            self.language(language),
            self.settings.response_flags,
        ))
        .await
    }

    /// Every car cosmetic.
    pub async fn fetch_cosmetics_cars(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticCar>> {
        self.request(endpoints::cosmetics_cars(self.language(language), self.settings.response_flags))
            .await
    }

    /// Every LEGO variant.
    pub async fn fetch_variants_lego(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<VariantLego>> {
        self.request(endpoints::variants_lego(self.language(language), self.settings.response_flags))
            .await
    }

    /// Every LEGO kit.
    pub async fn fetch_cosmetics_lego_kits(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<CosmeticLegoKit>> {
        self.request(endpoints::cosmetics_lego_kits(
            self.language(language),
            self.settings.response_flags,
        ))
        .await
    }

    /// Every bean variant.
    pub async fn fetch_variants_beans(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<VariantBean>> {
        self.request(endpoints::variants_beans(self.language(language), self.settings.response_flags))
            .await
    }

    /// One Battle Royale cosmetic by id.
    pub async fn fetch_cosmetic_br(
        &self,
        id: &str,
        language: Option<GameLanguage>,
    ) -> Result<CosmeticBr> {
        self.request(endpoints::cosmetic_br(id, self.language(language), self.settings.response_flags))
            .await
    }

    /// First Battle Royale cosmetic matching `params`.
    pub async fn search_br_cosmetics(&self, params: &CosmeticSearchParams) -> Result<CosmeticBr> {
        self.request(endpoints::search_br_cosmetics(
            params,
            self.settings.default_language,
            self.settings.response_flags,
        ))
        .await
    }

    /// Every Battle Royale cosmetic matching `params`.
    pub async fn search_br_cosmetics_all(
        &self,
        params: &CosmeticSearchParams,
    ) -> Result<LazyList<CosmeticBr>> {
        self.request(endpoints::search_br_cosmetics_all(
            params,
            self.settings.default_language,
            self.settings.response_flags,
        ))
        .await
    }

    /// Cosmetics added in the latest update.
    pub async fn fetch_cosmetics_new(&self, language: Option<GameLanguage>) -> Result<NewCosmetics> {
        self.request(endpoints::cosmetics_new(self.language(language), self.settings.response_flags))
            .await
    }

    /// The current item shop.
    pub async fn fetch_shop(&self, language: Option<GameLanguage>) -> Result<Shop> {
        self.request(endpoints::shop(self.language(language), self.settings.response_flags))
            .await
    }

    /// AES keys of the current build.
    pub async fn fetch_aes(&self, key_format: KeyFormat) -> Result<Aes> {
        self.request(endpoints::aes(key_format)).await
    }

    /// News of every game mode.
    pub async fn fetch_news(&self, language: Option<GameLanguage>) -> Result<News> {
        self.request(endpoints::news(self.language(language))).await
    }

    /// Battle Royale news.
    pub async fn fetch_news_br(&self, language: Option<GameLanguage>) -> Result<GameModeNews> {
        self.request(endpoints::news_br(self.language(language))).await
    }

    /// Save the World news.
    pub async fn fetch_news_stw(&self, language: Option<GameLanguage>) -> Result<GameModeNews> {
        self.request(endpoints::news_stw(self.language(language))).await
    }

    /// A creator code; [`Error::NotFound`] if it does not exist.
    pub async fn fetch_creator_code(&self, name: &str) -> Result<CreatorCode> {
        self.request(endpoints::creator_code(name)).await
    }

    /// Battle Royale statistics of the player named `name`. Requires an API key.
    pub async fn fetch_br_stats(
        &self,
        name: &str,
        account_type: Option<AccountType>,
        time_window: Option<TimeWindow>,
        image: Option<StatsImageType>,
    ) -> Result<BrPlayerStats> {
        self.request(endpoints::br_stats(name, account_type, time_window, image))
            .await
    }

    /// Battle Royale statistics of an account id. Requires an API key.
    pub async fn fetch_br_stats_by_id(
        &self,
        account_id: &str,
        time_window: Option<TimeWindow>,
        image: Option<StatsImageType>,
    ) -> Result<BrPlayerStats> {
        self.request(endpoints::br_stats_by_id(account_id, time_window, image))
            .await
    }

    /// Every banner.
    pub async fn fetch_banners(&self, language: Option<GameLanguage>) -> Result<LazyList<Banner>> {
        self.request(endpoints::banners(self.language(language))).await
    }

    /// Every banner color.
    pub async fn fetch_banner_colors(&self) -> Result<LazyList<BannerColor>> {
        self.request(endpoints::banner_colors()).await
    }

    /// Every playlist.
    pub async fn fetch_playlists(
        &self,
        language: Option<GameLanguage>,
    ) -> Result<LazyList<Playlist>> {
        self.request(endpoints::playlists(self.language(language))).await
    }

    /// One playlist by id.
    pub async fn fetch_playlist(&self, id: &str, language: Option<GameLanguage>) -> Result<Playlist> {
        self.request(endpoints::playlist(id, self.language(language))).await
    }

    /// The current map.
    pub async fn fetch_map(&self, language: Option<GameLanguage>) -> Result<Map> {
        self.request(endpoints::map(self.language(language))).await
    }

    /// Display assets of the shop. Requires beta access.
    pub async fn beta_fetch_new_display_assets(&self) -> Result<LazyList<NewDisplayAsset>> {
        self.request(endpoints::beta_new_display_assets()).await
    }

    /// Material instances of the shop. Requires beta access.
    pub async fn beta_fetch_material_instances(&self) -> Result<LazyList<MaterialInstance>> {
        self.request(endpoints::beta_material_instances()).await
    }

    /// Download the bytes of `asset`.
    pub async fn read_asset(&self, asset: &Asset) -> Result<Vec<u8>> {
        let url = Url::parse(&asset.url())?;
        self.execute(url, &[]).await
    }

    fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        self.settings.language(language)
    }

    async fn request<T>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let url = self.settings.url_for(&endpoint)?;
        let body = self
            .execute(url, endpoint.query().pairs())
            .await
            .map_err(|err| endpoint.map_error(err))?;
        endpoint.construct(&body, self.settings.response_flags)
    }

    async fn execute(&self, url: Url, params: &[(&'static str, String)]) -> Result<Vec<u8>> {
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

            let response = read_response(request.send().await?).await?;
            match self.settings.classifier.classify(attempt, response, Utc::now()) {
                Disposition::Done(body) => return Ok(body),
                Disposition::Retry { delay, reason } => {
                    log_retry(&path, attempt, delay, reason);
                    sleep(delay).await;
                }
                Disposition::Fail(err) => return Err(err),
            }
        }
    }
}

async fn read_response(response: Response) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let reset = rate_limit_reset(response.headers());
    let body = response.bytes().await?;

    let raw = RawResponse::new(status, body.to_vec());
    Ok(match reset {
        Some(reset) => raw.with_rate_limit_reset(reset),
        None => raw,
    })
}

pub(crate) fn log_retry(path: &str, attempt: u32, delay: Duration, reason: RetryReason) {
    match reason {
        RetryReason::RateLimited => {
            warn!(path, attempt, ?delay, "Rate limited, waiting for reset");
        }
        RetryReason::ServerError(status) => {
            debug!(path, attempt, status, ?delay, "Retrying Fortnite-API request");
        }
    }
}

pub(crate) fn transport_build_error(err: reqwest::Error) -> Error {
    Error::ConfigError(format!("Failed to build Fortnite-API HTTP client: {err}"))
}

pub(crate) fn rate_limit_reset(headers: &HeaderMap) -> Option<String> {
    headers
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

pub(crate) fn build_url(base_url: &Url, path: &str) -> Result<Url> {
    let normalized = path.strip_prefix('/').unwrap_or(path);

    if normalized.split('/').any(is_unsafe_segment) {
        return Err(Error::InvalidEndpoint(format!(
            "Invalid Fortnite-API path `{path}`: empty or relative segment"
        )));
    }

    base_url.join(normalized).map_err(|err| {
        Error::InvalidEndpoint(format!("Invalid Fortnite-API path `{path}`: {err}"))
    })
}

// Empty, `.` and `..` segments (percent-encoded dots included) would move the
// request off its route once joined onto the base URL.
fn is_unsafe_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded.is_empty() || decoded == "." || decoded == ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_retries() -> RetryPolicy {
        RetryPolicy::new()
            .with_max_retries(2)
            .with_initial_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(5))
    }

    fn test_client(server: &MockServer) -> FortniteClient {
        FortniteClient::builder()
            .with_base_url(server.uri())
            .with_retry_policy(fast_retries())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn fetch_cosmetic_applies_flags() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/cosmetics/br/CID_028_Athena_Commando_F"))
            .and(query_param("language", "en"))
            .and(query_param("responseFlags", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {
                    "id": "CID_028_Athena_Commando_F",
                    "name": "Renegade Raider",
                    "path": "Athena/Items/Cosmetics/Characters/CID_028_Athena_Commando_F",
                    "gameplayTags": ["Cosmetics.Source.ItemShop"]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_response_flags(ResponseFlags::INCLUDE_GAMEPLAY_TAGS)
            .build()
            .unwrap();

        let cosmetic = client
            .fetch_cosmetic_br("CID_028_Athena_Commando_F", None)
            .await
            .unwrap();
        assert_eq!(cosmetic.name, "Renegade Raider");
        assert_eq!(cosmetic.path, None);
        assert_eq!(cosmetic.gameplay_tags.len(), 1);
    }

    #[tokio::test]
    async fn explicit_language_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/news/br"))
            .and(query_param("language", "fr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"hash": "ab12", "motds": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_language(GameLanguage::German)
            .build()
            .unwrap();

        let news = client.fetch_news_br(Some(GameLanguage::French)).await.unwrap();
        assert_eq!(news.hash.as_deref(), Some("ab12"));
    }

    #[tokio::test]
    async fn creator_code_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/creatorcode"))
            .and(query_param("name", "nobody"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "error": "the requested creator code was not found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_creator_code("nobody")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        match err {
            Error::NotFound(detail) => assert_eq!(
                detail.message.as_deref(),
                Some("the requested creator code was not found")
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn stats_without_key_fail_locally() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_br_stats("Ninja", None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(_)));
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn stats_send_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/stats/br/v2"))
            .and(header("Authorization", "secret-key"))
            .and(query_param("name", "Ninja"))
            .and(query_param("timeWindow", "lifetime"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"account": {"id": "4735ce91", "name": "Ninja"}, "stats": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_api_key("secret-key")
            .build()
            .unwrap();

        let stats = client
            .fetch_br_stats("Ninja", None, Some(TimeWindow::Lifetime), None)
            .await
            .unwrap();
        assert_eq!(stats.account.name, "Ninja");
    }

    #[tokio::test]
    async fn invalid_key_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/stats/br/v2/4735ce91"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": 401,
                "error": "invalid or missing api key"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_api_key("wrong")
            .build()
            .unwrap();

        let err = client.fetch_br_stats_by_id("4735ce91", None, None).await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[tokio::test]
    async fn beta_requires_flag() {
        let server = MockServer::start().await;
        let err = test_client(&server)
            .beta_fetch_material_instances()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BetaAccessNotEnabled(_)));
    }

    #[tokio::test]
    async fn beta_wraps_malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/beta/newdisplayassets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"unexpected": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_beta(true)
            .build()
            .unwrap();

        let err = client.beta_fetch_new_display_assets().await.unwrap_err();
        match err {
            Error::BetaUnknown { original } => {
                assert!(matches!(*original, Error::MalformedResponse(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_waits_for_reset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/aes"))
            .respond_with(
                ResponseTemplate::new(429).insert_header(RATE_LIMIT_RESET_HEADER, "2000-01-01T00:00:00Z"),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/aes"))
            .and(query_param("keyFormat", "hex"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"build": "++Fortnite+Release-31.10-CL-36874825", "mainKey": "0x00"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let aes = test_client(&server).fetch_aes(KeyFormat::Hex).await.unwrap();
        assert_eq!(aes.version().unwrap().minor, 10);
    }

    #[tokio::test]
    async fn rate_limit_without_reset_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "status": 429,
                "error": "too many requests"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_map(None).await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn server_errors_retry_until_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/shop"))
            .respond_with(ResponseTemplate::new(502))
            .expect(3)
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_shop(None).await.unwrap_err();
        assert!(matches!(err, Error::ServiceUnavailable(_)));
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn server_error_then_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/banners/colors"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/banners/colors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": [{"id": "DefaultColor1", "color": "#8c8c8c", "category": "Default", "subCategoryGroup": 1}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let colors = test_client(&server).fetch_banner_colors().await.unwrap();
        assert_eq!(colors.len(), 1);
    }

    #[tokio::test]
    async fn bad_request_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": 400,
                "error": "Invalid value for parameter 'language'"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_playlists(None).await.unwrap_err();
        assert!(matches!(err, Error::HttpError(_)));
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn read_asset_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/cosmetics/br/cid_028_athena_commando_f/icon_128.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
            .expect(1)
            .mount(&server)
            .await;

        let asset = Asset::new(format!(
            "{}/images/cosmetics/br/cid_028_athena_commando_f/icon.png",
            server.uri()
        ))
        .resize(128)
        .unwrap();

        let bytes = test_client(&server).read_asset(&asset).await.unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn caller_supplied_http_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/map"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"images": {"blank": "https://fortnite-api.com/images/map.png"}, "pois": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FortniteClient::builder()
            .with_base_url(server.uri())
            .with_http_client(reqwest::Client::new())
            .build()
            .unwrap();

        let map = client.fetch_map(None).await.unwrap();
        assert!(map.pois.is_empty());
        client.close();
    }

    #[test]
    fn base_url_keeps_its_path() {
        let base = with_trailing_slash(Url::parse("https://example.com/fortnite").unwrap());
        let url = build_url(&base, "/v2/shop").unwrap();
        assert_eq!(url.as_str(), "https://example.com/fortnite/v2/shop");
    }

    #[test]
    fn relative_segments_are_rejected() {
        let base = with_trailing_slash(Url::parse("https://example.com/fortnite").unwrap());
        for bad in ["v1/playlists/..", "v1/playlists/%2E%2e", "v1/playlists/", "v2//shop"] {
            let err = build_url(&base, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidEndpoint(_)), "{bad}");
        }

        let url = build_url(&base, "v2/cosmetics/br/..%2Fv1%2Fmap").unwrap();
        assert_eq!(url.path(), "/fortnite/v2/cosmetics/br/..%2Fv1%2Fmap");
    }

    #[tokio::test]
    async fn playlist_id_is_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/playlists/a%3Fb%23c"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"id": "a?b#c", "name": "Odd"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let playlist = test_client(&server).fetch_playlist("a?b#c", None).await.unwrap();
        assert_eq!(playlist.id, "a?b#c");
    }

    #[tokio::test]
    async fn dot_id_fails_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_playlist("..", None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn both_builders_resolve_the_same_settings() {
        let async_client = FortniteClient::builder()
            .with_base_url("https://example.com/fortnite")
            .with_language(GameLanguage::German)
            .with_beta(true)
            .with_response_flags(ResponseFlags::INCLUDE_PATHS)
            .build()
            .unwrap();
        let blocking_client = crate::blocking::FortniteClient::builder()
            .with_base_url("https://example.com/fortnite")
            .with_language(GameLanguage::German)
            .with_beta(true)
            .with_response_flags(ResponseFlags::INCLUDE_PATHS)
            .build()
            .unwrap();

        assert_eq!(async_client.base_url().as_str(), "https://example.com/fortnite/");
        assert_eq!(async_client.base_url(), blocking_client.base_url());
        assert_eq!(async_client.default_language(), blocking_client.default_language());
        assert_eq!(async_client.response_flags(), blocking_client.response_flags());
        assert!(async_client.beta() && blocking_client.beta());

        let err = crate::blocking::FortniteClient::builder()
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn retry_policy_falls_back_to_http_config() {
        let (settings, http_config, http) = FortniteClientBuilder::<Client>::new()
            .with_http_config(ClientConfig::new().without_retries())
            .into_parts()
            .unwrap();
        assert!(http.is_none());
        assert_eq!(http_config.retry_policy, RetryPolicy::no_retry());
        assert_eq!(settings.classifier.policy(), &RetryPolicy::no_retry());

        let (settings, _, _) = FortniteClientBuilder::<Client>::new()
            .with_http_config(ClientConfig::new().without_retries())
            .with_retry_policy(fast_retries())
            .into_parts()
            .unwrap();
        assert_eq!(settings.classifier.policy(), &fast_retries());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = FortniteClient::builder()
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn debug_hides_api_key() {
        let client = FortniteClient::builder()
            .with_api_key("secret-key")
            .build()
            .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("has_api_key: true"));
    }
}
