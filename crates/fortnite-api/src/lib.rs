//! Typed client for the Fortnite-API.com REST service.
//!
//! Two clients share one surface: [`FortniteClient`] for async code running on
//! tokio and [`blocking::FortniteClient`] for everything else. Both return the
//! same models and the same [`Error`], and both retry rate limited and failing
//! requests per their [`RetryPolicy`](fortnite_api_core::client::RetryPolicy).
//!
//! ```no_run
//! use fortnite_api::{FortniteClient, GameLanguage, ResponseFlags};
//!
//! # async fn run() -> fortnite_api::Result<()> {
//! let client = FortniteClient::builder()
//!     .with_language(GameLanguage::German)
//!     .with_response_flags(ResponseFlags::INCLUDE_PATHS)
//!     .build()?;
//!
//! let shop = client.fetch_shop(None).await?;
//! for entry in shop.entries.iter() {
//!     let entry = entry?;
//!     println!("{} vbucks", entry.final_price);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod models;

pub use client::{FortniteClient, FortniteClientBuilder, USER_AGENT};
pub use fortnite_api_core::client::{ClientConfig, RetryPolicy};
pub use fortnite_api_core::enums::{
    AccountType, BannerIntensity, CosmeticCompatibleMode, CosmeticRarity, CustomGender,
    CosmeticType, CreatorCodeStatus, GameLanguage, KeyFormat, MatchMethod, ProductTag,
    StatsImageType, TileSize, TimeWindow,
};
pub use fortnite_api_core::{
    Construct, Error, FortniteApiConfig, HasIdentity, LazyList, Reconstruct, ResponseFlags,
};
pub use models::*;

/// Result alias over the crate's [`Error`].
pub type Result<T> = fortnite_api_core::Result<T>;
