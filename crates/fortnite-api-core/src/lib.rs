//! # fortnite-api-core
//!
//! Concurrency-agnostic building blocks of the Fortnite-API clients.
//!
//! Everything in this crate is shared by the asynchronous and the blocking
//! client: the error taxonomy, HTTP settings, request descriptions and the
//! response classifier, plus the machinery that turns JSON payloads into
//! typed models.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and status code mapping
//! - [`client`] - HTTP settings and retry policy
//! - [`config`] - Validated client configuration
//! - [`http`] - Endpoints, envelope unwrapping and response classification
//! - [`query`] - Query parameter builder
//! - [`flags`] - Opt-in response flags
//! - [`enums`] - Request parameter enums and forward-compatible response enums
//! - [`construct`] - Payload to model construction and reconstruction
//! - [`lazy`] - Lazily built lists
//! - [`identity`] - Id-based equality
//! - [`time`] - Timestamp normalization

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod construct;
pub mod enums;
pub mod error;
pub mod flags;
pub mod http;
pub mod identity;
pub mod lazy;
pub mod query;
pub mod time;

// Re-export commonly used types
pub use config::FortniteApiConfig;
pub use construct::{Construct, Reconstruct};
pub use error::{Error, Result};
pub use flags::ResponseFlags;
pub use identity::HasIdentity;
pub use lazy::LazyList;
