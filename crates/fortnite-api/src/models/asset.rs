//! Image assets hosted by the service.

use fortnite_api_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An image referenced by a model.
///
/// The bytes are not fetched until the asset is passed to a client's
/// `read_asset`. PNG assets can be requested at a smaller size with
/// [`resize`](Self::resize).
#[derive(Clone, Eq)]
pub struct Asset {
    url: String,
    max_size: Option<u32>,
    size: Option<u32>,
}

impl Asset {
    /// Asset at `url`, resizable to any power of two.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: None,
            size: None,
        }
    }

    /// Limit how large [`resize`](Self::resize) may go.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// URL of the asset at its current size.
    #[must_use]
    pub fn url(&self) -> String {
        match self.size {
            Some(size) => {
                let base = self.url.strip_suffix(".png").unwrap_or(&self.url);
                format!("{base}_{size}.png")
            }
            None => self.url.clone(),
        }
    }

    /// True for assets that can be resized.
    #[must_use]
    pub fn can_resize(&self) -> bool {
        self.url.ends_with(".png")
    }

    /// Largest size accepted by [`resize`](Self::resize), if bounded.
    #[must_use]
    pub const fn max_size(&self) -> Option<u32> {
        self.max_size
    }

    /// A copy of this asset at `size` pixels.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationError`] if the asset is not a PNG, `size` is not a
    /// power of two, or `size` exceeds the maximum size.
    pub fn resize(&self, size: u32) -> Result<Self> {
        if !self.can_resize() {
            return Err(Error::ValidationError(format!(
                "asset {} cannot be resized",
                self.url
            )));
        }
        if !size.is_power_of_two() {
            return Err(Error::ValidationError(format!(
                "size must be a power of 2, got {size}"
            )));
        }
        if let Some(max_size) = self.max_size {
            if size > max_size {
                return Err(Error::ValidationError(format!(
                    "size must be less than or equal to {max_size}, got {size}"
                )));
            }
        }

        Ok(Self {
            url: self.url.clone(),
            max_size: self.max_size,
            size: Some(size),
        })
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url()
    }
}

impl std::hash::Hash for Asset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.url().hash(state);
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({:?})", self.url())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.url())
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
