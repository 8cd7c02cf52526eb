//! Turning payloads into models and back.
//!
//! Every model derives `Deserialize` with required identity fields and
//! defaulted optional ones, then implements [`Construct`] to clear the fields
//! its [`ResponseFlags`] did not ask for. [`Reconstruct`] comes for free for
//! any constructible model that also serializes under the same field names.

use crate::error::{Error, Result};
use crate::flags::ResponseFlags;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A model built from one payload.
pub trait Construct: DeserializeOwned {
    /// Clear flag-gated fields that `flags` does not enable and pass the flags
    /// down to nested models.
    fn apply_flags(&mut self, _flags: ResponseFlags) {}

    /// Build from an owned payload.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] when a required field is missing or a
    /// field has the wrong shape.
    fn construct(payload: Value, flags: ResponseFlags) -> Result<Self> {
        let mut model: Self = serde_json::from_value(payload).map_err(malformed::<Self>)?;
        model.apply_flags(flags);
        Ok(model)
    }

    /// Build from a borrowed payload.
    ///
    /// # Errors
    ///
    /// Same as [`construct`](Self::construct).
    fn construct_ref(payload: &Value, flags: ResponseFlags) -> Result<Self> {
        let mut model = Self::deserialize(payload).map_err(malformed::<Self>)?;
        model.apply_flags(flags);
        Ok(model)
    }
}

fn malformed<T>(err: serde_json::Error) -> Error {
    let name = std::any::type_name::<T>();
    let name = name.rsplit("::").next().unwrap_or(name);
    Error::MalformedResponse(format!("{name}: {err}"))
}

/// A model that can be written back to a payload and rebuilt from it.
pub trait Reconstruct: Construct + Serialize {
    /// Payload holding every field the model was built with.
    ///
    /// # Errors
    ///
    /// Fails only if a field cannot be represented as JSON.
    fn to_payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild from a payload produced by [`to_payload`](Self::to_payload).
    ///
    /// # Errors
    ///
    /// Same as [`Construct::construct`].
    fn reconstruct(payload: Value, flags: ResponseFlags) -> Result<Self> {
        Self::construct(payload, flags)
    }
}

impl<T: Construct + Serialize> Reconstruct for T {}

/// Deserialize `null` as `T::default()`.
///
/// Use with `#[serde(default, deserialize_with = "null_as_default")]`.
///
/// # Errors
///
/// Whatever `T`'s own deserialization returns.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional string, treating `""` like `null`.
///
/// # Errors
///
/// Fails if the value is neither a string nor null.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
