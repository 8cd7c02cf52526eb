//! Opt-in response flags.
//!
//! Some fields are only sent by the service when the request asks for them.
//! The client forwards its [`ResponseFlags`] as the `responseFlags` query
//! parameter and models clear every gated field whose flag is not enabled,
//! regardless of what the server actually returned.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional-inclusion toggles for cosmetic and shop responses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ResponseFlags: u32 {
        /// Include asset paths (`path`, `definitionPath`, ...).
        const INCLUDE_PATHS = 1 << 0;
        /// Include gameplay tags.
        const INCLUDE_GAMEPLAY_TAGS = 1 << 1;
        /// Include the dates an item appeared in the shop.
        const INCLUDE_SHOP_HISTORY = 1 << 2;
    }
}

impl ResponseFlags {
    /// No optional fields.
    pub const INCLUDE_NOTHING: Self = Self::empty();

    /// Every optional field.
    pub const INCLUDE_ALL: Self = Self::all();

    /// Value of the `responseFlags` query parameter, or `None` when nothing is enabled.
    #[must_use]
    pub fn to_query_value(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.bits().to_string())
        }
    }

    /// Returns `value` when `flag` is enabled and `T::default()` otherwise.
    #[must_use]
    pub fn gate<T: Default>(self, flag: Self, value: T) -> T {
        if self.contains(flag) {
            value
        } else {
            T::default()
        }
    }

    /// Reset `field` to its default unless `flag` is enabled.
    pub fn clear_unless<T: Default>(self, flag: Self, field: &mut T) {
        if !self.contains(flag) {
            *field = T::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_match_service() {
        assert_eq!(ResponseFlags::INCLUDE_PATHS.bits(), 1);
        assert_eq!(ResponseFlags::INCLUDE_GAMEPLAY_TAGS.bits(), 2);
        assert_eq!(ResponseFlags::INCLUDE_SHOP_HISTORY.bits(), 4);
        assert_eq!(ResponseFlags::INCLUDE_ALL.bits(), 7);
        assert_eq!(ResponseFlags::default(), ResponseFlags::INCLUDE_NOTHING);
    }

    #[test]
    fn query_value_skips_empty() {
        assert_eq!(ResponseFlags::INCLUDE_NOTHING.to_query_value(), None);
        assert_eq!(
            (ResponseFlags::INCLUDE_PATHS | ResponseFlags::INCLUDE_SHOP_HISTORY).to_query_value(),
            Some("5".to_string())
        );
    }

    #[test]
    fn gate_clears_disabled_values() {
        let flags = ResponseFlags::INCLUDE_GAMEPLAY_TAGS;
        let tags = flags.gate(ResponseFlags::INCLUDE_GAMEPLAY_TAGS, vec!["a".to_string()]);
        assert_eq!(tags, vec!["a".to_string()]);

        let path = flags.gate(ResponseFlags::INCLUDE_PATHS, Some("Game/Athena".to_string()));
        assert_eq!(path, None);
    }

    #[test]
    fn clear_unless_resets_in_place() {
        let mut history = vec![1, 2, 3];
        let mut path = Some("Game/Athena".to_string());
        let flags = ResponseFlags::INCLUDE_SHOP_HISTORY;

        flags.clear_unless(ResponseFlags::INCLUDE_SHOP_HISTORY, &mut history);
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut path);
        assert_eq!(history, vec![1, 2, 3]);
        assert_eq!(path, None);
    }
}
