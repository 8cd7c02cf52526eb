//! Query string builder.
//!
//! Endpoints collect their parameters here instead of formatting URLs by
//! hand; absent optional values are simply skipped.

use crate::enums::GameLanguage;
use crate::flags::ResponseFlags;
use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append the `language` parameter.
    pub fn push_language(&mut self, language: GameLanguage) {
        self.push("language", language.as_str());
    }

    /// Append `responseFlags` unless no flag is enabled.
    pub fn push_flags(&mut self, flags: ResponseFlags) {
        self.push_opt("responseFlags", flags.to_query_value());
    }

    /// Chaining form of [`push`](Self::push).
    #[must_use]
    pub fn with<T: Display>(mut self, key: &'static str, value: T) -> Self {
        self.push(key, value);
        self
    }

    /// Borrow the collected pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Value of the first pair named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("name", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn push_flags_skips_empty_flags() {
        let mut params = QueryParams::new();
        params.push_flags(ResponseFlags::INCLUDE_NOTHING);
        assert!(params.is_empty());

        params.push_flags(ResponseFlags::INCLUDE_PATHS | ResponseFlags::INCLUDE_GAMEPLAY_TAGS);
        assert_eq!(params.get("responseFlags"), Some("3"));
    }

    #[test]
    fn pairs_keep_insertion_order() {
        let mut params = QueryParams::new().with("name", "Renegade Raider");
        params.push_language(GameLanguage::PortugueseBrazil);
        params.push_opt("hasVariants", Some(true));

        assert_eq!(
            params.into_pairs(),
            vec![
                ("name", "Renegade Raider".to_string()),
                ("language", "pt-BR".to_string()),
                ("hasVariants", "true".to_string()),
            ]
        );
    }
}
