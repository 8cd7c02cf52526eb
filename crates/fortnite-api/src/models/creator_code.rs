//! Support-A-Creator codes.

use super::Account;
use fortnite_api_core::construct::Construct;
use fortnite_api_core::enums::CreatorCodeStatus;
use serde::{Deserialize, Serialize};

/// A creator code and the account it supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCode {
    /// The code.
    pub code: String,
    /// Supported account.
    pub account: Account,
    /// Whether the code can be used.
    #[serde(default)]
    pub status: CreatorCodeStatus,
    /// Whether the code is verified.
    #[serde(default)]
    pub verified: bool,
}

impl CreatorCode {
    /// True if the code can be used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CreatorCodeStatus::Active
    }
}

impl Construct for CreatorCode {}
