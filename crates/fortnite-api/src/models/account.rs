//! Epic Games accounts.

use fortnite_api_core::construct::Construct;
use fortnite_api_core::impl_identity;
use serde::{Deserialize, Serialize};

/// An Epic Games account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Construct for Account {}

impl_identity!(Account);
