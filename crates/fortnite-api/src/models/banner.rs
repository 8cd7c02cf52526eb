//! Profile banners and their colors.

use super::Asset;
use fortnite_api_core::construct::Construct;
use fortnite_api_core::impl_identity;
use serde::{Deserialize, Serialize};

/// A banner icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Banner id.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Internal name.
    #[serde(default)]
    pub dev_name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the banner may be used freely.
    #[serde(default)]
    pub full_usage_rights: bool,
    /// Small icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<Asset>,
    /// Icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Asset>,
}

impl Construct for Banner {}

/// A banner background color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerColor {
    /// Color id.
    pub id: String,
    /// Hex color.
    #[serde(default)]
    pub color: String,
    /// Category.
    #[serde(default)]
    pub category: String,
    /// Group within the category.
    #[serde(default)]
    pub sub_category_group: i32,
}

impl Construct for BannerColor {}

impl_identity!(Banner, BannerColor);
