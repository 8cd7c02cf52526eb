//! Display assets used to render shop tiles.

use super::Asset;
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::enums::{CosmeticCompatibleMode, ProductTag};
use fortnite_api_core::impl_identity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A pre-rendered image of a display asset for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderImage {
    /// Product the image is rendered for.
    #[serde(default)]
    pub product_tag: ProductTag,
    /// Source file name.
    #[serde(default)]
    pub file_name: String,
    /// The rendered image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
}

/// A material instance, the child of a parent material that styles a shop tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialInstance {
    /// Material instance id.
    pub id: String,
    /// Game mode the material is made for.
    #[serde(default)]
    pub primary_mode: CosmeticCompatibleMode,
    /// Product the material is made for.
    #[serde(default)]
    pub product_tag: ProductTag,
    /// Images keyed by parameter name, e.g. `OfferImage`.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub images: HashMap<String, Asset>,
    /// Hex colors keyed by parameter name, e.g. `Background_Color_A`.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub colors: HashMap<String, String>,
    /// Scalar parameters.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub scalings: HashMap<String, Value>,
    /// Flag parameters.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub flags: HashMap<String, Value>,
}

impl MaterialInstance {
    /// The offer image.
    #[must_use]
    pub fn offer_image(&self) -> Option<&Asset> {
        self.images.get("OfferImage")
    }

    /// The background image.
    #[must_use]
    pub fn background(&self) -> Option<&Asset> {
        self.images.get("Background")
    }

    /// First background gradient color.
    #[must_use]
    pub fn background_color_a(&self) -> Option<&str> {
        self.colors.get("Background_Color_A").map(String::as_str)
    }

    /// Second background gradient color.
    #[must_use]
    pub fn background_color_b(&self) -> Option<&str> {
        self.colors.get("Background_Color_B").map(String::as_str)
    }

    /// Fall-off color.
    #[must_use]
    pub fn fall_off_color(&self) -> Option<&str> {
        self.colors.get("FallOff_Color").map(String::as_str)
    }
}

impl Construct for MaterialInstance {}

/// Visual representation of a cosmetic in the shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDisplayAsset {
    /// Display asset id.
    pub id: String,
    /// Id of the cosmetic it represents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosmetic_id: Option<String>,
    /// Material instances styling the tile.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub material_instances: Vec<MaterialInstance>,
    /// Pre-rendered images per product.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub render_images: Vec<RenderImage>,
}

impl NewDisplayAsset {
    /// Render image for `product`, if any.
    #[must_use]
    pub fn render_image(&self, product: &ProductTag) -> Option<&RenderImage> {
        self.render_images.iter().find(|image| &image.product_tag == product)
    }
}

impl Construct for NewDisplayAsset {}

impl_identity!(MaterialInstance, NewDisplayAsset);
