//! Cosmetics added in the latest game update.

use super::{
    CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit, CosmeticTrack, VariantBean,
    VariantLego,
};
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::{time, LazyList, ResponseFlags};
use serde::{Deserialize, Serialize};

/// Content hashes of the new cosmetics, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmeticsHashes {
    /// Hash over every category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<String>,
    /// Battle Royale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub br: Option<String>,
    /// Jam tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<String>,
    /// Instruments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
    /// Cars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cars: Option<String>,
    /// LEGO variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lego: Option<String>,
    /// LEGO kits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lego_kits: Option<String>,
    /// Bean variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beans: Option<String>,
}

/// When each category last received new cosmetics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmeticsLastAdditions {
    /// Any category.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub all: Option<DateTime<Utc>>,
    /// Battle Royale.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub br: Option<DateTime<Utc>>,
    /// Jam tracks.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub tracks: Option<DateTime<Utc>>,
    /// Instruments.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub instruments: Option<DateTime<Utc>>,
    /// Cars.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub cars: Option<DateTime<Utc>>,
    /// LEGO variants.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub lego: Option<DateTime<Utc>>,
    /// LEGO kits.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub lego_kits: Option<DateTime<Utc>>,
    /// Bean variants.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub beans: Option<DateTime<Utc>>,
}

/// New cosmetics, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmeticsItems {
    /// Battle Royale.
    #[serde(default)]
    pub br: LazyList<CosmeticBr>,
    /// Jam tracks.
    #[serde(default)]
    pub tracks: LazyList<CosmeticTrack>,
    /// Instruments.
    #[serde(default)]
    pub instruments: LazyList<CosmeticInstrument>,
    /// Cars.
    #[serde(default)]
    pub cars: LazyList<CosmeticCar>,
    /// LEGO variants.
    #[serde(default)]
    pub lego: LazyList<VariantLego>,
    /// LEGO kits.
    #[serde(default)]
    pub lego_kits: LazyList<CosmeticLegoKit>,
    /// Bean variants.
    #[serde(default)]
    pub beans: LazyList<VariantBean>,
}

/// One category of new cosmetics.
#[derive(Debug)]
pub struct NewCosmetic<'a, T> {
    /// Content hash of the category.
    pub hash: Option<&'a str>,
    /// When the category last received new cosmetics.
    pub last_addition: Option<DateTime<Utc>>,
    /// The new cosmetics.
    pub items: &'a LazyList<T>,
}

/// Cosmetics added in the latest game update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmetics {
    /// Current game build.
    #[serde(default)]
    pub build: String,
    /// Build before the update.
    #[serde(default)]
    pub previous_build: String,
    /// When the update was processed.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Hashes per category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashes: NewCosmeticsHashes,
    /// Last additions per category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_additions: NewCosmeticsLastAdditions,
    /// Items per category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: NewCosmeticsItems,
}

impl NewCosmetics {
    /// Hash over every category.
    #[must_use]
    pub fn global_hash(&self) -> Option<&str> {
        self.hashes.all.as_deref()
    }

    /// When any category last received new cosmetics.
    #[must_use]
    pub const fn global_last_addition(&self) -> Option<DateTime<Utc>> {
        self.last_additions.all
    }

    /// New Battle Royale cosmetics.
    #[must_use]
    pub fn br(&self) -> NewCosmetic<'_, CosmeticBr> {
        NewCosmetic {
            hash: self.hashes.br.as_deref(),
            last_addition: self.last_additions.br,
            items: &self.items.br,
        }
    }

    /// New jam tracks.
    #[must_use]
    pub fn tracks(&self) -> NewCosmetic<'_, CosmeticTrack> {
        NewCosmetic {
            hash: self.hashes.tracks.as_deref(),
            last_addition: self.last_additions.tracks,
            items: &self.items.tracks,
        }
    }

    /// New instruments.
    #[must_use]
    pub fn instruments(&self) -> NewCosmetic<'_, CosmeticInstrument> {
        NewCosmetic {
            hash: self.hashes.instruments.as_deref(),
            last_addition: self.last_additions.instruments,
            items: &self.items.instruments,
        }
    }

    /// New cars.
    #[must_use]
    pub fn cars(&self) -> NewCosmetic<'_, CosmeticCar> {
        NewCosmetic {
            hash: self.hashes.cars.as_deref(),
            last_addition: self.last_additions.cars,
            items: &self.items.cars,
        }
    }

    /// New LEGO variants.
    #[must_use]
    pub fn lego(&self) -> NewCosmetic<'_, VariantLego> {
        NewCosmetic {
            hash: self.hashes.lego.as_deref(),
            last_addition: self.last_additions.lego,
            items: &self.items.lego,
        }
    }

    /// New LEGO kits.
    #[must_use]
    pub fn lego_kits(&self) -> NewCosmetic<'_, CosmeticLegoKit> {
        NewCosmetic {
            hash: self.hashes.lego_kits.as_deref(),
            last_addition: self.last_additions.lego_kits,
            items: &self.items.lego_kits,
        }
    }

    /// New bean variants.
    #[must_use]
    pub fn beans(&self) -> NewCosmetic<'_, VariantBean> {
        NewCosmetic {
            hash: self.hashes.beans.as_deref(),
            last_addition: self.last_additions.beans,
            items: &self.items.beans,
        }
    }
}

impl Construct for NewCosmetics {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        let items = &mut self.items;
        items.br.bind_flags(flags);
        items.tracks.bind_flags(flags);
        items.instruments.bind_flags(flags);
        items.cars.bind_flags(flags);
        items.lego.bind_flags(flags);
        items.lego_kits.bind_flags(flags);
        items.beans.bind_flags(flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn categories_pair_hash_date_and_items() {
        let new = NewCosmetics::construct(
            json!({
                "build": "++Fortnite+Release-31.10-CL-36874825",
                "previousBuild": "++Fortnite+Release-31.00-CL-36443542",
                "date": "2024-08-27T14:03:11Z",
                "hashes": {"all": "a1", "br": "b2", "tracks": null},
                "lastAdditions": {"all": "2024-08-27T14:03:11Z", "br": "2024-08-27T14:03:11Z"},
                "items": {
                    "br": [{"id": "CID_A_001", "path": "Athena/CID_A_001"}],
                    "tracks": null
                }
            }),
            ResponseFlags::INCLUDE_NOTHING,
        )
        .unwrap();

        let added = Utc.with_ymd_and_hms(2024, 8, 27, 14, 3, 11).unwrap();
        assert_eq!(new.global_hash(), Some("a1"));
        assert_eq!(new.global_last_addition(), Some(added));

        let br = new.br();
        assert_eq!(br.hash, Some("b2"));
        assert_eq!(br.last_addition, Some(added));
        assert_eq!(br.items.len(), 1);
        assert_eq!(br.items.first().unwrap().unwrap().path, None);

        let tracks = new.tracks();
        assert_eq!(tracks.hash, None);
        assert!(tracks.items.is_empty());
        assert!(new.beans().items.is_empty());
    }
}
