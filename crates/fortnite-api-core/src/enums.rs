//! Enumerations used in requests and responses.
//!
//! Request parameters are closed enums: the client only ever sends values it
//! knows. Response values come from a schema this crate does not control, so
//! response enums carry two extra variants: [`Other`](CosmeticRarity::Other)
//! holds any unrecognized raw value verbatim and `Unknown` stands in for a
//! value that was absent or null.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Closed enum sent as a query parameter value.
macro_rules! param_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the value sent to the service.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            /// Returns all variants.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(Error::ValidationError(format!(
                        concat!("Unknown ", stringify!($name), ": {}"),
                        s
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Open enum received from the service, tolerant of values added later.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the crate.
            Other(String),
            /// The value was absent or null.
            #[default]
            Unknown,
        }

        impl $name {
            /// Map a raw value onto a variant, never failing.
            #[must_use]
            pub fn from_raw(raw: &str) -> Self {
                match raw {
                    $( $value => Self::$variant, )+
                    "" => Self::Unknown,
                    other => Self::Other(other.to_string()),
                }
            }

            /// The raw value as sent by the service.
            #[must_use]
            pub fn raw_value(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(raw) => raw,
                    Self::Unknown => "",
                }
            }

            /// True for variants this crate recognizes.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_) | Self::Unknown)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from_raw(s))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from_raw(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.raw_value())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                match self {
                    Self::Unknown => serializer.serialize_none(),
                    other => serializer.serialize_str(other.raw_value()),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
                Ok(match value {
                    None | Some(serde_json::Value::Null) => Self::Unknown,
                    Some(serde_json::Value::String(raw)) => Self::from_raw(&raw),
                    Some(other) => Self::Other(other.to_string()),
                })
            }
        }
    };
}

param_enum! {
    /// Languages the service can localize responses into.
    GameLanguage {
        /// Arabic
        Arabic => "ar",
        /// German
        German => "de",
        /// English
        English => "en",
        /// Spanish
        Spanish => "es",
        /// Latin American Spanish
        SpanishLatin => "es-419",
        /// French
        French => "fr",
        /// Indonesian
        Indonesian => "id",
        /// Italian
        Italian => "it",
        /// Japanese
        Japanese => "ja",
        /// Korean
        Korean => "ko",
        /// Polish
        Polish => "pl",
        /// Brazilian Portuguese
        PortugueseBrazil => "pt-BR",
        /// Russian
        Russian => "ru",
        /// Thai
        Thai => "th",
        /// Turkish
        Turkish => "tr",
        /// Vietnamese
        Vietnamese => "vi",
        /// Simplified Chinese
        ChineseSimplified => "zh-Hans",
        /// Traditional Chinese
        ChineseTraditional => "zh-Hant",
    }
}

impl Default for GameLanguage {
    fn default() -> Self {
        Self::English
    }
}

param_enum! {
    /// How a search term is matched.
    MatchMethod {
        /// Whole value must match.
        Full => "full",
        /// Value contains the term.
        Contains => "contains",
        /// Value starts with the term.
        Starts => "starts",
        /// Value ends with the term.
        Ends => "ends",
    }
}

param_enum! {
    /// Encoding of AES keys.
    KeyFormat {
        /// Hex encoded keys.
        Hex => "hex",
        /// Base64 encoded keys.
        Base64 => "base64",
    }
}

param_enum! {
    /// Platform an account name belongs to.
    AccountType {
        /// Epic Games account.
        Epic => "epic",
        /// PlayStation Network account.
        Psn => "psn",
        /// Xbox Live account.
        Xbl => "xbl",
    }
}

param_enum! {
    /// Period covered by player statistics.
    TimeWindow {
        /// Current season only.
        Season => "season",
        /// Lifetime.
        Lifetime => "lifetime",
    }
}

param_enum! {
    /// Input type rendered in the stats image.
    StatsImageType {
        /// All inputs.
        All => "all",
        /// Keyboard and mouse.
        KeyboardMouse => "keyboardMouse",
        /// Gamepad.
        Gamepad => "gamepad",
        /// Touch.
        Touch => "touch",
        /// No image.
        None => "none",
    }
}

api_enum! {
    /// Rarity of a cosmetic.
    CosmeticRarity {
        /// Frozen series
        Frozen => "frozen",
        /// Lava series
        Lava => "lava",
        /// Legendary
        Legendary => "legendary",
        /// Gaming Legends series
        GamingLegends => "gaminglegends",
        /// Dark series
        Dark => "dark",
        /// Star Wars series
        StarWars => "starwars",
        /// Marvel series
        Marvel => "marvel",
        /// DC series
        Dc => "dc",
        /// Icon series
        IconSeries => "icon",
        /// Shadow series
        Shadow => "shadow",
        /// Slurp series
        Slurp => "slurp",
        /// Epic
        Epic => "epic",
        /// Lamborghini series
        Lamborghini => "lamborghini",
        /// Rare
        Rare => "rare",
        /// Uncommon
        Uncommon => "uncommon",
        /// Common
        Common => "common",
        /// Mythic
        Mythic => "mythic",
    }
}

api_enum! {
    /// Type of a cosmetic.
    CosmeticType {
        /// Outfit
        Outfit => "outfit",
        /// Back bling
        Backpack => "backpack",
        /// Pet
        Pet => "pet",
        /// Pet carrier
        PetCarrier => "petcarrier",
        /// Harvesting tool
        Pickaxe => "pickaxe",
        /// Glider
        Glider => "glider",
        /// Contrail
        Contrail => "contrail",
        /// Aura
        Aura => "aura",
        /// Emote
        Emote => "emote",
        /// Emoticon
        Emoji => "emoji",
        /// Spray
        Spray => "spray",
        /// Toy
        Toy => "toy",
        /// Wrap
        Wrap => "wrap",
        /// Banner
        Banner => "banner",
        /// Music pack
        Music => "music",
        /// Loading screen
        LoadingScreen => "loadingscreen",
        /// Guitar
        Guitar => "guitar",
        /// Bass
        Bass => "bass",
        /// Drums
        Drums => "drum",
        /// Microphone
        Microphone => "mic",
        /// Keytar
        Keytar => "keyboard",
        /// Car body
        CarBody => "body",
        /// Car decal
        Decal => "skin",
        /// Wheels
        Wheels => "wheel",
        /// Drift trail
        Trail => "drifttrail",
        /// Boost
        Boost => "booster",
        /// Jam track
        JamTrack => "track",
        /// LEGO build
        LegoBuild => "legoset",
        /// LEGO decor bundle
        LegoDecorBundle => "legoprop",
        /// Shout
        Shout => "shout",
    }
}

api_enum! {
    /// Game mode a cosmetic or material is compatible with.
    CosmeticCompatibleMode {
        /// Battle Royale
        BattleRoyale => "ECosmeticCompatibleMode::BattleRoyale",
        /// LEGO Fortnite
        Lego => "ECosmeticCompatibleMode::Juno",
        /// Rocket Racing
        RocketRacing => "ECosmeticCompatibleMode::DelMar",
        /// Fortnite Festival
        Festival => "ECosmeticCompatibleMode::Sparks",
    }
}

api_enum! {
    /// Product a display asset renders for.
    ProductTag {
        /// Battle Royale
        BattleRoyale => "Product.BR",
        /// LEGO Fortnite
        Lego => "Product.Juno",
        /// Rocket Racing
        RocketRacing => "Product.DelMar",
        /// Fortnite Festival
        Festival => "Product.Sparks",
    }
}

api_enum! {
    /// Body type of a bean variant.
    CustomGender {
        /// Female
        Female => "EFortCustomGender::Female",
        /// Male
        Male => "EFortCustomGender::Male",
    }
}

api_enum! {
    /// Emphasis of a shop banner.
    BannerIntensity {
        /// Low
        Low => "Low",
        /// Medium
        Medium => "Medium",
        /// High
        High => "High",
    }
}

api_enum! {
    /// Width of a shop tile.
    TileSize {
        /// Small
        Small => "Small",
        /// Normal
        Normal => "Normal",
        /// Double wide
        DoubleWide => "DoubleWide",
        /// Triple wide
        TripleWide => "TripleWide",
    }
}

api_enum! {
    /// Status of a creator code.
    CreatorCodeStatus {
        /// Active
        Active => "active",
        /// Disabled
        Disabled => "disabled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_enum_round_trips_through_str() {
        for language in GameLanguage::all() {
            assert_eq!(&language.as_str().parse::<GameLanguage>().unwrap(), language);
        }
        assert_eq!(GameLanguage::default(), GameLanguage::English);
        assert_eq!(StatsImageType::KeyboardMouse.to_string(), "keyboardMouse");
    }

    #[test]
    fn param_enum_rejects_unknown_values() {
        let err = "klingon".parse::<GameLanguage>().unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn api_enum_recognizes_known_values() {
        let rarity: CosmeticRarity = serde_json::from_value(json!("legendary")).unwrap();
        assert_eq!(rarity, CosmeticRarity::Legendary);
        assert!(rarity.is_known());
    }

    #[test]
    fn api_enum_keeps_unrecognized_raw_value() {
        let rarity: CosmeticRarity = serde_json::from_value(json!("transcendent")).unwrap();
        assert_eq!(rarity, CosmeticRarity::Other("transcendent".to_string()));
        assert_eq!(rarity.raw_value(), "transcendent");
        assert!(!rarity.is_known());
    }

    #[test]
    fn api_enum_keeps_non_string_raw_value() {
        let tile: TileSize = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(tile, TileSize::Other("3".to_string()));
        assert_eq!(tile.raw_value(), "3");
    }

    #[test]
    fn api_enum_null_is_unknown() {
        let mode: CosmeticCompatibleMode = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(mode, CosmeticCompatibleMode::Unknown);
        assert_eq!(CosmeticType::default(), CosmeticType::Unknown);
    }

    #[test]
    fn api_enum_serializes_raw_value() {
        assert_eq!(
            serde_json::to_value(CosmeticType::Other("sidekick".to_string())).unwrap(),
            json!("sidekick")
        );
        assert_eq!(
            serde_json::to_value(CustomGender::Female).unwrap(),
            json!("EFortCustomGender::Female")
        );
        assert_eq!(serde_json::to_value(TileSize::Unknown).unwrap(), json!(null));
    }
}
