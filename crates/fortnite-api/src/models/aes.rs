//! AES keys of the current game build.

use chrono::{DateTime, Utc};
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::time;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `major.minor` game version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl Version {
    /// First `<digits>.<digits>` sequence in a build string such as
    /// `++Fortnite+Release-31.10-CL-36874825`.
    #[must_use]
    pub fn from_build(build: &str) -> Option<Self> {
        let bytes = build.as_bytes();
        let mut start = 0;
        while start < bytes.len() {
            if !bytes[start].is_ascii_digit() {
                start += 1;
                continue;
            }
            let major_end = start + digits_at(&bytes[start..]);
            if bytes.get(major_end) == Some(&b'.') {
                let minor_len = digits_at(&bytes[major_end + 1..]);
                if minor_len > 0 {
                    let major = build[start..major_end].parse().ok()?;
                    let minor = build[major_end + 1..major_end + 1 + minor_len].parse().ok()?;
                    return Some(Self { major, minor });
                }
            }
            start = major_end;
        }
        None
    }
}

fn digits_at(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Key of a dynamically loaded pak file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicKey {
    /// Pak file name.
    #[serde(default)]
    pub pak_filename: String,
    /// Pak GUID.
    #[serde(default)]
    pub pak_guid: String,
    /// The key.
    #[serde(default)]
    pub key: String,
}

/// AES keys of the current build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aes {
    /// Build string.
    pub build: String,
    /// Key of the main pak files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_key: Option<String>,
    /// Keys of dynamically loaded paks.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dynamic_keys: Vec<DynamicKey>,
    /// When the keys were last updated.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Aes {
    /// Game version parsed from the build string.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        Version::from_build(&self.build)
    }

    /// Key for the pak file named `pak_filename`.
    #[must_use]
    pub fn dynamic_key(&self, pak_filename: &str) -> Option<&DynamicKey> {
        self.dynamic_keys
            .iter()
            .find(|key| key.pak_filename == pak_filename)
    }
}

impl Construct for Aes {}

#[cfg(test)]
mod tests {
    use super::*;
    use fortnite_api_core::ResponseFlags;
    use serde_json::json;

    #[test]
    fn version_from_build() {
        assert_eq!(
            Version::from_build("++Fortnite+Release-31.10-CL-36874825"),
            Some(Version { major: 31, minor: 10 })
        );
        assert_eq!(
            Version::from_build("++Fortnite+Release-4.5-CL-4166199"),
            Some(Version { major: 4, minor: 5 })
        );
        assert_eq!(Version::from_build("++Fortnite+Main-CL-1"), None);
        assert_eq!(Version { major: 4, minor: 5 }.to_string(), "4.5");
    }

    #[test]
    fn aes_from_payload() {
        let aes = Aes::construct(
            json!({
                "build": "++Fortnite+Release-31.10-CL-36874825",
                "mainKey": "0x2CCDFD22AD74FBFEE693A81AC11ACE57E6D10D0B8AC5FA90E793A130BC540ED4",
                "dynamicKeys": [
                    {"pakFilename": "pakchunk1001-WindowsClient.pak", "pakGuid": "E1AD6B1E", "key": "0xABCD"}
                ],
                "updated": "2024-08-27T13:36:46Z"
            }),
            ResponseFlags::INCLUDE_NOTHING,
        )
        .unwrap();

        assert_eq!(aes.version().unwrap().major, 31);
        assert_eq!(
            aes.dynamic_key("pakchunk1001-WindowsClient.pak").unwrap().key,
            "0xABCD"
        );
        assert!(aes.updated.is_some());
    }
}
