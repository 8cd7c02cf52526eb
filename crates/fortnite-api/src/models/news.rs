//! In-game news.

use super::Asset;
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::{impl_identity, time};
use serde::{Deserialize, Serialize};

/// News of every game mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    /// Battle Royale news.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub br: Option<GameModeNews>,
    /// Save the World news.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stw: Option<GameModeNews>,
    /// Creative news.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative: Option<GameModeNews>,
}

impl Construct for News {}

/// News of one game mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeNews {
    /// Hash of the news contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// When the news were published.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Animated overview of the news.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// Message-of-the-day tiles.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub motds: Vec<NewsMotd>,
    /// Plain messages.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub messages: Vec<NewsMessage>,
}

impl GameModeNews {
    /// Message-of-the-day tiles that are not hidden, by sorting priority.
    #[must_use]
    pub fn visible_motds(&self) -> Vec<&NewsMotd> {
        let mut motds: Vec<&NewsMotd> = self.motds.iter().filter(|motd| !motd.hidden).collect();
        motds.sort_by_key(|motd| std::cmp::Reverse(motd.sorting_priority));
        motds
    }
}

impl Construct for GameModeNews {}

/// A message-of-the-day tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMotd {
    /// Tile id.
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Title shown on the tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,
    /// Body text.
    #[serde(default)]
    pub body: String,
    /// Full image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// Tile image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_image: Option<Asset>,
    /// Higher sorts first.
    #[serde(default)]
    pub sorting_priority: i32,
    /// Whether the tile is hidden in game.
    #[serde(default)]
    pub hidden: bool,
}

/// A plain news message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMessage {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub body: String,
    /// Image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// Ad space label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adspace: Option<String>,
}

impl_identity!(NewsMotd);

#[cfg(test)]
mod tests {
    use super::*;
    use fortnite_api_core::ResponseFlags;
    use serde_json::json;

    #[test]
    fn missing_modes_are_none() {
        let news = News::construct(
            json!({
                "br": {
                    "hash": "e1f5",
                    "date": "2024-09-01T12:00:00Z",
                    "motds": [
                        {"id": "low", "title": "Low", "body": "", "sortingPriority": 10},
                        {"id": "hidden", "title": "Hidden", "body": "", "sortingPriority": 90, "hidden": true},
                        {"id": "high", "title": "High", "body": "", "sortingPriority": 50}
                    ],
                    "messages": null
                },
                "stw": null
            }),
            ResponseFlags::INCLUDE_NOTHING,
        )
        .unwrap();

        assert!(news.stw.is_none());
        assert!(news.creative.is_none());

        let br = news.br.unwrap();
        assert!(br.messages.is_empty());
        let visible: Vec<&str> = br.visible_motds().iter().map(|motd| motd.id.as_str()).collect();
        assert_eq!(visible, vec!["high", "low"]);
    }
}
