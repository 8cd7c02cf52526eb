//! Game mode playlists.

use super::Asset;
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::{null_as_default, Construct};
use fortnite_api_core::{impl_identity, time, ResponseFlags};
use serde::{Deserialize, Serialize};

/// Images of a playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistImages {
    /// Showcase image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showcase: Option<Asset>,
    /// Mission icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_icon: Option<Asset>,
}

/// A playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Playlist id, e.g. `Playlist_DefaultSolo`.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Secondary name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Game type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
    /// Rating type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_type: Option<String>,
    /// Minimum players.
    #[serde(default)]
    pub min_players: i32,
    /// Maximum players.
    #[serde(default)]
    pub max_players: i32,
    /// Maximum teams.
    #[serde(default)]
    pub max_teams: i32,
    /// Maximum team size.
    #[serde(default)]
    pub max_team_size: i32,
    /// Maximum squads.
    #[serde(default)]
    pub max_squads: i32,
    /// Maximum squad size.
    #[serde(default)]
    pub max_squad_size: i32,
    /// Whether this is a default playlist.
    #[serde(default)]
    pub is_default: bool,
    /// Whether this is a tournament playlist.
    #[serde(default)]
    pub is_tournament: bool,
    /// Whether this is a limited time mode.
    #[serde(default)]
    pub is_limited_time_mode: bool,
    /// Whether this is a large team game.
    #[serde(default)]
    pub is_large_team_game: bool,
    /// Whether matches count towards profile stats.
    #[serde(default)]
    pub accumulate_to_profile_stats: bool,
    /// Images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<PlaylistImages>,
    /// Gameplay tags.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gameplay_tags: Vec<String>,
    /// Asset path; requires [`ResponseFlags::INCLUDE_PATHS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// When the playlist was added.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

impl Construct for Playlist {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        flags.clear_unless(ResponseFlags::INCLUDE_PATHS, &mut self.path);
    }
}

impl_identity!(Playlist);
