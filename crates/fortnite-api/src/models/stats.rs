//! Battle Royale player statistics.

use super::{Account, Asset};
use chrono::{DateTime, Utc};
use fortnite_api_core::construct::Construct;
use fortnite_api_core::time;
use serde::{Deserialize, Serialize};

/// Statistics of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrPlayerStats {
    /// The player.
    pub account: Account,
    /// Battle pass progress, if public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_pass: Option<BrBattlePass>,
    /// Rendered stats image, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Asset>,
    /// Statistics per input; `None` for players without any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BrInputs>,
}

impl Construct for BrPlayerStats {}

/// Battle pass level and progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrBattlePass {
    /// Level.
    #[serde(default)]
    pub level: u32,
    /// Progress towards the next level, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
}

/// Statistics split by input type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrInputs {
    /// Every input combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<BrInputStats>,
    /// Keyboard and mouse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_mouse: Option<BrInputStats>,
    /// Gamepad.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamepad: Option<BrInputStats>,
    /// Touch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<BrInputStats>,
}

/// Statistics of one input split by game mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrInputStats {
    /// Every mode combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<BrGameModeStats>,
    /// Solo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solo: Option<BrGameModeStats>,
    /// Duos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duo: Option<BrGameModeStats>,
    /// Squads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad: Option<BrGameModeStats>,
    /// Limited time modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ltm: Option<BrGameModeStats>,
}

/// Statistics of one game mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrGameModeStats {
    /// Total score.
    #[serde(default)]
    pub score: i64,
    /// Score per minute played.
    #[serde(default)]
    pub score_per_min: f64,
    /// Score per match.
    #[serde(default)]
    pub score_per_match: f64,
    /// Victory royales.
    #[serde(default)]
    pub wins: i64,
    /// Top 3 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top3: Option<i64>,
    /// Top 5 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top5: Option<i64>,
    /// Top 6 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top6: Option<i64>,
    /// Top 10 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top10: Option<i64>,
    /// Top 12 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top12: Option<i64>,
    /// Top 25 placements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top25: Option<i64>,
    /// Eliminations.
    #[serde(default)]
    pub kills: i64,
    /// Eliminations per minute.
    #[serde(default)]
    pub kills_per_min: f64,
    /// Eliminations per match.
    #[serde(default)]
    pub kills_per_match: f64,
    /// Deaths.
    #[serde(default)]
    pub deaths: i64,
    /// Kill/death ratio.
    #[serde(default)]
    pub kd: f64,
    /// Matches played.
    #[serde(default)]
    pub matches: i64,
    /// Win rate in percent.
    #[serde(default)]
    pub win_rate: f64,
    /// Minutes played.
    #[serde(default)]
    pub minutes_played: i64,
    /// Players outlived.
    #[serde(default)]
    pub players_outlived: i64,
    /// Last update.
    #[serde(default, with = "time::utc_opt", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}
