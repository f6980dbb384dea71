use crate::{Error, Handle, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub struct DetailsRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl DetailsRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Self {
        Self {
            handle,
            request: reqwest::Request::new(
                reqwest::Method::GET,
                reqwest::Url::from_str(&url).unwrap(),
            ),
        }
    }
    pub async fn send(self) -> Result<MatchDetails> {
        let body = crate::execute(&self.handle, self.request).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { source, body })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchDetails {
    pub game_id: i64,
    pub season_id: i64,
    pub queue_id: i64,
    pub game_version: String,
    pub platform_id: String,
    pub game_mode: String,
    pub game_type: String,
    pub map_id: i64,
    /// Seconds.
    pub game_duration: i64,
    /// Epoch milliseconds.
    pub game_creation: i64,
    pub participant_identities: Vec<ParticipantIdentity>,
    pub teams: Vec<TeamStats>,
    pub participants: Vec<MatchParticipant>,
}

/// Maps a participant slot (1..10) to the account behind it.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantIdentity {
    pub participant_id: i64,
    pub player: Player,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub summoner_id: String,
    pub summoner_name: String,
    pub account_id: String,
    pub current_account_id: String,
    pub platform_id: String,
    pub current_platform_id: String,
    pub profile_icon: i64,
    pub match_history_uri: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub team_id: i64,
    /// "Win" or "Fail".
    pub win: String,
    pub first_blood: bool,
    pub first_tower: bool,
    pub first_inhibitor: bool,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub first_rift_herald: bool,
    pub tower_kills: i64,
    pub inhibitor_kills: i64,
    pub baron_kills: i64,
    pub dragon_kills: i64,
    pub rift_herald_kills: i64,
    pub vilemaw_kills: i64,
    pub dominion_victory_score: i64,
    pub bans: Vec<TeamBan>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBan {
    pub champion_id: i64,
    pub pick_turn: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchParticipant {
    pub participant_id: i64,
    pub team_id: i64,
    pub champion_id: i64,
    pub spell1_id: i64,
    pub spell2_id: i64,
    pub highest_achieved_season_tier: String,
    pub stats: ParticipantStats,
    pub timeline: ParticipantTimeline,
}

/// Full box-score counters for one participant, as served by the API.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    pub participant_id: i64,
    pub win: bool,
    pub champ_level: i64,

    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub double_kills: i64,
    pub triple_kills: i64,
    pub quadra_kills: i64,
    pub penta_kills: i64,
    pub unreal_kills: i64,
    pub largest_multi_kill: i64,
    pub largest_killing_spree: i64,
    pub killing_sprees: i64,
    pub longest_time_spent_living: i64,

    pub first_blood_kill: bool,
    pub first_blood_assist: bool,
    pub first_tower_kill: bool,
    pub first_tower_assist: bool,
    pub first_inhibitor_kill: bool,
    pub first_inhibitor_assist: bool,
    pub turret_kills: i64,
    pub inhibitor_kills: i64,

    pub total_damage_dealt: i64,
    pub physical_damage_dealt: i64,
    pub magic_damage_dealt: i64,
    pub true_damage_dealt: i64,
    pub total_damage_dealt_to_champions: i64,
    pub physical_damage_dealt_to_champions: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub true_damage_dealt_to_champions: i64,
    pub largest_critical_strike: i64,
    pub damage_dealt_to_turrets: i64,
    pub damage_dealt_to_objectives: i64,

    pub total_damage_taken: i64,
    pub physical_damage_taken: i64,
    pub magical_damage_taken: i64,
    pub true_damage_taken: i64,
    pub damage_self_mitigated: i64,

    pub total_heal: i64,
    pub total_units_healed: i64,
    pub total_time_crowd_control_dealt: i64,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i64,

    pub gold_earned: i64,
    pub gold_spent: i64,
    pub total_minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub neutral_minions_killed_team_jungle: i64,
    pub neutral_minions_killed_enemy_jungle: i64,

    pub vision_score: i64,
    pub wards_placed: i64,
    pub wards_killed: i64,
    pub sight_wards_bought_in_game: i64,
    pub vision_wards_bought_in_game: i64,

    pub item0: i64,
    pub item1: i64,
    pub item2: i64,
    pub item3: i64,
    pub item4: i64,
    pub item5: i64,
    /// Trinket slot.
    pub item6: i64,

    // Selected runes and their three tracked variables each.
    pub perk_primary_style: i64,
    pub perk_sub_style: i64,
    pub perk0: i64,
    pub perk0_var1: i64,
    pub perk0_var2: i64,
    pub perk0_var3: i64,
    pub perk1: i64,
    pub perk1_var1: i64,
    pub perk1_var2: i64,
    pub perk1_var3: i64,
    pub perk2: i64,
    pub perk2_var1: i64,
    pub perk2_var2: i64,
    pub perk2_var3: i64,
    pub perk3: i64,
    pub perk3_var1: i64,
    pub perk3_var2: i64,
    pub perk3_var3: i64,
    pub perk4: i64,
    pub perk4_var1: i64,
    pub perk4_var2: i64,
    pub perk4_var3: i64,
    pub perk5: i64,
    pub perk5_var1: i64,
    pub perk5_var2: i64,
    pub perk5_var3: i64,
    pub stat_perk0: i64,
    pub stat_perk1: i64,
    pub stat_perk2: i64,

    // Legacy Dominion/Ascension score fields, still present in payloads.
    pub combat_player_score: i64,
    pub objective_player_score: i64,
    pub total_player_score: i64,
    pub total_score_rank: i64,
    pub player_score0: i64,
    pub player_score1: i64,
    pub player_score2: i64,
    pub player_score3: i64,
    pub player_score4: i64,
    pub player_score5: i64,
    pub player_score6: i64,
    pub player_score7: i64,
    pub player_score8: i64,
    pub player_score9: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantTimeline {
    pub participant_id: i64,
    pub lane: String,
    pub role: String,
    pub gold_per_min_deltas: TimelineDeltas,
    pub creeps_per_min_deltas: TimelineDeltas,
    pub xp_per_min_deltas: TimelineDeltas,
    pub damage_taken_per_min_deltas: TimelineDeltas,
}

/// Per-ten-minute-bucket averages. The API emits integers or floats
/// depending on the counter, so everything is kept as `f64`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineDeltas {
    #[serde(rename = "0-10")]
    pub zero_to_ten: f64,
    #[serde(rename = "10-20")]
    pub ten_to_twenty: f64,
    #[serde(rename = "20-30")]
    pub twenty_to_thirty: f64,
}
