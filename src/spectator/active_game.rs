use crate::{Error, Handle, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub struct GetActiveGameRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl GetActiveGameRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Self {
        Self {
            handle,
            request: reqwest::Request::new(
                reqwest::Method::GET,
                reqwest::Url::from_str(&url).unwrap(),
            ),
        }
    }
    pub async fn send(self) -> Result<CurrentGameInfo> {
        let body = crate::execute(&self.handle, self.request).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { source, body })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameInfo {
    pub game_id: i64,
    /// Game start, epoch milliseconds. Zero while the game is still loading.
    pub game_start_time: i64,
    /// Seconds since the game clock started.
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    pub game_type: String,
    pub map_id: i64,
    pub game_queue_config_id: i64,
    pub observers: Observers,
    pub participants: Vec<CurrentGameParticipant>,
    pub banned_champions: Vec<BannedChampion>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Observers {
    /// Key for decrypting the spectator grid stream.
    pub encryption_key: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameParticipant {
    pub profile_icon_id: i64,
    pub champion_id: i64,
    pub summoner_name: String,
    pub summoner_id: String,
    pub team_id: i64,
    pub bot: bool,
    pub spell1_id: i64,
    pub spell2_id: i64,
    pub perks: Perks,
    /// Opaque upstream blobs, not modeled.
    pub game_customization_objects: Vec<serde_json::Value>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Perks {
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannedChampion {
    pub champion_id: i64,
    pub team_id: i64,
    pub pick_turn: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_live_game() {
        let json = r#"{
            "gameId": 233765874,
            "gameStartTime": 1587362348000,
            "gameLength": 542,
            "platformId": "JP1",
            "gameMode": "CLASSIC",
            "gameType": "MATCHED_GAME",
            "mapId": 11,
            "gameQueueConfigId": 420,
            "observers": { "encryptionKey": "wGYuxEmne9kWatFZ" },
            "participants": [
                {
                    "profileIconId": 4368,
                    "championId": 157,
                    "summonerName": "Faker",
                    "summonerId": "N87Lk2d",
                    "teamId": 100,
                    "bot": false,
                    "spell1Id": 4,
                    "spell2Id": 14,
                    "perks": {
                        "perkIds": [8010, 9111, 9104],
                        "perkStyle": 8000,
                        "perkSubStyle": 8100
                    },
                    "gameCustomizationObjects": []
                }
            ],
            "bannedChampions": [
                { "championId": 238, "teamId": 200, "pickTurn": 1 }
            ]
        }"#;
        let game: CurrentGameInfo = serde_json::from_str(json).unwrap();
        assert_eq!(game.game_id, 233765874);
        assert_eq!(game.game_queue_config_id, 420);
        assert_eq!(game.observers.encryption_key, "wGYuxEmne9kWatFZ");

        let p = &game.participants[0];
        assert_eq!(p.champion_id, 157);
        assert_eq!(p.perks.perk_ids, vec![8010, 9111, 9104]);
        assert!(!p.bot);

        let ban = &game.banned_champions[0];
        assert_eq!((ban.champion_id, ban.team_id, ban.pick_turn), (238, 200, 1));
    }

    #[test]
    fn tolerates_sparse_participants() {
        let json = r#"{
            "gameId": 1,
            "participants": [{ "summonerName": "A bot", "bot": true }]
        }"#;
        let game: CurrentGameInfo = serde_json::from_str(json).unwrap();
        assert!(game.participants[0].bot);
        assert_eq!(game.participants[0].perks, Perks::default());
        assert!(game.banned_champions.is_empty());
    }
}
