use crate::{Error, Handle, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub struct GetByNameRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl GetByNameRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Self {
        Self {
            handle,
            request: reqwest::Request::new(
                reqwest::Method::GET,
                reqwest::Url::from_str(&url).unwrap(),
            ),
        }
    }
    pub async fn send(self) -> Result<SummonerResponse> {
        let body = crate::execute(&self.handle, self.request).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { source, body })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerResponse {
    /// Encrypted summoner ID, the key for the spectator endpoint.
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i64,
    /// Last profile modification, epoch milliseconds.
    pub revision_date: i64,
    pub summoner_level: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_payload() {
        let json = r#"{
            "id": "N87Lk2d",
            "accountId": "ACC-1",
            "puuid": "PUUID-1",
            "name": "Hide on bush",
            "profileIconId": 6,
            "revisionDate": 1587352348000,
            "summonerLevel": 442
        }"#;
        let summoner: SummonerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            summoner,
            SummonerResponse {
                id: "N87Lk2d".to_string(),
                account_id: "ACC-1".to_string(),
                puuid: "PUUID-1".to_string(),
                name: "Hide on bush".to_string(),
                profile_icon_id: 6,
                revision_date: 1587352348000,
                summoner_level: 442,
            }
        );
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let summoner: SummonerResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(summoner, SummonerResponse::default());

        let partial: SummonerResponse =
            serde_json::from_str(r#"{"name":"Faker"}"#).unwrap();
        assert_eq!(partial.name, "Faker");
        assert_eq!(partial.summoner_level, 0);
    }

    #[test]
    fn builder_carries_the_escaped_url() {
        let client = crate::LolClient::new("RGAPI-test-key");
        let builder = client
            .summoner(crate::region::Region::JP1)
            .get_by_name("Faker #1");
        assert_eq!(
            builder.request.url().as_str(),
            "https://jp1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Faker%20%231"
        );
    }
}
