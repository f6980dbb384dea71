use crate::{Error, Handle, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub struct TimelineRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl TimelineRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Self {
        Self {
            handle,
            request: reqwest::Request::new(
                reqwest::Method::GET,
                reqwest::Url::from_str(&url).unwrap(),
            ),
        }
    }
    pub async fn send(self) -> Result<MatchTimeline> {
        let body = crate::execute(&self.handle, self.request).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { source, body })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchTimeline {
    /// Milliseconds between frames, normally 60000.
    pub frame_interval: i64,
    pub frames: Vec<TimelineFrame>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineFrame {
    /// Milliseconds since game start.
    pub timestamp: i64,
    pub participant_frames: ParticipantFrames,
    /// Kill/ward/objective events, left unparsed.
    pub events: Vec<serde_json::Value>,
}

/// The API keys participant frames by the literal strings "1" through "10",
/// one per roster slot of a 5v5 game. The cardinality is part of the wire
/// contract, so the slots are ten named fields rather than a map.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantFrames {
    #[serde(rename = "1")]
    pub p1: ParticipantFrame,
    #[serde(rename = "2")]
    pub p2: ParticipantFrame,
    #[serde(rename = "3")]
    pub p3: ParticipantFrame,
    #[serde(rename = "4")]
    pub p4: ParticipantFrame,
    #[serde(rename = "5")]
    pub p5: ParticipantFrame,
    #[serde(rename = "6")]
    pub p6: ParticipantFrame,
    #[serde(rename = "7")]
    pub p7: ParticipantFrame,
    #[serde(rename = "8")]
    pub p8: ParticipantFrame,
    #[serde(rename = "9")]
    pub p9: ParticipantFrame,
    #[serde(rename = "10")]
    pub p10: ParticipantFrame,
}

impl ParticipantFrames {
    /// The ten slots in roster order, for callers that want to iterate.
    pub fn slots(&self) -> [&ParticipantFrame; 10] {
        [
            &self.p1, &self.p2, &self.p3, &self.p4, &self.p5, &self.p6, &self.p7, &self.p8,
            &self.p9, &self.p10,
        ]
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantFrame {
    pub participant_id: i64,
    pub level: i64,
    pub xp: i64,
    pub current_gold: i64,
    pub total_gold: i64,
    pub minions_killed: i64,
    pub jungle_minions_killed: i64,
    pub team_score: i64,
    pub dominion_score: i64,
    pub position: Position,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_json(id: i64) -> String {
        format!(
            r#"{{
                "participantId": {id},
                "level": 3,
                "xp": 1250,
                "currentGold": 420,
                "totalGold": 1523,
                "minionsKilled": 28,
                "jungleMinionsKilled": 0,
                "teamScore": 0,
                "dominionScore": 0,
                "position": {{ "x": 5521, "y": 4502 }}
            }}"#
        )
    }

    #[test]
    fn maps_all_ten_roster_slots() {
        let frames: String = (1..=10)
            .map(|id| format!(r#""{id}": {}"#, frame_json(id)))
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(
            r#"{{
                "frameInterval": 60000,
                "frames": [{{ "timestamp": 60021, "participantFrames": {{ {frames} }}, "events": [] }}]
            }}"#
        );
        let timeline: MatchTimeline = serde_json::from_str(&json).unwrap();
        assert_eq!(timeline.frame_interval, 60000);

        let frame = &timeline.frames[0];
        assert_eq!(frame.timestamp, 60021);
        for (i, slot) in frame.participant_frames.slots().iter().enumerate() {
            assert_eq!(slot.participant_id, i as i64 + 1);
            assert_eq!(slot.position, Position { x: 5521, y: 4502 });
        }
    }

    #[test]
    fn missing_slot_does_not_fail_the_others() {
        let frames: String = (1..=10)
            .filter(|id| *id != 7)
            .map(|id| format!(r#""{id}": {}"#, frame_json(id)))
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(
            r#"{{ "frames": [{{ "participantFrames": {{ {frames} }} }}] }}"#
        );
        let timeline: MatchTimeline = serde_json::from_str(&json).unwrap();

        let pf = &timeline.frames[0].participant_frames;
        assert_eq!(pf.p7, ParticipantFrame::default());
        assert_eq!(pf.p6.participant_id, 6);
        assert_eq!(pf.p8.participant_id, 8);
        assert_eq!(
            pf.slots().iter().filter(|s| s.participant_id != 0).count(),
            9
        );
    }

    #[test]
    fn events_stay_unparsed() {
        let json = r#"{
            "frameInterval": 60000,
            "frames": [{
                "timestamp": 120044,
                "participantFrames": {},
                "events": [
                    { "type": "CHAMPION_KILL", "killerId": 1, "victimId": 6, "timestamp": 119002 },
                    { "type": "WARD_PLACED", "creatorId": 2 }
                ]
            }]
        }"#;
        let timeline: MatchTimeline = serde_json::from_str(json).unwrap();
        let events = &timeline.frames[0].events;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["type"], "CHAMPION_KILL");
    }
}
