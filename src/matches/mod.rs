use self::details::DetailsRequestBuilder;
use self::timeline::TimelineRequestBuilder;
use crate::region::Region;
use crate::{Handle, ServiceUrl};

pub mod details;
pub mod timeline;

pub struct MatchClient {
    handle: std::sync::Arc<Handle>,
    region: Region,
}
impl MatchClient {
    pub fn new(handle: std::sync::Arc<Handle>, region: Region) -> Self {
        Self { handle, region }
    }
    pub fn get_details(&self, game_id: i64) -> DetailsRequestBuilder {
        let url = format!(
            "{}/lol/match/v4/matches/{}",
            self.region.base_url(),
            game_id
        );
        DetailsRequestBuilder::new(self.handle.clone(), url)
    }
    /// Timeline frames for a finished game. In this API version the
    /// timeline is served from the same route as the match details.
    pub fn get_timeline(&self, game_id: i64) -> TimelineRequestBuilder {
        let url = format!(
            "{}/lol/match/v4/matches/{}",
            self.region.base_url(),
            game_id
        );
        TimelineRequestBuilder::new(self.handle.clone(), url)
    }
}
