use self::name::GetByNameRequestBuilder;
use crate::region::Region;
use crate::{escape_path_segment, Handle, ServiceUrl};

pub mod name;

pub struct SummonerClient {
    handle: std::sync::Arc<Handle>,
    region: Region,
}
impl SummonerClient {
    pub fn new(handle: std::sync::Arc<Handle>, region: Region) -> Self {
        Self { handle, region }
    }
    /// Look up a summoner by display name. The name is percent-escaped
    /// before it is appended to the path.
    pub fn get_by_name(&self, summoner_name: &str) -> GetByNameRequestBuilder {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.region.base_url(),
            escape_path_segment(summoner_name)
        );
        GetByNameRequestBuilder::new(self.handle.clone(), url)
    }
}
