use self::active_game::GetActiveGameRequestBuilder;
use crate::region::Region;
use crate::{escape_path_segment, Handle, ServiceUrl};

pub mod active_game;

pub struct SpectatorClient {
    handle: std::sync::Arc<Handle>,
    region: Region,
}
impl SpectatorClient {
    pub fn new(handle: std::sync::Arc<Handle>, region: Region) -> Self {
        Self { handle, region }
    }
    /// Get the game a summoner is currently playing, keyed by the encrypted
    /// summoner ID from the summoner endpoint. 404 means not in game.
    pub fn get_active_game(&self, encrypted_summoner_id: &str) -> GetActiveGameRequestBuilder {
        let url = format!(
            "{}/lol/spectator/v4/active-games/by-summoner/{}",
            self.region.base_url(),
            escape_path_segment(encrypted_summoner_id)
        );
        GetActiveGameRequestBuilder::new(self.handle.clone(), url)
    }
}
