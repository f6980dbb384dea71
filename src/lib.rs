pub mod matches;
pub mod region;
pub mod spectator;
pub mod summoner;

use crate::region::Region;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::HeaderMap;
use std::fmt::Display;
use std::sync::Arc;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Network-level failure (DNS, connection refused, timeout, ...),
    /// surfaced verbatim from the underlying client.
    Http(reqwest::Error),
    /// Riot answered with a non-200 status. The full response body is kept
    /// because the API returns a structured error payload worth inspecting.
    Status {
        code: reqwest::StatusCode,
        body: Vec<u8>,
    },
    /// The response body was read but did not decode into the expected
    /// shape. The raw bytes are kept alongside the serde error.
    Decode {
        source: serde_json::Error,
        body: Vec<u8>,
    },
}

impl Error {
    /// Status code of the upstream response, if one was received.
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Http(e) => e.status(),
            Error::Status { code, .. } => Some(*code),
            Error::Decode { .. } => None,
        }
    }

    /// Raw response body, for the error kinds where one was read.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Error::Http(_) => None,
            Error::Status { body, .. } | Error::Decode { body, .. } => Some(body),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Http(e) => e.fmt(f),
            Error::Status { code, .. } => {
                write!(f, "Riot API returned status {}", code.as_u16())
            }
            Error::Decode { source, .. } => {
                write!(f, "Failed to decode Riot API response: {}", source)
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

#[derive(Debug)]
pub struct Handle {
    pub web: reqwest::Client,
}

/// Client for interacting with the League of Legends v4 Riot APIs
pub struct LolClient {
    handle: Arc<Handle>,
}

impl LolClient {
    /// Builds a client carrying `api_key` as the `X-Riot-Token` header on
    /// every request. Performs no network I/O.
    pub fn new(api_key: &str) -> Self {
        let mut shared_headers = HeaderMap::new();
        shared_headers.insert(
            "X-Riot-Token",
            api_key.parse().expect("Invalid API key format"),
        );
        let client = reqwest::Client::builder()
            .default_headers(shared_headers)
            .build()
            .expect("No TLS backend found");
        Self {
            handle: Arc::new(Handle { web: client }),
        }
    }

    pub fn summoner(&self, region: Region) -> summoner::SummonerClient {
        summoner::SummonerClient::new(self.handle.clone(), region)
    }
    pub fn spectator(&self, region: Region) -> spectator::SpectatorClient {
        spectator::SpectatorClient::new(self.handle.clone(), region)
    }
    pub fn matches(&self, region: Region) -> matches::MatchClient {
        matches::MatchClient::new(self.handle.clone(), region)
    }
}

impl Clone for LolClient {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

trait ServiceUrl
where
    Self: Display,
{
    fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self)
    }
}

// The path-segment set: controls, characters that cannot appear raw in a
// path segment (space, `"`, `<`, `>`, backtick, `#`, `?`, `{`, `}`), plus
// `/` and `%` so a segment can never splice extra path structure in.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

pub(crate) fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Executes one GET round trip and returns the full response body.
///
/// The body is read even on a non-200 status so callers still get the
/// structured error payload Riot puts in it.
pub(crate) async fn execute(handle: &Handle, request: reqwest::Request) -> Result<Vec<u8>> {
    let res = handle.web.execute(request).await?;
    let status = res.status();
    let body = res.bytes().await?.to_vec();
    if status != reqwest::StatusCode::OK {
        return Err(Error::Status { code: status, body });
    }
    Ok(body)
}
