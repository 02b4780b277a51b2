// File: tierwatch-core/src/platforms/twitch/client.rs

use reqwest::Client as ReqwestClient;
use twitch_oauth2::{AccessToken, ClientId};

use crate::http::normalize_base;

pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv";

/// A small wrapper client for calling Helix endpoints.
///
/// The bearer token is not stored here; callers pass it on every request so
/// the monitor stays the only owner of the token.
#[derive(Clone)]
pub struct TwitchHelixClient {
    http: ReqwestClient,
    client_id: ClientId,
    api_base: String,
}

impl TwitchHelixClient {
    pub fn new(http: ReqwestClient, client_id: ClientId) -> Self {
        Self {
            http,
            client_id,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    /// Client-Id header value required on every Helix call.
    pub fn client_id(&self) -> &str {
        self.client_id.as_str()
    }

    pub(crate) fn helix_url(&self, path: &str) -> String {
        format!("{}/helix/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// GET builder with the Client-Id and bearer headers already attached.
    pub(crate) fn helix_get(&self, path: &str, token: &AccessToken) -> reqwest::RequestBuilder {
        self.http
            .get(self.helix_url(path))
            .header("Client-Id", self.client_id())
            .bearer_auth(token.secret())
    }
}
