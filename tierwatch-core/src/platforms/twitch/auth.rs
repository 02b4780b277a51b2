use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::{debug, info};
use twitch_oauth2::AccessToken;

use tierwatch_common::models::TwitchCredentials;
use tierwatch_common::Error;

use crate::http::normalize_base;
use crate::platforms::TokenProvider;

pub const DEFAULT_ID_BASE: &str = "https://id.twitch.tv";

#[derive(Deserialize)]
struct TwitchTokenResponse {
    access_token: String,
    expires_in: Option<u64>,
    token_type: Option<String>,
}

/// Client-credentials grant against the Twitch identity service.
///
/// The resulting app token is never refreshed; it is fetched once when the
/// monitor starts.
pub struct TwitchAuthenticator {
    http: ReqwestClient,
    credentials: TwitchCredentials,
    id_base: String,
}

impl TwitchAuthenticator {
    pub fn new(http: ReqwestClient, credentials: TwitchCredentials) -> Self {
        Self {
            http,
            credentials,
            id_base: DEFAULT_ID_BASE.to_string(),
        }
    }

    /// Points the authenticator at another identity host (e.g. a local mock).
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.id_base = normalize_base(base);
        self
    }

    pub async fn request_app_token(&self) -> Result<AccessToken, Error> {
        let token_url = format!("{}/oauth2/token", self.id_base);

        let params = [
            ("client_id",     self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.secret()),
            ("grant_type",    "client_credentials"),
        ];

        debug!("Requesting app access token from {}", token_url);

        let resp = self
            .http
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Auth(format!("HTTP error requesting app token: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Auth(format!("Error reading token response: {e}")))?;

        if !status.is_success() {
            return Err(Error::Auth(format!("Twitch token endpoint: HTTP {status} => {body}")));
        }

        let parsed: TwitchTokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Auth(format!("Parse error on token JSON: {e}")))?;

        if parsed.access_token.is_empty() {
            return Err(Error::Auth("Token response contained an empty access_token".into()));
        }

        info!(
            "Obtained Twitch app access token (type={}, expires_in={:?}s)",
            parsed.token_type.as_deref().unwrap_or("bearer"),
            parsed.expires_in
        );

        Ok(AccessToken::new(parsed.access_token))
    }
}

#[async_trait]
impl TokenProvider for TwitchAuthenticator {
    async fn acquire_token(&self) -> Result<AccessToken, Error> {
        self.request_app_token().await
    }
}
