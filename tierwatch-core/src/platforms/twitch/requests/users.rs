//! Helix ⟶ GET /users?login=…
//! Only the fields the monitor needs are decoded.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, trace, warn};
use twitch_oauth2::AccessToken;

use tierwatch_common::models::{BroadcasterType, StreamerLogin};
use tierwatch_common::Error;

use crate::platforms::twitch::client::TwitchHelixClient;
use crate::platforms::StatusSource;

/// Response from "Get Users" endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<UserData>,
}

/// Single user record.
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    /// `"partner"`, `"affiliate"` or `""`.
    #[serde(default = "normal_tier")]
    pub broadcaster_type: BroadcasterType,
}

fn normal_tier() -> BroadcasterType {
    BroadcasterType::Normal
}

impl TwitchHelixClient {
    /// Looks up `login` and returns its first matching record, if any.
    pub async fn fetch_user(
        &self,
        login: &StreamerLogin,
        token: &AccessToken,
    ) -> Result<Option<UserData>, Error> {
        let resp = self
            .helix_get("users", token)
            .query(&[("login", login.query_login())])
            .send()
            .await
            .map_err(|e| Error::StatusQuery(format!("fetch_user network error: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::StatusQuery(format!("fetch_user read body error: {e}")))?;

        trace!("fetch_user => HTTP {} => body length={}", status, body.len());

        if !status.is_success() {
            warn!("fetch_user => status={} body={}", status, body);
            return Err(Error::StatusQuery(format!("fetch_user: HTTP {status} => {body}")));
        }

        let parsed: UsersResponse = serde_json::from_str(&body)
            .map_err(|e| Error::StatusQuery(format!("fetch_user parse error: {e}")))?;

        if parsed.data.len() > 1 {
            debug!("fetch_user => {} records for login='{}', using the first", parsed.data.len(), login);
        }
        Ok(parsed.data.into_iter().next())
    }

    /// Broadcaster tier of `login`, or `None` when Helix knows no such account.
    pub async fn fetch_broadcaster_type(
        &self,
        login: &StreamerLogin,
        token: &AccessToken,
    ) -> Result<Option<BroadcasterType>, Error> {
        let user = self.fetch_user(login, token).await?;
        match &user {
            Some(u) => debug!("login='{}' id={} broadcaster_type='{}'", u.login, u.id, u.broadcaster_type),
            None => debug!("login='{}' not found on Helix", login),
        }
        Ok(user.map(|u| u.broadcaster_type))
    }
}

#[async_trait]
impl StatusSource for TwitchHelixClient {
    async fn check_status(
        &self,
        login: &StreamerLogin,
        token: &AccessToken,
    ) -> Result<Option<BroadcasterType>, Error> {
        self.fetch_broadcaster_type(login, token).await
    }
}
