use reqwest::Client as ReqwestClient;
use serde::Serialize;
use tracing::{debug, warn};

use tierwatch_common::Error;

use crate::http::normalize_base;

pub const DEFAULT_API_BASE: &str = "https://api.notifymyecho.com";

#[derive(Debug, Serialize)]
struct NotifyMeRequest<'a> {
    notification: &'a str,
    #[serde(rename = "accessCode")]
    access_code: &'a str,
}

#[derive(Clone)]
pub struct NotifyMeClient {
    http: ReqwestClient,
    api_base: String,
}

impl NotifyMeClient {
    pub fn new(http: ReqwestClient) -> Self {
        Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    /// POST /v1/NotifyMe with a JSON body.
    pub async fn send_voice_announcement(&self, message: &str, access_code: &str) -> Result<(), Error> {
        let url = format!("{}/v1/NotifyMe", self.api_base);
        let body = NotifyMeRequest {
            notification: message,
            access_code,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Notify(format!("NotifyMe network error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!("NotifyMe => status={} body={}", status, text);
            return Err(Error::Notify(format!("NotifyMe: HTTP {status} => {text}")));
        }

        debug!("NotifyMe => announcement accepted");
        Ok(())
    }
}
