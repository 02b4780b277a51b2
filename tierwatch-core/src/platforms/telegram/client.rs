// File: tierwatch-core/src/platforms/telegram/client.rs

use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tierwatch_common::Error;

use crate::http::normalize_base;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageForm<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client. The bot token lives in the request path, so it
/// is kept out of every log line and error message.
#[derive(Clone)]
pub struct TelegramBotClient {
    http: ReqwestClient,
    bot_token: String,
    api_base: String,
}

impl TelegramBotClient {
    pub fn new(http: ReqwestClient, bot_token: &str) -> Self {
        Self {
            http,
            bot_token: bot_token.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }

    /// POST /bot{token}/sendMessage with a form body.
    pub async fn send_chat_message(&self, chat_id: &str, text: &str) -> Result<(), Error> {
        let form = SendMessageForm { chat_id, text };

        let resp = self
            .http
            .post(self.method_url("sendMessage"))
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Notify(format!("sendMessage network error: {}", e.without_url())))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<BotApiResponse>(&body).ok();

        if !status.is_success() {
            let reason = parsed
                .and_then(|r| r.description)
                .unwrap_or(body);
            warn!("sendMessage => status={} chat_id={} reason={}", status, chat_id, reason);
            return Err(Error::Notify(format!("sendMessage: HTTP {status} => {reason}")));
        }

        if let Some(BotApiResponse { ok: false, description }) = parsed {
            let reason = description.unwrap_or_else(|| "unknown error".into());
            return Err(Error::Notify(format!("sendMessage rejected: {reason}")));
        }

        debug!("sendMessage => delivered to chat_id={}", chat_id);
        Ok(())
    }
}
