//! Environment-backed configuration for the monitor.
//!
//! Everything is read once at startup into [`MonitorConfig`] and then moved
//! into the wiring. Lookups go through a closure so tests can feed a map
//! instead of touching the process environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tierwatch_common::models::{StreamerLogin, TwitchCredentials};
use tierwatch_common::Error;
use twitch_oauth2::ClientId;

pub const TWITCH_CLIENT_ID: &str = "TWITCH_CLIENT_ID";
pub const TWITCH_CLIENT_SECRET: &str = "TWITCH_CLIENT_SECRET";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ALEXA_NOTIFY_ME_ACCESS_CODE: &str = "ALEXA_NOTIFY_ME_ACCESS_CODE";
pub const STREAMER_USERNAME: &str = "STREAMER_USERNAME";

pub const POLL_INTERVAL_SECS: &str = "POLL_INTERVAL_SECS";
pub const NOTIFY_VOICE_ENABLED: &str = "NOTIFY_VOICE_ENABLED";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Every variable that must be present (and non-empty) before the loop starts.
pub const REQUIRED_VARS: [&str; 6] = [
    TWITCH_CLIENT_ID,
    TWITCH_CLIENT_SECRET,
    TELEGRAM_BOT_TOKEN,
    TELEGRAM_CHAT_ID,
    ALEXA_NOTIFY_ME_ACCESS_CODE,
    STREAMER_USERNAME,
];

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct MonitorConfig {
    pub credentials: TwitchCredentials,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub notify_me_access_code: String,
    pub streamer: StreamerLogin,

    /// Fixed sleep between two polls.
    pub poll_interval: Duration,
    /// Register the Notify Me voice channel for delivery.
    pub voice_enabled: bool,
    pub http_timeout: Option<Duration>,
}

impl MonitorConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required env: {}",
                missing.join(", ")
            )));
        }

        let must = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("missing required env: {key}")))
        };

        let credentials = TwitchCredentials::new(must(TWITCH_CLIENT_ID)?, must(TWITCH_CLIENT_SECRET)?);
        let streamer = StreamerLogin::new(&must(STREAMER_USERNAME)?)?;

        let poll_secs: u64 = parse_or(get(POLL_INTERVAL_SECS), POLL_INTERVAL_SECS, DEFAULT_POLL_INTERVAL.as_secs())?;
        if poll_secs == 0 {
            return Err(Error::Config(format!("{POLL_INTERVAL_SECS} must be greater than zero")));
        }

        let voice_enabled = match get(NOTIFY_VOICE_ENABLED) {
            Some(raw) => parse_flag(NOTIFY_VOICE_ENABLED, &raw)?,
            None => false,
        };

        let http_timeout = match get(HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = parse_value(HTTP_TIMEOUT_SECS, &raw)?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            credentials,
            telegram_bot_token: must(TELEGRAM_BOT_TOKEN)?,
            telegram_chat_id: must(TELEGRAM_CHAT_ID)?.trim().to_string(),
            notify_me_access_code: must(ALEXA_NOTIFY_ME_ACCESS_CODE)?,
            streamer,
            poll_interval: Duration::from_secs(poll_secs),
            voice_enabled,
            http_timeout,
        })
    }

    pub fn client_id(&self) -> &ClientId {
        &self.credentials.client_id
    }

    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, Error>
where
    T::Err: fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| Error::Config(format!("failed to parse {key}='{raw}': {e}")))
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T, Error>
where
    T::Err: fmt::Display,
{
    match raw {
        Some(s) => parse_value(key, &s),
        None => Ok(default),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("failed to parse {key}='{other}': expected a boolean"))),
    }
}

/// `Debug` view of the config with every credential masked.
pub struct Redacted<'a>(&'a MonitorConfig);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        f.debug_struct("MonitorConfig")
            .field("client_id", &c.credentials.client_id.as_str())
            .field("client_secret", &"***")
            .field("telegram_bot_token", &mask(&c.telegram_bot_token))
            .field("telegram_chat_id", &c.telegram_chat_id)
            .field("notify_me_access_code", &mask(&c.notify_me_access_code))
            .field("streamer", &c.streamer.as_str())
            .field("poll_interval_secs", &c.poll_interval.as_secs())
            .field("voice_enabled", &c.voice_enabled)
            .field("http_timeout_secs", &c.http_timeout.map(|t| t.as_secs()))
            .finish()
    }
}

fn mask(s: &str) -> String {
    match s.char_indices().nth(3) {
        Some((idx, _)) if s.chars().count() > 6 => format!("{}***", &s[..idx]),
        _ => "***".into(),
    }
}
