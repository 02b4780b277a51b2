// File: tierwatch-core/src/platforms/mod.rs

pub mod notifyme;
pub mod telegram;
pub mod twitch;

use std::fmt;
use async_trait::async_trait;
use twitch_oauth2::AccessToken;

use tierwatch_common::models::{BroadcasterType, NotificationMessage, StreamerLogin};
use tierwatch_common::Error;

/// Source of the single app access token the monitor holds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire_token(&self) -> Result<AccessToken, Error>;
}

/// Looks up the broadcaster tier of a login. `Ok(None)` means the account
/// does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn check_status(
        &self,
        login: &StreamerLogin,
        token: &AccessToken,
    ) -> Result<Option<BroadcasterType>, Error>;
}

/// Base URLs of every upstream service. Defaults are the public hosts;
/// tests point them at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub twitch_id: String,
    pub twitch_api: String,
    pub telegram: String,
    pub notifyme: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            twitch_id: twitch::auth::DEFAULT_ID_BASE.to_string(),
            twitch_api: twitch::client::DEFAULT_API_BASE.to_string(),
            telegram: telegram::client::DEFAULT_API_BASE.to_string(),
            notifyme: notifyme::client::DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Every service served from one base URL.
    pub fn all_at(base: &str) -> Self {
        Self {
            twitch_id: base.to_string(),
            twitch_api: base.to_string(),
            telegram: base.to_string(),
            notifyme: base.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Chat,
    Voice,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Chat => write!(f, "chat"),
            ChannelKind::Voice => write!(f, "voice"),
        }
    }
}

/// One outbound notification target.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;
    async fn send(&self, message: &NotificationMessage) -> Result<(), Error>;
}
