// File: tierwatch-common/src/models/notification.rs

use std::fmt;
use crate::models::{BroadcasterType, StreamerLogin};

/// Text sent to every notification channel for one event.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotificationMessage(String);

impl NotificationMessage {
    /// Builds the announcement for a notify-worthy tier. Returns `None` for
    /// tiers that never produce a notification.
    pub fn for_tier(login: &StreamerLogin, kind: &BroadcasterType) -> Option<Self> {
        let label = kind.label()?;
        Some(Self(format!(
            "{} is a Twitch {}. {}",
            login,
            label,
            login.profile_url()
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
