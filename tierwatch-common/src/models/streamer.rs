// File: tierwatch-common/src/models/streamer.rs

use std::fmt;
use crate::Error;

/// Twitch login of the account being watched, trimmed but otherwise kept as
/// configured. Notification text uses it verbatim.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct StreamerLogin(String);

impl StreamerLogin {
    pub fn new(login: &str) -> Result<Self, Error> {
        let login = login.trim();
        if login.is_empty() {
            return Err(Error::Config("streamer login must not be empty".into()));
        }
        if login.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!("streamer login '{login}' contains whitespace")));
        }
        Ok(Self(login.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the Helix `login=` query; Helix logins are lowercase.
    pub fn query_login(&self) -> String {
        self.0.to_lowercase()
    }

    /// Canonical channel URL, e.g. `https://www.twitch.tv/alice`.
    pub fn profile_url(&self) -> String {
        format!("https://www.twitch.tv/{}", self.0)
    }
}

impl fmt::Display for StreamerLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
