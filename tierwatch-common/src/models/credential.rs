// File: tierwatch-common/src/models/credential.rs

use twitch_oauth2::{ClientId, ClientSecret};

/// App credentials for the client-credentials grant. The secret keeps its
/// redacting `Debug` impl from `twitch_oauth2`.
#[derive(Debug, Clone)]
pub struct TwitchCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
}

impl TwitchCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: ClientId::new(client_id.into()),
            client_secret: ClientSecret::new(client_secret.into()),
        }
    }
}
