use async_trait::async_trait;

use tierwatch_common::models::NotificationMessage;
use tierwatch_common::Error;

use crate::platforms::notifyme::client::NotifyMeClient;
use crate::platforms::{ChannelKind, NotificationChannel};

/// Voice announcements through the Notify Me skill. Only registered for
/// delivery when enabled in the configuration.
pub struct NotifyMeChannel {
    client: NotifyMeClient,
    access_code: String,
}

impl NotifyMeChannel {
    pub fn new(client: NotifyMeClient, access_code: &str) -> Self {
        Self {
            client,
            access_code: access_code.to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for NotifyMeChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Voice
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), Error> {
        self.client
            .send_voice_announcement(message.as_str(), &self.access_code)
            .await
    }
}
