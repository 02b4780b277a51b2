use async_trait::async_trait;

use tierwatch_common::models::NotificationMessage;
use tierwatch_common::Error;

use crate::platforms::telegram::client::TelegramBotClient;
use crate::platforms::{ChannelKind, NotificationChannel};

/// Chat notifications into one Telegram chat.
pub struct TelegramChannel {
    client: TelegramBotClient,
    chat_id: String,
}

impl TelegramChannel {
    pub fn new(client: TelegramBotClient, chat_id: &str) -> Self {
        Self {
            client,
            chat_id: chat_id.to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Chat
    }

    async fn send(&self, message: &NotificationMessage) -> Result<(), Error> {
        self.client.send_chat_message(&self.chat_id, message.as_str()).await
    }
}
