// File: tierwatch-core/src/services/notification_service.rs

use tracing::{debug, info, warn};

use tierwatch_common::models::NotificationMessage;
use tierwatch_common::Error;

use crate::platforms::{ChannelKind, NotificationChannel};

/// Fans one message out to every registered channel, in registration order.
///
/// Channels are independent: a failing channel is logged and the remaining
/// ones are still attempted.
#[derive(Default)]
pub struct NotificationService {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel: Box<dyn NotificationChannel>) {
        debug!("Registered {} notification channel", channel.kind());
        self.channels.push(channel);
    }

    pub fn with_channel(mut self, channel: Box<dyn NotificationChannel>) -> Self {
        self.register(channel);
        self
    }

    pub fn kinds(&self) -> Vec<ChannelKind> {
        self.channels.iter().map(|c| c.kind()).collect()
    }

    /// Returns the number of channels that accepted the message, or a
    /// `Notify` error naming every channel that failed.
    pub async fn dispatch(&self, message: &NotificationMessage) -> Result<usize, Error> {
        let mut delivered = 0usize;
        let mut failures = Vec::new();

        for channel in &self.channels {
            let kind = channel.kind();
            match channel.send(message).await {
                Ok(()) => {
                    info!("Sent {} notification: {}", kind, message);
                    delivered += 1;
                }
                Err(e) => {
                    warn!("Failed to send {} notification: {}", kind, e);
                    failures.push(format!("{kind}: {e}"));
                }
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(Error::Notify(format!(
                "{} of {} channel(s) failed ({})",
                failures.len(),
                self.channels.len(),
                failures.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::MockNotificationChannel;
    use mockall::Sequence;
    use tierwatch_common::models::{BroadcasterType, StreamerLogin};
    use tierwatch_common::ErrorKind;

    fn partner_message() -> NotificationMessage {
        let login = StreamerLogin::new("alice").unwrap();
        NotificationMessage::for_tier(&login, &BroadcasterType::Partner).unwrap()
    }

    fn channel(kind: ChannelKind) -> MockNotificationChannel {
        let mut mock = MockNotificationChannel::new();
        mock.expect_kind().return_const(kind);
        mock
    }

    #[tokio::test]
    async fn delivers_to_every_channel_in_order() {
        let mut seq = Sequence::new();

        let mut chat = channel(ChannelKind::Chat);
        chat.expect_send()
            .withf(|m| m.as_str() == "alice is a Twitch Partner. https://www.twitch.tv/alice")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut voice = channel(ChannelKind::Voice);
        voice.expect_send().times(1).in_sequence(&mut seq).returning(|_| Ok(()));

        let service = NotificationService::new()
            .with_channel(Box::new(chat))
            .with_channel(Box::new(voice));

        assert_eq!(service.kinds(), vec![ChannelKind::Chat, ChannelKind::Voice]);
        let delivered = service.dispatch(&partner_message()).await.unwrap();
        assert_eq!(delivered, 2);
    }

    #[tokio::test]
    async fn chat_failure_does_not_block_voice() {
        let mut chat = channel(ChannelKind::Chat);
        chat.expect_send()
            .times(1)
            .returning(|_| Err(Error::Notify("sendMessage: HTTP 502".into())));

        let mut voice = channel(ChannelKind::Voice);
        voice.expect_send().times(1).returning(|_| Ok(()));

        let service = NotificationService::new()
            .with_channel(Box::new(chat))
            .with_channel(Box::new(voice));

        let err = service.dispatch(&partner_message()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Notify);
        assert!(err.to_string().contains("chat"));
        assert!(!err.to_string().contains("voice:"));
    }

    #[tokio::test]
    async fn empty_service_delivers_nothing() {
        let service = NotificationService::new();
        assert!(service.kinds().is_empty());
        assert_eq!(service.dispatch(&partner_message()).await.unwrap(), 0);
    }
}
