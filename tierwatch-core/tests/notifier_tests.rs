// tests/notifier_tests.rs

mod test_utils;

use reqwest::Client as ReqwestClient;
use serde_json::json;
use tierwatch_common::models::{BroadcasterType, NotificationMessage};
use tierwatch_common::ErrorKind;
use tierwatch_core::platforms::notifyme::{NotifyMeChannel, NotifyMeClient};
use tierwatch_core::platforms::telegram::{TelegramBotClient, TelegramChannel};
use tierwatch_core::platforms::{ChannelKind, NotificationChannel};
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use test_utils::*;

fn partner_message() -> NotificationMessage {
    NotificationMessage::for_tier(&alice(), &BroadcasterType::Partner).unwrap()
}

fn telegram(server: &MockServer) -> TelegramBotClient {
    TelegramBotClient::new(ReqwestClient::new(), BOT_TOKEN).with_base_url(&server.uri())
}

#[tokio::test]
async fn test_telegram_posts_chat_id_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(telegram_path()))
        .and(body_string_contains(format!("chat_id={CHAT_ID}").as_str()))
        .and(body_string_contains(
            "text=alice+is+a+Twitch+Partner.+https%3A%2F%2Fwww.twitch.tv%2Falice",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 42 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let channel = TelegramChannel::new(telegram(&server), CHAT_ID);
    assert_eq!(channel.kind(), ChannelKind::Chat);
    channel.send(&partner_message()).await.unwrap();
}

#[tokio::test]
async fn test_telegram_failure_is_a_notify_error_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(telegram_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = telegram(&server)
        .send_chat_message(CHAT_ID, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Notify);
    let text = err.to_string();
    assert!(text.contains("chat not found"));
    assert!(!text.contains("bot-secret"));
}

#[tokio::test]
async fn test_telegram_ok_false_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(telegram_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&server)
        .await;

    let err = telegram(&server)
        .send_chat_message(CHAT_ID, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Notify);
}

#[tokio::test]
async fn test_notifyme_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/NotifyMe"))
        .and(body_json(json!({
            "notification": "alice is a Twitch Partner. https://www.twitch.tv/alice",
            "accessCode": ACCESS_CODE
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = NotifyMeClient::new(ReqwestClient::new()).with_base_url(&server.uri());
    let channel = NotifyMeChannel::new(client, ACCESS_CODE);
    assert_eq!(channel.kind(), ChannelKind::Voice);
    channel.send(&partner_message()).await.unwrap();
}

#[tokio::test]
async fn test_notifyme_failure_is_a_notify_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/NotifyMe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = NotifyMeClient::new(ReqwestClient::new()).with_base_url(&server.uri());
    let err = client
        .send_voice_announcement("hello", ACCESS_CODE)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Notify);
    assert!(err.to_string().contains("500"));
}
