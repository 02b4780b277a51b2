// tests/test_utils/mod.rs
#![allow(dead_code)]

use serde_json::json;
use tierwatch_common::models::StreamerLogin;
use twitch_oauth2::AccessToken;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const BOT_TOKEN: &str = "123456:bot-secret";
pub const CHAT_ID: &str = "-100200300";
pub const ACCESS_CODE: &str = "amzn1.ask.account.test";
pub const APP_TOKEN: &str = "app-token-xyz";

pub fn alice() -> StreamerLogin {
    StreamerLogin::new("alice").unwrap()
}

pub fn app_token() -> AccessToken {
    AccessToken::new(APP_TOKEN.to_string())
}

/// Successful client-credentials exchange.
pub async fn mount_token_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": APP_TOKEN,
            "expires_in": 5011271,
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Helix users lookup for `login` answering with the given broadcaster type.
pub async fn mount_user(server: &MockServer, login: &str, broadcaster_type: &str) {
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .and(query_param("login", login))
        .and(header("Client-Id", CLIENT_ID))
        .and(header("Authorization", format!("Bearer {APP_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "141981764",
                "login": login,
                "display_name": login,
                "type": "",
                "broadcaster_type": broadcaster_type,
                "description": "",
                "view_count": 0
            }]
        })))
        .mount(server)
        .await;
}

pub async fn mount_no_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(server)
        .await;
}

pub fn telegram_path() -> String {
    format!("/bot{BOT_TOKEN}/sendMessage")
}
