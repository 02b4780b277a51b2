//! Shared HTTP client construction for every platform integration.
//!
//! One `reqwest::Client` is built at startup and cloned into the Twitch,
//! Telegram and Notify Me clients so they share a connection pool. The
//! optional timeout applies to every outbound request.
//!
//! # Example Usage:
//! ``
//! use std::time::Duration;
//! use tierwatch_core::http::build_http_client;
//!
//! let http = build_http_client(Some(Duration::from_secs(15)))?;
//! ``

use std::time::Duration;
use reqwest::Client as ReqwestClient;
use tierwatch_common::Error;

pub const USER_AGENT: &str = concat!("tierwatch/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(timeout: Option<Duration>) -> Result<ReqwestClient, Error> {
    let mut builder = ReqwestClient::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Trims a trailing slash so base URLs can be joined with `format!`.
pub(crate) fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
