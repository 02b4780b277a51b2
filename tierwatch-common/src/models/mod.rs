// File: tierwatch-common/src/models/mod.rs
pub mod broadcaster;
pub mod credential;
pub mod notification;
pub mod streamer;

pub use broadcaster::BroadcasterType;
pub use credential::TwitchCredentials;
pub use notification::NotificationMessage;
pub use streamer::StreamerLogin;
