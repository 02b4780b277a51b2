// File: tierwatch-core/src/platforms/notifyme/mod.rs
//! Alexa "Notify Me" skill, used as the voice announcement channel.

pub mod channel;
pub mod client;

pub use channel::NotifyMeChannel;
pub use client::NotifyMeClient;
