// File: tierwatch-core/src/platforms/telegram/mod.rs

pub mod channel;
pub mod client;

pub use channel::TelegramChannel;
pub use client::TelegramBotClient;
