// src/lib.rs

pub mod config;
pub mod http;
pub mod platforms;
pub mod services;
pub mod tasks;

pub use config::MonitorConfig;
pub use tierwatch_common::{Error, ErrorKind};
