pub mod monitor;

pub use monitor::{spawn_monitor_task, PollOutcome, RunSummary, RunningMonitor, StreamerMonitor};
