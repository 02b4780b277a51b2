//! The polling loop: one token, then check → maybe notify → sleep, forever.
//!
//! `StreamerMonitor` is the state before authentication; `start()` consumes
//! it and yields a `RunningMonitor` that owns the token. Errors inside an
//! iteration are logged by kind and never stop the loop. The only way out is
//! the shutdown watch channel.

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use twitch_oauth2::AccessToken;

use tierwatch_common::models::{BroadcasterType, NotificationMessage, StreamerLogin};
use tierwatch_common::{Error, ErrorKind};

use crate::config::MonitorConfig;
use crate::platforms::notifyme::{NotifyMeChannel, NotifyMeClient};
use crate::platforms::telegram::{TelegramBotClient, TelegramChannel};
use crate::platforms::twitch::{TwitchAuthenticator, TwitchHelixClient};
use crate::platforms::{ChannelKind, Endpoints, StatusSource, TokenProvider};
use crate::services::NotificationService;

/// What a single iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Notify-worthy tier observed and every channel accepted the message.
    Notified {
        kind: BroadcasterType,
        delivered: usize,
    },
    /// Account missing (`None`) or not a partner/affiliate.
    NotNotifyWorthy(Option<BroadcasterType>),
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub notifications: u64,
    pub failures: u64,
}

pub struct StreamerMonitor {
    streamer: StreamerLogin,
    poll_interval: Duration,
    auth: Box<dyn TokenProvider>,
    status: Box<dyn StatusSource>,
    notifier: NotificationService,
}

impl StreamerMonitor {
    pub fn new(
        streamer: StreamerLogin,
        poll_interval: Duration,
        auth: Box<dyn TokenProvider>,
        status: Box<dyn StatusSource>,
        notifier: NotificationService,
    ) -> Self {
        Self {
            streamer,
            poll_interval,
            auth,
            status,
            notifier,
        }
    }

    /// Wires the Twitch, Telegram and Notify Me clients from configuration.
    /// The voice channel is built either way but only registered when
    /// `voice_enabled` is set.
    pub fn from_config(config: &MonitorConfig, http: ReqwestClient, endpoints: &Endpoints) -> Self {
        let auth = TwitchAuthenticator::new(http.clone(), config.credentials.clone())
            .with_base_url(&endpoints.twitch_id);
        let helix = TwitchHelixClient::new(http.clone(), config.client_id().clone())
            .with_base_url(&endpoints.twitch_api);

        let telegram = TelegramBotClient::new(http.clone(), &config.telegram_bot_token)
            .with_base_url(&endpoints.telegram);
        let mut notifier = NotificationService::new()
            .with_channel(Box::new(TelegramChannel::new(telegram, &config.telegram_chat_id)));

        let voice = NotifyMeChannel::new(
            NotifyMeClient::new(http).with_base_url(&endpoints.notifyme),
            &config.notify_me_access_code,
        );
        if config.voice_enabled {
            notifier.register(Box::new(voice));
        } else {
            debug!("Voice channel available but disabled; chat only");
        }

        Self::new(
            config.streamer.clone(),
            config.poll_interval,
            Box::new(auth),
            Box::new(helix),
            notifier,
        )
    }

    pub fn channel_kinds(&self) -> Vec<ChannelKind> {
        self.notifier.kinds()
    }

    /// Acquires the access token exactly once. An `Auth` error here is fatal
    /// to the caller; there is no retry at this stage.
    pub async fn start(self) -> Result<RunningMonitor, Error> {
        info!("Authenticating before monitoring '{}'", self.streamer);
        let token = self.auth.acquire_token().await?;

        Ok(RunningMonitor {
            streamer: self.streamer,
            poll_interval: self.poll_interval,
            token,
            status: self.status,
            notifier: self.notifier,
        })
    }
}

pub struct RunningMonitor {
    streamer: StreamerLogin,
    poll_interval: Duration,
    token: AccessToken,
    status: Box<dyn StatusSource>,
    notifier: NotificationService,
}

impl RunningMonitor {
    pub fn streamer(&self) -> &StreamerLogin {
        &self.streamer
    }

    /// One check-and-notify iteration, without the sleep.
    pub async fn poll_once(&self) -> Result<PollOutcome, Error> {
        let tier = self.status.check_status(&self.streamer, &self.token).await?;

        let kind = match tier {
            Some(kind) if kind.is_notify_worthy() => kind,
            other => {
                info!("{} is not an Affiliate or Partner.", self.streamer);
                return Ok(PollOutcome::NotNotifyWorthy(other));
            }
        };

        let message = NotificationMessage::for_tier(&self.streamer, &kind)
            .ok_or_else(|| Error::Parse(format!("no notification text for tier '{kind}'")))?;
        info!("{}", message);

        let delivered = self.notifier.dispatch(&message).await?;
        Ok(PollOutcome::Notified { kind, delivered })
    }

    /// Runs until `shutdown` turns `true`. Never returns an error: every
    /// failure is confined to its iteration.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> RunSummary {
        let mut summary = RunSummary::default();
        info!(
            "Monitoring '{}' every {}s",
            self.streamer,
            self.poll_interval.as_secs_f64()
        );

        loop {
            if *shutdown.borrow() {
                info!("Shutdown requested; monitor stopping");
                break;
            }

            summary.iterations += 1;
            match self.poll_once().await {
                Ok(PollOutcome::Notified { .. }) => summary.notifications += 1,
                Ok(PollOutcome::NotNotifyWorthy(_)) => {}
                Err(e) => {
                    summary.failures += 1;
                    report_iteration_error(&e);
                }
            }

            debug!("Waiting {} seconds...", self.poll_interval.as_secs_f64());
            if sleep_or_shutdown(&mut shutdown, self.poll_interval).await {
                info!("Shutdown requested during sleep; monitor stopping");
                break;
            }
        }

        info!(
            "Monitor finished: iterations={} notifications={} failures={}",
            summary.iterations, summary.notifications, summary.failures
        );
        summary
    }
}

fn report_iteration_error(e: &Error) {
    match e.kind() {
        ErrorKind::StatusQuery => warn!("Status check failed, will retry next poll: {}", e),
        ErrorKind::Notify => warn!("Notification failed, will retry next poll: {}", e),
        kind => error!("Unexpected {} error during poll, continuing: {}", kind, e),
    }
}

/// Sleeps for `interval` unless shutdown is signalled first. Returns `true`
/// on shutdown. A dropped sender only means no signal can arrive any more.
async fn sleep_or_shutdown(shutdown: &mut watch::Receiver<bool>, interval: Duration) -> bool {
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return false,
            changed = shutdown.changed() => match changed {
                Ok(()) => {
                    if *shutdown.borrow() {
                        return true;
                    }
                }
                Err(_) => {
                    (&mut sleep).await;
                    return false;
                }
            }
        }
    }
}

/// Authenticates, then runs the loop on its own task.
pub fn spawn_monitor_task(
    monitor: StreamerMonitor,
    shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<Result<RunSummary, Error>> {
    tokio::spawn(async move {
        let running = monitor.start().await?;
        Ok(running.run(shutdown).await)
    })
}
