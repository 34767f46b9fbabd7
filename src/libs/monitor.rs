//! Idle and midnight auto-logout monitor.
//!
//! Watches device position samples and force-terminates the active session
//! when the agent crosses local midnight or shows no qualifying movement
//! for the configured idle threshold, whichever comes first. Termination is
//! a single idempotent path: close the session row, sign the identity out,
//! then surface a human-readable reason for the login surface. Both timers
//! and the position watch are released as part of it.

use crate::api::auth::AuthClient;
use crate::libs::config::MonitorConfig;
use crate::libs::geo::Position;
use crate::libs::messages::Message;
use crate::libs::position::PositionWatch;
use crate::libs::session::SessionLifecycle;
use crate::{msg_debug, msg_print, msg_warning};
use chrono::{DateTime, Duration as TimeDelta, Local, NaiveDateTime};
use std::fmt;
use std::time::Duration;
use tokio::time;

/// Monitor states. `Terminated` is terminal for the instance; a fresh
/// `Active` state is only reachable through a new login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Active,
    Terminated,
}

/// Why the monitor forced the logout. The display text is what the agent
/// sees on the login surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Midnight,
    Idle,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TerminationReason::Midnight => write!(f, "Auto-logout at midnight."),
            TerminationReason::Idle => write!(f, "No movement detected for 20 minutes."),
        }
    }
}

pub struct Monitor {
    pub config: MonitorConfig,
    pub state: MonitorState,
    /// Last sample that qualified as movement; the comparison baseline.
    pub recorded: Option<Position>,
    pub last_movement: NaiveDateTime,
    lifecycle: SessionLifecycle,
    auth: Option<AuthClient>,
}

impl Monitor {
    pub fn new(config: MonitorConfig, lifecycle: SessionLifecycle, auth: Option<AuthClient>) -> Self {
        Monitor {
            config,
            state: MonitorState::Active,
            recorded: None,
            last_movement: Local::now().naive_local(),
            lifecycle,
            auth,
        }
    }

    /// Feeds one position sample into the movement tracker.
    ///
    /// The very first sample always becomes the recorded baseline. Later
    /// samples only advance the movement clock when they lie at least
    /// `movement_threshold` meters from the last recorded sample, which
    /// absorbs GPS jitter around a stationary point.
    pub fn handle_position(&mut self, sample: Position) {
        if self.state == MonitorState::Terminated {
            return;
        }
        match self.recorded {
            None => {
                self.recorded = Some(sample);
                self.last_movement = sample.timestamp;
            }
            Some(recorded) => {
                let distance = recorded.distance_to(&sample);
                if distance >= self.config.movement_threshold {
                    msg_debug!(format!("qualifying movement of {:.1} m", distance));
                    self.recorded = Some(sample);
                    self.last_movement = sample.timestamp;
                }
            }
        }
    }

    /// Evaluates the idle condition at `now` and transitions to
    /// `Terminated` when it holds. At most one transition ever happens;
    /// a later overdue check is a no-op.
    pub fn check_idle(&mut self, now: NaiveDateTime) -> Option<TerminationReason> {
        if self.state == MonitorState::Terminated {
            return None;
        }
        if now - self.last_movement >= TimeDelta::minutes(self.config.idle_threshold as i64) {
            self.state = MonitorState::Terminated;
            return Some(TerminationReason::Idle);
        }
        None
    }

    /// Marks the midnight transition. Returns false when the instance has
    /// already terminated, so the termination body cannot run twice even if
    /// both conditions become true in the same tick.
    pub fn cross_midnight(&mut self) -> bool {
        if self.state == MonitorState::Terminated {
            return false;
        }
        self.state = MonitorState::Terminated;
        true
    }

    /// Runs the monitor until termination and returns the winning reason.
    ///
    /// The midnight timer, the idle ticker and the position watch run
    /// independently inside one select loop; breaking out of it drops all
    /// three, which is the scoped-cleanup contract of the monitor.
    pub async fn run(&mut self, mut watch: PositionWatch) -> TerminationReason {
        let mut ticker = time::interval(Duration::from_millis(self.config.poll_interval));
        let midnight = time::sleep(until_midnight(Local::now()));
        tokio::pin!(midnight);
        let mut watching = true;

        let reason = loop {
            tokio::select! {
                _ = &mut midnight => {
                    if self.cross_midnight() {
                        break TerminationReason::Midnight;
                    }
                }
                _ = ticker.tick() => {
                    if let Some(reason) = self.check_idle(Local::now().naive_local()) {
                        break reason;
                    }
                }
                sample = watch.recv(), if watching => match sample {
                    Some(Ok(position)) => self.handle_position(position),
                    Some(Err(e)) => msg_warning!(Message::PositionUnavailable(e.to_string())),
                    // A dead source does not terminate the session by
                    // itself; the idle clock simply keeps running.
                    None => watching = false,
                }
            }
        };

        drop(watch); // aborts the polling task
        self.finish(reason).await;
        reason
    }

    /// The termination body, invoked exactly once from the run loop: close
    /// the session, sign the identity out, surface the reason. Every step
    /// is best-effort and never propagates an error past the monitor.
    pub async fn finish(&mut self, reason: TerminationReason) {
        self.lifecycle.end();
        if let Some(auth) = &self.auth {
            if let Err(e) = auth.sign_out().await {
                msg_warning!(Message::SignOutFailed(e.to_string()));
            }
        }
        msg_print!(Message::AutoLogout(reason.to_string()));
    }
}

/// Time remaining until the next local midnight.
pub fn until_midnight(now: DateTime<Local>) -> Duration {
    let next = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| now.naive_local());
    (next - now.naive_local()).to_std().unwrap_or(Duration::ZERO)
}
