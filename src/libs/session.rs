//! Session lifecycle manager.
//!
//! Owns the in-memory id of the currently open session and keeps the store's
//! session row correct: opened or resumed once per agent, organization and
//! calendar day, closed exactly once. Session bookkeeping is best-effort by
//! design; a failing store degrades to untracked mode and never blocks the
//! rest of the application, and in particular never blocks a logout.

use crate::db::sessions::Sessions;
use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use chrono::Local;

pub struct SessionLifecycle {
    sessions: Option<Sessions>,
    current: Option<i64>,
}

impl SessionLifecycle {
    /// An unreachable store is reported once and leaves the manager in
    /// untracked mode rather than failing construction.
    pub fn new() -> Self {
        let sessions = match Sessions::new() {
            Ok(sessions) => Some(sessions),
            Err(e) => {
                msg_warning!(Message::StoreUnavailable(e.to_string()));
                None
            }
        };
        Self { sessions, current: None }
    }

    pub fn current(&self) -> Option<i64> {
        self.current
    }

    /// Adopts an existing session id, e.g. for a manual close.
    pub fn adopt(&mut self, id: i64) {
        self.current = Some(id);
    }

    /// Opens today's session, or resumes the open one if the client
    /// re-initialized mid-day. Returns `None` when tracking is degraded.
    pub fn start(&mut self, agent_id: &str, org_id: &str) -> Option<i64> {
        let Some(store) = &self.sessions else {
            return None;
        };
        let now = Local::now().naive_local();
        match store.start(agent_id, org_id, now) {
            Ok((id, created)) => {
                if created {
                    msg_info!(Message::SessionStarted(id));
                } else {
                    msg_info!(Message::SessionResumed(id));
                }
                self.current = Some(id);
                Some(id)
            }
            Err(e) => {
                msg_warning!(Message::SessionStartFailed(e.to_string()));
                self.current = None;
                None
            }
        }
    }

    /// Closes the current session. No-op without one; errors are logged and
    /// swallowed so the caller can proceed to sign the user out regardless.
    /// The in-memory id is cleared either way, so a later `start` cannot
    /// reuse a stale id.
    pub fn end(&mut self) {
        let Some(id) = self.current.take() else {
            return;
        };
        if let Err(e) = self.close(id) {
            msg_warning!(Message::SessionCloseFailed(e.to_string()));
        }
    }

    // Two strictly ordered writes: the logout timestamp first, then the
    // duration derived from the store's login timestamp rather than any
    // client-held value, guarding against clock drift between devices.
    fn close(&self, id: i64) -> Result<()> {
        let Some(store) = &self.sessions else {
            return Ok(());
        };
        let now = Local::now().naive_local();
        if store.set_logout(id, now)? == 0 {
            return Ok(()); // already closed elsewhere
        }
        let Some(session) = store.fetch(id)? else {
            return Ok(());
        };
        let minutes = ((now - session.login).num_seconds() as f64 / 60.0).round() as i64;
        store.set_duration(id, minutes.max(0))?;
        Ok(())
    }
}

impl Default for SessionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
