//! Display implementation for fieldlog application messages.
//!
//! Single source of truth for all user-facing text. The `AutoLogout`
//! variant is rendered verbatim: it carries the termination reason string
//! shown to the agent on the login surface.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted(id) => format!("Session {} started for today", id),
            Message::SessionResumed(id) => format!("Resumed today's open session {}", id),
            Message::SessionEnded => "Session closed for today".to_string(),
            Message::SessionStartFailed(e) => format!("Failed to start session tracking: {}. Continuing untracked", e),
            Message::SessionCloseFailed(e) => format!("Failed to close session: {}", e),
            Message::NoOpenSession => "No open session for today".to_string(),
            Message::StoreUnavailable(e) => format!("Session store unavailable: {}. Continuing untracked", e),
            Message::SessionsTitle(date) => format!("Sessions for {}", date),
            Message::SessionsNotFound(date) => format!("No sessions recorded for {}", date),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted {
                idle_threshold,
                movement_threshold,
                poll_interval,
            } => format!(
                "Monitor started: idle threshold {} min, movement threshold {} m, poll interval {} ms",
                idle_threshold, movement_threshold, poll_interval
            ),
            Message::AutoLogout(reason) => reason.clone(),
            Message::PositionUnavailable(e) => format!("Position unavailable: {}", e),

            // === IDENTITY MESSAGES ===
            Message::SignOutFailed(e) => format!("Identity sign-out failed: {}", e),
            Message::IdentityFetchFailed(e) => format!("Failed to fetch identity: {}", e),
            Message::NoOrgAssigned => "No organization assigned. Please contact your employer".to_string(),
            Message::AuthNotConfigured => "Identity provider is not configured. Run 'fieldlog init' or pass --org".to_string(),
            Message::AgentUnknown => "Agent identity unknown. Configure the identity provider or pass --agent".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully!".to_string(),
            Message::ConfigModuleMonitor => "Monitor settings".to_string(),
            Message::ConfigModuleAuth => "Identity provider settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIdleThreshold => "Idle threshold in minutes before auto-logout".to_string(),
            Message::PromptMovementThreshold => "Minimum movement in meters to reset the idle timer".to_string(),
            Message::PromptPollInterval => "Poll interval in milliseconds".to_string(),
            Message::PromptPositionTimeout => "Position request timeout in seconds".to_string(),
            Message::PromptPositionUrl => "Position source URL".to_string(),
            Message::PromptAuthApiUrl => "Identity API base URL".to_string(),
            Message::PromptAuthToken => "Identity API token".to_string(),
        };
        write!(f, "{}", text)
    }
}
