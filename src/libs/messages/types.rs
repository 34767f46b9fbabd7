#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted(i64),
    SessionResumed(i64),
    SessionEnded,
    SessionStartFailed(String),
    SessionCloseFailed(String),
    NoOpenSession,
    StoreUnavailable(String),
    SessionsTitle(String),
    SessionsNotFound(String),

    // === MONITOR MESSAGES ===
    MonitorStarted {
        idle_threshold: u64,
        movement_threshold: f64,
        poll_interval: u64,
    },
    AutoLogout(String),
    PositionUnavailable(String),

    // === IDENTITY MESSAGES ===
    SignOutFailed(String),
    IdentityFetchFailed(String),
    NoOrgAssigned,
    AuthNotConfigured,
    AgentUnknown,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    ConfigModuleAuth,
    PromptSelectModules,
    PromptIdleThreshold,
    PromptMovementThreshold,
    PromptPollInterval,
    PromptPositionTimeout,
    PromptPositionUrl,
    PromptAuthApiUrl,
    PromptAuthToken,
}
