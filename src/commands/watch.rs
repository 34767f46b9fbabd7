//! Runs the session tracker and the idle/midnight auto-logout monitor.
//!
//! Resolves the agent and organization, opens (or resumes) today's session,
//! then watches device positions until either local midnight or the idle
//! threshold terminates the session. Session tracking is best-effort: a
//! failing store or position source degrades the run, never aborts it.

use crate::api::auth::AuthClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::libs::position::{HttpPositionSource, PositionWatch};
use crate::libs::session::SessionLifecycle;
use crate::{msg_bail_anyhow, msg_info, msg_warning};
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Agent identifier; defaults to the identity provider's current user
    #[arg(long)]
    agent: Option<String>,
    /// Organization identifier; defaults to the agent's assignment
    #[arg(long)]
    org: Option<String>,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let monitor_config = config.monitor.clone().unwrap_or_default();
    let auth = config.auth.as_ref().map(AuthClient::new);

    let (agent_id, org_id) = resolve_identity(&args, auth.as_ref()).await?;

    let mut lifecycle = SessionLifecycle::new();
    lifecycle.start(&agent_id, &org_id);

    let watch = match HttpPositionSource::new(&monitor_config.position_url, monitor_config.position_timeout) {
        Ok(source) => PositionWatch::spawn(source, Duration::from_millis(monitor_config.poll_interval)),
        Err(e) => {
            msg_warning!(Message::PositionUnavailable(e.to_string()));
            PositionWatch::disconnected()
        }
    };

    msg_info!(Message::MonitorStarted {
        idle_threshold: monitor_config.idle_threshold,
        movement_threshold: monitor_config.movement_threshold,
        poll_interval: monitor_config.poll_interval,
    });

    let mut monitor = Monitor::new(monitor_config, lifecycle, auth);
    monitor.run(watch).await;
    Ok(())
}

/// Command-line overrides win; otherwise the identity provider supplies the
/// agent id and the organization assignment.
async fn resolve_identity(args: &WatchArgs, auth: Option<&AuthClient>) -> Result<(String, String)> {
    let agent_id = match &args.agent {
        Some(id) => id.clone(),
        None => match auth {
            Some(client) => client.identity().await?.id,
            None => msg_bail_anyhow!(Message::AgentUnknown),
        },
    };
    let org_id = match &args.org {
        Some(id) => id.clone(),
        None => match auth {
            Some(client) => client.org_assignment(&agent_id).await?,
            None => msg_bail_anyhow!(Message::AuthNotConfigured),
        },
    };
    Ok((agent_id, org_id))
}
