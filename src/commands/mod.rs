pub mod init;
pub mod sessions;
pub mod watch;

use crate::db::sessions::Sessions;
use crate::libs::messages::Message;
use crate::libs::session::SessionLifecycle;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Track the working session and watch for idle or midnight auto-logout")]
    Watch(watch::WatchArgs),
    #[command(about = "Close today's open session")]
    End,
    #[command(about = "Display sessions for a given date")]
    Sessions(sessions::SessionsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::End => end_cmd(),
            Commands::Sessions(args) => sessions::cmd(args),
        }
    }
}

/// Manual logout: closes every open session recorded for today.
fn end_cmd() -> Result<()> {
    let today = Local::now().date_naive();
    let open: Vec<_> = Sessions::new()?
        .fetch_date(today)?
        .into_iter()
        .filter(|session| session.logout.is_none())
        .collect();

    if open.is_empty() {
        msg_print!(Message::NoOpenSession);
        return Ok(());
    }

    let mut lifecycle = SessionLifecycle::new();
    for session in open {
        lifecycle.adopt(session.id);
        lifecycle.end();
    }
    msg_success!(Message::SessionEnded);
    Ok(())
}
