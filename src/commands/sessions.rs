//! Displays recorded sessions for a date.

use crate::db::sessions::Sessions;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SessionsArgs {
    /// Date to display (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(args: SessionsArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let sessions = Sessions::new()?.fetch_date(date)?;

    if sessions.is_empty() {
        msg_print!(Message::SessionsNotFound(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::SessionsTitle(date.to_string()), true);
    View::sessions(&sessions)?;
    Ok(())
}
