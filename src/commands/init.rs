//! Application configuration initialization command.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;

/// Runs the interactive configuration wizard and saves the result.
pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
