//! Configuration management for the fieldlog application.
//!
//! Settings are stored as JSON in the platform application-data directory
//! and are split into optional modules: the monitor section controls idle
//! detection and position sampling, the auth section points at the external
//! identity provider. Missing sections fall back to defaults so the
//! application runs with minimal setup.

use super::data_storage::DataStorage;
use crate::api::auth::AuthConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown during interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Idle monitor and position sampling settings.
///
/// The defaults implement the product policy: 20 minutes without a
/// qualifying movement of at least 50 meters ends the session, with the
/// idle condition evaluated once per minute.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Minutes without qualifying movement before auto-logout.
    pub idle_threshold: u64,
    /// Minimum displacement in meters between position samples to count
    /// as movement; sub-threshold jitter does not reset the idle clock.
    pub movement_threshold: f64,
    /// Interval in milliseconds between idle checks and position requests.
    pub poll_interval: u64,
    /// Bounded wait in seconds for a single position request.
    pub position_timeout: u64,
    /// URL of the device's position endpoint.
    pub position_url: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            idle_threshold: 20,
            movement_threshold: 50.0,
            poll_interval: 60_000,
            position_timeout: 30,
            position_url: "http://127.0.0.1:8947/position".to_string(),
        }
    }
}

/// Root configuration container.
///
/// Unconfigured modules are omitted from the JSON output to keep the
/// configuration file clean.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Idle monitor and position sampling settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Identity provider connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl Config {
    /// Loads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults,
    /// and only the selected modules are touched.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "monitor".to_string(),
                name: "Monitor".to_string(),
            },
            AuthConfig::module(),
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,
                        movement_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMovementThreshold.to_string())
                            .default(default.movement_threshold)
                            .interact_text()?,
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                        position_timeout: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPositionTimeout.to_string())
                            .default(default.position_timeout)
                            .interact_text()?,
                        position_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPositionUrl.to_string())
                            .default(default.position_url)
                            .interact_text()?,
                    });
                }
                "auth" => config.auth = Some(AuthConfig::init(&config.auth)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
