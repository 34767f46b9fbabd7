//! # Fieldlog - Field Agent Session Logging
//!
//! A command-line utility for tracking a field agent's working sessions,
//! from login to logout, with automatic termination at midnight or after
//! a period of positional inactivity.
//!
//! ## Features
//!
//! - **Session Tracking**: One session row per agent, organization and calendar day
//! - **Idle Auto-Logout**: Terminates the session after 20 minutes without movement
//! - **Midnight Auto-Logout**: Terminates the session when the local day rolls over
//! - **Movement Detection**: Haversine distance between device position samples
//! - **Identity Integration**: Resolves the agent and organization from an identity API
//! - **Session Listing**: Daily session tables for payroll and analytics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
