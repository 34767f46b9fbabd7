//! API client modules for external service integrations.
//!
//! Holds the client for the hosted identity provider that issues agent
//! identities and organization assignments and accepts sign-out requests.

pub mod auth;

pub use auth::AuthConfig;
