//! Identity provider client.
//!
//! The hosted backend issues the authenticated agent identity, the agent's
//! organization assignment, and accepts sign-out requests. All calls are
//! token-authenticated; sign-out failures are reported by the caller but
//! never block a forced logout.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const IDENTITY_URL: &str = "auth/v1/user";
const SIGN_OUT_URL: &str = "auth/v1/logout";
const ASSIGNMENT_URL: &str = "rest/v1/assignment";

/// The current authenticated identity.
#[derive(Debug, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrgAssignment {
    org_id: Option<String>,
}

pub struct AuthClient {
    client: Client,
    config: AuthConfig,
}

impl AuthClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Fetches the currently authenticated identity.
    pub async fn identity(&self) -> Result<Identity> {
        let url = format!("{}/{}", self.config.api_url, IDENTITY_URL);
        let res = self.client.get(url).bearer_auth(&self.config.auth_token).send().await?;
        if res.status() != StatusCode::OK {
            return Err(msg_error_anyhow!(Message::IdentityFetchFailed(res.status().to_string())));
        }
        Ok(res.json::<Identity>().await?)
    }

    /// The organization the agent is assigned to, keyed by agent id.
    pub async fn org_assignment(&self, agent_id: &str) -> Result<String> {
        let url = format!("{}/{}/{}", self.config.api_url, ASSIGNMENT_URL, agent_id);
        let res = self.client.get(url).bearer_auth(&self.config.auth_token).send().await?;
        if res.status() != StatusCode::OK {
            return Err(msg_error_anyhow!(Message::IdentityFetchFailed(res.status().to_string())));
        }
        let assignment = res.json::<OrgAssignment>().await?;
        assignment.org_id.ok_or_else(|| msg_error_anyhow!(Message::NoOrgAssigned))
    }

    /// Signs the current identity out.
    pub async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/{}", self.config.api_url, SIGN_OUT_URL);
        self.client.post(url).bearer_auth(&self.config.auth_token).send().await?.error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthConfig {
    pub api_url: String,
    pub auth_token: String,
}

impl AuthConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "auth".to_string(),
            name: "Identity provider".to_string(),
        }
    }

    pub fn init(config: &Option<AuthConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            auth_token: "".to_string(),
        });
        println!("{}", Message::ConfigModuleAuth);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAuthApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            auth_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAuthToken.to_string())
                .default(config.auth_token)
                .interact_text()?,
        })
    }
}
