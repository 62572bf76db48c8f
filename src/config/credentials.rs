//! Credential resolution
//!
//! Builds the (manager, username, password) triple for the NSX session.
//! Precedence per value: command-line flag, then environment variable,
//! then interactive prompt. The password prompt is masked.

use anyhow::Result;

use super::env::EnvConfig;
use crate::prompt::Prompt;

/// Resolved NSX connection credentials.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Manager FQDN or IP, without scheme
    pub manager: String,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: String,
}

impl Credentials {
    /// Resolve credentials from flags, environment and prompts.
    pub fn resolve(
        manager_flag: Option<&str>,
        username_flag: Option<&str>,
        env: &EnvConfig,
        prompt: &mut dyn Prompt,
    ) -> Result<Self> {
        let manager = match manager_flag.map(str::to_string).or_else(|| env.manager.clone()) {
            Some(v) => v,
            None => prompt.read_line("Inserisci NSX Manager (FQDN o IP): ")?,
        };

        let username = match username_flag.map(str::to_string).or_else(|| env.username.clone()) {
            Some(v) => v,
            None => prompt.read_line("Inserisci username NSX: ")?,
        };

        let password = match env.password.clone() {
            Some(v) => v,
            None => prompt.read_password("Inserisci password NSX: ")?,
        };

        Ok(Self {
            manager,
            username,
            password,
        })
    }
}
