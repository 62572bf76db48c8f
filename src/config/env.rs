//! Environment variable configuration
//!
//! Reads the NSX connection settings from environment variables.

use std::env;

/// Connection settings resolved from environment variables.
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Manager FQDN or IP from NSX_MANAGER
    pub manager: Option<String>,
    /// Username from NSX_USERNAME
    pub username: Option<String>,
    /// Password from NSX_PASSWORD
    pub password: Option<String>,
}

impl EnvConfig {
    /// Load settings from environment variables.
    pub fn load() -> Self {
        Self {
            manager: get_env("NSX_MANAGER"),
            username: get_env("NSX_USERNAME"),
            password: get_env("NSX_PASSWORD"),
        }
    }

}

/// Get a non-empty environment variable.
fn get_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Builder for setting environment variables (useful for testing)
#[cfg(test)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

#[cfg(test)]
impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn manager(mut self, value: impl Into<String>) -> Self {
        self.vars.push(("NSX_MANAGER".to_string(), value.into()));
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.vars.push(("NSX_USERNAME".to_string(), value.into()));
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.vars.push(("NSX_PASSWORD".to_string(), value.into()));
        self
    }

    /// Apply and return a guard that restores the previous values on drop.
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

/// Guard that restores environment variables on drop
#[cfg(test)]
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.manager.is_none());
        assert!(config.username.is_none());
        assert!(config.password.is_none());
    }

    #[test]
    fn test_env_config_load() {
        let _guard = EnvBuilder::new()
            .manager("nsx.example.com")
            .username("admin")
            .password("secret")
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.manager.as_deref(), Some("nsx.example.com"));
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert_eq!(config.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let _guard = EnvBuilder::new().manager("").apply_scoped();

        let config = EnvConfig::load();
        assert!(config.manager.is_none());
    }
}
