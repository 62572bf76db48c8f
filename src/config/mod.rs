//! Configuration module
//!
//! Resolves the NSX connection settings from flags, environment
//! variables and interactive prompts.

mod credentials;
mod env;

pub use credentials::Credentials;
pub use env::EnvConfig;
