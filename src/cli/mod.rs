//! CLI argument parsing
//!
//! Defines the command-line interface using clap. The tool is
//! interactive; flags only override connection settings and knobs.

use clap::Parser;

/// NSX-T Tier-1 standby relocation audit and remediation tool
#[derive(Parser, Debug)]
#[command(name = "nsx-t1-audit")]
#[command(version)]
#[command(about = "Audit Tier-1 gateways and enable standby relocation where missing")]
#[command(long_about = None)]
pub struct Args {
    /// NSX Manager FQDN or IP (overrides NSX_MANAGER)
    #[arg(short, long)]
    pub manager: Option<String>,

    /// NSX username (overrides NSX_USERNAME; password comes from
    /// NSX_PASSWORD or a masked prompt, never a flag)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Directory for pre-change configuration backups
    #[arg(short, long, default_value = "backups")]
    pub backup_dir: String,

    /// Validate the manager's TLS certificate (off by default, for
    /// self-signed manager certificates)
    #[arg(long)]
    pub verify_tls: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
