//! NSX-T Tier-1 standby relocation audit tool
//!
//! Audits every Tier-1 gateway on an NSX-T manager and, after an
//! interactive selection and confirmation, enables
//! `enable_standby_relocation` on the non-compliant ones. Each change
//! is a full GET/PUT round trip with a pre-change JSON backup on disk.
//!
//! ## Usage
//!
//! ```bash
//! # Credentials from the environment
//! export NSX_MANAGER=nsx01.lab.local
//! export NSX_USERNAME=admin
//! export NSX_PASSWORD=...
//! nsx-t1-audit
//!
//! # Or prompted interactively (password masked)
//! nsx-t1-audit --backup-dir /var/backups/t1
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app;
mod audit;
mod cli;
mod config;
mod nsx;
mod prompt;
mod remediate;

use cli::Args;
use config::{Credentials, EnvConfig};
use nsx::NsxClient;
use prompt::StdinPrompt;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let mut prompt = StdinPrompt;

    let env = EnvConfig::load();
    let credentials = Credentials::resolve(
        args.manager.as_deref(),
        args.username.as_deref(),
        &env,
        &mut prompt,
    )?;

    let client = NsxClient::new(
        format!("https://{}", credentials.manager),
        &credentials.username,
        &credentials.password,
        args.verify_tls,
        args.timeout,
    )?;

    println!("\nConnesso a NSX Manager: {}", credentials.manager);

    app::run_audit(&client, &mut prompt, Path::new(&args.backup_dir)).await
}
