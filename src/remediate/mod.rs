//! Remediation
//!
//! Per-gateway GET / backup / mutate / PUT sequence and the batch
//! summary. The backup is written before any mutation and is never
//! removed, even when the PUT fails.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::nsx::{get_tier1, put_tier1, NsxClient, Tier1Gateway};

/// Outcome of one remediation batch.
#[derive(Debug, Default)]
pub struct RemediationSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub backups: Vec<PathBuf>,
}

/// Write the pre-change configuration to
/// `<backup_dir>/T1_<id>_<YYYYMMDD_HHMMSS>.json`.
///
/// Timestamp granularity is one second; a second backup for the same
/// id within the same second overwrites the first.
pub fn save_backup(gateway: &Tier1Gateway, backup_dir: &Path) -> Result<PathBuf> {
    if !backup_dir.exists() {
        fs::create_dir_all(backup_dir)
            .with_context(|| format!("Failed to create backup directory {}", backup_dir.display()))?;
        println!("[INFO] Creata directory '{}' per i backup", backup_dir.display());
    }

    let id = gateway.id().unwrap_or("unknown");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = backup_dir.join(format!("T1_{id}_{timestamp}.json"));

    let content = serde_json::to_string_pretty(gateway).context("Failed to serialize backup")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write backup {}", path.display()))?;

    println!("[BACKUP] Configurazione salvata in: {}", path.display());
    Ok(path)
}

/// Remediate one Tier-1 gateway: GET the full object, back it up, set
/// `enable_standby_relocation` to `desired`, PUT the full object back.
///
/// Returns the backup path. No rollback on failure; a failed PUT
/// leaves the backup on disk for manual recovery.
pub async fn remediate(
    client: &NsxClient,
    id: &str,
    desired: bool,
    backup_dir: &Path,
) -> Result<PathBuf> {
    println!("[INFO] GET configurazione completa T1 id={id}...");
    let mut config = get_tier1(client, id).await?;

    let backup = save_backup(&config, backup_dir)?;

    config.set_standby_relocation(desired);

    println!("[INFO] PUT configurazione modificata per T1 id={id}...");
    put_tier1(client, id, &config).await?;

    println!("[OK] Standby Relocation aggiornato su T1 id={id} -> {desired}");
    info!("Tier-1 {} updated, backup at {}", id, backup.display());
    Ok(backup)
}

/// Render the end-of-batch summary block.
pub fn render_summary(summary: &RemediationSummary, backup_dir: &Path) -> String {
    let mut out = String::new();
    out.push_str("\n==================== RIEPILOGO OPERAZIONE ====================\n");
    out.push_str(&format!(
        "T1 modificati con successo:  {}\n",
        summary.succeeded
    ));
    out.push_str(&format!("T1 con errori:               {}\n", summary.failed));
    out.push_str(&format!(
        "Backup salvati:              {}\n",
        summary.backups.len()
    ));
    if !summary.backups.is_empty() {
        out.push_str(&format!(
            "Directory backup:            {}/\n",
            backup_dir.display()
        ));
    }
    out.push_str("=============================================================\n");
    out
}
