//! Audit flow
//!
//! The end-to-end run: list, classify, report, select, confirm,
//! remediate. Everything after client construction lives here so the
//! whole flow can be exercised against a mock manager.

use anyhow::Result;
use std::path::Path;

use crate::audit::{classify, print_report, select_gateways, Selection};
use crate::nsx::{list_tier1_gateways, NsxClient, NsxError};
use crate::prompt::Prompt;
use crate::remediate::{remediate, render_summary, RemediationSummary};

/// Answers accepted as confirmation.
const YES_ANSWERS: [&str; 5] = ["y", "yes", "s", "si", "sì"];

/// Run the full audit and remediation flow.
///
/// Per-gateway remediation failures are printed and counted but never
/// stop the batch; the function only fails on fatal errors (listing,
/// prompt I/O).
pub async fn run_audit(
    client: &NsxClient,
    prompt: &mut dyn Prompt,
    backup_dir: &Path,
) -> Result<()> {
    println!("Recupero elenco Tier-1 gateways da NSX-T Manager...");

    let gateways = list_tier1_gateways(client).await?;
    let classification = classify(&gateways);

    print_report(gateways.len(), &classification);

    if classification.non_compliant.is_empty() {
        println!("Nessuna modifica necessaria. Uscita.");
        return Ok(());
    }

    let selected = match select_gateways(&classification.non_compliant, prompt)? {
        Selection::Cancelled => {
            println!("\nNessun T1 selezionato. Operazione annullata.");
            return Ok(());
        }
        Selection::Picked(selected) => selected,
    };

    println!("\n{}", "=".repeat(70));
    let answer = prompt.read_line(&format!(
        "CONFERMA: abilitare Standby Relocation sui {} T1 selezionati? (yes/no): ",
        selected.len()
    ))?;

    if !YES_ANSWERS.contains(&answer.to_lowercase().as_str()) {
        println!("Operazione annullata.");
        return Ok(());
    }

    println!("\nProcedo con l'abilitazione (GET + PUT) di Standby Relocation sui T1 selezionati...");
    println!(
        "I backup delle configurazioni verranno salvati nella directory '{}'\n",
        backup_dir.display()
    );

    let mut summary = RemediationSummary::default();

    for t1 in &selected {
        let id = t1.id().unwrap_or("unknown");
        match remediate(client, id, true, backup_dir).await {
            Ok(backup) => {
                summary.backups.push(backup);
                summary.succeeded += 1;
            }
            Err(err) => {
                summary.failed += 1;
                match err.downcast_ref::<NsxError>().and_then(NsxError::response_body) {
                    Some(body) => {
                        println!("[ERRORE] T1 id={id} – {err:#} – risposta: {body}");
                    }
                    None => println!("[ERRORE] T1 id={id} – {err:#}"),
                }
            }
        }
    }

    print!("{}", render_summary(&summary, backup_dir));
    println!("\nOperazione completata.");

    Ok(())
}
