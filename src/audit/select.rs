//! Interactive gateway selection
//!
//! Text-driven picker over the non-compliant bucket. Matching is
//! case-insensitive against both display name and id.

use anyhow::Result;
use std::collections::HashMap;

use crate::nsx::Tier1Gateway;
use crate::prompt::Prompt;

/// Outcome of the selection loop.
#[derive(Clone, Debug)]
pub enum Selection {
    /// Operator cancelled; nothing to modify.
    Cancelled,
    /// Gateways to remediate, deduplicated, in first-seen order.
    Picked(Vec<Tier1Gateway>),
}

/// Run the selection loop over the non-compliant gateways.
///
/// `all`/`a`/`*` selects the whole bucket, `exit`/`q`/`quit`/`cancel`
/// cancels. Anything else is a comma-separated token list; unknown
/// tokens are reported but do not abort, and a round with zero matches
/// re-prompts instead of returning an empty selection.
pub fn select_gateways(
    non_compliant: &[Tier1Gateway],
    prompt: &mut dyn Prompt,
) -> Result<Selection> {
    println!("\n==================== SELEZIONE T1 DA MODIFICARE ====================");
    println!("Opzioni disponibili:");
    println!("  'all'  o 'a'     : modifica TUTTI i T1 non conformi");
    println!("  nomi separati    : es. 'gateway-prod,gateway-test' (usa display_name o id)");
    println!("  'exit' o 'q'     : annulla operazione");
    println!("\nNOTA: I nomi devono corrispondere ESATTAMENTE (case insensitive)");
    println!("{}", "=".repeat(70));

    // One shared lowercase map for both display names and ids. A later
    // insert overwrites an earlier one, so an id that collides with
    // another gateway's display name resolves to whichever was
    // inserted last. Known limitation.
    let mut lookup: HashMap<String, usize> = HashMap::new();
    for (index, t1) in non_compliant.iter().enumerate() {
        if let Some(name) = t1.display_name().filter(|n| !n.is_empty()) {
            lookup.insert(name.to_lowercase(), index);
        }
        if let Some(id) = t1.id() {
            lookup.insert(id.to_lowercase(), index);
        }
    }

    loop {
        let input = prompt.read_line("\nInserisci i nomi dei T1 (separati da virgola) o 'all': ")?;
        let lowered = input.to_lowercase();

        if matches!(lowered.as_str(), "exit" | "q" | "quit" | "cancel") {
            return Ok(Selection::Cancelled);
        }

        if matches!(lowered.as_str(), "all" | "a" | "*") {
            return Ok(Selection::Picked(non_compliant.to_vec()));
        }

        let mut picked_indices: Vec<usize> = Vec::new();
        let mut not_found: Vec<String> = Vec::new();

        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match lookup.get(&token.to_lowercase()) {
                Some(&index) => {
                    if !picked_indices.contains(&index) {
                        picked_indices.push(index);
                    }
                }
                None => not_found.push(token.to_string()),
            }
        }

        if !not_found.is_empty() {
            println!("\n⚠ Attenzione: I seguenti nomi NON sono stati trovati tra i T1 non conformi:");
            for name in &not_found {
                println!("  - '{name}'");
            }
        }

        if picked_indices.is_empty() {
            println!("\n[ERRORE] Nessun T1 valido trovato nella selezione");
            println!("Riprova con nomi corretti (copia/incolla dal report) o digita 'all' per tutti\n");
            continue;
        }

        let picked = picked_indices
            .into_iter()
            .map(|index| non_compliant[index].clone())
            .collect();
        return Ok(Selection::Picked(picked));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use serde_json::json;

    fn gateway(value: serde_json::Value) -> Tier1Gateway {
        serde_json::from_value(value).unwrap()
    }

    fn bucket() -> Vec<Tier1Gateway> {
        vec![
            gateway(json!({"id": "t1-01", "display_name": "gateway-01", "ha_mode": "ACTIVE_STANDBY"})),
            gateway(json!({"id": "t1-02", "display_name": "gateway-02", "ha_mode": "ACTIVE_STANDBY"})),
            gateway(json!({"id": "t1-03", "display_name": "", "ha_mode": "ACTIVE_STANDBY"})),
        ]
    }

    fn picked_ids(selection: Selection) -> Vec<String> {
        match selection {
            Selection::Picked(gateways) => gateways
                .iter()
                .filter_map(|t1| t1.id().map(str::to_string))
                .collect(),
            Selection::Cancelled => panic!("Expected a picked selection"),
        }
    }

    #[test]
    fn test_all_returns_whole_bucket_in_order() {
        let mut prompt = ScriptedPrompt::new(["all"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-01", "t1-02", "t1-03"]);
    }

    #[test]
    fn test_exit_cancels() {
        for token in ["exit", "q", "quit", "cancel", "EXIT"] {
            let mut prompt = ScriptedPrompt::new([token]);
            let selection = select_gateways(&bucket(), &mut prompt).unwrap();
            assert!(matches!(selection, Selection::Cancelled));
        }
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let mut prompt = ScriptedPrompt::new(["GATEWAY-01"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-01"]);
    }

    #[test]
    fn test_id_match_and_dedup() {
        // Same gateway named twice, by name and by id.
        let mut prompt = ScriptedPrompt::new(["gateway-02, t1-02, t1-01"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-02", "t1-01"]);
    }

    #[test]
    fn test_unknown_token_does_not_abort() {
        let mut prompt = ScriptedPrompt::new(["no-such-t1, gateway-01"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-01"]);
    }

    #[test]
    fn test_zero_matches_reprompts() {
        let mut prompt = ScriptedPrompt::new(["nonexistent-name", "gateway-02"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-02"]);
    }

    #[test]
    fn test_empty_display_name_keyed_by_id_only() {
        let mut prompt = ScriptedPrompt::new(["t1-03"]);
        let selection = select_gateways(&bucket(), &mut prompt).unwrap();
        assert_eq!(picked_ids(selection), ["t1-03"]);
    }
}
