//! Audit report rendering
//!
//! Renders the operator-facing summary of a Tier-1 audit.

use super::classify::Classification;

/// Render the aggregate report plus the non-compliant detail table.
pub fn render_report(total: usize, classification: &Classification) -> String {
    let mut out = String::new();

    out.push_str("\n==================== REPORT TIER-1 NSX-T ====================\n");
    out.push_str(&format!("Totale T1 trovati:                     {total}\n"));
    out.push_str(&format!(
        "T1 in ha_mode=ACTIVE_STANDBY:          {}\n",
        classification.active_standby.len()
    ));
    out.push_str(&format!(
        "   ├─ già conformi (relocation=ON):    {}\n",
        classification.compliant.len()
    ));
    out.push_str(&format!(
        "   └─ NON conformi (relocation=OFF):   {}\n",
        classification.non_compliant.len()
    ));
    out.push_str("=============================================================\n\n");

    if classification.non_compliant.is_empty() {
        out.push_str("Tutti i T1 in ACTIVE_STANDBY sono già conformi (relocation=ON).\n");
        return out;
    }

    out.push_str("Dettaglio T1 NON conformi (verranno modificati se confermi):\n");
    out.push_str(&"-".repeat(90));
    out.push('\n');
    for t1 in &classification.non_compliant {
        out.push_str(&format!(
            "NAME: {:30}  ID: {:28}  ha_mode={}  enable_standby_relocation={}\n",
            t1.display_name().unwrap_or(""),
            t1.id().unwrap_or(""),
            t1.ha_mode().unwrap_or(""),
            t1.standby_relocation()
        ));
    }
    out.push_str(&"-".repeat(90));
    out.push('\n');
    out.push_str(&format!(
        "Totale T1 da modificare: {}\n",
        classification.non_compliant.len()
    ));

    out
}

/// Print the report to stdout.
pub fn print_report(total: usize, classification: &Classification) {
    println!("{}", render_report(total, classification));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::classify::classify;
    use crate::nsx::Tier1Gateway;
    use serde_json::json;

    fn gateway(value: serde_json::Value) -> Tier1Gateway {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_report_counts() {
        let gateways = vec![
            gateway(json!({"id": "t1-a", "ha_mode": "ACTIVE_STANDBY", "enable_standby_relocation": true})),
            gateway(json!({"id": "t1-b", "ha_mode": "ACTIVE_STANDBY"})),
            gateway(json!({"id": "t1-c", "ha_mode": "ACTIVE_ACTIVE"})),
            gateway(json!({"id": "t1-d", "ha_mode": "ACTIVE_STANDBY", "display_name": "gw-d"})),
            gateway(json!({"id": "t1-e"})),
        ];
        let classification = classify(&gateways);
        let report = render_report(gateways.len(), &classification);

        assert!(report.contains("Totale T1 trovati:                     5"));
        assert!(report.contains("T1 in ha_mode=ACTIVE_STANDBY:          3"));
        assert!(report.contains("già conformi (relocation=ON):    1"));
        assert!(report.contains("NON conformi (relocation=OFF):   2"));
        assert!(report.contains("Totale T1 da modificare: 2"));
    }

    #[test]
    fn test_detail_rows_list_non_compliant() {
        let gateways = vec![gateway(json!({
            "id": "t1-prod",
            "display_name": "gateway-prod",
            "ha_mode": "ACTIVE_STANDBY",
            "enable_standby_relocation": false
        }))];
        let classification = classify(&gateways);
        let report = render_report(1, &classification);

        assert!(report.contains("NAME: gateway-prod"));
        assert!(report.contains("ID: t1-prod"));
        assert!(report.contains("enable_standby_relocation=false"));
    }

    #[test]
    fn test_all_compliant_message() {
        let gateways = vec![gateway(json!({
            "id": "t1-a",
            "ha_mode": "ACTIVE_STANDBY",
            "enable_standby_relocation": true
        }))];
        let classification = classify(&gateways);
        let report = render_report(1, &classification);

        assert!(report.contains("Tutti i T1 in ACTIVE_STANDBY sono già conformi"));
        assert!(!report.contains("Dettaglio"));
    }
}
