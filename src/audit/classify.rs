//! Compliance classification
//!
//! Pure single-pass partition of the Tier-1 list by HA mode and the
//! standby relocation flag.

use crate::nsx::Tier1Gateway;

/// Buckets derived from one Tier-1 listing.
///
/// `compliant` and `non_compliant` partition `active_standby`;
/// gateways in other HA modes appear in no bucket. Input order is
/// preserved everywhere.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    /// Gateways with `ha_mode == ACTIVE_STANDBY`
    pub active_standby: Vec<Tier1Gateway>,
    /// Active-standby gateways with relocation already enabled
    pub compliant: Vec<Tier1Gateway>,
    /// Active-standby gateways with relocation off or unset
    pub non_compliant: Vec<Tier1Gateway>,
}

/// Classify a Tier-1 listing.
pub fn classify(gateways: &[Tier1Gateway]) -> Classification {
    let mut classification = Classification::default();

    for t1 in gateways {
        if !t1.is_active_standby() {
            continue;
        }
        classification.active_standby.push(t1.clone());
        if t1.standby_relocation() {
            classification.compliant.push(t1.clone());
        } else {
            classification.non_compliant.push(t1.clone());
        }
    }

    classification
}
