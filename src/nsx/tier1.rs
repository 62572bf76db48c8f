//! Tier-1 gateway operations
//!
//! Policy API operations on Tier-1 gateways. Gateway objects are kept
//! as opaque JSON maps so a GET/PUT round trip preserves every field
//! the tool does not understand, in server order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::client::NsxClient;

/// Policy API collection path for Tier-1 gateways.
pub const TIER1_PATH: &str = "/policy/api/v1/infra/tier-1s";

/// HA mode value that makes standby relocation applicable.
pub const ACTIVE_STANDBY: &str = "ACTIVE_STANDBY";

/// A Tier-1 gateway as returned by the Policy API.
///
/// The full object is carried verbatim; only the handful of fields the
/// audit needs are given typed accessors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier1Gateway(Map<String, Value>);

impl Tier1Gateway {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.0.get("display_name").and_then(Value::as_str)
    }

    pub fn ha_mode(&self) -> Option<&str> {
        self.0.get("ha_mode").and_then(Value::as_str)
    }

    /// Current `enable_standby_relocation` value; anything other than
    /// boolean `true` (including an absent field) reads as `false`.
    pub fn standby_relocation(&self) -> bool {
        self.0
            .get("enable_standby_relocation")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Set `enable_standby_relocation`, leaving every other field as-is.
    pub fn set_standby_relocation(&mut self, enabled: bool) {
        self.0
            .insert("enable_standby_relocation".to_string(), Value::Bool(enabled));
    }

    pub fn is_active_standby(&self) -> bool {
        self.ha_mode() == Some(ACTIVE_STANDBY)
    }
}

/// One page of the Tier-1 listing endpoint.
#[derive(Debug, Deserialize)]
struct Tier1Page {
    #[serde(default)]
    results: Vec<Tier1Gateway>,
    cursor: Option<String>,
}

/// List every Tier-1 gateway, following pagination cursors.
///
/// Server order is preserved across pages. Any failed page fails the
/// whole listing; no partial result is returned.
pub async fn list_tier1_gateways(client: &NsxClient) -> Result<Vec<Tier1Gateway>> {
    let mut gateways = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let query: Vec<(&str, &str)> = match cursor.as_deref() {
            Some(c) => vec![("cursor", c)],
            None => Vec::new(),
        };

        let body = client
            .get_json(TIER1_PATH, &query)
            .await
            .context("Failed to list Tier-1 gateways")?;

        let page: Tier1Page =
            serde_json::from_value(body).context("Unexpected Tier-1 listing payload")?;

        debug!("Fetched page with {} Tier-1 gateways", page.results.len());
        gateways.extend(page.results);

        match page.cursor {
            Some(c) if !c.is_empty() => cursor = Some(c),
            _ => break,
        }
    }

    info!("Listed {} Tier-1 gateways", gateways.len());
    Ok(gateways)
}

/// GET the full configuration of one Tier-1 gateway.
pub async fn get_tier1(client: &NsxClient, id: &str) -> Result<Tier1Gateway> {
    let body = client
        .get_json(&format!("{TIER1_PATH}/{id}"), &[])
        .await
        .with_context(|| format!("Failed to fetch Tier-1 {id}"))?;

    serde_json::from_value(body).with_context(|| format!("Unexpected payload for Tier-1 {id}"))
}

/// PUT the full configuration of one Tier-1 gateway back.
pub async fn put_tier1(client: &NsxClient, id: &str, gateway: &Tier1Gateway) -> Result<()> {
    let body = serde_json::to_value(gateway).context("Failed to serialize Tier-1 object")?;

    client
        .put_json(&format!("{TIER1_PATH}/{id}"), &body)
        .await
        .with_context(|| format!("Failed to update Tier-1 {id}"))?;

    Ok(())
}
