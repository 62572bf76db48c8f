//! NSX-T Policy API access
//!
//! HTTP client plus the Tier-1 gateway operations used by the audit.

mod client;
mod tier1;

pub use client::{NsxClient, NsxError};
pub use tier1::{get_tier1, list_tier1_gateways, put_tier1, Tier1Gateway};
