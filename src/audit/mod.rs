//! Audit logic
//!
//! Classification of Tier-1 gateways, the operator report, and the
//! interactive selection of gateways to remediate.

mod classify;
mod report;
mod select;

pub use classify::{classify, Classification};
pub use report::print_report;
pub use select::{select_gateways, Selection};
