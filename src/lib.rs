//! Rewrite OCI route tables and security lists from one CIDR to another.
//!
//! Two modes share the same building blocks:
//! - [`run_rewrite`] walks a compartment and all its descendants, copying every
//!   rule that references the old CIDR with the new one.
//! - [`run_append`] looks at a single compartment and appends one rule for the
//!   new CIDR per table or list that routes or admits the old one.

pub mod args;
pub mod config;
pub mod logging;
pub mod models;
pub mod oci;
pub mod output;
pub mod processing;

use oci::{NetworkClient, OciCli};
use processing::{append_compartment, process_compartment, CidrChange, RunSummary};
use std::error::Error;

/// Recursive rewrite starting at `compartment_id`.
///
/// Individual listing or update failures are reported and counted, never returned.
pub fn run_rewrite(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
) -> RunSummary {
    let mut summary = RunSummary::new();
    process_compartment(client, compartment_id, change, &mut summary);
    summary
}

/// Single-level append-if-absent on `compartment_id`.
pub fn run_append(
    client: &dyn NetworkClient,
    compartment_id: &str,
    change: &CidrChange,
) -> RunSummary {
    let mut summary = RunSummary::new();
    append_compartment(client, compartment_id, change, &mut summary);
    summary
}

/// Load `.env`, start logging and build the CLI client.
///
/// An error here is fatal for the run.
pub fn init_client() -> Result<OciCli, Box<dyn Error>> {
    dotenv::dotenv().ok();
    logging::init(logging::LOG_CONFIG_FILE)?;
    let settings = config::Settings::from_env();
    log::debug!("settings={settings:?}");
    let client = OciCli::new(&settings)?;
    Ok(client)
}
