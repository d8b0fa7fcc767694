//! Virtual network and identity operations.
//!
//! [`NetworkClient`] is the seam between the rewrite logic and the cloud;
//! [`OciCli`] implements it on top of the `oci` command line tool.

use super::cli;
use super::error::{OciError, Result};
use crate::config::Settings;
use crate::models::{Compartment, Data, IngressRule, RouteRule, RouteTable, SecurityList};
use serde::de::DeserializeOwned;

/// Remote operations the rewriters depend on.
///
/// Listings return only the first page. Updates replace the whole rule
/// sequence of the resource.
pub trait NetworkClient {
    /// Direct children of `parent_id`.
    fn list_compartments(&self, parent_id: &str) -> Result<Vec<Compartment>>;
    fn list_route_tables(&self, compartment_id: &str) -> Result<Vec<RouteTable>>;
    fn update_route_table(&self, rt_id: &str, rules: &[RouteRule]) -> Result<()>;
    fn list_security_lists(&self, compartment_id: &str) -> Result<Vec<SecurityList>>;
    fn update_security_list(&self, security_list_id: &str, rules: &[IngressRule]) -> Result<()>;
}

/// [`NetworkClient`] backed by the OCI CLI and its ambient configuration.
#[derive(Debug, Clone)]
pub struct OciCli {
    base_args: Vec<String>,
}

impl OciCli {
    /// Build a client, verifying that the CLI can be executed.
    ///
    /// This is the only fatal failure of a run.
    pub fn new(settings: &Settings) -> Result<OciCli> {
        let version = cli::run(&format!("'{}' --version", settings.oci_bin))?;
        log::info!("Using OCI CLI {}", version.trim());
        Ok(OciCli::with_args(settings.base_args()))
    }

    /// Build a client without probing the binary.
    pub fn with_args(base_args: Vec<String>) -> OciCli {
        OciCli { base_args }
    }

    fn command(&self, args: &[&str]) -> Vec<String> {
        self.base_args
            .iter()
            .cloned()
            .chain(args.iter().map(|a| a.to_string()))
            .collect()
    }

    fn list<T: DeserializeOwned>(&self, args: &[&str]) -> Result<Vec<T>> {
        let cmd = self.command(args);
        let output = cli::run_args(&cmd)?;
        let data: Data<T> = parse_output(&cmd.join(" "), &output)?;
        if let Some(next_page) = &data.next_page {
            log::warn!(
                "Only first page processed, {} items returned, opc-next-page={next_page}",
                data.data.len()
            );
        }
        Ok(data.data)
    }
}

/// Parse the `{"data": [...]}` envelope printed by list commands.
///
/// The CLI prints nothing at all when a listing is empty.
pub fn parse_output<T: DeserializeOwned>(cmd: &str, output: &str) -> Result<Data<T>> {
    if output.trim().is_empty() {
        return Ok(Data {
            data: vec![],
            next_page: None,
        });
    }
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        OciError::Parse {
            cmd: cmd.to_string(),
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    })
}

impl NetworkClient for OciCli {
    fn list_compartments(&self, parent_id: &str) -> Result<Vec<Compartment>> {
        self.list(&["iam", "compartment", "list", "--compartment-id", parent_id])
    }

    fn list_route_tables(&self, compartment_id: &str) -> Result<Vec<RouteTable>> {
        self.list(&[
            "network",
            "route-table",
            "list",
            "--compartment-id",
            compartment_id,
        ])
    }

    fn update_route_table(&self, rt_id: &str, rules: &[RouteRule]) -> Result<()> {
        let rules_json = serde_json::to_string(rules)?;
        let cmd = self.command(&[
            "network",
            "route-table",
            "update",
            "--rt-id",
            rt_id,
            "--route-rules",
            &rules_json,
            "--force",
        ]);
        cli::run_args(&cmd)?;
        Ok(())
    }

    fn list_security_lists(&self, compartment_id: &str) -> Result<Vec<SecurityList>> {
        self.list(&[
            "network",
            "security-list",
            "list",
            "--compartment-id",
            compartment_id,
        ])
    }

    fn update_security_list(&self, security_list_id: &str, rules: &[IngressRule]) -> Result<()> {
        let rules_json = serde_json::to_string(rules)?;
        let cmd = self.command(&[
            "network",
            "security-list",
            "update",
            "--security-list-id",
            security_list_id,
            "--ingress-security-rules",
            &rules_json,
            "--force",
        ]);
        cli::run_args(&cmd)?;
        Ok(())
    }
}
