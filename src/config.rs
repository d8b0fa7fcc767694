//! Runtime settings and constants.
//!
//! Authentication is left to the OCI CLI's own configuration; only the
//! variables that select it are read here.

use std::env;

/// Refuse to parse CLI responses larger than this.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

pub const USAGE_ARGS: &str = "<compartment_ocid> <CIDR_to_find> <CIDR_to_add> <rule_description>";

/// Binary used when `OCI_CLI_BIN` is not set.
pub const DEFAULT_OCI_BIN: &str = "oci";

/// Settings for reaching OCI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// CLI binary name or path.
    pub oci_bin: String,
    /// Profile in the OCI config file.
    pub profile: Option<String>,
    /// Alternate OCI config file.
    pub config_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            oci_bin: DEFAULT_OCI_BIN.to_string(),
            profile: None,
            config_file: None,
        }
    }
}

impl Settings {
    /// Read settings from the environment (after `.env` was loaded).
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Settings {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Settings {
            oci_bin: non_empty("OCI_CLI_BIN").unwrap_or_else(|| DEFAULT_OCI_BIN.to_string()),
            profile: non_empty("OCI_CLI_PROFILE"),
            config_file: non_empty("OCI_CLI_CONFIG_FILE"),
        }
    }

    /// Program and global options that prefix every CLI call.
    pub fn base_args(&self) -> Vec<String> {
        let mut args = vec![self.oci_bin.clone()];
        if let Some(config_file) = &self.config_file {
            args.push("--config-file".to_string());
            args.push(config_file.clone());
        }
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }
}
