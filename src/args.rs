//! Positional command line arguments shared by both binaries.

use crate::config::USAGE_ARGS;
use crate::processing::CidrChange;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Program name plus the four positionals.
pub const ARG_COUNT: usize = 5;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    about = "Rewrite OCI route and security rules from one CIDR to another",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// OCID of the compartment to start from
    pub compartment_ocid: String,
    /// CIDR matched against route destinations and ingress sources
    #[arg(allow_hyphen_values = true)]
    pub cidr_to_find: String,
    /// CIDR written into the new rules
    #[arg(allow_hyphen_values = true)]
    pub cidr_to_add: String,
    /// Description of appended rules
    #[arg(allow_hyphen_values = true)]
    pub rule_description: String,
}

impl Args {
    /// Parse the process arguments; print usage and exit 1 on any mistake.
    pub fn parse_or_exit(binary: &str) -> Args {
        match Args::try_parse_positional(std::env::args_os()) {
            Ok(args) => args,
            Err(e) => {
                log::debug!("argument error: {e}");
                println!("{}", usage(binary));
                std::process::exit(1);
            }
        }
    }

    /// Parse exactly four positionals, taking every value literally.
    ///
    /// Flags such as `-h` and a bare `--` are values, never options.
    pub fn try_parse_positional<I, T>(args: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != ARG_COUNT {
            return Err(clap::Error::raw(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "expected {} arguments, got {}",
                    ARG_COUNT - 1,
                    args.len().saturating_sub(1)
                ),
            ));
        }
        // Everything after a leading `--` is positional, including another `--`.
        let mut escaped = Vec::with_capacity(ARG_COUNT + 1);
        let mut rest = args.into_iter();
        escaped.extend(rest.next());
        escaped.push(OsString::from("--"));
        escaped.extend(rest);
        Args::try_parse_from(escaped)
    }

    pub fn change(&self) -> CidrChange {
        CidrChange::new(&self.cidr_to_find, &self.cidr_to_add, &self.rule_description)
    }
}

pub fn usage(binary: &str) -> String {
    format!("Usage: {binary} {USAGE_ARGS}")
}
