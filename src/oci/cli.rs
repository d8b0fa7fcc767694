//! OCI CLI command execution.
//!
//! Provides utilities for running CLI commands and returning their output.

use super::error::{OciError, Result};
use crate::config;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command given as a single string and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// Arguments that may contain quotes themselves (JSON payloads) must go
/// through [`run_args`] instead.
pub fn run(cmd: &str) -> Result<String> {
    let cmds: Vec<String> = split_and_strip(cmd)
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    log::trace!("split cmds={:?}", cmds);
    run_args(&cmds)
}

/// Run `args[0]` with the remaining elements as arguments, return stdout.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command can't start, exits non-zero, or produces too much output
pub fn run_args(args: &[String]) -> Result<String> {
    let cmd = args.join(" ");
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let (program, rest) = match args.split_first() {
        Some(split) => split,
        None => {
            return Err(OciError::Command {
                cmd,
                code: None,
                stderr: "empty command".to_string(),
            })
        }
    };

    let output = Command::new(program)
        .args(rest)
        .output()
        .map_err(|source| {
            log::error!("Command execution failed: {}", source);
            OciError::Spawn {
                program: program.clone(),
                source,
            }
        })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > config::MAX_OUTPUT_BYTES {
            return Err(OciError::OutputTooLarge {
                cmd,
                len: output.stdout.len(),
            });
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(OciError::Command {
            cmd,
            code: output.status.code(),
            stderr,
        });
    }

    String::from_utf8(output.stdout).map_err(|source| OciError::Utf8 { cmd, source })
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
