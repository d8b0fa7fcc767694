//! Errors raised while talking to OCI through its CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OciError {
    /// The CLI binary could not be started at all.
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The CLI ran and exited non-zero.
    #[error("ERROR running {cmd} (code={code:?}): {stderr}")]
    Command {
        cmd: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("response too large: {len} bytes for command: {cmd}")]
    OutputTooLarge { cmd: String, len: usize },

    #[error("invalid UTF-8 in output of {cmd}: {source}")]
    Utf8 {
        cmd: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CLI output did not match the expected JSON shape.
    #[error("error parsing JSON from {cmd}: path={path} error={source}")]
    Parse {
        cmd: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error serializing rules: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OciError>;
