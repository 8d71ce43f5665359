//! Error types for the assembly pipeline
//!
//! Every failure here is fatal to the run: the pipeline stops at the first
//! unrecovered error and never produces partial output. The only absorbed
//! failures are HTTP 404s under an enabled skip flag, and those never reach
//! this module — they become silent omissions inside the fetcher.

use std::path::PathBuf;

/// Error type for content assembly operations
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A remote fetch exhausted its retries without a usable response
    #[error("failed to fetch {url}: {detail}")]
    Fetch {
        /// The URL that could not be fetched
        url: String,
        /// HTTP status of the final attempt, when a response was received
        status: Option<u16>,
        /// Human-readable description of the final failure
        detail: String,
    },

    /// A declared URL could not be parsed
    #[error("invalid url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A declared file could not be read as UTF-8 text
    #[error("failed to read {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied hook failed; propagated unchanged, not wrapped
    #[error(transparent)]
    Transform(#[from] anyhow::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    /// Invalid configuration rejected by the builder
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BindError {
    /// HTTP status attached to a fetch failure, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}
