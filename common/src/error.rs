use std::num::ParseIntError;

use thiserror::Error;

/// Raised when an `--iprange` value is not `<start>-<end>`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid IP range format: expected <start>-<end>, got '{0}'")]
    Format(String),
    #[error("invalid range bound '{bound}': {source}")]
    Bound {
        bound: String,
        #[source]
        source: ParseIntError,
    },
}

/// Raised when the resolution post-step cannot look up the target.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("lookup {0}: no addresses returned")]
    NoAddresses(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error("target cannot be empty")]
    Empty,
    #[error("invalid URL '{raw}': {source}")]
    Url {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL '{0}' has no host")]
    NoHost(String),
}
