//! # Scan Target Model
//!
//! The single host string a sweep is aimed at. Depending on the mode it is:
//! * A hostname or IP address (port-scan mode).
//! * A dotted prefix such as `192.168.1` (range mode).
//! * A web URL such as `https://example.com`, which additionally triggers the
//!   resolution step once the sweep finishes.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::TargetError;

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    raw: String,
    /// Dialable host. Equal to `raw` unless the target is a URL.
    host: String,
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a target string.
    ///
    /// Only `http://` and `https://` prefixes (matched case-sensitively) go
    /// through the URL parser. Everything else, dotted range prefixes
    /// included, is kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(TargetError::Empty);
        }

        let host = if has_url_scheme(raw) {
            url_host(raw)?
        } else {
            raw.to_string()
        };

        Ok(Self {
            raw: raw.to_string(),
            host,
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Target {
    /// The string exactly as the user supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the target carries an `http://` or `https://` prefix.
    pub fn is_url(&self) -> bool {
        has_url_scheme(&self.raw)
    }

    /// The part of the target that can be dialed or resolved.
    ///
    /// Plain targets are returned untouched. URL targets are reduced to their
    /// host, and IPv6 literals lose their brackets.
    pub fn host(&self) -> &str {
        &self.host
    }
}

fn has_url_scheme(s: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| s.starts_with(scheme))
}

fn url_host(raw: &str) -> Result<String, TargetError> {
    let url = Url::parse(raw).map_err(|source| TargetError::Url {
        raw: raw.to_string(),
        source,
    })?;

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| TargetError::NoHost(raw.to_string()))?;

    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    Ok(host.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn target(s: &str) -> Target {
        Target::from_str(s).unwrap()
    }

    #[test]
    fn test_plain_targets_are_kept_verbatim() {
        assert_eq!(target("example.com").host(), "example.com");
        assert_eq!(target("10.0.0.1").host(), "10.0.0.1");
        assert_eq!(target("::1").host(), "::1");
        assert_eq!(target("192.168.1").host(), "192.168.1");
        assert!(!target("example.com").is_url());
    }

    #[test]
    fn test_url_targets_are_reduced_to_host() {
        assert!(target("https://example.com").is_url());
        assert!(target("http://example.com").is_url());

        assert_eq!(target("https://example.com").host(), "example.com");
        assert_eq!(target("http://example.com:8080/index.html").host(), "example.com");
        assert_eq!(target("https://user:pw@example.com/?q=1").host(), "example.com");
        assert_eq!(target("http://[::1]:80/").host(), "::1");
        assert_eq!(target("http://127.0.0.1:8080/").host(), "127.0.0.1");
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        let upper = target("HTTP://example.com");
        assert!(!upper.is_url(), "uppercase scheme must not enable resolution");
        assert_eq!(upper.host(), "HTTP://example.com");

        assert!(!target("Https://example.com").is_url());
    }

    #[test]
    fn test_raw_is_preserved() {
        let t = target("  https://example.com/a  ");
        assert_eq!(t.raw(), "https://example.com/a");
        assert_eq!(t.to_string(), "https://example.com/a");
    }

    #[test]
    fn test_empty_target_is_rejected() {
        assert_eq!(Target::from_str(""), Err(TargetError::Empty));
        assert_eq!(Target::from_str("   "), Err(TargetError::Empty));
    }

    #[test]
    fn test_url_without_host_is_rejected() {
        assert!(matches!(
            Target::from_str("https://"),
            Err(TargetError::Url { .. } | TargetError::NoHost(_))
        ));
        assert!(matches!(
            Target::from_str("http://[::1"),
            Err(TargetError::Url { .. })
        ));
    }
}
