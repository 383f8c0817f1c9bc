//! # Host Suffix Range
//!
//! Range mode expands a dotted prefix such as `192.168.1` with every integer
//! suffix of an inclusive `<start>-<end>` range.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::RangeError;

/// Inclusive range of host suffixes. An inverted range is valid and empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    pub start: u32,
    pub end: u32,
}

impl HostRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(self) -> usize {
        if self.start > self.end {
            return 0;
        }
        usize::try_from(self.end - self.start)
            .map_or(usize::MAX, |span| span.saturating_add(1))
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn to_iter(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Joins `prefix` with every suffix, e.g. `192.168.1` → `192.168.1.1`, `192.168.1.2`, ...
    pub fn hosts(self, prefix: &str) -> impl Iterator<Item = String> + '_ {
        self.to_iter().map(move |suffix| format!("{prefix}.{suffix}"))
    }
}

impl FromStr for HostRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ip_range(s)
    }
}

/// Parses `"<start>-<end>"` where both bounds are non-negative integers.
///
/// Anything other than exactly two `-` separated segments is rejected, so
/// `"5"` and `"5-10-15"` fail the same way.
pub fn parse_ip_range(s: &str) -> Result<HostRange, RangeError> {
    let parts: Vec<&str> = s.split('-').collect();
    let [start_str, end_str] = parts.as_slice() else {
        return Err(RangeError::Format(s.to_string()));
    };

    let start = parse_bound(start_str)?;
    let end = parse_bound(end_str)?;

    Ok(HostRange::new(start, end))
}

fn parse_bound(bound: &str) -> Result<u32, RangeError> {
    bound.parse::<u32>().map_err(|source| RangeError::Bound {
        bound: bound.to_string(),
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
