use std::ops::RangeInclusive;

use portsweep_common::error::RangeError;
use portsweep_common::network::range::{self, HostRange};
use portsweep_common::network::target::Target;

/// Ports swept when a single host is targeted.
pub const PORT_SCAN_RANGE: RangeInclusive<u16> = 1..=1024;

/// Ports tried on every host in range mode.
pub const RANGE_MODE_PORTS: [u16; 5] = [1, 2, 3, 4, 5];

/// Which (host, port) pairs a sweep covers and how they are grouped into tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepPlan {
    /// One task per port against a single host.
    Ports { host: String, ports: Vec<u16> },
    /// One task per `<prefix>.<suffix>` host, each walking `ports` in order.
    /// Hosts are formed on demand, so a huge range costs nothing up front.
    Hosts {
        prefix: String,
        range: HostRange,
        ports: Vec<u16>,
    },
}

impl SweepPlan {
    /// Chooses the mode the way the command line does: an empty `ip_range`
    /// means a port scan of the target, anything else must parse as a range.
    pub fn from_args(target: &Target, ip_range: &str) -> Result<Self, RangeError> {
        if ip_range.is_empty() {
            return Ok(Self::port_scan(target));
        }
        let host_range = range::parse_ip_range(ip_range)?;
        Ok(Self::ip_range(target, host_range))
    }

    pub fn port_scan(target: &Target) -> Self {
        Self::Ports {
            host: target.host().to_string(),
            ports: PORT_SCAN_RANGE.collect(),
        }
    }

    /// Treats the target as a dotted prefix and appends every suffix of `host_range`.
    pub fn ip_range(target: &Target, host_range: HostRange) -> Self {
        Self::Hosts {
            prefix: target.host().to_string(),
            range: host_range,
            ports: RANGE_MODE_PORTS.to_vec(),
        }
    }

    pub fn probe_count(&self) -> usize {
        match self {
            Self::Ports { ports, .. } => ports.len(),
            Self::Hosts { range, ports, .. } => range.len().saturating_mul(ports.len()),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Hosts { .. })
    }
}
