//! Forward lookup run after the sweep for web URL targets.

use std::net::IpAddr;

use portsweep_common::error::ResolveError;
use portsweep_common::network::target::Target;
use tokio::net::lookup_host;
use tracing::debug;

use super::report::ReportSink;

/// Only `http://` and `https://` targets are resolved.
pub fn needs_resolution(target: &Target) -> bool {
    target.is_url()
}

/// Resolves the host part of `target`, keeping the resolver's order and
/// dropping duplicates.
pub async fn resolve_target(target: &Target) -> Result<Vec<IpAddr>, ResolveError> {
    let host = target.host();
    debug!("resolving {host}");
    let addrs = lookup_host((host, 0))
        .await
        .map_err(|source| ResolveError::Lookup {
            host: host.to_string(),
            source,
        })?;

    let mut ips: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        if !ips.contains(&addr.ip()) {
            ips.push(addr.ip());
        }
    }

    if ips.is_empty() {
        return Err(ResolveError::NoAddresses(host.to_string()));
    }
    Ok(ips)
}

/// Resolves `target` and writes either the address listing or the lookup
/// error to `sink`.
pub async fn report_addresses<S>(target: &Target, sink: &S) -> Option<Vec<IpAddr>>
where
    S: ReportSink + ?Sized,
{
    match resolve_target(target).await {
        Ok(ips) => {
            sink.emit(&format!("IP addresses for {}:", target.raw()));
            for ip in &ips {
                sink.emit(&ip.to_string());
            }
            Some(ips)
        }
        Err(e) => {
            sink.emit(&format!("Error looking up IP address: {e}"));
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
