use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use portsweep_common::network::probe::Probe;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

/// What a probe learned. Refused, unreachable and timed-out dials all
/// collapse into `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Open,
    Closed,
}

impl ProbeOutcome {
    pub fn is_open(self) -> bool {
        self == ProbeOutcome::Open
    }
}

/// Strategy for deciding whether a (host, port) pair accepts connections.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, probe: &Probe) -> ProbeOutcome;
}

/// Full TCP connect prober. The handshake is completed and the stream is
/// closed straight away; no data is exchanged.
#[derive(Debug, Clone, Copy)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, probe: &Probe) -> ProbeOutcome {
        handshake_probe(probe, self.timeout).await
    }
}

/// Dials `probe`, name resolution included, within `probe_timeout`.
pub async fn handshake_probe(probe: &Probe, probe_timeout: Duration) -> ProbeOutcome {
    let connect = TcpStream::connect((probe.host.as_str(), probe.port));

    match timeout(probe_timeout, connect).await {
        Ok(Ok(_stream)) => {
            trace!(address = %probe, "handshake completed");
            ProbeOutcome::Open
        }
        Ok(Err(e)) => {
            match e.kind() {
                ErrorKind::ConnectionRefused => trace!(address = %probe, "connection refused"),
                kind => debug!(address = %probe, ?kind, "dial failed: {e}"),
            }
            ProbeOutcome::Closed
        }
        Err(_elapsed) => {
            trace!(address = %probe, "timed out after {probe_timeout:?}");
            ProbeOutcome::Closed
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
