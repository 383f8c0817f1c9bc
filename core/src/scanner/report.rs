//! Findings and the single writer that prints them.
//!
//! Probe tasks never write to the output directly. They push [`Report`]s into
//! an unbounded queue and one writer task drains it, so every line reaches
//! the sink whole.

use std::fmt;
use std::sync::Mutex;

use tokio::sync::mpsc::UnboundedReceiver;

/// An open port found by the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub port: u16,
    /// Set in range mode, where each line names the host it belongs to.
    pub host: Option<String>,
    pub service: &'static str,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(
                f,
                "Port {} is open on IP {} - {}",
                self.port, host, self.service
            ),
            None => write!(f, "Port {} is open - {}", self.port, self.service),
        }
    }
}

/// Destination for user facing output lines.
pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ReportSink for CollectingSink {
    fn emit(&self, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        lines.push(line.to_string());
    }
}

/// Drains `rx` into `sink` until every sender is gone. Returns how many
/// reports were written.
pub(crate) async fn drain<S>(mut rx: UnboundedReceiver<Report>, sink: &S) -> usize
where
    S: ReportSink + ?Sized,
{
    let mut written: usize = 0;
    while let Some(report) = rx.recv().await {
        sink.emit(&report.to_string());
        written += 1;
    }
    written
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
