//! The sweep orchestrator.
//!
//! A [`SweepPlan`] says which (host, port) pairs to try. The [`Sweeper`] turns
//! it into tasks, caps how many run at once with a semaphore, and routes every
//! open port through a single writer task so output lines never interleave.
//!
//! Probe failures are never surfaced. A refused port, a filtered port and an
//! unreachable host all look the same: nothing is printed.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::Context;
use portsweep_common::config::Config;
use portsweep_common::network::probe::Probe;
use portsweep_common::services::ServiceTable;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::network::tcp::Prober;

mod plan;
pub mod report;
pub mod resolver;

pub use plan::{PORT_SCAN_RANGE, RANGE_MODE_PORTS, SweepPlan};
pub use report::{Report, ReportSink};

type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Totals of a finished sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub probes: usize,
    pub open: usize,
    pub elapsed: Duration,
}

pub struct Sweeper {
    prober: Arc<dyn Prober>,
    services: Arc<ServiceTable>,
    concurrency: usize,
    on_probe_done: Option<ProgressCallback>,
}

impl Sweeper {
    pub fn new(prober: Arc<dyn Prober>, services: Arc<ServiceTable>, cfg: &Config) -> Self {
        Self {
            prober,
            services,
            concurrency: cfg.concurrency.max(1),
            on_probe_done: None,
        }
    }

    /// Called with the running number of finished probes.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_probe_done = Some(Arc::new(callback));
        self
    }

    /// Runs every probe of `plan` and returns once all of them, and the
    /// writer, are done. There is no early exit.
    pub async fn run(&self, plan: SweepPlan, sink: Arc<dyn ReportSink>) -> anyhow::Result<SweepSummary> {
        let started = Instant::now();
        let probes = plan.probe_count();
        debug!(probes, concurrency = self.concurrency, "starting sweep");

        let (report_tx, report_rx) = mpsc::unbounded_channel::<Report>();
        let writer = tokio::spawn(async move { report::drain(report_rx, sink.as_ref()).await });

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let finished = Arc::new(AtomicUsize::new(0));
        let mut tasks: JoinSet<()> = JoinSet::new();

        match plan {
            SweepPlan::Ports { host, ports } => {
                for port in ports {
                    let permit = semaphore
                        .clone()
                        .acquire_owned()
                        .await
                        .context("probe semaphore closed")?;
                    let task = self.probe_task(report_tx.clone(), finished.clone());
                    let probe = Probe::new(host.as_str(), port);

                    tasks.spawn(async move {
                        task.run(&probe, false).await;
                        drop(permit);
                    });
                }
            }
            SweepPlan::Hosts {
                prefix,
                range,
                ports,
            } => {
                let ports: Arc<[u16]> = ports.into();
                for host in range.hosts(&prefix) {
                    let permit = semaphore
                        .clone()
                        .acquire_owned()
                        .await
                        .context("probe semaphore closed")?;
                    let task = self.probe_task(report_tx.clone(), finished.clone());
                    let ports = ports.clone();

                    tasks.spawn(async move {
                        for &port in ports.iter() {
                            task.run(&Probe::new(host.as_str(), port), true).await;
                        }
                        drop(permit);
                    });
                }
            }
        }

        drop(report_tx);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("probe task failed: {e}");
            }
        }

        let open = writer.await.context("report writer stopped unexpectedly")?;
        let elapsed = started.elapsed();
        debug!(probes, open, ?elapsed, "sweep finished");

        Ok(SweepSummary {
            probes,
            open,
            elapsed,
        })
    }

    fn probe_task(&self, reports: UnboundedSender<Report>, finished: Arc<AtomicUsize>) -> ProbeTask {
        ProbeTask {
            prober: self.prober.clone(),
            services: self.services.clone(),
            reports,
            finished,
            on_probe_done: self.on_probe_done.clone(),
        }
    }
}

/// Everything one spawned task needs, cloned out of the [`Sweeper`].
struct ProbeTask {
    prober: Arc<dyn Prober>,
    services: Arc<ServiceTable>,
    reports: UnboundedSender<Report>,
    finished: Arc<AtomicUsize>,
    on_probe_done: Option<ProgressCallback>,
}

impl ProbeTask {
    async fn run(&self, probe: &Probe, name_host: bool) {
        if self.prober.probe(probe).await.is_open() {
            let report = Report {
                port: probe.port,
                host: name_host.then(|| probe.host.clone()),
                service: self.services.lookup(probe.port),
            };
            // The writer outlives every task, so a send can only fail on shutdown.
            let _ = self.reports.send(report);
        }

        let done = self.finished.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(callback) = &self.on_probe_done {
            callback(done);
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
