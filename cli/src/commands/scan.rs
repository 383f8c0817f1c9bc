use std::sync::Arc;

use portsweep_common::{config::Config, network::target::Target, services::ServiceTable};
use portsweep_core::network::tcp::{Prober, TcpProber};
use portsweep_core::scanner::{ReportSink, SweepPlan, SweepSummary, Sweeper, resolver};
use tracing::info;

use crate::terminal::{print, spinner::{self, SpinnerSink}};

/// Runs one sweep and, for URL targets, the address lookup that follows it.
pub async fn scan(target: &Target, ip_range: &str, cfg: &Config) -> anyhow::Result<()> {
    let sink: Arc<dyn ReportSink> = Arc::new(SpinnerSink);
    let prober: Arc<dyn Prober> = Arc::new(TcpProber::new(cfg.timeout));

    if let Some(summary) = sweep(target, ip_range, cfg, prober, sink).await? {
        print::summary(&summary, cfg.quiet);
    }
    Ok(())
}

/// Plans, sweeps and resolves against the given prober and sink.
///
/// A malformed range is printed and ends the run before anything is dialed
/// or resolved. That case returns `Ok(None)`.
pub async fn sweep(
    target: &Target,
    ip_range: &str,
    cfg: &Config,
    prober: Arc<dyn Prober>,
    sink: Arc<dyn ReportSink>,
) -> anyhow::Result<Option<SweepSummary>> {
    let plan: SweepPlan = match SweepPlan::from_args(target, ip_range) {
        Ok(plan) => plan,
        Err(e) => {
            sink.emit(&format!("Error parsing IP range: {e}"));
            return Ok(None);
        }
    };

    let total: usize = plan.probe_count();
    match &plan {
        SweepPlan::Hosts { prefix, range, ports } => info!(
            "Probing {} hosts under {prefix} on ports {:?}",
            range.len(),
            ports
        ),
        SweepPlan::Ports { host, ports } => info!("Probing {} ports on {host}", ports.len()),
    }

    spinner::start(total, cfg.quiet);

    let services = Arc::new(ServiceTable::well_known());
    let sweeper = Sweeper::new(prober, services, cfg)
        .on_progress(move |done| spinner::report_probe_progress(done, total));

    let result: anyhow::Result<SweepSummary> = sweeper.run(plan, sink.clone()).await;
    spinner::finish();
    let summary = result?;

    if resolver::needs_resolution(target) {
        resolver::report_addresses(target, sink.as_ref()).await;
    }

    Ok(Some(summary))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
