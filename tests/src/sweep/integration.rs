use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use portsweep_common::config::Config;
use portsweep_common::network::target::Target;
use portsweep_common::services::ServiceTable;
use portsweep_core::network::tcp::TcpProber;
use portsweep_core::scanner::report::CollectingSink;
use portsweep_core::scanner::{SweepPlan, SweepSummary, Sweeper, resolver};

use crate::utils::{closed_port, loopback_listeners};

fn loopback_sweeper() -> Sweeper {
    let cfg = Config::default()
        .with_timeout(Duration::from_millis(500))
        .with_concurrency(32);
    Sweeper::new(
        Arc::new(TcpProber::new(cfg.timeout)),
        Arc::new(ServiceTable::well_known()),
        &cfg,
    )
}

async fn sweep_loopback(ports: Vec<u16>) -> (SweepSummary, Vec<String>) {
    let sink = Arc::new(CollectingSink::default());
    let plan = SweepPlan::Ports {
        host: "127.0.0.1".to_string(),
        ports,
    };

    let summary = loopback_sweeper().run(plan, sink.clone()).await.unwrap();
    (summary, sink.lines())
}

/// This test verifies that every bound listener shows up with its exact
/// port number and that the free port stays silent.
#[tokio::test]
async fn sweep_reports_listening_loopback_ports() {
    let (_listeners, open_ports) = loopback_listeners(3).await;
    let free_port = closed_port().await;

    let mut ports = open_ports.clone();
    ports.push(free_port);

    let (summary, lines) = sweep_loopback(ports).await;

    assert_eq!(summary.probes, 4);
    assert_eq!(summary.open, 3, "unexpected lines: {lines:?}");

    let expected: BTreeSet<String> = open_ports
        .iter()
        .map(|port| format!("Port {port} is open - Unknown"))
        .collect();
    let reported: BTreeSet<String> = lines.into_iter().collect();
    assert_eq!(reported, expected);
    assert!(
        !reported.iter().any(|line| line.contains(&format!("Port {free_port} "))),
        "closed port {free_port} was reported"
    );
}

#[tokio::test]
async fn repeated_sweeps_report_the_same_ports() {
    let (_listeners, open_ports) = loopback_listeners(2).await;
    let free_port = closed_port().await;

    let mut ports = open_ports.clone();
    ports.push(free_port);

    let (_, first) = sweep_loopback(ports.clone()).await;
    let (_, second) = sweep_loopback(ports).await;

    let first: BTreeSet<String> = first.into_iter().collect();
    let second: BTreeSet<String> = second.into_iter().collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn url_target_is_swept_and_resolved() {
    let (_listeners, open_ports) = loopback_listeners(1).await;
    let target: Target = format!("http://127.0.0.1:{}/", open_ports[0]).parse().unwrap();

    let sink = Arc::new(CollectingSink::default());
    let plan = match SweepPlan::port_scan(&target) {
        SweepPlan::Ports { host, .. } => SweepPlan::Ports {
            host,
            ports: open_ports.clone(),
        },
        other => panic!("expected a port scan, got {other:?}"),
    };

    loopback_sweeper().run(plan, sink.clone()).await.unwrap();
    assert!(resolver::needs_resolution(&target));
    resolver::report_addresses(&target, sink.as_ref()).await;

    assert_eq!(
        sink.lines(),
        vec![
            format!("Port {} is open - Unknown", open_ports[0]),
            format!("IP addresses for {}:", target.raw()),
            "127.0.0.1".to_string(),
        ]
    );
}

#[tokio::test]
async fn plain_target_skips_resolution() {
    let target: Target = "example.com".parse().unwrap();
    assert!(!resolver::needs_resolution(&target));
}

#[test]
fn malformed_range_yields_no_plan() {
    let target: Target = "192.168.1".parse().unwrap();

    for bad in ["5", "a-b", "5-10-15"] {
        assert!(SweepPlan::from_args(&target, bad).is_err(), "{bad} should be rejected");
    }
    assert_eq!(
        SweepPlan::from_args(&target, "1-3").unwrap().probe_count(),
        15
    );
}
