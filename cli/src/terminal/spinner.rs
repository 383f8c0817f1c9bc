use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use portsweep_core::scanner::ReportSink;

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// The spinner, while one is being drawn.
pub fn active_spinner() -> Option<&'static ProgressBar> {
    SPINNER
        .get()
        .filter(|pb| !pb.is_hidden() && !pb.is_finished())
}

pub fn start(total: usize, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Running {total} probes..."));

    let _ = SPINNER.set(pb);
}

pub fn report_probe_progress(done: usize, total: usize) {
    if let Some(spinner) = active_spinner() {
        spinner.set_message(format!(
            "Finished {} of {total} probes...",
            done.to_string().green().bold()
        ));
    }
}

pub fn finish() {
    if let Some(spinner) = active_spinner() {
        spinner.finish_and_clear();
    }
}

/// Routes log lines above the spinner so it is not torn apart.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        match active_spinner() {
            Some(spinner) => spinner.println(msg),
            None => eprintln!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes findings to stdout with the spinner suspended for the write.
pub struct SpinnerSink;

impl ReportSink for SpinnerSink {
    fn emit(&self, line: &str) {
        match active_spinner() {
            Some(spinner) => spinner.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }
}
