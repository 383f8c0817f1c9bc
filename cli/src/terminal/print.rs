use colored::*;
use portsweep_core::scanner::SweepSummary;
use tracing::info;

/// Events with this target are written without a level symbol.
pub const PRINT_TARGET: &str = "portsweep::print";

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn summary(summary: &SweepSummary, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let unit: &str = if summary.open == 1 { "open port" } else { "open ports" };
    let open: ColoredString = format!("{} {unit}", summary.open).bold().green();
    let probes: ColoredString = summary.probes.to_string().bold();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).bold().yellow();

    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
    print(&format!("Sweep complete: {open} across {probes} probes in {total_time}"));
}
