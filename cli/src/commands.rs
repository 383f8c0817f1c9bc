pub mod scan;

use clap::{ArgAction, Parser};
use portsweep_common::config::{Config, DEFAULT_CONCURRENCY};
use portsweep_common::network::target::Target;

#[derive(Parser)]
#[command(name = "portsweep")]
#[command(about = "Probe TCP ports on a host or a small range of hosts.", version)]
pub struct CommandLine {
    /// Target host or IP to scan, or the dotted prefix in range mode
    #[arg(long, default_value = "example.com")]
    pub target: Target,

    /// Host suffix range to scan, e.g. 1-10 with --target 192.168.1
    #[arg(long, default_value = "", value_name = "START-END")]
    pub iprange: String,

    /// Maximum number of probes in flight at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_name = "N")]
    pub concurrency: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide headers, progress and informational logs
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            quiet: self.quiet,
            ..Config::default()
        }
        .with_concurrency(self.concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn defaults_select_port_scan_of_example_com() {
        let cli = CommandLine::try_parse_from(["portsweep"]).unwrap();

        assert_eq!(cli.target.raw(), "example.com");
        assert!(cli.iprange.is_empty());
        assert_eq!(cli.to_config().concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn parses_range_mode_flags() {
        let cli = CommandLine::try_parse_from([
            "portsweep",
            "--target",
            "192.168.1",
            "--iprange",
            "1-3",
            "--concurrency",
            "0",
            "-qq",
        ])
        .unwrap();

        assert_eq!(cli.target.raw(), "192.168.1");
        assert_eq!(cli.iprange, "1-3");
        assert_eq!(cli.to_config().concurrency, 1);
        assert_eq!(cli.to_config().quiet, 2);
    }

    #[test]
    fn rejects_empty_target() {
        assert!(CommandLine::try_parse_from(["portsweep", "--target", ""]).is_err());
    }
}
