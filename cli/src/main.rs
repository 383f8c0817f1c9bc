mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init(commands.verbose, cfg.quiet);
    print::header("starting sweep", cfg.quiet);

    scan::scan(&commands.target, &commands.iprange, &cfg).await
}
