//! AWF CLI - Command line tool for the Australian wildfire dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "awf-cli",
    version,
    about = "Australian wildfire observation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: awf_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    awf_cmd::run(cli.command)
}
