//! HCR CLI - Command line front end for the healthcare resource dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hcr-cli",
    version,
    about = "Healthcare resource dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hcr_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("hcr-cli starting");
    hcr_cmd::run(cli.command)
}
