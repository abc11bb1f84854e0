use clap::Parser;
use glance_cli::{Cli, init_logging, run};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    run(cli)
}
