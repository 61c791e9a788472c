use anyhow::Result;
use clap::Parser;

use mcbench::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
