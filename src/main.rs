mod cli;
mod execute;

use anyhow::Result;
use clap::Parser;

use crate::cli::CLI;

fn main() -> Result<()> {
    let cli = CLI::parse();
    execute::execute(cli)
}
