use anyhow::{bail, Result};
use colored::Colorize;
use pinpack::patch::{pair_overrides, patch};

use crate::cli::CLI;

pub fn execute(cli: CLI) -> Result<()> {
    if !cli.manifest.exists() {
        bail!("manifest not found: {}", cli.manifest.display());
    }
    let (overrides, dangling) = pair_overrides(&cli.overrides);
    if let Some(arg) = dangling {
        eprintln!(
            "{} ignoring unpaired trailing argument '{}'",
            "warning:".yellow().bold(),
            arg
        );
    }
    patch(&cli.manifest, &overrides)
}
