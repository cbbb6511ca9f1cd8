use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    /// Path to the `package.json` manifest to rewrite
    pub(crate) manifest: PathBuf,
    /// Alternating package name and forced version, taken two at a time
    #[clap(value_name = "NAME VERSION")]
    pub(crate) overrides: Vec<String>,
}
