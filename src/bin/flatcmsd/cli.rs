use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Toml configuration file; without it, built-in defaults plus
    /// FLATCMS_-prefixed environment variables apply.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}
