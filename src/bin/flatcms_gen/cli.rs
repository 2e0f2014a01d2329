use clap::Parser;
use flatcms::cli::HasherCliConfig;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Username to put in the emitted [[user]] block.
    #[arg(long, short = 'u', default_value = "admin")]
    pub username: String,

    #[arg(long, short = 'y', default_value_t = false)]
    pub no_repeat: bool,

    #[command(flatten)]
    pub hasher_config: HasherCliConfig,
}
