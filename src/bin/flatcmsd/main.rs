mod cli;

use clap::{crate_name, Parser};
use figment::Figment;
use flatcms::config::FigmentExt;
use flatcms::error_exit;
use flatcms::logging::init_logging;
use flatcms::web::CmsRocketBuildExt;
use log::info;

use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if let Some(ref config_file) = cli_config.config_file {
        if !config_file.exists() {
            error_exit!(
                "configuration file at {} does not exist",
                config_file.display(),
            )
        }
    }

    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file.as_deref());

    let result = rocket::execute(
        rocket
            ::custom(figment)
            .install_flatcms()
            .launch()
    );
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}
