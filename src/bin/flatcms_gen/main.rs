mod cli;

use clap::Parser;
use flatcms::error_exit;
use flatcms::hasher::{Hasher, ProductionHasher, ProductionHasherConfig};
use log::warn;
use rpassword::prompt_password;

use crate::cli::CliConfig;

fn main() {
    env_logger::init();

    let cli_config = CliConfig::parse();

    let argon2_params = cli_config.hasher_config.clone().try_into()
        .unwrap_or_else(|e| error_exit!("hasher config is invalid: {}", e));
    let hasher = ProductionHasher::new(
        ProductionHasherConfig {
            argon2_params,
        },
    );

    let password = prompt_password("Enter the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
    if password.is_empty() {
        error_exit!("entered password is empty")
    }

    if !cli_config.no_repeat {
        let confirmation = prompt_password("Repeat the password: ")
            .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
        if confirmation != password {
            error_exit!("the passwords do not match")
        }
    }

    if password.trim() != password {
        warn!("the password has leading or trailing whitespace characters");
    }

    // ready to paste into the user db file
    println!("[[user]]");
    println!("username = {:?}", cli_config.username);
    println!("hash = {:?}", hasher.generate_hash(&password));
}
