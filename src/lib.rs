pub mod cli;
pub mod config;
pub mod data;
pub mod document_name;
pub mod hasher;
mod lib_constants;
pub mod logging;
pub mod markdown;
pub mod session;
pub mod storage;
pub mod user_db;
pub mod util;
pub mod web;

pub use lib_constants::*;

/// Logs a fatal startup error and exits. Only for use in binaries,
/// before the server is up.
#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        ::log::error!($($arg)*);
        ::std::process::exit(1)
    }};
}
