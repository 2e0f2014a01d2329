use env_logger::Env;

/// Installs the global logger. Filter defaults to `info` and is
/// overridable through `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder
        ::from_env(Env::default().default_filter_or("info"))
        .init()
}
